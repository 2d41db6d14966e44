//! Membership level math shared by the recommendation pipeline and the
//! mission reward flow.

use serde::{Deserialize, Serialize};

pub const LEVEL_CAP: u8 = 5;
pub const POINTS_PER_LEVEL: u64 = 3000;

/// Tier derived from accumulated reward points. `next_goal` keeps growing
/// past the cap so the UI can still render a progress target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level: u8,
    pub next_goal: u64,
    pub is_max: bool,
}

pub fn level_for_points(points: u64) -> LevelInfo {
    let raw_level = points / POINTS_PER_LEVEL + 1;
    let level = raw_level.min(u64::from(LEVEL_CAP)) as u8;

    LevelInfo {
        level,
        next_goal: (points / POINTS_PER_LEVEL + 1) * POINTS_PER_LEVEL,
        is_max: level == LEVEL_CAP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_account_starts_at_level_one() {
        let info = level_for_points(0);
        assert_eq!(info.level, 1);
        assert_eq!(info.next_goal, 3000);
        assert!(!info.is_max);
    }

    #[test]
    fn levels_step_every_three_thousand_points() {
        assert_eq!(level_for_points(2999).level, 1);
        assert_eq!(level_for_points(3000).level, 2);
        assert_eq!(level_for_points(9000).level, 4);
    }

    #[test]
    fn level_caps_at_five_but_goal_keeps_climbing() {
        let info = level_for_points(15000);
        assert_eq!(info.level, 5);
        assert!(info.is_max);
        assert_eq!(info.next_goal, 18000);

        let far = level_for_points(60000);
        assert_eq!(far.level, 5);
        assert_eq!(far.next_goal, 63000);
    }
}
