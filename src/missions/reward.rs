//! Point rewards for missions, scaled by how hard the mission is for this
//! specific user.

use serde::{Deserialize, Serialize};

use super::domain::{Mission, MissionFocus, PersonaSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionReward {
    pub sub_point: u64,
    pub final_point: u64,
    pub is_high_reward: bool,
}

// Difficulty is tracked in tenths so the 1.3 high-reward boundary is exact.
const BASE_DIFFICULTY_TENTHS: u64 = 10;
const HIGH_REWARD_TENTHS: u64 = 13;

fn difficulty_tenths(mission: &Mission, snapshot: &PersonaSnapshot) -> u64 {
    let mut tenths = BASE_DIFFICULTY_TENTHS;

    match mission.focus {
        MissionFocus::Credit => {
            if snapshot.credit_score < 650 {
                tenths += 5;
            } else if snapshot.credit_score > 900 {
                tenths += 2;
            }
        }
        MissionFocus::DebtRelief => {
            if snapshot.dsr > 40.0 {
                tenths += 4;
            }
        }
        MissionFocus::Housing => {
            if snapshot.income < 3500.0 {
                tenths += 3;
            }
        }
        MissionFocus::General => {}
    }

    tenths
}

/// Difficulty multiplier for a mission given the user's current state. A
/// credit mission is hardest for thin files and still nontrivial near the
/// top of the scale; debt missions scale with the debt ratio, housing
/// missions with low income.
pub fn difficulty_for(mission: &Mission, snapshot: &PersonaSnapshot) -> f64 {
    difficulty_tenths(mission, snapshot) as f64 / 10.0
}

/// Rewards are multiples of 10 points: 100 base per sub-mission and 300 base
/// for completing the whole mission, both scaled by difficulty.
pub fn mission_reward(mission: &Mission, snapshot: &PersonaSnapshot) -> MissionReward {
    let tenths = difficulty_tenths(mission, snapshot);

    MissionReward {
        sub_point: tenths * 10,
        final_point: tenths * 30,
        is_high_reward: tenths >= HIGH_REWARD_TENTHS,
    }
}
