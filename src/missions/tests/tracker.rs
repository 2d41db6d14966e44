use super::snapshot;
use crate::missions::domain::{
    Mission, MissionFocus, StateKey, SubMission, SubMissionStatus, TrackingRule,
};
use crate::missions::tracker::advance;

fn tracked_mission() -> Mission {
    Mission::new(
        "Lift your credit tier",
        "open-credit-coach",
        "Coach my credit",
        MissionFocus::Credit,
        vec![
            SubMission::new(
                "Keep card utilization under 30%.",
                Some(TrackingRule::at_least(StateKey::CreditScore, 750.0)),
            ),
            SubMission::new(
                "Bring your debt ratio under 40%.",
                Some(TrackingRule::at_most(StateKey::DebtRatio, 40.0)),
            ),
            SubMission::new("Avoid new credit inquiries for ninety days.", None),
        ],
    )
}

#[test]
fn passing_rules_flip_sub_missions_to_completed() {
    let mut missions = vec![tracked_mission()];
    let events = advance(&snapshot(780, 4000.0, 35.0), &mut missions);

    assert_eq!(events.len(), 2);
    assert!(missions[0].sub_missions[0].is_completed());
    assert!(missions[0].sub_missions[1].is_completed());
    // Untracked items stay put no matter what.
    assert_eq!(missions[0].sub_missions[2].status, SubMissionStatus::Ready);
}

#[test]
fn failing_rules_leave_everything_ready() {
    let mut missions = vec![tracked_mission()];
    let events = advance(&snapshot(700, 4000.0, 55.0), &mut missions);

    assert!(events.is_empty());
    assert!(missions[0].sub_missions.iter().all(|sub| !sub.is_completed()));
}

#[test]
fn advancing_twice_on_unchanged_state_reports_nothing_new() {
    let mut missions = vec![tracked_mission()];
    let state = snapshot(780, 4000.0, 35.0);

    let first = advance(&state, &mut missions);
    assert_eq!(first.len(), 2);

    let second = advance(&state, &mut missions);
    assert!(second.is_empty(), "completed items must not re-fire");
}

#[test]
fn events_name_the_mission_and_sub_mission() {
    let mut missions = vec![tracked_mission()];
    let events = advance(&snapshot(780, 4000.0, 80.0), &mut missions);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].mission_id, missions[0].id);
    assert_eq!(events[0].sub_mission_id, missions[0].sub_missions[0].id);
    assert!(events[0].text.contains("utilization"));
}
