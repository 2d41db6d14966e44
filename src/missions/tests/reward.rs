use super::snapshot;
use crate::missions::domain::{Mission, MissionFocus};
use crate::missions::reward::{difficulty_for, mission_reward};

fn mission(focus: MissionFocus) -> Mission {
    Mission::new("any", "open-any", "Any", focus, Vec::new())
}

#[test]
fn base_difficulty_pays_the_base_points() {
    let reward = mission_reward(&mission(MissionFocus::General), &snapshot(700, 4000.0, 30.0));
    assert_eq!(reward.sub_point, 100);
    assert_eq!(reward.final_point, 300);
    assert!(!reward.is_high_reward);
}

#[test]
fn thin_credit_files_make_credit_missions_hard_and_lucrative() {
    let reward = mission_reward(&mission(MissionFocus::Credit), &snapshot(600, 4000.0, 30.0));
    assert_eq!(reward.sub_point, 150);
    assert_eq!(reward.final_point, 450);
    assert!(reward.is_high_reward);
}

#[test]
fn top_tier_credit_still_adds_a_small_premium() {
    let m = mission(MissionFocus::Credit);
    assert_eq!(difficulty_for(&m, &snapshot(950, 4000.0, 30.0)), 1.2);
    let reward = mission_reward(&m, &snapshot(950, 4000.0, 30.0));
    assert_eq!(reward.final_point, 360);
    assert!(!reward.is_high_reward);
}

#[test]
fn heavy_debt_scales_debt_relief_missions() {
    let reward = mission_reward(&mission(MissionFocus::DebtRelief), &snapshot(700, 4000.0, 45.0));
    assert_eq!(reward.sub_point, 140);
    assert_eq!(reward.final_point, 420);
    assert!(reward.is_high_reward);
}

#[test]
fn low_income_housing_missions_sit_exactly_on_the_high_reward_boundary() {
    let reward = mission_reward(&mission(MissionFocus::Housing), &snapshot(700, 3000.0, 30.0));
    assert_eq!(reward.sub_point, 130);
    assert_eq!(reward.final_point, 390);
    assert!(reward.is_high_reward);
}

#[test]
fn focus_conditions_do_not_bleed_across_themes() {
    // A debt-heavy user doing a credit mission earns only the base reward.
    let reward = mission_reward(&mission(MissionFocus::Credit), &snapshot(700, 4000.0, 80.0));
    assert_eq!(reward.final_point, 300);
    assert!(!reward.is_high_reward);
}
