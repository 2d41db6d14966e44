//! Improvement missions: domain types, tailored generation, automatic
//! progress tracking, and difficulty-scaled rewards.

pub mod domain;
pub mod generator;
pub mod reward;
pub mod service;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use domain::{
    Mission, MissionFocus, MissionIntent, PersonaSnapshot, StateKey, SubMission, SubMissionStatus,
    TrackingOp, TrackingRule,
};
pub use generator::tailor;
pub use reward::{difficulty_for, mission_reward, MissionReward};
pub use service::MissionService;
pub use tracker::{advance, ProgressEvent};
