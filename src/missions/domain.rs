use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::recommend::domain::{Persona, UserProfile};

/// What the user said they want to improve when asking for a tailored
/// mission. Unknown intent strings are rejected by [`MissionIntent::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionIntent {
    Limit,
    Rate,
    Period,
    Method,
}

impl MissionIntent {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "limit" => Some(Self::Limit),
            "rate" => Some(Self::Rate),
            "period" => Some(Self::Period),
            "method" => Some(Self::Method),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Rate => "rate",
            Self::Period => "period",
            Self::Method => "method",
        }
    }
}

/// Persisted state field a tracking rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateKey {
    CreditScore,
    DebtRatio,
    Points,
    TotalAssets,
    Income,
}

/// Comparison applied by the progress tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingOp {
    AtLeast,
    AtMost,
    Equals,
}

impl TrackingOp {
    pub fn evaluate(self, value: f64, threshold: f64) -> bool {
        match self {
            TrackingOp::AtLeast => value >= threshold,
            TrackingOp::AtMost => value <= threshold,
            TrackingOp::Equals => (value - threshold).abs() < f64::EPSILON,
        }
    }
}

/// Predicate over persisted user state used to auto-complete a sub-mission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingRule {
    pub key: StateKey,
    pub op: TrackingOp,
    pub threshold: f64,
}

impl TrackingRule {
    pub const fn at_least(key: StateKey, threshold: f64) -> Self {
        Self { key, op: TrackingOp::AtLeast, threshold }
    }

    pub const fn at_most(key: StateKey, threshold: f64) -> Self {
        Self { key, op: TrackingOp::AtMost, threshold }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubMissionStatus {
    Ready,
    Completed,
}

/// Structured, trackable improvement step inside a mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMission {
    pub id: String,
    pub text: String,
    pub status: SubMissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<TrackingRule>,
}

static SUB_MISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_sub_mission_id() -> String {
    let id = SUB_MISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("sub-{id:06}")
}

impl SubMission {
    /// Build a fresh sub-mission with a unique id assigned at generation time.
    pub fn new(text: impl Into<String>, rule: Option<TrackingRule>) -> Self {
        Self {
            id: next_sub_mission_id(),
            text: text.into(),
            status: SubMissionStatus::Ready,
            rule,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == SubMissionStatus::Completed
    }
}

/// Reward theme of a mission, consumed by the difficulty model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionFocus {
    Credit,
    DebtRelief,
    Housing,
    General,
}

/// A tailored improvement mission with concrete sub-tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: String,
    pub text: String,
    pub action: String,
    pub label: String,
    pub focus: MissionFocus,
    pub sub_missions: Vec<SubMission>,
}

static MISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl Mission {
    pub fn new(
        text: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
        focus: MissionFocus,
        sub_missions: Vec<SubMission>,
    ) -> Self {
        let id = MISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("msn-{id:06}"),
            text: text.into(),
            action: action.into(),
            label: label.into(),
            focus,
            sub_missions,
        }
    }
}

/// Merged numeric view of the stored user and persona state, the single
/// source tracking predicates and the reward model read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonaSnapshot {
    pub credit_score: u16,
    pub income: f64,
    pub dsr: f64,
    pub points: u64,
    pub total_assets: u64,
}

impl PersonaSnapshot {
    pub fn from_state(profile: &UserProfile, persona: &Persona, resolved_dsr: f64) -> Self {
        Self {
            credit_score: profile.credit_score,
            income: profile.income,
            dsr: resolved_dsr,
            points: persona.points,
            total_assets: profile.total_assets.unwrap_or_else(|| persona.total_assets()),
        }
    }

    pub fn value(&self, key: StateKey) -> f64 {
        match key {
            StateKey::CreditScore => f64::from(self.credit_score),
            StateKey::DebtRatio => self.dsr,
            StateKey::Points => self.points as f64,
            StateKey::TotalAssets => self.total_assets as f64,
            StateKey::Income => self.income,
        }
    }
}
