mod rules;
mod submissions;

use serde::{Deserialize, Serialize};

use crate::catalog::LoanProduct;
use crate::missions::domain::SubMission;
use crate::recommend::domain::UserProfile;

/// Thresholds driving the rule chain. The defaults reproduce the demo's
/// illustrative constants; none of them are derived from regulation.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub base_score: i16,
    pub stable_credit_margin: u16,
    pub good_credit_margin: u16,
    pub high_income_threshold: f64,
    pub low_rate_threshold: f64,
    pub asset_tier_major: u64,
    pub asset_tier_minor: u64,
    pub dsr_safe_band: f64,
    pub dsr_warning_band: f64,
    pub dsr_exempt_threshold: f64,
    pub mission_credit_ceiling: u16,
    pub max_auto_sub_missions: usize,
    pub score_floor: i16,
    pub score_ceiling: i16,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 70,
            stable_credit_margin: 200,
            good_credit_margin: 100,
            high_income_threshold: 5000.0,
            low_rate_threshold: 5.0,
            asset_tier_major: 100_000_000,
            asset_tier_minor: 30_000_000,
            dsr_safe_band: 40.0,
            dsr_warning_band: 70.0,
            dsr_exempt_threshold: 60.0,
            mission_credit_ceiling: 950,
            max_auto_sub_missions: 3,
            score_floor: 10,
            score_ceiling: 99,
        }
    }
}

/// Fallback debt-ratio model used when neither the form nor the persona
/// carries a measured value. Deliberately pluggable: the default is a
/// placeholder heuristic, not a verified formula.
pub trait DebtRatioEstimator: Send + Sync {
    fn estimate(&self, credit_score: u16) -> f64;
}

/// `max(10, (1000 - credit) / 10)`: lower credit implies a heavier assumed
/// debt load.
#[derive(Debug, Default)]
pub struct CreditBasedEstimator;

impl DebtRatioEstimator for CreditBasedEstimator {
    fn estimate(&self, credit_score: u16) -> f64 {
        ((1000.0 - f64::from(credit_score)) / 10.0).max(10.0)
    }
}

/// Named factor a contribution is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    CreditTier,
    RateFit,
    AssetBase,
    EmploymentFit,
    PurposeFit,
    DebtRatio,
    Membership,
}

/// Signed point adjustment with a human-readable justification, allowing the
/// UI to render a transparent score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub factor: ScoreFactor,
    pub points: i16,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterfactualKind {
    Tip,
    Mission,
}

/// Suggested user action framed as "what would improve this score". Mission
/// counterfactuals carry concrete sub-missions; tips are advice only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterfactual {
    pub kind: CounterfactualKind,
    pub text: String,
    pub action: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_missions: Vec<SubMission>,
}

/// Full scoring output for one user/product pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAnalysis {
    pub score: i16,
    pub contributions: Vec<Contribution>,
    pub counterfactuals: Vec<Counterfactual>,
}

/// Stateless scorer applying the ordered rule chain to a profile/product
/// pair. Pure: the resolved debt ratio comes from the profile or the
/// injected estimator, never from ambient state.
pub struct MatchEngine {
    config: ScoringConfig,
    estimator: Box<dyn DebtRatioEstimator>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_estimator(config, Box::new(CreditBasedEstimator))
    }

    pub fn with_estimator(config: ScoringConfig, estimator: Box<dyn DebtRatioEstimator>) -> Self {
        Self { config, estimator }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Debt ratio used everywhere downstream: the user-supplied value when
    /// present, otherwise the estimator's figure.
    pub fn resolved_dsr(&self, profile: &UserProfile) -> f64 {
        profile
            .dsr
            .unwrap_or_else(|| self.estimator.estimate(profile.credit_score))
    }

    pub fn score(&self, profile: &UserProfile, product: &LoanProduct) -> ScoreAnalysis {
        let resolved_dsr = self.resolved_dsr(profile);
        let mut state = rules::RuleState::new(self.config.base_score);

        for rule in rules::RULE_CHAIN {
            rule(profile, product, resolved_dsr, &self.config, &mut state);
        }

        state.finish(&self.config)
    }
}
