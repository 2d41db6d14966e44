//! Loan-product matching: profile parsing, the rule-based match scorer with
//! its explanation trail, the affordability ceiling, and the recommendation
//! pipeline that ties them to the state store.

pub mod affordability;
pub mod domain;
pub mod pipeline;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use affordability::credit_limit;
pub use domain::{
    AccountBalance, EmploymentType, LoanPurpose, Persona, ProfileError, UserProfile,
};
pub use pipeline::{RecommendationResult, RecommendationService};
pub use scoring::{
    Contribution, Counterfactual, CounterfactualKind, CreditBasedEstimator, DebtRatioEstimator,
    MatchEngine, ScoreAnalysis, ScoreFactor, ScoringConfig,
};
