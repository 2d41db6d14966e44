use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_catalog, find_product, LoanProduct};
use crate::error::AppError;
use crate::level::{level_for_points, LevelInfo};
use crate::recommend::affordability::credit_limit;
use crate::recommend::domain::{EmploymentType, Persona, UserProfile};
use crate::recommend::scoring::{
    Contribution, Counterfactual, MatchEngine, ScoreFactor,
};
use crate::store::{read_typed, StateStore, PERSONA_KEY, USER_DATA_KEY};

/// Floor applied to every simulated rate.
const MIN_RATE_PCT: f64 = 3.0;

/// Per-product recommendation handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    #[serde(flatten)]
    pub product: LoanProduct,
    pub match_score: i16,
    pub contributions: Vec<Contribution>,
    pub counterfactuals: Vec<Counterfactual>,
    pub final_rate: f64,
    pub final_limit: u64,
}

struct LoadedState {
    profile: UserProfile,
    level: LevelInfo,
}

/// Orchestrates store reads, scoring, level perks, and affordability into a
/// ranked product list.
pub struct RecommendationService<S> {
    store: Arc<S>,
    engine: MatchEngine,
    catalog: Vec<LoanProduct>,
}

impl<S: StateStore> RecommendationService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_parts(store, MatchEngine::default(), default_catalog())
    }

    pub fn with_parts(store: Arc<S>, engine: MatchEngine, catalog: Vec<LoanProduct>) -> Self {
        Self { store, engine, catalog }
    }

    pub fn catalog(&self) -> &[LoanProduct] {
        &self.catalog
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Score every catalog product for the stored user, ranked by match
    /// score. Absent user or persona data yields an empty list, not an error.
    pub fn recommend(&self) -> Result<Vec<RecommendationResult>, AppError> {
        match self.load_state()? {
            Some(state) => {
                let results = self.recommend_for(&state.profile, state.level);
                tracing::debug!(
                    products = results.len(),
                    level = state.level.level,
                    "catalog ranked"
                );
                Ok(results)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Pure ranking path over an already-resolved profile and level.
    pub fn recommend_for(&self, profile: &UserProfile, level: LevelInfo) -> Vec<RecommendationResult> {
        let mut results: Vec<RecommendationResult> = self
            .catalog
            .iter()
            .map(|product| self.evaluate(profile, level, product))
            .collect();

        // Stable sort keeps catalog order for tied scores.
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results
    }

    /// Score a single product by id, for the product-detail flow. Unknown
    /// ids are reported, missing stored data is not.
    pub fn product_detail(
        &self,
        product_id: &str,
    ) -> Result<Option<RecommendationResult>, AppError> {
        let product = find_product(&self.catalog, product_id)
            .ok_or_else(|| AppError::ProductNotFound { id: product_id.to_string() })?
            .clone();

        match self.load_state()? {
            Some(state) => Ok(Some(self.evaluate(&state.profile, state.level, &product))),
            None => Ok(None),
        }
    }

    fn load_state(&self) -> Result<Option<LoadedState>, AppError> {
        let Some(raw_user) = self.store.get(USER_DATA_KEY)? else {
            return Ok(None);
        };
        let Some(persona) = read_typed::<Persona, S>(self.store.as_ref(), PERSONA_KEY)? else {
            return Ok(None);
        };

        let profile = UserProfile::from_stored(&raw_user)?.merged_with(&persona);
        let level = level_for_points(persona.points);

        Ok(Some(LoadedState { profile, level }))
    }

    fn evaluate(
        &self,
        profile: &UserProfile,
        level: LevelInfo,
        product: &LoanProduct,
    ) -> RecommendationResult {
        let analysis = self.engine.score(profile, product);
        let config = self.engine.config();

        let mut contributions = analysis.contributions;
        let mut match_score = analysis.score;

        // Membership perk: small score bump, recorded more generously in the
        // breakdown the UI shows.
        let tier_steps = i16::from(level.level - 1);
        if tier_steps > 0 {
            match_score += 2 * tier_steps;
            contributions.push(Contribution {
                factor: ScoreFactor::Membership,
                points: 5 * tier_steps,
                note: format!("level {} membership perk", level.level),
            });
        }
        let match_score = match_score.min(config.score_ceiling);

        let mut rate_discount = (f64::from(profile.credit_score) - 600.0) * 0.005;
        if profile.employment_type == EmploymentType::Regular && profile.credit_score < 750 {
            rate_discount += 0.5;
        }
        rate_discount += f64::from(level.level - 1) * 0.1;

        let final_rate = round_to_two_decimals((product.base_rate - rate_discount).max(MIN_RATE_PCT));

        let resolved_dsr = self.engine.resolved_dsr(profile);
        let final_limit = credit_limit(
            profile.income,
            product.limit_factor,
            resolved_dsr,
            product.dsr_regulated,
            final_rate,
        );

        RecommendationResult {
            product: product.clone(),
            match_score,
            contributions,
            counterfactuals: analysis.counterfactuals,
            final_rate,
            final_limit,
        }
    }
}

fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
