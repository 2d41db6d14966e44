use std::sync::Arc;

use serde_json::json;

use crate::catalog::{default_catalog, find_product, LoanProduct};
use crate::recommend::domain::{EmploymentType, LoanPurpose, UserProfile};
use crate::recommend::pipeline::RecommendationService;
use crate::recommend::scoring::MatchEngine;
use crate::store::{MemoryStore, StateStore, PERSONA_KEY, USER_DATA_KEY};

pub(super) fn catalog_product(id: &str) -> LoanProduct {
    find_product(&default_catalog(), id)
        .unwrap_or_else(|| panic!("catalog product {id}"))
        .clone()
}

pub(super) fn engine() -> MatchEngine {
    MatchEngine::default()
}

pub(super) fn profile(
    income: f64,
    credit_score: u16,
    employment_type: EmploymentType,
    loan_purpose: LoanPurpose,
    dsr: Option<f64>,
) -> UserProfile {
    UserProfile {
        income,
        credit_score,
        employment_type,
        loan_purpose,
        total_assets: None,
        dsr,
    }
}

pub(super) fn seeded_store(points: u64) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .put(
            USER_DATA_KEY,
            json!({
                "income": "4000",
                "creditScore": "820",
                "employmentType": "regular",
                "loanPurpose": "living",
                "dsr": 20.0,
            }),
        )
        .expect("seed user");
    store
        .put(
            PERSONA_KEY,
            json!({
                "accounts": [{ "bank": "Woori Bank", "balance": 12_000_000u64 }],
                "points": points,
            }),
        )
        .expect("seed persona");
    store
}

pub(super) fn service(points: u64) -> RecommendationService<MemoryStore> {
    RecommendationService::new(seeded_store(points))
}
