//! End-to-end recommendation scenarios driven through the public service
//! facade and the state store, the way the presentation layer consumes them.

use std::sync::Arc;

use serde_json::json;

use trustfin::error::AppError;
use trustfin::level::level_for_points;
use trustfin::recommend::{CounterfactualKind, RecommendationService, ScoreFactor};
use trustfin::store::{JsonFileStore, MemoryStore, StateStore, PERSONA_KEY, USER_DATA_KEY};

fn seed(store: &dyn StateStore) {
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
                "accounts": [
                    { "bank": "Woori Bank", "balance": 12_500_000u64 },
                    { "bank": "Kakao Bank", "balance": 3_200_000u64 },
                ],
                "points": 3200,
            }),
        )
        .expect("seed persona");
}

#[test]
fn stored_profile_produces_a_ranked_explained_catalog() {
    let store = Arc::new(MemoryStore::new());
    seed(store.as_ref());
    let service = RecommendationService::new(store);

    let results = service.recommend().expect("recommend");
    assert_eq!(results.len(), 5);

    // The flagship salaried-worker product dominates for this persona.
    assert_eq!(results[0].product.id, "p1");
    assert_eq!(results[0].match_score, 99);

    for window in results.windows(2) {
        assert!(window[0].match_score >= window[1].match_score);
    }
    for result in &results {
        assert!((10..=99).contains(&result.match_score));
        assert!(result.final_rate >= 3.0);
        let explained: i16 = result.contributions.iter().map(|c| c.points).sum();
        assert!(explained >= result.match_score, "{}", result.product.id);
    }
}

#[test]
fn level_two_persona_carries_membership_perks_into_every_product() {
    let store = Arc::new(MemoryStore::new());
    seed(store.as_ref());
    let service = RecommendationService::new(store);

    assert_eq!(level_for_points(3200).level, 2);

    let results = service.recommend().expect("recommend");
    for result in &results {
        assert!(
            result
                .contributions
                .iter()
                .any(|c| c.factor == ScoreFactor::Membership && c.points == 5),
            "{} missing membership entry",
            result.product.id
        );
    }
}

#[test]
fn imperfect_credit_surfaces_tips_and_missions() {
    let store = Arc::new(MemoryStore::new());
    store
        .put(
            USER_DATA_KEY,
            json!({
                "income": "3000",
                "creditScore": "640",
                "employmentType": "regular",
                "loanPurpose": "refinance",
                "dsr": 55.0,
            }),
        )
        .expect("seed user");
    store
        .put(PERSONA_KEY, json!({ "accounts": [], "points": 0 }))
        .expect("seed persona");
    let service = RecommendationService::new(store);

    let detail = service
        .product_detail("p1")
        .expect("detail")
        .expect("stored state");

    assert!(detail
        .counterfactuals
        .iter()
        .any(|c| c.kind == CounterfactualKind::Tip));
    let mission = detail
        .counterfactuals
        .iter()
        .find(|c| c.kind == CounterfactualKind::Mission)
        .expect("mission counterfactual");
    assert!(!mission.sub_missions.is_empty());
    assert!(mission.sub_missions.len() <= 3);
}

#[test]
fn unknown_product_id_is_an_error_not_a_crash() {
    let store = Arc::new(MemoryStore::new());
    seed(store.as_ref());
    let service = RecommendationService::new(store);

    match service.product_detail("p42") {
        Err(AppError::ProductNotFound { id }) => assert_eq!(id, "p42"),
        other => panic!("expected ProductNotFound, got {other:?}"),
    }
}

#[test]
fn recommendations_work_against_the_file_backed_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(JsonFileStore::new(dir.path().join("state.json")));
    seed(store.as_ref());

    let results = RecommendationService::new(store).recommend().expect("recommend");
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].product.id, "p1");
}
