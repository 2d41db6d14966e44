use std::sync::Arc;

use serde_json::json;

use crate::missions::domain::MissionIntent;
use crate::missions::service::MissionService;
use crate::notifications::unread_count;
use crate::store::{MemoryStore, StateStore, PERSONA_KEY, USER_DATA_KEY};

fn seeded_store(credit_score: &str, dsr: f64) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .put(
            USER_DATA_KEY,
            json!({
                "income": "4000",
                "creditScore": credit_score,
                "employmentType": "regular",
                "loanPurpose": "refinance",
                "dsr": dsr,
            }),
        )
        .expect("seed user");
    store
        .put(PERSONA_KEY, json!({ "accounts": [], "points": 0 }))
        .expect("seed persona");
    store
}

#[test]
fn generate_without_stored_state_returns_none() {
    let service = MissionService::new(Arc::new(MemoryStore::new()));
    assert!(service.generate(MissionIntent::Rate).expect("generate").is_none());
}

#[test]
fn generated_missions_are_persisted() {
    let service = MissionService::new(seeded_store("720", 30.0));

    let mission = service
        .generate(MissionIntent::Rate)
        .expect("generate")
        .expect("mission");
    let stored = service.load_missions().expect("load");

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, mission.id);
}

#[test]
fn advancing_completes_tracked_steps_and_notifies_once() {
    // Refinance rate mission tracks a sub-40 debt ratio, already satisfied.
    let store = seeded_store("720", 30.0);
    let service = MissionService::new(Arc::clone(&store));
    service.generate(MissionIntent::Rate).expect("generate").expect("mission");

    let events = service.advance_all().expect("advance");
    assert_eq!(events.len(), 1);
    assert_eq!(unread_count(store.as_ref()).expect("count"), 1);

    // Second pass over unchanged state: no transitions, no new notifications.
    let again = service.advance_all().expect("advance");
    assert!(again.is_empty());
    assert_eq!(unread_count(store.as_ref()).expect("count"), 1);

    let stored = service.load_missions().expect("load");
    assert!(stored[0]
        .sub_missions
        .iter()
        .any(|sub| sub.is_completed() && sub.text.contains("card loan")));
}

#[test]
fn advancing_with_no_missions_is_a_no_op() {
    let service = MissionService::new(seeded_store("720", 30.0));
    assert!(service.advance_all().expect("advance").is_empty());
}
