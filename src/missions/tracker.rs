//! Automatic sub-mission completion. Pure over an explicit persona snapshot;
//! persistence and notifications live in the service layer.

use serde::{Deserialize, Serialize};

use super::domain::{Mission, PersonaSnapshot, SubMissionStatus};

/// One ready-to-completed transition observed by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub mission_id: String,
    pub sub_mission_id: String,
    pub text: String,
}

/// Evaluate every tracked, not-yet-completed sub-mission against the
/// snapshot. Completed items are never revisited, so a second run over
/// unchanged state reports nothing.
pub fn advance(snapshot: &PersonaSnapshot, missions: &mut [Mission]) -> Vec<ProgressEvent> {
    let mut events = Vec::new();

    for mission in missions.iter_mut() {
        for sub in &mut mission.sub_missions {
            if sub.is_completed() {
                continue;
            }
            let Some(rule) = sub.rule else {
                continue;
            };

            if rule.op.evaluate(snapshot.value(rule.key), rule.threshold) {
                sub.status = SubMissionStatus::Completed;
                events.push(ProgressEvent {
                    mission_id: mission.id.clone(),
                    sub_mission_id: sub.id.clone(),
                    text: sub.text.clone(),
                });
            }
        }
    }

    events
}
