use std::sync::Arc;

use chrono::Local;

use super::domain::{Mission, MissionIntent, PersonaSnapshot};
use super::reward::{mission_reward, MissionReward};
use super::tracker::ProgressEvent;
use super::{generator, tracker};
use crate::error::AppError;
use crate::notifications::{push_notification, Notification};
use crate::recommend::domain::{Persona, UserProfile};
use crate::recommend::scoring::{CreditBasedEstimator, DebtRatioEstimator};
use crate::store::{read_typed, write_typed, StateStore, MISSIONS_KEY, PERSONA_KEY, USER_DATA_KEY};

/// Service tying mission generation, tracking, and rewards to the state
/// store. Reads state wholesale and writes wholesale, as the UI layer does.
pub struct MissionService<S> {
    store: Arc<S>,
    estimator: Box<dyn DebtRatioEstimator>,
}

impl<S: StateStore> MissionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_estimator(store, Box::new(CreditBasedEstimator))
    }

    pub fn with_estimator(store: Arc<S>, estimator: Box<dyn DebtRatioEstimator>) -> Self {
        Self { store, estimator }
    }

    /// Tailor a mission for the stored profile and append it to the mission
    /// list. `None` when no profile has been stored yet.
    pub fn generate(&self, intent: MissionIntent) -> Result<Option<Mission>, AppError> {
        let Some((profile, _persona)) = self.load_state()? else {
            return Ok(None);
        };

        let mission = generator::tailor(&profile, intent);

        let mut missions = self.load_missions()?;
        missions.push(mission.clone());
        self.save_missions(&missions)?;

        Ok(Some(mission))
    }

    /// Re-check every tracked sub-mission against current state, persisting
    /// updates and queueing one notification per completion. Idempotent on
    /// unchanged state.
    pub fn advance_all(&self) -> Result<Vec<ProgressEvent>, AppError> {
        let Some(snapshot) = self.snapshot()? else {
            return Ok(Vec::new());
        };

        let mut missions = self.load_missions()?;
        let events = tracker::advance(&snapshot, &mut missions);
        tracing::debug!(completed = events.len(), missions = missions.len(), "tracking pass");

        if !events.is_empty() {
            self.save_missions(&missions)?;
            let now = Local::now();
            for event in &events {
                push_notification(
                    self.store.as_ref(),
                    Notification::mission_completed(&event.text, now),
                )?;
            }
        }

        Ok(events)
    }

    /// Reward preview for a mission against the stored state. Defaults to
    /// base difficulty when no state is stored.
    pub fn reward_for(&self, mission: &Mission) -> Result<MissionReward, AppError> {
        let snapshot = self.snapshot()?.unwrap_or(PersonaSnapshot {
            credit_score: 0,
            income: 0.0,
            dsr: 0.0,
            points: 0,
            total_assets: 0,
        });
        Ok(mission_reward(mission, &snapshot))
    }

    pub fn load_missions(&self) -> Result<Vec<Mission>, AppError> {
        Ok(read_typed::<Vec<Mission>, S>(self.store.as_ref(), MISSIONS_KEY)?.unwrap_or_default())
    }

    pub fn save_missions(&self, missions: &[Mission]) -> Result<(), AppError> {
        write_typed(self.store.as_ref(), MISSIONS_KEY, &missions.to_vec())?;
        Ok(())
    }

    fn load_state(&self) -> Result<Option<(UserProfile, Persona)>, AppError> {
        let Some(raw_user) = self.store.get(USER_DATA_KEY)? else {
            return Ok(None);
        };
        let persona =
            read_typed::<Persona, S>(self.store.as_ref(), PERSONA_KEY)?.unwrap_or_default();
        let profile = UserProfile::from_stored(&raw_user)?.merged_with(&persona);
        Ok(Some((profile, persona)))
    }

    fn snapshot(&self) -> Result<Option<PersonaSnapshot>, AppError> {
        let Some((profile, persona)) = self.load_state()? else {
            return Ok(None);
        };
        let resolved_dsr = profile
            .dsr
            .unwrap_or_else(|| self.estimator.estimate(profile.credit_score));
        Ok(Some(PersonaSnapshot::from_state(&profile, &persona, resolved_dsr)))
    }
}
