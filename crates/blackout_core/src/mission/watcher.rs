//! Mission watcher.
//!
//! Owns the registered triggers for one user session and evaluates them
//! against each incoming snapshot. Firing is at-most-once per mission id:
//! completed ids are recorded in the watcher state and survive a
//! save/restore round trip. Evaluation order is registration order, so a
//! snapshot always produces the same firings regardless of map iteration.
//!
//! The story collaborator is an explicit optional sink injected at
//! construction. Without one the watcher degrades to returning fired events
//! to the caller and logging that the sink is absent; it never throws its
//! way into discovering whether a collaborator exists.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::CrewTrustDelta;
use crate::error::{EngineError, Result};
use crate::session::SessionSnapshot;

use super::types::{ConditionEvaluator, MissionFired, MissionStatus, MissionTrigger};

/// Serializable watcher state for save/load.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MissionWatcherState {
    pub missions: HashMap<String, MissionTrigger>,
    /// Registration order; drives deterministic evaluation.
    pub order: Vec<String>,
    /// Fired ids, in firing order.
    pub completed_ids: Vec<String>,
}

/// Receiver for fired missions. Implemented by the host's story/state layer;
/// calls are fire-and-forget from the engine's perspective.
pub trait MissionSink {
    fn mission_fired(&mut self, event: &MissionFired);

    /// Crew trust adjustments cascading from a blackout event. Default
    /// implementation ignores them; hosts that track trust override this.
    fn crew_trust_changed(&mut self, _delta: &CrewTrustDelta) {}
}

pub struct MissionWatcher {
    state: MissionWatcherState,
    evaluator: ConditionEvaluator,
    sink: Option<Box<dyn MissionSink>>,
    current_time: u64,
    /// Log the missing-sink condition once, not per snapshot.
    warned_no_sink: bool,
}

impl Default for MissionWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionWatcher {
    pub fn new() -> Self {
        Self {
            state: MissionWatcherState::default(),
            evaluator: ConditionEvaluator::new(),
            sink: None,
            current_time: 0,
            warned_no_sink: false,
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn MissionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Restore from saved state. Completed ids stay completed, so a mission
    /// that fired before the save cannot fire again after the load.
    pub fn from_state(state: MissionWatcherState, current_time: u64) -> Self {
        Self {
            state,
            evaluator: ConditionEvaluator::new(),
            sink: None,
            current_time,
            warned_no_sink: false,
        }
    }

    pub fn get_state(&self) -> &MissionWatcherState {
        &self.state
    }

    pub fn evaluator_mut(&mut self) -> &mut ConditionEvaluator {
        &mut self.evaluator
    }

    /// Update the session clock used to timestamp fired events.
    pub fn set_current_time(&mut self, timestamp: u64) {
        self.current_time = timestamp;
    }

    /// Register a trigger. Re-registering an id keeps its original slot in
    /// the evaluation order and overwrites the definition.
    pub fn register(&mut self, trigger: MissionTrigger) {
        if !self.state.order.contains(&trigger.id) {
            self.state.order.push(trigger.id.clone());
        }
        self.state.missions.insert(trigger.id.clone(), trigger);
    }

    pub fn get_mission(&self, id: &str) -> Option<&MissionTrigger> {
        self.state.missions.get(id)
    }

    pub fn completed_ids(&self) -> &[String] {
        &self.state.completed_ids
    }

    pub fn missions_with_status(&self, status: MissionStatus) -> Vec<&MissionTrigger> {
        self.state
            .order
            .iter()
            .filter_map(|id| self.state.missions.get(id))
            .filter(|m| m.status == status)
            .collect()
    }

    /// Evaluate every registered trigger against one snapshot.
    ///
    /// Completed missions are skipped. A mission whose conditions all hold
    /// transitions to `Completed`, is recorded, and its fired event is both
    /// pushed to the sink (if any) and returned. Missions completed earlier
    /// in the same pass are visible to later `MissionCompleted` conditions,
    /// so dependent triggers may cascade within a single snapshot.
    pub fn observe(&mut self, snapshot: &SessionSnapshot) -> Vec<MissionFired> {
        let mut fired = Vec::new();

        let ids: Vec<String> = self.state.order.clone();
        for id in ids {
            let Some(mission) = self.state.missions.get_mut(&id) else {
                continue;
            };
            if mission.is_completed() {
                continue;
            }
            if mission.status == MissionStatus::Inactive {
                mission.status = MissionStatus::Active;
            }

            let satisfied = self.evaluator.evaluate_all(
                &mission.conditions,
                snapshot,
                &self.state.completed_ids,
            );
            if !satisfied {
                continue;
            }

            // Re-borrow mutably; evaluate_all held an immutable view above.
            let mission = self
                .state
                .missions
                .get_mut(&id)
                .expect("mission present; checked above");
            mission.status = MissionStatus::Completed;
            mission.completed_at = Some(self.current_time);

            let event = MissionFired {
                mission_id: id.clone(),
                timestamp: self.current_time,
                payload: mission.payload.clone(),
                trust_deltas: mission.trust_rewards.clone(),
            };

            self.state.completed_ids.push(id.clone());
            self.emit(&event);
            fired.push(event);
        }

        fired
    }

    /// Mark a mission completed without evaluating it, e.g. when the host
    /// replays completions persisted in its own database.
    pub fn force_complete(&mut self, id: &str) -> Result<()> {
        let mission = self
            .state
            .missions
            .get_mut(id)
            .ok_or_else(|| EngineError::NotFound(format!("Mission not found: {}", id)))?;

        if !mission.is_completed() {
            mission.status = MissionStatus::Completed;
            mission.completed_at = Some(self.current_time);
            self.state.completed_ids.push(id.to_string());
        }
        Ok(())
    }

    fn emit(&mut self, event: &MissionFired) {
        match self.sink.as_mut() {
            Some(sink) => {
                debug!("mission fired: {}", event.mission_id);
                sink.mission_fired(event);
                for delta in &event.trust_deltas {
                    sink.crew_trust_changed(delta);
                }
            }
            None => {
                if !self.warned_no_sink {
                    warn!(
                        "no mission sink attached; fired missions are only \
                         returned to the caller"
                    );
                    self.warned_no_sink = true;
                }
            }
        }
    }
}
