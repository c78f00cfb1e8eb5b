//! Mission trigger types and predicate evaluation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::CrewTrustDelta;
use crate::geo::{distance_meters, GeoPoint};
use crate::progression::{rank_for, Rank};
use crate::session::SessionSnapshot;

/// Geofence radius used when a mission omits one.
pub const DEFAULT_GEOFENCE_RADIUS_M: f64 = 100.0;

/// Per-mission lifecycle. `Completed` is terminal; a completed mission is
/// never evaluated again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    /// Registered, not yet seen by the watcher.
    Inactive,
    /// Criteria being tracked against incoming snapshots.
    Active,
    Completed,
}

/// Mission flavor. Blackout missions carry the crew trust cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionKind {
    /// Early-game onboarding beats.
    Intro,
    /// REP/marker milestone beats.
    Milestone,
    /// Geofenced "go there" objectives.
    Exploration,
    /// Narrative disappearance events.
    Blackout,
}

/// A trigger predicate over the current session snapshot.
///
/// Composable via `All`/`Any`/`Not`; `Custom` defers to a closure registered
/// on the [`ConditionEvaluator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCondition {
    /// `markers_placed >= n`.
    MarkersPlaced(u32),
    /// `rep >= n`.
    RepAtLeast(i64),
    /// Derived rank has reached the given tier.
    RankAtLeast(Rank),
    /// Current GPS fix within `radius_m` (default 100 m) of the target.
    /// No fix, or a NaN distance, means not satisfied.
    NearPoint {
        lat: f64,
        lon: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius_m: Option<f64>,
    },
    /// Another mission has already fired this session.
    MissionCompleted(String),
    All(Vec<TriggerCondition>),
    Any(Vec<TriggerCondition>),
    Not(Box<TriggerCondition>),
    /// Named host-side predicate with an opaque argument.
    Custom(String, serde_json::Value),
}

/// A one-shot narrative trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionTrigger {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: MissionKind,
    /// All conditions must hold on the same snapshot.
    pub conditions: Vec<TriggerCondition>,
    /// Trust adjustments reported to the caller when this mission fires.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trust_rewards: Vec<CrewTrustDelta>,
    /// Opaque payload forwarded with the fired event.
    #[serde(default)]
    pub payload: serde_json::Value,
    pub status: MissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<u64>,
}

impl MissionTrigger {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: MissionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            conditions: Vec::new(),
            trust_rewards: Vec::new(),
            payload: serde_json::Value::Null,
            status: MissionStatus::Inactive,
            completed_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_condition(mut self, condition: TriggerCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_trust_rewards(mut self, rewards: &[CrewTrustDelta]) -> Self {
        self.trust_rewards = rewards.to_vec();
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == MissionStatus::Completed
    }
}

/// The event emitted when a mission fires. Forwarded by the caller into its
/// own persistence/notification layer; the engine does not await anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionFired {
    pub mission_id: String,
    pub timestamp: u64,
    pub payload: serde_json::Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trust_deltas: Vec<CrewTrustDelta>,
}

type CustomPredicate = Arc<dyn Fn(&serde_json::Value, &SessionSnapshot) -> bool + Send + Sync>;

/// Evaluates trigger predicates against a snapshot.
///
/// Stateless apart from the custom-predicate registry; the completed-mission
/// set is passed in per evaluation so at-most-once bookkeeping stays with the
/// watcher.
pub struct ConditionEvaluator {
    custom: HashMap<String, CustomPredicate>,
}

impl Default for ConditionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionEvaluator {
    pub fn new() -> Self {
        Self { custom: HashMap::new() }
    }

    pub fn register_custom(&mut self, name: &str, predicate: CustomPredicate) {
        self.custom.insert(name.to_string(), predicate);
    }

    pub fn evaluate(
        &self,
        condition: &TriggerCondition,
        snapshot: &SessionSnapshot,
        completed: &[String],
    ) -> bool {
        match condition {
            TriggerCondition::MarkersPlaced(n) => snapshot.markers_placed >= *n,

            TriggerCondition::RepAtLeast(n) => snapshot.rep >= *n,

            TriggerCondition::RankAtLeast(rank) => rank_for(snapshot.rep) >= *rank,

            TriggerCondition::NearPoint { lat, lon, radius_m } => {
                let Some(position) = snapshot.position else {
                    return false;
                };
                let radius = radius_m.unwrap_or(DEFAULT_GEOFENCE_RADIUS_M);
                let distance = distance_meters(position.lat, position.lon, *lat, *lon);
                // NaN fails this comparison, so garbage fixes never satisfy
                // a geofence.
                distance <= radius
            }

            TriggerCondition::MissionCompleted(id) => completed.contains(id),

            TriggerCondition::All(conditions) => {
                conditions.iter().all(|c| self.evaluate(c, snapshot, completed))
            }

            TriggerCondition::Any(conditions) => {
                conditions.iter().any(|c| self.evaluate(c, snapshot, completed))
            }

            TriggerCondition::Not(condition) => !self.evaluate(condition, snapshot, completed),

            TriggerCondition::Custom(name, value) => self
                .custom
                .get(name)
                .map(|predicate| predicate(value, snapshot))
                // Unknown custom predicates never fire; the host registers
                // them explicitly or the condition stays false.
                .unwrap_or(false),
        }
    }

    pub fn evaluate_all(
        &self,
        conditions: &[TriggerCondition],
        snapshot: &SessionSnapshot,
        completed: &[String],
    ) -> bool {
        conditions.iter().all(|c| self.evaluate(c, snapshot, completed))
    }
}

/// Helper for building `NearPoint` conditions from a target point.
pub fn near(target: GeoPoint, radius_m: Option<f64>) -> TriggerCondition {
    TriggerCondition::NearPoint { lat: target.lat, lon: target.lon, radius_m }
}
