//! Mission/trigger system.
//!
//! Watches caller-supplied session snapshots and fires scripted narrative
//! beats at most once per mission id. See [`watcher::MissionWatcher`].

pub mod catalog;
pub mod types;
pub mod watcher;

pub use catalog::builtin_missions;
pub use types::{
    ConditionEvaluator, MissionFired, MissionKind, MissionStatus, MissionTrigger,
    TriggerCondition, DEFAULT_GEOFENCE_RADIUS_M,
};
pub use watcher::{MissionSink, MissionWatcher, MissionWatcherState};

#[cfg(test)]
mod tests;
