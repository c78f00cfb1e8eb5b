//! # blackout_core - Progression & Trigger Engine
//!
//! Rule engine for the Blackout map game: converts drop placements into REP
//! awards, derives rank/level and unlocked styles from cumulative REP, and
//! watches session snapshots for one-shot narrative triggers (missions,
//! blackout events, geofenced exploration beats).
//!
//! ## Design
//! - Pure functions over caller-owned snapshots; the engine persists nothing
//!   and performs no I/O of its own
//! - Static catalogs (styles, colors, crews) loaded once, never mutated
//! - At-most-once mission firing per id, preserved across save/restore
//! - Stateless JSON API for the host app; session state travels with each
//!   request

pub mod api;
pub mod catalog;
pub mod error;
pub mod geo;
pub mod mission;
pub mod progression;
pub mod session;

// Re-export main API functions
pub use api::{award_marker_json, evaluate_session_json, profile_json};
pub use error::{EngineError, Result};

// Re-export engine types
pub use catalog::{starter_colors, style_catalog, Crew, CrewTrustDelta, StyleDefinition};
pub use geo::{distance_meters, GeoPoint};
pub use mission::{
    builtin_missions, MissionFired, MissionKind, MissionSink, MissionStatus, MissionTrigger,
    MissionWatcher, MissionWatcherState, TriggerCondition,
};
pub use progression::{award_for, level_for, next_unlock, rank_for, unlocked_styles, Rank};
pub use session::{MarkerEvent, MarkerKind, SessionSnapshot};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
