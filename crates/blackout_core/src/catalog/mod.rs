//! Static content catalogs.
//!
//! Immutable tables loaded once at process start: graffiti style definitions
//! with their REP thresholds, the per-crew starter color partition, and the
//! crew trust cascade applied by blackout events. Nothing in here is ever
//! mutated at runtime; the progression and mission modules only read.

pub mod colors;
pub mod crews;
pub mod styles;

pub use colors::{starter_colors, ColorDefinition};
pub use crews::{trust_cascade, Crew, CrewTrustDelta};
pub use styles::{style_catalog, Rarity, StyleCategory, StyleDefinition};
