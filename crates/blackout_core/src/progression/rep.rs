//! REP awards and rank/level derivation.
//!
//! Pure arithmetic over caller-supplied values. The engine computes deltas
//! and derived fields; persisting them is the host's job.

use serde::{Deserialize, Serialize};

use crate::session::{MarkerEvent, MarkerKind};

/// Every placed drop is worth at least this much.
pub const BASE_AWARD: i32 = 10;

/// Extra REP for dropping close to the anchor point.
pub const PROXIMITY_BONUS: i32 = 5;

/// Proximity bonus radius in meters.
pub const PROXIMITY_RADIUS_M: f64 = 50.0;

/// REP threshold for the Vandal rank.
pub const VANDAL_REP: i64 = 100;

/// REP threshold for the Writer rank.
pub const WRITER_REP: i64 = 300;

/// Street rank, derived from cumulative REP. Ordering follows progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    Toy,
    Vandal,
    Writer,
}

impl Rank {
    pub fn display_name(&self) -> &'static str {
        match self {
            Rank::Toy => "TOY",
            Rank::Vandal => "VANDAL",
            Rank::Writer => "WRITER",
        }
    }
}

/// REP delta for one placed drop.
///
/// Base 10, +5 when the drop landed within 50 m of the anchor, plus a
/// kind-dependent bonus. Unrecognized kinds still earn a small bonus; the
/// calculator has no failure mode. The result is always >= [`BASE_AWARD`].
pub fn award_for(event: &MarkerEvent) -> i32 {
    let mut award = BASE_AWARD;

    // NaN distances fail the comparison and earn nothing.
    if let Some(distance) = event.distance_from_anchor_m {
        if distance <= PROXIMITY_RADIUS_M {
            award += PROXIMITY_BONUS;
        }
    }

    award + kind_bonus(event.kind)
}

/// Kind-dependent REP bonus. `None` covers labels the engine does not
/// recognize.
pub fn kind_bonus(kind: Option<MarkerKind>) -> i32 {
    match kind {
        Some(MarkerKind::Piece) | Some(MarkerKind::Burner) => 15,
        Some(MarkerKind::ThrowUp) | Some(MarkerKind::Roller) => 10,
        Some(MarkerKind::Stencil) | Some(MarkerKind::PasteUp) => 8,
        Some(MarkerKind::Tag) => 5,
        Some(MarkerKind::Photo) | Some(MarkerKind::Music) | None => 3,
    }
}

/// Rank for a cumulative REP total. Monotonic; negative input clamps to 0.
pub fn rank_for(rep: i64) -> Rank {
    let rep = rep.max(0);
    if rep >= WRITER_REP {
        Rank::Writer
    } else if rep >= VANDAL_REP {
        Rank::Vandal
    } else {
        Rank::Toy
    }
}

/// Level for a cumulative REP total: `floor(rep / 100) + 1`.
pub fn level_for(rep: i64) -> u32 {
    (rep.max(0) / 100) as u32 + 1
}
