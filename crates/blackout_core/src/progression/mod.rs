//! Progression rules: REP awards, rank/level derivation, unlock ledger.

pub mod rep;
pub mod unlocks;

pub use rep::{award_for, level_for, rank_for, Rank};
pub use unlocks::{next_unlock, unlocked_styles, NextUnlock};
