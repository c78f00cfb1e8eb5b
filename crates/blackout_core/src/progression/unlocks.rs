//! Unlock ledger.
//!
//! Maps cumulative REP onto the style catalog. A linear scan is fine at this
//! scale (10 entries); the catalog is sorted ascending at init, so the first
//! unsatisfied entry is always the next unlock.

use serde::Serialize;

use crate::catalog::{style_catalog, StyleDefinition};

/// The lowest-threshold style not yet reached, with interpolated progress.
#[derive(Debug, Clone, Serialize)]
pub struct NextUnlock {
    /// `None` once every catalog entry is unlocked.
    pub style: Option<&'static StyleDefinition>,
    /// 0% at the previous satisfied threshold, 100% at the next one.
    pub progress_percent: f32,
    /// REP still needed; 0 when fully unlocked.
    pub rep_needed: i64,
}

impl NextUnlock {
    /// Sentinel for a fully unlocked ledger.
    fn fully_unlocked() -> Self {
        Self { style: None, progress_percent: 100.0, rep_needed: 0 }
    }
}

/// Every style whose requirement is satisfied by `rep`, ascending by
/// threshold. Monotonic: raising `rep` only ever grows the set.
pub fn unlocked_styles(rep: i64) -> Vec<&'static StyleDefinition> {
    let rep = rep.max(0);
    style_catalog().iter().filter(|style| style.rep_required <= rep).collect()
}

/// Progress toward the next locked style.
pub fn next_unlock(rep: i64) -> NextUnlock {
    let rep = rep.max(0);
    let catalog = style_catalog();

    let Some(next) = catalog.iter().find(|style| style.rep_required > rep) else {
        return NextUnlock::fully_unlocked();
    };

    // Highest satisfied threshold, or 0 when only the free entry is behind
    // us. The catalog starts at 0, so `rep` always sits between two points.
    let previous = catalog
        .iter()
        .rev()
        .find(|style| style.rep_required <= rep)
        .map(|style| style.rep_required)
        .unwrap_or(0);

    let span = (next.rep_required - previous).max(1);
    let progress = (rep - previous) as f32 / span as f32 * 100.0;

    NextUnlock {
        style: Some(next),
        progress_percent: progress.clamp(0.0, 100.0),
        rep_needed: next.rep_required - rep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rep_unlocks_free_style() {
        let styles = unlocked_styles(0);
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].id, "basic_tag");
    }

    #[test]
    fn test_negative_rep_treated_as_zero() {
        assert_eq!(unlocked_styles(-100).len(), 1);
    }

    #[test]
    fn test_full_catalog_at_max_threshold() {
        assert_eq!(unlocked_styles(750).len(), style_catalog().len());
        assert_eq!(unlocked_styles(100_000).len(), style_catalog().len());
    }

    #[test]
    fn test_unlocked_set_monotonic() {
        for rep in (0..1000).step_by(25) {
            let lower = unlocked_styles(rep);
            let upper = unlocked_styles(rep + 25);
            assert!(lower.len() <= upper.len());
            for (a, b) in lower.iter().zip(upper.iter()) {
                assert_eq!(a.id, b.id, "unlock order changed at rep {}", rep);
            }
        }
    }

    #[test]
    fn test_next_unlock_interpolation() {
        // Between the 50 (bubble) and 100 (blockbuster) thresholds.
        let next = next_unlock(75);
        let style = next.style.expect("catalog not exhausted at rep 75");
        assert_eq!(style.id, "blockbuster");
        assert_eq!(next.rep_needed, 25);
        assert!((next.progress_percent - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_next_unlock_at_threshold_boundary() {
        // Exactly at a threshold: that style is unlocked, progress toward
        // the following one restarts at 0%.
        let next = next_unlock(100);
        assert_eq!(next.style.unwrap().id, "throwie_shine");
        assert_eq!(next.rep_needed, 50);
        assert!((next.progress_percent - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_next_unlock_from_zero() {
        let next = next_unlock(0);
        assert_eq!(next.style.unwrap().id, "bubble");
        assert_eq!(next.rep_needed, 50);
        assert!((next.progress_percent - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_fully_unlocked_sentinel() {
        let next = next_unlock(750);
        assert!(next.style.is_none());
        assert_eq!(next.rep_needed, 0);
        assert!((next.progress_percent - 100.0).abs() < 0.001);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: unlocked set is a prefix-ordered subset under rep growth
            #[test]
            fn prop_unlocks_monotonic(rep in -100i64..2000, bump in 0i64..2000) {
                let lower = unlocked_styles(rep);
                let upper = unlocked_styles(rep + bump);
                prop_assert!(lower.len() <= upper.len());
            }

            /// Property: progress percent stays in [0, 100] and rep_needed is
            /// never negative
            #[test]
            fn prop_next_unlock_bounds(rep in -100i64..2000) {
                let next = next_unlock(rep);
                prop_assert!((0.0..=100.0).contains(&next.progress_percent));
                prop_assert!(next.rep_needed >= 0);
            }
        }
    }
}
