//! Graffiti style catalog.
//!
//! Ten styles with strictly increasing REP thresholds from 0 to 750. The
//! table is declared in unlock order and re-sorted once at first use, so a
//! future entry added out of place cannot break the ledger's monotonicity.
//! Equal thresholds (none exist today) would keep declaration order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
    /// Quick one-liner signatures.
    Handstyle,
    /// Filled letterforms: bubbles, blocks, chrome.
    Fill,
    /// Multi-color productions and large-format work.
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// An immutable catalog entry. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct StyleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: StyleCategory,
    pub rep_required: i64,
    pub rarity: Rarity,
    /// Optional render-effect tag consumed by the map layer.
    pub effect: Option<&'static str>,
}

static STYLE_CATALOG: Lazy<Vec<StyleDefinition>> = Lazy::new(|| {
    use StyleCategory::*;

    let mut catalog = vec![
        StyleDefinition {
            id: "basic_tag",
            name: "Basic Marker",
            category: Handstyle,
            rep_required: 0,
            rarity: Rarity::Common,
            effect: None,
        },
        StyleDefinition {
            id: "bubble",
            name: "Bubble Letters",
            category: Fill,
            rep_required: 50,
            rarity: Rarity::Common,
            effect: None,
        },
        StyleDefinition {
            id: "blockbuster",
            name: "Blockbuster",
            category: Fill,
            rep_required: 100,
            rarity: Rarity::Uncommon,
            effect: None,
        },
        StyleDefinition {
            id: "throwie_shine",
            name: "Throwie Shine",
            category: Fill,
            rep_required: 150,
            rarity: Rarity::Uncommon,
            effect: Some("shine"),
        },
        StyleDefinition {
            id: "stencil_cut",
            name: "Stencil Cut",
            category: Production,
            rep_required: 250,
            rarity: Rarity::Uncommon,
            effect: None,
        },
        StyleDefinition {
            id: "chrome",
            name: "Chrome",
            category: Fill,
            rep_required: 350,
            rarity: Rarity::Rare,
            effect: Some("metallic"),
        },
        StyleDefinition {
            id: "heaven_spot",
            name: "Heaven Spot",
            category: Production,
            rep_required: 450,
            rarity: Rarity::Rare,
            effect: None,
        },
        StyleDefinition {
            id: "wildstyle",
            name: "Wildstyle",
            category: Production,
            rep_required: 550,
            rarity: Rarity::Rare,
            effect: None,
        },
        StyleDefinition {
            id: "neon_glow",
            name: "Neon Glow",
            category: Fill,
            rep_required: 650,
            rarity: Rarity::Legendary,
            effect: Some("glow"),
        },
        StyleDefinition {
            id: "gold_leaf",
            name: "Gold Leaf",
            category: Production,
            rep_required: 750,
            rarity: Rarity::Legendary,
            effect: Some("shimmer"),
        },
    ];

    // Stable sort: entries sharing a threshold keep declaration order.
    catalog.sort_by_key(|style| style.rep_required);
    catalog
});

/// The full style catalog, ascending by REP requirement.
pub fn style_catalog() -> &'static [StyleDefinition] {
    &STYLE_CATALOG
}
