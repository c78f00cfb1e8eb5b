//! Starter color partition.
//!
//! Each crew brings two signature colors; solo users (no crew, or an id the
//! engine does not recognize) fall back to the neutral pair, grey first.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::crews::Crew;

/// An immutable color entry. `crew == None` marks a solo color.
#[derive(Debug, Clone, Serialize)]
pub struct ColorDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
    pub crew: Option<Crew>,
}

const COLOR_CATALOG: [ColorDefinition; 10] = [
    ColorDefinition { id: "electric_blue", name: "Electric Blue", hex: "#00BFFF", crew: Some(Crew::Volt) },
    ColorDefinition { id: "acid_yellow", name: "Acid Yellow", hex: "#CCFF00", crew: Some(Crew::Volt) },
    ColorDefinition { id: "ember_red", name: "Ember Red", hex: "#D7263D", crew: Some(Crew::Cinder) },
    ColorDefinition { id: "ash_orange", name: "Ash Orange", hex: "#F46036", crew: Some(Crew::Cinder) },
    ColorDefinition { id: "signal_green", name: "Signal Green", hex: "#2ECC71", crew: Some(Crew::Echo) },
    ColorDefinition { id: "static_teal", name: "Static Teal", hex: "#1ABC9C", crew: Some(Crew::Echo) },
    ColorDefinition { id: "violet_haze", name: "Violet Haze", hex: "#8E44AD", crew: Some(Crew::Drift) },
    ColorDefinition { id: "rose_smoke", name: "Rose Smoke", hex: "#E84393", crew: Some(Crew::Drift) },
    ColorDefinition { id: "grey", name: "Grey", hex: "#9E9E9E", crew: None },
    ColorDefinition { id: "white", name: "White", hex: "#FFFFFF", crew: None },
];

static COLORS_BY_CREW: Lazy<HashMap<Option<Crew>, Vec<&'static ColorDefinition>>> =
    Lazy::new(|| {
        let mut map: HashMap<Option<Crew>, Vec<&'static ColorDefinition>> = HashMap::new();
        for color in COLOR_CATALOG.iter() {
            map.entry(color.crew).or_default().push(color);
        }
        map
    });

/// Starter colors for a user. Crew members get their crew pair; solo and
/// unknown users get the neutral pair (grey, white).
pub fn starter_colors(crew: Option<Crew>) -> &'static [&'static ColorDefinition] {
    COLORS_BY_CREW
        .get(&crew)
        .map(Vec::as_slice)
        .unwrap_or_else(|| COLORS_BY_CREW[&None].as_slice())
}
