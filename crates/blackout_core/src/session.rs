//! Caller-owned state snapshots.
//!
//! The engine never reads the host's database. On every relevant change the
//! host hands over a fresh [`SessionSnapshot`] (profile counters plus the
//! current GPS fix) or a [`MarkerEvent`] (one drop placement), and the engine
//! answers with derived values. Everything here is plain data passed by
//! value; there is nothing to lock.

use serde::{Deserialize, Serialize};

use crate::catalog::Crew;
use crate::geo::GeoPoint;

/// The ~9 drop categories the host app knows about.
///
/// The UI labels carry composite names ("Piece/Bombing", "Tag/Signature");
/// [`MarkerKind::parse_label`] folds those onto the engine vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Tag,
    ThrowUp,
    Stencil,
    PasteUp,
    Roller,
    Piece,
    Burner,
    Photo,
    Music,
}

impl MarkerKind {
    /// Map a host-supplied display label onto a kind. Unknown labels yield
    /// `None`; the reputation calculator treats those as a minimal award,
    /// never an error.
    pub fn parse_label(label: &str) -> Option<MarkerKind> {
        let label = label.to_ascii_lowercase();
        // Longer tokens first so "paste-up" is not swallowed by "tag".
        const TOKENS: [(&str, MarkerKind); 11] = [
            ("burner", MarkerKind::Burner),
            ("bombing", MarkerKind::Piece),
            ("piece", MarkerKind::Piece),
            ("throw-up", MarkerKind::ThrowUp),
            ("throwup", MarkerKind::ThrowUp),
            ("roller", MarkerKind::Roller),
            ("stencil", MarkerKind::Stencil),
            ("paste-up", MarkerKind::PasteUp),
            ("photo", MarkerKind::Photo),
            ("music", MarkerKind::Music),
            ("tag", MarkerKind::Tag),
        ];
        TOKENS
            .iter()
            .find(|(token, _)| label.contains(token))
            .map(|(_, kind)| *kind)
    }
}

/// One drop placement, constructed per event and consumed once by the
/// reputation calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerEvent {
    /// `None` when the host sent a label the engine does not recognize.
    pub kind: Option<MarkerKind>,
    /// Distance from the anchor point at placement time, if the host had a
    /// GPS fix. May be `NaN` for garbage coordinates; NaN never earns the
    /// proximity bonus.
    pub distance_from_anchor_m: Option<f64>,
}

impl MarkerEvent {
    pub fn new(kind: Option<MarkerKind>, distance_from_anchor_m: Option<f64>) -> Self {
        Self { kind, distance_from_anchor_m }
    }

    pub fn from_label(label: &str, distance_from_anchor_m: Option<f64>) -> Self {
        Self::new(MarkerKind::parse_label(label), distance_from_anchor_m)
    }
}

/// Point-in-time view of a user session, as observed by the mission watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionSnapshot {
    pub rep: i64,
    pub markers_placed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew: Option<Crew>,
    /// Current GPS fix, `None` while location is unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<GeoPoint>,
}

impl SessionSnapshot {
    pub fn new(rep: i64, markers_placed: u32) -> Self {
        Self { rep, markers_placed, crew: None, position: None }
    }

    pub fn with_crew(mut self, crew: Crew) -> Self {
        self.crew = Some(crew);
        self
    }

    pub fn with_position(mut self, position: GeoPoint) -> Self {
        self.position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_observed_labels() {
        assert_eq!(MarkerKind::parse_label("Piece/Bombing"), Some(MarkerKind::Piece));
        assert_eq!(MarkerKind::parse_label("Tag/Signature"), Some(MarkerKind::Tag));
        assert_eq!(MarkerKind::parse_label("Throw-Up/Roller"), Some(MarkerKind::ThrowUp));
        assert_eq!(MarkerKind::parse_label("Stencil/Paste-Up"), Some(MarkerKind::Stencil));
        assert_eq!(MarkerKind::parse_label("Burner"), Some(MarkerKind::Burner));
        assert_eq!(MarkerKind::parse_label("photo drop"), Some(MarkerKind::Photo));
        assert_eq!(MarkerKind::parse_label("music"), Some(MarkerKind::Music));
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(MarkerKind::parse_label("sticker"), None);
        assert_eq!(MarkerKind::parse_label(""), None);
    }

    #[test]
    fn test_paste_up_not_swallowed_by_tag() {
        // "Paste-Up/Tag" style composites must resolve by token priority,
        // not by whichever token happens to match first alphabetically.
        assert_eq!(MarkerKind::parse_label("Paste-Up"), Some(MarkerKind::PasteUp));
    }

    #[test]
    fn test_snapshot_builders() {
        let snap = SessionSnapshot::new(120, 4)
            .with_crew(Crew::Echo)
            .with_position(GeoPoint::new(52.52, 13.405));
        assert_eq!(snap.rep, 120);
        assert_eq!(snap.markers_placed, 4);
        assert_eq!(snap.crew, Some(Crew::Echo));
        assert!(snap.position.is_some());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snap = SessionSnapshot::new(50, 2);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["rep"], 50);
        assert_eq!(json["markers_placed"], 2);
        // Absent crew/position are omitted entirely, matching the host's
        // sparse Firebase documents.
        assert!(json.get("crew").is_none());
        assert!(json.get("position").is_none());
    }
}
