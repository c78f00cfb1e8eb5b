//! Progression JSON API: per-marker awards and profile derivation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{starter_colors, Crew};
use crate::error::Result;
use crate::progression::{award_for, level_for, next_unlock, rank_for, unlocked_styles};
use crate::session::MarkerEvent;

use super::check_schema;

/// One placed drop, as the host reports it.
#[derive(Debug, Deserialize)]
pub struct AwardMarkerRequest {
    pub schema_version: u8,
    /// Display label, e.g. "Piece/Bombing". Unrecognized labels are fine.
    pub marker_type: String,
    pub distance_from_anchor_m: Option<f64>,
    pub current_rep: i64,
}

#[derive(Debug, Serialize)]
pub struct AwardMarkerResponse {
    pub schema_version: u8,
    pub rep_delta: i32,
    pub new_rep: i64,
    pub rank: String,
    pub level: u32,
    /// Style ids that this award pushed over their threshold.
    pub newly_unlocked_styles: Vec<String>,
    pub next_unlock: NextUnlockJson,
}

#[derive(Debug, Serialize)]
pub struct NextUnlockJson {
    pub style_id: Option<String>,
    pub style_name: Option<String>,
    pub progress_percent: f32,
    pub rep_needed: i64,
}

fn next_unlock_json(rep: i64) -> NextUnlockJson {
    let next = next_unlock(rep);
    NextUnlockJson {
        style_id: next.style.map(|s| s.id.to_string()),
        style_name: next.style.map(|s| s.name.to_string()),
        progress_percent: next.progress_percent,
        rep_needed: next.rep_needed,
    }
}

/// Compute the REP award for one drop and the resulting derived profile
/// fields. The caller persists `new_rep`; the engine stores nothing.
pub fn award_marker_json(request_json: &str) -> Result<String> {
    let request: AwardMarkerRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let event = MarkerEvent::from_label(&request.marker_type, request.distance_from_anchor_m);
    let delta = award_for(&event);
    let new_rep = request.current_rep.max(0) + i64::from(delta);

    let before: Vec<&str> = unlocked_styles(request.current_rep).iter().map(|s| s.id).collect();
    let newly_unlocked: Vec<String> = unlocked_styles(new_rep)
        .iter()
        .filter(|s| !before.contains(&s.id))
        .map(|s| s.id.to_string())
        .collect();

    debug!(marker_type = %request.marker_type, delta, new_rep, "marker award computed");

    let response = AwardMarkerResponse {
        schema_version: crate::SCHEMA_VERSION,
        rep_delta: delta,
        new_rep,
        rank: rank_for(new_rep).display_name().to_string(),
        level: level_for(new_rep),
        newly_unlocked_styles: newly_unlocked,
        next_unlock: next_unlock_json(new_rep),
    };

    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub schema_version: u8,
    pub rep: i64,
    /// Crew id from the profile document; unknown ids mean solo.
    pub crew: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub schema_version: u8,
    pub rank: String,
    pub level: u32,
    pub unlocked_styles: Vec<StyleJson>,
    pub starter_colors: Vec<ColorJson>,
    pub next_unlock: NextUnlockJson,
}

#[derive(Debug, Serialize)]
pub struct StyleJson {
    pub id: String,
    pub name: String,
    pub rep_required: i64,
    pub effect: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ColorJson {
    pub id: String,
    pub name: String,
    pub hex: String,
}

/// Derive the full display profile for a rep total and crew id.
pub fn profile_json(request_json: &str) -> Result<String> {
    let request: ProfileRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let crew = request.crew.as_deref().and_then(Crew::from_id);

    let response = ProfileResponse {
        schema_version: crate::SCHEMA_VERSION,
        rank: rank_for(request.rep).display_name().to_string(),
        level: level_for(request.rep),
        unlocked_styles: unlocked_styles(request.rep)
            .iter()
            .map(|s| StyleJson {
                id: s.id.to_string(),
                name: s.name.to_string(),
                rep_required: s.rep_required,
                effect: s.effect.map(str::to_string),
            })
            .collect(),
        starter_colors: starter_colors(crew)
            .iter()
            .map(|c| ColorJson {
                id: c.id.to_string(),
                name: c.name.to_string(),
                hex: c.hex.to_string(),
            })
            .collect(),
        next_unlock: next_unlock_json(request.rep),
    };

    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_award_marker_round_trip() {
        let request = json!({
            "schema_version": 1,
            "marker_type": "Piece/Bombing",
            "distance_from_anchor_m": 30.0,
            "current_rep": 80
        });

        let response = award_marker_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["rep_delta"], 30);
        assert_eq!(parsed["new_rep"], 110);
        assert_eq!(parsed["rank"], "VANDAL");
        assert_eq!(parsed["level"], 2);
        // 80 -> 110 crosses the 100 threshold.
        assert_eq!(parsed["newly_unlocked_styles"], json!(["blockbuster"]));
    }

    #[test]
    fn test_award_marker_unknown_label_still_succeeds() {
        let request = json!({
            "schema_version": 1,
            "marker_type": "hologram",
            "distance_from_anchor_m": null,
            "current_rep": 0
        });

        let parsed: serde_json::Value =
            serde_json::from_str(&award_marker_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(parsed["rep_delta"], 13);
    }

    #[test]
    fn test_award_marker_schema_mismatch() {
        let request = json!({
            "schema_version": 9,
            "marker_type": "Tag/Signature",
            "distance_from_anchor_m": null,
            "current_rep": 0
        });
        assert!(award_marker_json(&request.to_string()).is_err());
    }

    #[test]
    fn test_profile_with_crew_colors() {
        let request = json!({ "schema_version": 1, "rep": 160, "crew": "echo" });
        let parsed: serde_json::Value =
            serde_json::from_str(&profile_json(&request.to_string()).unwrap()).unwrap();

        assert_eq!(parsed["rank"], "VANDAL");
        assert_eq!(parsed["level"], 2);
        assert_eq!(parsed["unlocked_styles"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["starter_colors"][0]["id"], "signal_green");
        assert_eq!(parsed["next_unlock"]["style_id"], "stencil_cut");
    }

    #[test]
    fn test_profile_unknown_crew_falls_back_to_grey() {
        let request = json!({ "schema_version": 1, "rep": 0, "crew": "nobody" });
        let parsed: serde_json::Value =
            serde_json::from_str(&profile_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(parsed["starter_colors"][0]["id"], "grey");
    }
}
