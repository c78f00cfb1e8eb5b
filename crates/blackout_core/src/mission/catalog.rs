//! Built-in mission catalog.
//!
//! The scripted beats of the base narrative, in the order the watcher should
//! consider them. Hosts may register additional missions on top.

use serde_json::json;

use crate::catalog::trust_cascade;
use crate::geo::GeoPoint;
use crate::progression::Rank;

use super::types::{near, MissionKind, MissionTrigger, TriggerCondition};

/// The rail-yard anchor used by the base exploration objective.
pub const YARD_ANCHOR: GeoPoint = GeoPoint { lat: 52.5065, lon: 13.4422 };

/// Base missions in registration order.
pub fn builtin_missions() -> Vec<MissionTrigger> {
    vec![
        MissionTrigger::new("first_drop", "First Drop", MissionKind::Intro)
            .with_description("Put your first mark on the map.")
            .with_condition(TriggerCondition::MarkersPlaced(1))
            .with_payload(json!({ "beat": "intro" })),
        MissionTrigger::new("place_3_markers", "Getting Up", MissionKind::Intro)
            .with_description("Three drops on the map. People start noticing.")
            .with_condition(TriggerCondition::MarkersPlaced(3))
            .with_payload(json!({ "beat": "intro" })),
        MissionTrigger::new("local_name", "Local Name", MissionKind::Milestone)
            .with_description("Reach 50 REP.")
            .with_condition(TriggerCondition::RepAtLeast(50)),
        MissionTrigger::new("made_vandal", "Made Vandal", MissionKind::Milestone)
            .with_description("Earn the Vandal rank.")
            .with_condition(TriggerCondition::RankAtLeast(Rank::Vandal)),
        MissionTrigger::new("the_yard", "The Yard", MissionKind::Exploration)
            .with_description("Find the old rail yard.")
            .with_condition(near(YARD_ANCHOR, None))
            .with_payload(json!({ "beat": "exploration", "site": "rail_yard" })),
        MissionTrigger::new("blackout_first_signal", "First Signal", MissionKind::Blackout)
            .with_description("Five drops up and someone goes quiet.")
            .with_condition(TriggerCondition::All(vec![
                TriggerCondition::MarkersPlaced(5),
                TriggerCondition::MissionCompleted("place_3_markers".to_string()),
            ]))
            .with_trust_rewards(trust_cascade())
            .with_payload(json!({ "beat": "blackout", "chapter": 1 })),
    ]
}
