//! Scenario tests driving the full engine the way the host app does:
//! per-marker awards feeding snapshots feeding the watcher.

use super::*;
use crate::geo::GeoPoint;
use crate::mission::catalog::YARD_ANCHOR;
use crate::progression::{award_for, rank_for, Rank};
use crate::session::{MarkerEvent, SessionSnapshot};

fn watcher_with_builtins() -> MissionWatcher {
    let mut watcher = MissionWatcher::new();
    for mission in builtin_missions() {
        watcher.register(mission);
    }
    watcher
}

#[test]
fn test_three_proximate_markers_scenario() {
    // Three drops within 50 m of the anchor, distinct supported kinds.
    let events = [
        MarkerEvent::from_label("Tag/Signature", Some(20.0)),
        MarkerEvent::from_label("Throw-Up/Roller", Some(35.0)),
        MarkerEvent::from_label("Piece/Bombing", Some(10.0)),
    ];

    let per_marker: Vec<i32> = events.iter().map(award_for).collect();
    assert_eq!(per_marker, [20, 25, 30]);

    let mut watcher = watcher_with_builtins();
    let mut rep: i64 = 0;
    let mut fired_log: Vec<String> = Vec::new();

    for (i, award) in per_marker.iter().enumerate() {
        rep += i64::from(*award);
        let snapshot = SessionSnapshot::new(rep, i as u32 + 1);
        for event in watcher.observe(&snapshot) {
            fired_log.push(event.mission_id);
        }
    }

    // Final REP is the sum of individually computed awards.
    assert_eq!(rep, 75);

    // place_3_markers fired exactly once, on the third evaluation.
    assert_eq!(fired_log.iter().filter(|id| *id == "place_3_markers").count(), 1);
    // first_drop on the first marker, local_name once rep crossed 50.
    assert_eq!(fired_log[0], "first_drop");
    assert!(fired_log.contains(&"local_name".to_string()));
    // Not enough markers for the blackout beat yet.
    assert!(!fired_log.contains(&"blackout_first_signal".to_string()));
}

#[test]
fn test_exploration_geofence_transition() {
    let mut watcher = watcher_with_builtins();

    // Approaching from ~1.3 km out; outside the default 100 m radius.
    let outside = SessionSnapshot::new(0, 0)
        .with_position(GeoPoint::new(YARD_ANCHOR.lat + 0.012, YARD_ANCHOR.lon));
    assert!(watcher.observe(&outside).is_empty());
    assert_eq!(watcher.get_mission("the_yard").unwrap().status, MissionStatus::Active);

    // First fix inside the radius completes the mission.
    let inside = SessionSnapshot::new(0, 0)
        .with_position(GeoPoint::new(YARD_ANCHOR.lat + 0.0005, YARD_ANCHOR.lon));
    let fired = watcher.observe(&inside);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].mission_id, "the_yard");
    assert!(watcher.get_mission("the_yard").unwrap().is_completed());

    // Walking back out and in again does not re-fire.
    assert!(watcher.observe(&outside).is_empty());
    assert!(watcher.observe(&inside).is_empty());
}

#[test]
fn test_blackout_cascades_trust_to_all_crews() {
    let mut watcher = watcher_with_builtins();
    watcher.set_current_time(1_700_000_000);

    // Build up past both marker thresholds in one session.
    watcher.observe(&SessionSnapshot::new(40, 3));
    let fired = watcher.observe(&SessionSnapshot::new(80, 5));

    let blackout = fired
        .iter()
        .find(|f| f.mission_id == "blackout_first_signal")
        .expect("blackout beat should fire at 5 markers");
    assert_eq!(blackout.timestamp, 1_700_000_000);
    assert_eq!(blackout.payload["beat"], "blackout");

    // All four crews get the fixed cascade, active storyline or not.
    let deltas: Vec<i32> = blackout.trust_deltas.iter().map(|d| d.delta).collect();
    assert_eq!(deltas, [5, 2, 3, 2]);
}

#[test]
fn test_milestone_missions_follow_rank_derivation() {
    let mut watcher = watcher_with_builtins();

    let fired = watcher.observe(&SessionSnapshot::new(120, 0));
    let ids: Vec<&str> = fired.iter().map(|f| f.mission_id.as_str()).collect();

    assert_eq!(rank_for(120), Rank::Vandal);
    assert!(ids.contains(&"local_name"));
    assert!(ids.contains(&"made_vandal"));
    assert!(!ids.contains(&"first_drop"));
}

#[test]
fn test_no_gps_session_still_progresses() {
    // A user who never grants location: geofence and proximity stay inert,
    // counter-based missions fire normally.
    let mut watcher = watcher_with_builtins();

    let fired = watcher.observe(&SessionSnapshot::new(200, 6));
    let ids: Vec<&str> = fired.iter().map(|f| f.mission_id.as_str()).collect();

    assert!(ids.contains(&"blackout_first_signal"));
    assert!(!ids.contains(&"the_yard"));
}
