//! Mission watcher JSON API.
//!
//! The watcher state rides along with every request and comes back updated
//! in the response. The caller owns persistence (it already stores completed
//! mission ids in its own database); the engine never holds a session in a
//! global between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Crew;
use crate::error::Result;
use crate::geo::GeoPoint;
use crate::mission::{builtin_missions, MissionFired, MissionWatcher, MissionWatcherState};
use crate::session::SessionSnapshot;

use super::check_schema;

/// Snapshot as the host sends it: sparse fields, `[lat, lng]` position.
#[derive(Debug, Deserialize)]
pub struct SnapshotJson {
    pub rep: i64,
    pub markers_placed: u32,
    #[serde(default)]
    pub crew: Option<String>,
    #[serde(default)]
    pub position: Option<[f64; 2]>,
}

impl SnapshotJson {
    fn into_snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            rep: self.rep,
            markers_placed: self.markers_placed,
            crew: self.crew.as_deref().and_then(Crew::from_id),
            position: self.position.map(GeoPoint::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EvaluateSessionRequest {
    pub schema_version: u8,
    pub snapshot: SnapshotJson,
    /// State returned by the previous call; omit to start a fresh session
    /// against the built-in mission catalog.
    #[serde(default)]
    pub watcher_state: Option<MissionWatcherState>,
    /// Session clock used to timestamp fired events; wall-clock seconds
    /// when omitted.
    #[serde(default)]
    pub now: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateSessionResponse {
    pub schema_version: u8,
    pub fired: Vec<MissionFired>,
    /// Pass back on the next call.
    pub watcher_state: MissionWatcherState,
}

/// Evaluate one snapshot against the session's mission set.
pub fn evaluate_session_json(request_json: &str) -> Result<String> {
    let request: EvaluateSessionRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let now = request
        .now
        .unwrap_or_else(|| chrono::Utc::now().timestamp().max(0) as u64);

    let mut watcher = match request.watcher_state {
        Some(state) => MissionWatcher::from_state(state, now),
        None => {
            let mut fresh = MissionWatcher::new();
            for mission in builtin_missions() {
                fresh.register(mission);
            }
            fresh.set_current_time(now);
            fresh
        }
    };

    let snapshot = request.snapshot.into_snapshot();
    let fired = watcher.observe(&snapshot);
    debug!(fired = fired.len(), "session snapshot evaluated");

    let response = EvaluateSessionResponse {
        schema_version: crate::SCHEMA_VERSION,
        fired,
        watcher_state: watcher.get_state().clone(),
    };

    Ok(serde_json::to_string(&response)?)
}
