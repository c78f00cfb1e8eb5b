//! JSON API for host integration.
//!
//! The host app (a JS/Firebase client) talks to the engine through stateless
//! request/response JSON: every call carries a `schema_version` and whatever
//! state the engine needs, and returns derived values plus updated state for
//! the caller to persist. Nothing is kept in module-level globals; session
//! state travels with the request.

pub mod mission_json;
pub mod progress_json;

pub use mission_json::{evaluate_session_json, EvaluateSessionRequest, EvaluateSessionResponse};
pub use progress_json::{
    award_marker_json, profile_json, AwardMarkerRequest, AwardMarkerResponse, ProfileRequest,
    ProfileResponse,
};

use crate::error::{EngineError, Result};

pub(crate) fn check_schema(found: u8) -> Result<()> {
    if found != crate::SCHEMA_VERSION {
        return Err(EngineError::SchemaVersionMismatch {
            found,
            expected: crate::SCHEMA_VERSION,
        });
    }
    Ok(())
}
