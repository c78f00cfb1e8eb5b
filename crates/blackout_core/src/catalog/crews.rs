//! Crew identities and the trust cascade table.

use serde::{Deserialize, Serialize};

/// One of the four thematic factions a user may join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crew {
    /// Night-grid taggers, transformer yards and substations.
    Volt,
    /// Burners and heat pieces, industrial south side.
    Cinder,
    /// Sound drops and radio dead zones.
    Echo,
    /// Riverside rollers, freight lines.
    Drift,
}

impl Crew {
    pub const ALL: [Crew; 4] = [Crew::Volt, Crew::Cinder, Crew::Echo, Crew::Drift];

    /// Stable string id used by the host app's profile documents.
    pub fn id(&self) -> &'static str {
        match self {
            Crew::Volt => "volt",
            Crew::Cinder => "cinder",
            Crew::Echo => "echo",
            Crew::Drift => "drift",
        }
    }

    /// Parse a host-supplied crew id. Unknown or empty ids yield `None`,
    /// which downstream lookups treat as a solo user.
    pub fn from_id(id: &str) -> Option<Crew> {
        match id.to_ascii_lowercase().as_str() {
            "volt" => Some(Crew::Volt),
            "cinder" => Some(Crew::Cinder),
            "echo" => Some(Crew::Echo),
            "drift" => Some(Crew::Drift),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Crew::Volt => "VOLT",
            Crew::Cinder => "CINDER",
            Crew::Echo => "ECHO",
            Crew::Drift => "DRIFT",
        }
    }
}

/// A trust adjustment reported back to the caller after a blackout event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewTrustDelta {
    pub crew: Crew,
    pub delta: i32,
}

/// Fixed trust deltas applied whenever a blackout (disappearance) mission
/// fires. All four crews receive a boost regardless of which storyline is
/// active; the source behaves this way and the quirk is preserved as data.
pub fn trust_cascade() -> &'static [CrewTrustDelta] {
    const CASCADE: [CrewTrustDelta; 4] = [
        CrewTrustDelta { crew: Crew::Volt, delta: 5 },
        CrewTrustDelta { crew: Crew::Cinder, delta: 2 },
        CrewTrustDelta { crew: Crew::Echo, delta: 3 },
        CrewTrustDelta { crew: Crew::Drift, delta: 2 },
    ];
    &CASCADE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_id_round_trip() {
        for crew in Crew::ALL {
            assert_eq!(Crew::from_id(crew.id()), Some(crew));
        }
    }

    #[test]
    fn test_unknown_crew_is_solo() {
        assert_eq!(Crew::from_id(""), None);
        assert_eq!(Crew::from_id("kings"), None);
    }

    #[test]
    fn test_from_id_case_insensitive() {
        assert_eq!(Crew::from_id("VOLT"), Some(Crew::Volt));
        assert_eq!(Crew::from_id("Drift"), Some(Crew::Drift));
    }

    #[test]
    fn test_cascade_covers_every_crew_once() {
        let cascade = trust_cascade();
        assert_eq!(cascade.len(), 4);
        for crew in Crew::ALL {
            assert_eq!(cascade.iter().filter(|d| d.crew == crew).count(), 1);
        }
        // Fixed table from the source: +5/+2/+3/+2.
        assert_eq!(cascade.iter().map(|d| d.delta).sum::<i32>(), 12);
    }
}
