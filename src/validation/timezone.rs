//! IANA timezone resolution.
//!
//! Zone strings are resolved against the embedded chrono-tz database rather
//! than a hard-coded list, since the set of valid identifiers changes with
//! tzdata releases. Resolution constructs an instant at "now" in the candidate
//! zone, which is the point where a date-only request's offset interpretation
//! actually matters.

use chrono::Utc;
use chrono_tz::Tz;

/// Resolves a zone string to a [`Tz`] if it denotes a currently valid IANA
/// timezone.
///
/// Returns `None` for unknown identifiers (e.g. `"Mars/Phobos"`) and for
/// strings that name no zone at all.
pub fn resolve(zone: &str) -> Option<Tz> {
    let tz: Tz = zone.parse().ok()?;

    // Constructing "now" in the zone exercises the offset lookup; a zone that
    // cannot produce a current instant is not usable for date interpretation.
    let _ = Utc::now().with_timezone(&tz);

    Some(tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_zone() {
        assert_eq!(resolve("Europe/Berlin"), Some(chrono_tz::Europe::Berlin));
    }

    #[test]
    fn test_resolves_utc() {
        assert_eq!(resolve("UTC"), Some(chrono_tz::UTC));
    }

    #[test]
    fn test_rejects_fictional_zone() {
        assert_eq!(resolve("Mars/Phobos"), None);
    }

    #[test]
    fn test_rejects_empty_string() {
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_rejects_bare_offset() {
        assert_eq!(resolve("+02:00"), None);
    }
}
