//! Raw leaf-certificate data and expiry timestamp handling
//!
//! The fetcher hands over the peer certificate's "Not After" field in its
//! textual form (`Mon DD HH:MM:SS YYYY TZ`, e.g. `Jan  5 23:59:59 2026 GMT`)
//! together with the issuer organization. Parsing back into an absolute
//! instant happens in the evaluator, so a malformed field stays a per-host
//! error rather than a fetch failure.

use crate::utils::ExpiryParseError;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Raw fields extracted from a peer's leaf certificate
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateInfo {
    /// Expiry instant in textual `Mon DD HH:MM:SS YYYY TZ` form
    pub not_after: String,
    /// Organization attribute of the issuer DN, if present
    pub issuer_organization: Option<String>,
}

/// Parse a textual "Not After" field into an absolute instant.
///
/// A trailing timezone token (`GMT`, `UTC`) is accepted and the timestamp is
/// interpreted as UTC. Certificate notAfter fields are GMT per RFC 5280.
pub fn parse_not_after(raw: &str) -> Result<DateTime<Utc>, ExpiryParseError> {
    let trimmed = raw.trim();
    let datetime_part = match trimmed.rsplit_once(' ') {
        Some((rest, tz)) if !tz.is_empty() && tz.chars().all(|c| c.is_ascii_alphabetic()) => rest,
        _ => trimmed,
    };

    NaiveDateTime::parse_from_str(datetime_part, "%b %e %H:%M:%S %Y")
        .map(|dt| dt.and_utc())
        .map_err(|e| ExpiryParseError::Format {
            raw: raw.to_string(),
            message: e.to_string(),
        })
}

/// Render an instant in the textual form carried by [`CertificateInfo`]
pub fn format_not_after(expiry: &DateTime<Utc>) -> String {
    expiry.format("%b %e %H:%M:%S %Y GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_double_space_day() {
        let parsed = parse_not_after("Jan  5 23:59:59 2026 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 1, 5, 23, 59, 59).unwrap());
    }

    #[test]
    fn parses_two_digit_day() {
        let parsed = parse_not_after("Dec 31 00:00:00 2025 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_utc_suffix_and_surrounding_whitespace() {
        let parsed = parse_not_after("  Mar  9 12:30:00 2027 UTC ").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2027, 3, 9, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_without_timezone_token() {
        let parsed = parse_not_after("Jul 14 08:15:00 2026").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 7, 14, 8, 15, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_not_after("not a timestamp").is_err());
        assert!(parse_not_after("2026-01-05T23:59:59Z").is_err());
        assert!(parse_not_after("").is_err());
    }

    #[test]
    fn round_trips_through_text() {
        let expiry = Utc.with_ymd_and_hms(2026, 1, 5, 23, 59, 59).unwrap();
        assert_eq!(format_not_after(&expiry), "Jan  5 23:59:59 2026 GMT");
        assert_eq!(parse_not_after(&format_not_after(&expiry)).unwrap(), expiry);
    }
}
