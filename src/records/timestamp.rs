use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Play dates in the export are naive wall-clock times in this layout
pub const PLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an export play date, treating it as UTC
pub fn parse_play_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), PLAY_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// ISO-8601 with an explicit offset, e.g. `2024-01-01T10:00:00+00:00`
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Serde adapter writing instants with [`format_instant`] and accepting any
/// RFC 3339 timestamp on the way back in.
pub mod iso_instant {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        instant: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_instant(instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_play_date() {
        let instant = parse_play_date("2024-01-01 10:00:00").unwrap();
        assert_eq!(format_instant(&instant), "2024-01-01T10:00:00+00:00");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_play_date("  2023-07-15 21:05:09\n").is_some());
    }

    #[test]
    fn test_rejects_other_layouts() {
        assert!(parse_play_date("").is_none());
        assert!(parse_play_date("2024-01-01").is_none());
        assert!(parse_play_date("01/02/2024 10:00:00").is_none());
        assert!(parse_play_date("2024-13-01 10:00:00").is_none());
    }

    #[test]
    fn test_iso_instant_accepts_zulu_suffix() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "iso_instant")]
            at: DateTime<Utc>,
        }

        let wrapped: Wrapper = serde_json::from_str(r#"{"at": "2024-03-05T08:30:00Z"}"#).unwrap();
        assert_eq!(format_instant(&wrapped.at), "2024-03-05T08:30:00+00:00");
    }
}
