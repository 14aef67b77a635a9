//! Serde helpers for records coming from the hosted database and the admin form.
//!
//! Optional columns arrive as `null`, as a missing key, or as an empty string
//! depending on which revision of the admin form wrote them. All three mean
//! "absent" here. Anything else must parse or the record is rejected.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

use crate::exhibition::{parse_clock_time, parse_localized_date};

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional string, treating blank strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer)
}

/// Deserialize an optional calendar date, treating blank strings as None.
///
/// Accepts the canonical `YYYY-MM-DD` form and, for rows written before the
/// canonical column existed, the German display form ("14. Dezember 2024").
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_blank(deserializer)? {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .or_else(|_| parse_localized_date(&s))
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Deserialize an optional clock time (`HH:MM` or `HH:MM:SS`), treating blank strings as None.
pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_blank(deserializer)? {
        Some(s) => parse_clock_time(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        subtitle: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        end_date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "deserialize_optional_time")]
        start_time: Option<NaiveTime>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_absent_values_become_none() {
        let expected = Row {
            subtitle: None,
            end_date: None,
            start_time: None,
        };

        assert_eq!(row(r#"{}"#), expected);
        assert_eq!(
            row(r#"{"subtitle": null, "end_date": null, "start_time": null}"#),
            expected
        );
        assert_eq!(
            row(r#"{"subtitle": "  ", "end_date": "", "start_time": ""}"#),
            expected
        );
    }

    #[test]
    fn test_string_value_kept() {
        assert_eq!(
            row(r#"{"subtitle": "Fotografie"}"#).subtitle,
            Some("Fotografie".to_string())
        );
    }

    #[test]
    fn test_date_accepts_canonical_and_display_forms() {
        let expected = Some(NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());

        assert_eq!(row(r#"{"end_date": "2024-12-15"}"#).end_date, expected);
        assert_eq!(row(r#"{"end_date": "15. Dezember 2024"}"#).end_date, expected);
    }

    #[test]
    fn test_date_rejects_garbage() {
        let result: Result<Row, _> = serde_json::from_str(r#"{"end_date": "bald"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_time_forms() {
        assert_eq!(
            row(r#"{"start_time": "18:00"}"#).start_time,
            Some(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
        );
        assert_eq!(
            row(r#"{"start_time": "18:00:30"}"#).start_time,
            Some(NaiveTime::from_hms_opt(18, 0, 30).unwrap())
        );

        let result: Result<Row, _> = serde_json::from_str(r#"{"start_time": "abends"}"#);
        assert!(result.is_err());
    }
}
