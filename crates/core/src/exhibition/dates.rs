use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::error::DateError;

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display language for dates and labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German, the language program dates are stored in.
    #[default]
    De,
    En,
}

impl Language {
    /// Returns the twelve month names in calendar order.
    pub fn month_names(&self) -> &'static [&'static str; 12] {
        match self {
            Language::De => &GERMAN_MONTHS,
            Language::En => &ENGLISH_MONTHS,
        }
    }

    /// Resolves a month name to its 1-based month number (case-insensitive).
    pub fn month_number(&self, name: &str) -> Option<u32> {
        let needle = name.to_lowercase();
        self.month_names()
            .iter()
            .position(|month| month.to_lowercase() == needle)
            .map(|index| index as u32 + 1)
    }

    /// Returns the localized name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let index = month.checked_sub(1)? as usize;
        self.month_names().get(index).copied()
    }

    /// Returns the language code ("de" or "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// Parses a German display date such as `"14. Dezember 2024"`.
pub fn parse_localized_date(text: &str) -> Result<NaiveDate, DateError> {
    parse_localized_date_in(text, Language::De)
}

/// Parses a display date of the form `"<day>. <MonthName> <year>"` in the given language.
///
/// Tokens are split on whitespace and periods, so `"9. November 2024"` and
/// `"09.November 2024"` are both accepted. Fails instead of guessing: a wrong
/// token count, an unknown month or an impossible day is an error.
pub fn parse_localized_date_in(text: &str, language: Language) -> Result<NaiveDate, DateError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|token| !token.is_empty())
        .collect();

    let [day, month, year] = tokens.as_slice() else {
        return Err(DateError::InvalidDateFormat(text.to_string()));
    };

    let month = language
        .month_number(month)
        .ok_or_else(|| DateError::UnknownMonth(month.to_string()))?;
    let day: u32 = day
        .parse()
        .map_err(|_| DateError::InvalidDateFormat(text.to_string()))?;
    let year: i32 = year
        .parse()
        .map_err(|_| DateError::InvalidDateFormat(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::InvalidDateFormat(text.to_string()))
}

/// Formats a canonical date for display, e.g. `"14. Dezember 2024"`.
pub fn format_localized_date(date: NaiveDate, language: Language) -> String {
    // month() is always 1..=12
    let month = language.month_name(date.month()).unwrap_or_default();
    format!("{}. {} {}", date.day(), month, date.year())
}

/// Formats an exhibition run. Single-day runs show only the start date.
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>, language: Language) -> String {
    match end {
        Some(end) if end != start => format!(
            "{} - {}",
            format_localized_date(start, language),
            format_localized_date(end, language)
        ),
        _ => format_localized_date(start, language),
    }
}

/// Parses a clock time in `HH:MM` or `HH:MM:SS` form.
pub fn parse_clock_time(text: &str) -> Result<NaiveTime, DateError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| DateError::InvalidTime(text.to_string()))
}

/// Parses a free-text timeframe such as `"17:00 - 19:00"` or `"22:00"`.
///
/// Returns the start time and, when present, the end time. The end may be
/// earlier than the start for events running past midnight.
pub fn parse_timeframe(text: &str) -> Result<(NaiveTime, Option<NaiveTime>), DateError> {
    let normalized = text.replace(['–', '—'], "-");
    match normalized.split_once('-') {
        Some((start, end)) => Ok((parse_clock_time(start)?, Some(parse_clock_time(end)?))),
        None => Ok((parse_clock_time(&normalized)?, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_parse_localized_date() {
        assert_eq!(
            parse_localized_date("14. Dezember 2024"),
            Ok(make_date(2024, 12, 14))
        );
        assert_eq!(
            parse_localized_date("25. Januar 2025"),
            Ok(make_date(2025, 1, 25))
        );
        assert_eq!(parse_localized_date("1. März 2025"), Ok(make_date(2025, 3, 1)));
    }

    #[test]
    fn test_parse_localized_date_accepts_padding_and_spacing() {
        let expected = make_date(2024, 11, 9);
        assert_eq!(parse_localized_date("09. November 2024"), Ok(expected));
        assert_eq!(parse_localized_date("9.November 2024"), Ok(expected));
        assert_eq!(parse_localized_date("  9.  november   2024 "), Ok(expected));
    }

    #[test]
    fn test_parse_localized_date_unknown_month() {
        assert_eq!(
            parse_localized_date("14. December 2024"),
            Err(DateError::UnknownMonth("December".to_string()))
        );
        assert_eq!(
            parse_localized_date("14.12.2024"),
            Err(DateError::UnknownMonth("12".to_string()))
        );
    }

    #[test]
    fn test_parse_localized_date_invalid_format() {
        for text in ["", "Dezember 2024", "14. Dezember", "14. Dezember 2024 20:00"] {
            assert_eq!(
                parse_localized_date(text),
                Err(DateError::InvalidDateFormat(text.to_string())),
                "{text:?} should be rejected"
            );
        }

        // Impossible calendar dates
        assert!(matches!(
            parse_localized_date("31. Februar 2024"),
            Err(DateError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            parse_localized_date("x. Mai 2024"),
            Err(DateError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_parse_localized_date_english() {
        assert_eq!(
            parse_localized_date_in("14. December 2024", Language::En),
            Ok(make_date(2024, 12, 14))
        );
    }

    #[test]
    fn test_format_localized_date() {
        let date = make_date(2024, 11, 9);
        assert_eq!(format_localized_date(date, Language::De), "9. November 2024");
        assert_eq!(
            format_localized_date(make_date(2025, 3, 1), Language::En),
            "1. March 2025"
        );
    }

    #[test]
    fn test_format_then_parse_every_month() {
        for month in 1..=12 {
            let date = make_date(2024, month, 28);
            let text = format_localized_date(date, Language::De);
            assert_eq!(parse_localized_date(&text), Ok(date));
        }
    }

    #[test]
    fn test_format_date_range() {
        let start = make_date(2024, 12, 1);
        let end = make_date(2024, 12, 3);

        assert_eq!(
            format_date_range(start, Some(end), Language::De),
            "1. Dezember 2024 - 3. Dezember 2024"
        );
        assert_eq!(
            format_date_range(start, Some(start), Language::De),
            "1. Dezember 2024"
        );
        assert_eq!(format_date_range(start, None, Language::De), "1. Dezember 2024");
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("18:00"), Ok(make_time(18, 0)));
        assert_eq!(parse_clock_time("09:30:00"), Ok(make_time(9, 30)));
        assert!(matches!(
            parse_clock_time("25:00"),
            Err(DateError::InvalidTime(_))
        ));
        assert!(matches!(parse_clock_time(""), Err(DateError::InvalidTime(_))));
    }

    #[test]
    fn test_parse_timeframe() {
        assert_eq!(
            parse_timeframe("17:00 - 19:00"),
            Ok((make_time(17, 0), Some(make_time(19, 0))))
        );
        assert_eq!(
            parse_timeframe("22:00 – 02:00"),
            Ok((make_time(22, 0), Some(make_time(2, 0))))
        );
        assert_eq!(parse_timeframe("20:00"), Ok((make_time(20, 0), None)));
        assert!(parse_timeframe("abends").is_err());
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("de".parse::<Language>(), Ok(Language::De));
        assert_eq!(" EN ".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::De);
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(Language::De.month_name(1), Some("Januar"));
        assert_eq!(Language::De.month_name(0), None);
        assert_eq!(Language::De.month_name(13), None);
    }
}
