use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::parse_localized_date;
use super::error::DateError;
use super::types::{ProgramByDate, ProgramEntry};

/// Label of the group collecting entries without a date.
pub const UNKNOWN_DAY_LABEL: &str = "Unbekannt";

/// What to do with program entries that have no date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndatedPolicy {
    /// Leave them out of the schedule.
    #[default]
    Drop,
    /// Show them in a trailing "Unbekannt" group.
    Collect,
}

impl fmt::Display for UndatedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndatedPolicy::Drop => f.write_str("drop"),
            UndatedPolicy::Collect => f.write_str("collect"),
        }
    }
}

impl FromStr for UndatedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop" => Ok(UndatedPolicy::Drop),
            "collect" => Ok(UndatedPolicy::Collect),
            other => Err(format!("unknown undated policy: {other}")),
        }
    }
}

/// Orders entries by start time; entries without a start time go last.
pub fn compare_by_start_time(a: &ProgramEntry, b: &ProgramEntry) -> Ordering {
    match (a.start_time, b.start_time) {
        (Some(a_time), Some(b_time)) => a_time.cmp(&b_time),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts entries by start time in place. The sort is stable, so entries
/// sharing a start time keep their input order.
pub fn sort_entries_by_start_time(entries: &mut [ProgramEntry]) {
    entries.sort_by(compare_by_start_time);
}

/// Groups program entries into a day-by-day itinerary.
///
/// Days are keyed by parsed calendar date, so different renderings of the
/// same day ("9. November 2024", "09. November 2024") share a group whose
/// label is the first rendering seen. Groups are in ascending date order and
/// events within a group are ordered by start time. The first unparseable
/// date aborts grouping with its error. Entries without a date are handled
/// according to `undated`.
pub fn group_program_by_date(
    entries: &[ProgramEntry],
    undated: UndatedPolicy,
) -> Result<Vec<ProgramByDate>, DateError> {
    let mut days: BTreeMap<NaiveDate, ProgramByDate> = BTreeMap::new();
    let mut unknown: Vec<ProgramEntry> = Vec::new();

    for entry in entries {
        let Some(label) = entry.display_date() else {
            if undated == UndatedPolicy::Collect {
                unknown.push(entry.clone());
            }
            continue;
        };

        let day = parse_localized_date(label)?;
        days.entry(day)
            .or_insert_with(|| ProgramByDate {
                date: label.to_string(),
                day: Some(day),
                events: Vec::new(),
            })
            .events
            .push(entry.clone());
    }

    let mut groups: Vec<ProgramByDate> = days.into_values().collect();

    if !unknown.is_empty() {
        groups.push(ProgramByDate {
            date: UNKNOWN_DAY_LABEL.to_string(),
            day: None,
            events: unknown,
        });
    }

    for group in &mut groups {
        sort_entries_by_start_time(&mut group.events);
    }

    Ok(groups)
}

/// Flattens an itinerary back into a list of entries, day by day.
pub fn flatten_program(groups: &[ProgramByDate]) -> Vec<ProgramEntry> {
    groups
        .iter()
        .flat_map(|group| group.events.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn event(title: &str, date: &str, start: Option<(u32, u32)>) -> ProgramEntry {
        let entry = ProgramEntry::new(title, date);
        match start {
            Some((hour, min)) => entry.starting_at(make_time(hour, min)),
            None => entry,
        }
    }

    fn titles(group: &ProgramByDate) -> Vec<&str> {
        group.events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_group_opening_weekend() {
        let entries = vec![
            event("Opening", "14. Dezember 2024", Some((20, 0))),
            event("Doors", "14. Dezember 2024", Some((18, 0))),
            event("Brunch", "15. Dezember 2024", Some((10, 0))),
        ];

        let groups = group_program_by_date(&entries, UndatedPolicy::Drop).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "14. Dezember 2024");
        assert_eq!(groups[0].day, Some(make_date(2024, 12, 14)));
        assert_eq!(titles(&groups[0]), vec!["Doors", "Opening"]);
        assert_eq!(groups[1].date, "15. Dezember 2024");
        assert_eq!(titles(&groups[1]), vec!["Brunch"]);
    }

    #[test]
    fn test_groups_sorted_by_calendar_date_not_text() {
        // Lexically "10. April" < "2. April" and "Dezember" < "Januar"
        let entries = vec![
            event("C", "10. April 2025", None),
            event("B", "2. April 2025", None),
            event("D", "5. Januar 2026", None),
            event("A", "31. Dezember 2024", None),
        ];

        let groups = group_program_by_date(&entries, UndatedPolicy::Drop).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "31. Dezember 2024",
                "2. April 2025",
                "10. April 2025",
                "5. Januar 2026"
            ]
        );
    }

    #[test]
    fn test_same_day_different_renderings_share_a_group() {
        let entries = vec![
            event("Talk", "9. November 2024", Some((19, 0))),
            event("Drinks", "09. November 2024", Some((17, 0))),
        ];

        let groups = group_program_by_date(&entries, UndatedPolicy::Drop).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, "9. November 2024");
        assert_eq!(titles(&groups[0]), vec!["Drinks", "Talk"]);
    }

    #[test]
    fn test_untimed_events_sort_last_and_ties_keep_input_order() {
        let entries = vec![
            event("Open end", "14. Dezember 2024", None),
            event("Second at 19", "14. Dezember 2024", Some((19, 0))),
            event("Early", "14. Dezember 2024", Some((17, 0))),
            event("Also untimed", "14. Dezember 2024", None),
            event("Third at 19", "14. Dezember 2024", Some((19, 0))),
        ];

        let groups = group_program_by_date(&entries, UndatedPolicy::Drop).unwrap();

        assert_eq!(
            titles(&groups[0]),
            vec![
                "Early",
                "Second at 19",
                "Third at 19",
                "Open end",
                "Also untimed"
            ]
        );
    }

    #[test]
    fn test_undated_entries_dropped_by_default() {
        let entries = vec![
            ProgramEntry::undated("Mystery guest"),
            event("Brunch", "15. Dezember 2024", Some((10, 0))),
            event("Blank", "   ", None),
        ];

        let groups = group_program_by_date(&entries, UndatedPolicy::default()).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(titles(&groups[0]), vec!["Brunch"]);
    }

    #[test]
    fn test_undated_entries_collected_last() {
        let entries = vec![
            ProgramEntry::undated("Mystery guest").starting_at(make_time(21, 0)),
            event("Brunch", "15. Dezember 2024", Some((10, 0))),
            ProgramEntry::undated("Raffle").starting_at(make_time(20, 0)),
        ];

        let groups = group_program_by_date(&entries, UndatedPolicy::Collect).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].date, UNKNOWN_DAY_LABEL);
        assert_eq!(groups[1].day, None);
        assert_eq!(titles(&groups[1]), vec!["Raffle", "Mystery guest"]);
    }

    #[test]
    fn test_invalid_date_fails_instead_of_defaulting() {
        let entries = vec![
            event("Brunch", "15. Dezember 2024", Some((10, 0))),
            event("Typo", "16. Dezmber 2024", Some((10, 0))),
        ];

        assert_eq!(
            group_program_by_date(&entries, UndatedPolicy::Drop),
            Err(DateError::UnknownMonth("Dezmber".to_string()))
        );
    }

    #[test]
    fn test_empty_program() {
        assert!(group_program_by_date(&[], UndatedPolicy::Collect)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_descriptions_survive_grouping() {
        let entries = vec![event("Lesung", "14. Dezember 2024", Some((19, 0)))
            .with_description("Teil eins\nTeil zwei")];
        let before = entries.clone();

        let groups = group_program_by_date(&entries, UndatedPolicy::Drop).unwrap();

        assert_eq!(entries, before);
        assert_eq!(groups[0].events[0].paragraphs(), vec!["Teil eins", "Teil zwei"]);
    }

    #[test]
    fn test_regrouping_flattened_output_is_stable() {
        let entries = vec![
            event("D", "3. März 2025", None),
            event("A", "1. März 2025", Some((12, 0))),
            ProgramEntry::undated("X"),
            event("B", "1. März 2025", Some((9, 0))),
            event("C", "2. März 2025", Some((9, 0))),
            event("E", "1. März 2025", None),
        ];

        for policy in [UndatedPolicy::Drop, UndatedPolicy::Collect] {
            let groups = group_program_by_date(&entries, policy).unwrap();
            let regrouped = group_program_by_date(&flatten_program(&groups), policy).unwrap();
            assert_eq!(groups, regrouped, "policy {policy}");
        }
    }

    #[test]
    fn test_groups_and_events_are_ordered() {
        let entries = vec![
            event("a", "7. Juni 2025", Some((22, 0))),
            event("b", "6. Juni 2025", Some((12, 0))),
            event("c", "7. Juni 2025", Some((8, 30))),
            event("d", "6. Juni 2025", None),
            event("e", "6. Juni 2025", Some((11, 0))),
            event("f", "8. Juni 2025", Some((0, 0))),
        ];

        let groups = group_program_by_date(&entries, UndatedPolicy::Drop).unwrap();

        for pair in groups.windows(2) {
            assert!(pair[0].day < pair[1].day);
        }
        for group in &groups {
            for pair in group.events.windows(2) {
                if let (Some(a), Some(b)) = (pair[0].start_time, pair[1].start_time) {
                    assert!(a <= b);
                }
            }
        }
        assert_eq!(flatten_program(&groups).len(), entries.len());
    }

    #[test]
    fn test_undated_policy_from_str() {
        assert_eq!("collect".parse::<UndatedPolicy>(), Ok(UndatedPolicy::Collect));
        assert_eq!("DROP".parse::<UndatedPolicy>(), Ok(UndatedPolicy::Drop));
        assert!("keep".parse::<UndatedPolicy>().is_err());
    }
}
