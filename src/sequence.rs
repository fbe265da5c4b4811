//! Two-week date sequence generation

use crate::date::CalendarDate;
use crate::error::{Error, Result};

/// Number of days in every generated list
pub const SEQUENCE_LEN: usize = 14;

/// One day of the list with its rendered label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    date: CalendarDate,
    label: String,
}

impl DateEntry {
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Label such as "9-1周五"
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Fourteen consecutive days starting at the anchor.
///
/// The anchor's full label travels alongside the entries and is never one of
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSequence {
    entries: Vec<DateEntry>,
    anchor_full_label: String,
}

impl DateSequence {
    pub fn entries(&self) -> &[DateEntry] {
        &self.entries
    }

    pub fn anchor(&self) -> CalendarDate {
        self.entries[0].date
    }

    /// Year-inclusive label of the first day, e.g. "2023-09-01 周五"
    pub fn anchor_full_label(&self) -> &str {
        &self.anchor_full_label
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a sequence holds exactly [`SEQUENCE_LEN`] entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Short entry label: month and day without padding, then the weekday
pub fn entry_label(date: CalendarDate) -> String {
    format!("{}-{}{}", date.month(), date.day(), date.weekday_name())
}

/// Full label: zero-padded year-month-day, a space, then the weekday
pub fn full_label(date: CalendarDate) -> String {
    format!(
        "{}-{:02}-{:02} {}",
        date.year(),
        date.month(),
        date.day(),
        date.weekday_name()
    )
}

/// Generate the fourteen days starting at `anchor`
///
/// Fails with [`Error::InvalidAnchor`] when the list would run past the last
/// representable date; no partial list is returned.
pub fn generate(anchor: CalendarDate) -> Result<DateSequence> {
    let entries = (0..SEQUENCE_LEN as i64)
        .map(|offset| {
            anchor
                .offset_days(offset)
                .map(|date| DateEntry {
                    date,
                    label: entry_label(date),
                })
                .ok_or_else(|| {
                    Error::InvalidAnchor(format!("{} leaves no room for {} days", anchor, SEQUENCE_LEN))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(anchor = %anchor, days = entries.len(), "generated date sequence");

    Ok(DateSequence {
        entries,
        anchor_full_label: full_label(anchor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn labels(seq: &DateSequence) -> Vec<&str> {
        seq.labels().collect()
    }

    #[test]
    fn test_generate_from_friday() {
        let seq = generate(ymd(2023, 9, 1)).unwrap();
        let labels = labels(&seq);

        assert_eq!(labels.len(), SEQUENCE_LEN);
        assert_eq!(labels[0], "9-1周五");
        assert_eq!(labels[1], "9-2周六");
        assert_eq!(labels[2], "9-3周日");
        assert_eq!(labels[13], "9-14周四");
        assert_eq!(seq.anchor_full_label(), "2023-09-01 周五");
        assert_eq!(seq.anchor(), ymd(2023, 9, 1));
    }

    #[test]
    fn test_generate_is_contiguous() {
        let seq = generate(ymd(2023, 12, 25)).unwrap();
        for pair in seq.entries().windows(2) {
            assert_eq!(pair[0].date().offset_days(1).unwrap(), pair[1].date());
        }
    }

    #[test]
    fn test_generate_crosses_year() {
        let seq = generate(ymd(2023, 12, 25)).unwrap();
        let labels = labels(&seq);
        assert_eq!(labels[6], "12-31周日");
        assert_eq!(labels[7], "1-1周一");
        assert_eq!(labels[9], "1-3周三");
        assert_eq!(seq.entries()[9].date(), ymd(2024, 1, 3));
    }

    #[test]
    fn test_generate_crosses_february() {
        let seq = generate(ymd(2023, 2, 20)).unwrap();
        assert_eq!(seq.entries()[8].label(), "2-28周二");
        assert_eq!(seq.entries()[9].label(), "3-1周三");

        let leap = generate(ymd(2024, 2, 20)).unwrap();
        assert_eq!(leap.entries()[9].label(), "2-29周四");
        assert_eq!(leap.entries()[10].label(), "3-1周五");
    }

    #[test]
    fn test_anchor_label_is_not_an_entry() {
        let seq = generate(ymd(2023, 9, 1)).unwrap();
        assert!(seq.labels().all(|l| l != seq.anchor_full_label()));
        assert_eq!(seq.len(), SEQUENCE_LEN);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_full_label_pads() {
        assert_eq!(full_label(ymd(2024, 1, 3)), "2024-01-03 周三");
        assert_eq!(entry_label(ymd(2024, 1, 3)), "1-3周三");
    }

    #[test]
    fn test_generate_rejects_anchor_at_end_of_range() {
        let result = generate(CalendarDate::from(NaiveDate::MAX));
        assert!(matches!(result, Err(Error::InvalidAnchor(_))));
    }
}
