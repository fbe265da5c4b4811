//! Date parsing module
//!
//! Turns free-form date strings into calendar dates. Three fixed grammars are
//! tried first; anything else goes through a list of common date layouts.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Weekday};
use regex::Regex;

use crate::error::{Error, Result};

/// Weekday names indexed by days from Sunday
pub const WEEKDAY_NAMES: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

/// A real calendar date in the local calendar.
///
/// Can only be built from a valid year/month/day, so there is no way to hold
/// February 30. The weekday is always derived from the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a 1-based month and day, `None` if it does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1-12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Fixed-locale weekday name, e.g. "周一"
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.0.weekday().num_days_from_sunday() as usize]
    }

    /// Shift by a signed number of days, `None` past the representable range
    pub fn offset_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(Self)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Source of "today"
pub trait Clock: fmt::Debug {
    fn today(&self) -> CalendarDate;
}

/// Reads the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate(Local::now().date_naive())
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

struct Grammars {
    // 9/1, 9-1, 9.1
    month_day: Regex,
    // 9月1日, 9月1号
    month_day_cjk: Regex,
    // 2023/9/1, 2023-9-1
    year_month_day: Regex,
}

fn grammars() -> &'static Grammars {
    static GRAMMARS: OnceLock<Grammars> = OnceLock::new();
    GRAMMARS.get_or_init(|| Grammars {
        month_day: Regex::new(r"^([0-9]{1,2})[/.\-]([0-9]{1,2})$").unwrap(),
        month_day_cjk: Regex::new(r"^([0-9]{1,2})月([0-9]{1,2})[日号]$").unwrap(),
        year_month_day: Regex::new(r"^([0-9]{4})[/\-]([0-9]{1,2})[/\-]([0-9]{1,2})$").unwrap(),
    })
}

/// Layouts tried when none of the fixed grammars match
const FALLBACK_FORMATS: &[&str] = &[
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%Y年%m月%d日",
    "%B %d, %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// Parse a date string
///
/// Supported formats, in priority order:
/// - `"9/1"`, `"9-1"`, `"9.1"` → month/day in the clock's current year
/// - `"9月1日"`, `"9月1号"` → month/day in the clock's current year
/// - `"2023/9/1"`, `"2023-9-1"` → explicit year
/// - common layouts such as `"September 1, 2023"`, `"2023年9月1日"`,
///   `"2023-09-01T08:00:00"`
///
/// A grammar match that names a non-existent day (`"2/30"`, `"13/1"`) is an
/// error, never clamped to a nearby date.
pub fn parse(input: &str, clock: &dyn Clock) -> Result<CalendarDate> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::Parse("empty input".to_string()));
    }

    let grammars = grammars();

    if let Some(caps) = grammars
        .month_day
        .captures(input)
        .or_else(|| grammars.month_day_cjk.captures(input))
    {
        let month = number(&caps[1], input)?;
        let day = number(&caps[2], input)?;
        return build(clock.today().year(), month, day, input);
    }

    if let Some(caps) = grammars.year_month_day.captures(input) {
        let year = number(&caps[1], input)?;
        let month = number(&caps[2], input)?;
        let day = number(&caps[3], input)?;
        return build(year as i32, month, day, input);
    }

    parse_fallback(input)
        .ok_or_else(|| Error::Parse(format!("unrecognized date format: {}", input)))
}

/// Parse a date string against the local system clock
pub fn parse_date(input: &str) -> Result<CalendarDate> {
    parse(input, &SystemClock)
}

fn number(digits: &str, input: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| Error::Parse(format!("bad number in {}", input)))
}

fn build(year: i32, month: u32, day: u32, input: &str) -> Result<CalendarDate> {
    CalendarDate::from_ymd(year, month, day).ok_or_else(|| {
        Error::Parse(format!(
            "{} is not a real calendar date ({}-{}-{})",
            input, year, month, day
        ))
    })
}

fn parse_fallback(input: &str) -> Option<CalendarDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(CalendarDate(dt.with_timezone(&Local).date_naive()));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(CalendarDate(dt.date()));
    }

    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .map(CalendarDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(year: i32) -> FixedClock {
        FixedClock(CalendarDate::from_ymd(year, 6, 15).unwrap())
    }

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_month_day_separators() {
        let clock = clock(2023);
        for input in ["9/1", "9-1", "9.1", "09/01", " 9/1 "] {
            let date = parse(input, &clock).unwrap();
            assert_eq!(date, ymd(2023, 9, 1), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_month_day_cjk() {
        let clock = clock(2023);
        assert_eq!(parse("9月1日", &clock).unwrap(), ymd(2023, 9, 1));
        assert_eq!(parse("12月31号", &clock).unwrap(), ymd(2023, 12, 31));
    }

    #[test]
    fn test_parse_every_valid_month_day() {
        let clock = clock(2024);
        for month in 1..=12 {
            for day in 1..=31 {
                let Some(expected) = CalendarDate::from_ymd(2024, month, day) else {
                    continue;
                };
                let slash = parse(&format!("{}/{}", month, day), &clock).unwrap();
                let cjk = parse(&format!("{}月{}日", month, day), &clock).unwrap();
                assert_eq!(slash, expected);
                assert_eq!(cjk, expected);
            }
        }
    }

    #[test]
    fn test_parse_explicit_year() {
        let clock = clock(2023);
        assert_eq!(parse("2024/2/29", &clock).unwrap(), ymd(2024, 2, 29));
        assert_eq!(parse("1999-12-31", &clock).unwrap(), ymd(1999, 12, 31));
        assert_eq!(parse("2030-1-05", &clock).unwrap(), ymd(2030, 1, 5));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        let clock = clock(2023);
        assert!(matches!(parse("2/29", &clock), Err(Error::Parse(_))));
        assert!(matches!(parse("13/45", &clock), Err(Error::Parse(_))));
        assert!(matches!(parse("4/31", &clock), Err(Error::Parse(_))));
        assert!(matches!(parse("0/10", &clock), Err(Error::Parse(_))));
        assert!(matches!(parse("2023-02-29", &clock), Err(Error::Parse(_))));
        assert!(matches!(parse("13月1日", &clock), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_leap_day_in_leap_year() {
        assert_eq!(parse("2/29", &clock(2024)).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_parse_invalid() {
        let clock = clock(2023);
        assert!(parse("", &clock).is_err());
        assert!(parse("   ", &clock).is_err());
        assert!(parse("abc", &clock).is_err());
        assert!(parse("9/1/", &clock).is_err());
        assert!(parse("9月1", &clock).is_err());
        assert!(parse("123/4", &clock).is_err());
    }

    #[test]
    fn test_parse_fallback_layouts() {
        let clock = clock(2000);
        assert_eq!(parse("September 1, 2023", &clock).unwrap(), ymd(2023, 9, 1));
        assert_eq!(parse("2023年9月1日", &clock).unwrap(), ymd(2023, 9, 1));
        assert_eq!(parse("2023.9.1", &clock).unwrap(), ymd(2023, 9, 1));
        assert_eq!(parse("09/01/2023", &clock).unwrap(), ymd(2023, 9, 1));
        assert_eq!(parse("2023-09-01T08:30:00", &clock).unwrap(), ymd(2023, 9, 1));
    }

    #[test]
    fn test_weekday_names() {
        // 2023-09-03 is a Sunday
        let names: Vec<&str> = (0..7)
            .map(|i| ymd(2023, 9, 3).offset_days(i).unwrap().weekday_name())
            .collect();
        assert_eq!(names, WEEKDAY_NAMES.to_vec());
        assert_eq!(ymd(2023, 9, 1).weekday_name(), "周五");
    }

    #[test]
    fn test_offset_days_crosses_boundaries() {
        assert_eq!(ymd(2023, 12, 31).offset_days(1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(ymd(2024, 3, 1).offset_days(-1).unwrap(), ymd(2024, 2, 29));
        assert!(CalendarDate::from(NaiveDate::MAX).offset_days(1).is_none());
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(ymd(2026, 1, 7).to_string(), "2026-01-07");
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let today = Local::now().date_naive();
        assert_eq!(SystemClock.today().as_naive(), today);
    }
}
