//! Default anchor resolution
//!
//! When no date is given the list starts on the Monday of the previous
//! calendar week.

use chrono::Weekday;

use crate::date::{CalendarDate, Clock};
use crate::error::{Error, Result};

/// Monday of the week containing `today`; weeks run Monday to Sunday
pub fn this_week_monday(today: CalendarDate) -> Result<CalendarDate> {
    let weekday = today.weekday().num_days_from_sunday() as i64;
    let offset = -weekday + if weekday == 0 { -6 } else { 1 };

    today
        .offset_days(offset)
        .ok_or_else(|| Error::InvalidAnchor(format!("no Monday before {}", today)))
}

/// Monday of the calendar week before the one containing `today`
///
/// The Monday invariant is checked after the arithmetic. A violation is logged
/// and the computed date is still returned.
pub fn last_monday_of_previous_week(today: CalendarDate) -> Result<CalendarDate> {
    let monday = this_week_monday(today)?;
    let last_monday = monday
        .offset_days(-7)
        .ok_or_else(|| Error::InvalidAnchor(format!("no week before {}", monday)))?;

    if let Err(e) = check_mondays(monday, last_monday) {
        tracing::error!(
            today = %today,
            this_monday = %monday,
            last_monday = %last_monday,
            "{}",
            e
        );
    }

    tracing::debug!(today = %today, anchor = %last_monday, "resolved default anchor");
    Ok(last_monday)
}

/// Resolve the default anchor from a clock
pub fn default_anchor(clock: &dyn Clock) -> Result<CalendarDate> {
    last_monday_of_previous_week(clock.today())
}

/// Verify both dates are Mondays and `last_monday` comes strictly first
pub fn check_mondays(this_monday: CalendarDate, last_monday: CalendarDate) -> Result<()> {
    for date in [this_monday, last_monday] {
        if date.weekday() != Weekday::Mon {
            return Err(Error::CalendarInconsistency(format!(
                "{} is a {}, not a Monday",
                date,
                date.weekday_name()
            )));
        }
    }

    if last_monday >= this_monday {
        return Err(Error::CalendarInconsistency(format!(
            "previous Monday {} is not before this Monday {}",
            last_monday, this_monday
        )));
    }

    Ok(())
}
