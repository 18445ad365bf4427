//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// Format a backend timestamp (`2024-03-05 14:22:01.123Z` or RFC 3339) as
/// `DD Month YYYY`, using the calendar date in UTC.
///
/// Returns `None` when the value does not start with a valid `YYYY-MM-DD`.
#[must_use]
pub fn format_created(raw: &str) -> Option<String> {
    let day = raw.trim().get(..10)?;
    let date = Date::parse(day, format_description!("[year]-[month]-[day]")).ok()?;
    date.format(format_description!("[day] [month repr:long] [year]")).ok()
}
