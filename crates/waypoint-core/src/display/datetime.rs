//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

use crate::store::NOT_APPLICABLE;

/// A wrapper around an optional `Date` that displays `YYYY-MM-DD`, or
/// `N/A` when there is no date.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use waypoint_core::display::OptionalDate;
///
/// assert_eq!(OptionalDate(Some(date(2024, 3, 5))).to_string(), "2024-03-05");
/// assert_eq!(OptionalDate(None).to_string(), "N/A");
/// ```
pub struct OptionalDate(pub Option<Date>);

impl fmt::Display for OptionalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%Y-%m-%d")),
            None => f.write_str(NOT_APPLICABLE),
        }
    }
}
