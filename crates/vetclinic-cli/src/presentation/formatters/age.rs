use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::date::parse_date;

/// Placeholder for a pet whose birth date is absent or unreadable.
pub const UNKNOWN_AGE: &str = "unknown";

/// Whole years and remaining whole months.
///
/// Only the calendar year and month take part; the day of the month is
/// ignored, so a pet born on the 31st turns one month older on the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age {
    pub years: u32,
    pub months: u32,
}

impl Age {
    /// Age on `today`; a birth date in the future clamps to zero.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Self {
        let total = (today.year() - birth.year()) * 12 + today.month0() as i32
            - birth.month0() as i32;
        let total = total.max(0) as u32;

        Self {
            years: total / 12,
            months: total % 12,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years == 0 {
            write!(f, "{} months", self.months)
        } else {
            write!(f, "{} years, {} months", self.years, self.months)
        }
    }
}

/// Display age for an optional raw birth date.
pub fn calculate_age(birth: Option<&str>, today: NaiveDate) -> String {
    birth
        .and_then(parse_date)
        .map(|birth| Age::between(birth, today).to_string())
        .unwrap_or_else(|| UNKNOWN_AGE.to_string())
}
