use chrono::{Datelike, NaiveDate};

use crate::calendarerror::CalendarError;

/// Renders a date in the canonical `YYYY-MM-DD` form.
///
/// This string is the single identity used for every holiday and business-day
/// comparison in the crate; nothing compares raw date values across
/// representations.
pub fn format_iso(d: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day())
}

/// Strict inverse of [`format_iso`]: exactly three `-`-separated numeric
/// components naming a real calendar day. Anything else is rejected.
pub fn parse_iso(date_str: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidDate(date_str.to_owned());

    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let year = parts[0].parse::<i32>().map_err(|_| invalid())?;
    let month = parts[1].parse::<u32>().map_err(|_| invalid())?;
    let day = parts[2].parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Date argument accepted by the public predicates: a pre-formatted ISO-8601
/// string or an already constructed calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Iso(String),
    Date(NaiveDate),
}

impl DateInput {
    /// Normalizes to the internal calendar-date representation.
    pub fn resolve(&self) -> Result<NaiveDate, CalendarError> {
        match self {
            DateInput::Iso(date_str) => parse_iso(date_str),
            DateInput::Date(d) => Ok(*d),
        }
    }
}

impl From<&str> for DateInput {
    fn from(date_str: &str) -> DateInput {
        DateInput::Iso(date_str.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(date_str: String) -> DateInput {
        DateInput::Iso(date_str)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> DateInput {
        DateInput::Date(d)
    }
}
