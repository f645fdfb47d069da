use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::calendarerror::CalendarError;
use crate::holiday::bankholiday::get_bank_holidays;
use crate::time::isodate::{DateInput, format_iso};
use crate::time::utility::days_of_month;

const ONE_DAY: Days = Days::new(1);

fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

fn is_holiday_date(d: NaiveDate) -> Result<bool, CalendarError> {
    let date_str = format_iso(d);
    let holidays = get_bank_holidays(d.year())?;
    Ok(holidays.iter().any(|h| h.date() == date_str))
}

fn is_business_date(d: NaiveDate) -> Result<bool, CalendarError> {
    Ok(!is_weekend(d) && !is_holiday_date(d)?)
}

/// Whether the date is a national bank holiday.
///
/// Membership is decided by exact match on the canonical date string against
/// the holiday list of the date's own year. Dates in years outside the
/// supported range fail rather than silently reporting "not a holiday".
pub fn is_bank_holiday(date: impl Into<DateInput>) -> Result<bool, CalendarError> {
    is_holiday_date(date.into().resolve()?)
}

/// A business day is a Monday through Friday that is not a bank holiday.
pub fn is_business_day(date: impl Into<DateInput>) -> Result<bool, CalendarError> {
    is_business_date(date.into().resolve()?)
}

/// First business day strictly after the given date, as an ISO date string.
pub fn next_business_day(date: impl Into<DateInput>) -> Result<String, CalendarError> {
    shift_business_days(date, 1)
}

/// First business day strictly before the given date.
pub fn previous_business_day(date: impl Into<DateInput>) -> Result<String, CalendarError> {
    shift_business_days(date, -1)
}

/// Walks `n` business days from the given date: forward when `n > 0`,
/// backward when `n < 0`. `n == 0` returns the date itself in ISO form.
///
/// The scan advances one calendar day at a time with no iteration cap;
/// holidays are sparse, so only a handful of candidates are ever skipped.
pub fn shift_business_days(
    date: impl Into<DateInput>,
    n: i32,
) -> Result<String, CalendarError> {
    let shift_one_day = if n >= 0 {
        |d: NaiveDate| d + ONE_DAY
    } else {
        |d: NaiveDate| d - ONE_DAY
    };

    let mut remaining = n.unsigned_abs();
    let mut d = date.into().resolve()?;
    while remaining > 0 {
        d = shift_one_day(d);
        remaining -= is_business_date(d)? as u32;
    }
    Ok(format_iso(d))
}

/// Number of business days in the given month.
pub fn business_days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidDate(format!("{year}-{month:02}")));
    }

    let mut count = 0;
    for day in 1..=days_of_month(year, month) {
        let d = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        count += is_business_date(d)? as u32;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_holidays() {
        assert_eq!(is_bank_holiday("2025-01-01"), Ok(true));
        assert_eq!(is_bank_holiday("2025-03-03"), Ok(true));
        assert_eq!(is_bank_holiday("2025-12-25"), Ok(true));
        assert_eq!(is_bank_holiday("2025-01-02"), Ok(false));
        assert_eq!(is_bank_holiday("2025-06-15"), Ok(false));
    }

    #[test]
    fn accepts_calendar_dates() {
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(is_bank_holiday(new_year), Ok(true));
        assert_eq!(is_bank_holiday(new_year + ONE_DAY), Ok(false));
    }

    #[test]
    fn weekends_are_not_business_days() {
        assert_eq!(is_business_day("2025-07-12"), Ok(false)); // Saturday
        assert_eq!(is_business_day("2025-07-13"), Ok(false)); // Sunday
        assert_eq!(is_business_day("2025-07-08"), Ok(true)); // Tuesday
    }

    #[test]
    fn holidays_are_not_business_days() {
        assert_eq!(is_business_day("2025-01-01"), Ok(false));
    }

    #[test]
    fn next_business_day_skips_weekends() {
        assert_eq!(next_business_day("2025-01-02").unwrap(), "2025-01-03");
        assert_eq!(next_business_day("2025-01-03").unwrap(), "2025-01-06");
        assert_eq!(next_business_day("2025-01-04").unwrap(), "2025-01-06");
    }

    #[test]
    fn next_business_day_skips_holidays() {
        assert_eq!(next_business_day("2024-12-31").unwrap(), "2025-01-02");
        assert_eq!(next_business_day("2025-02-27").unwrap(), "2025-02-28");
    }

    #[test]
    fn next_business_day_skips_holiday_weekend_runs() {
        // Feb 28 2025 is the Friday before Carnival Monday and Tuesday.
        assert_eq!(next_business_day("2025-02-28").unwrap(), "2025-03-05");
        // Sep 7 2025 (Independence Day) falls on a Sunday.
        assert_eq!(next_business_day("2025-09-05").unwrap(), "2025-09-08");
    }

    #[test]
    fn previous_business_day_skips_backwards() {
        assert_eq!(previous_business_day("2025-01-02").unwrap(), "2024-12-31");
        assert_eq!(previous_business_day("2025-03-05").unwrap(), "2025-02-28");
        assert_eq!(previous_business_day("2025-01-06").unwrap(), "2025-01-03");
    }

    #[test]
    fn shift_by_zero_normalizes_only() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
        assert_eq!(shift_business_days(d, 0).unwrap(), "2025-01-04");
    }

    #[test]
    fn shift_by_several_business_days() {
        // Thu Feb 27 -> Feb 28, Mar 5, Mar 6 (skipping Carnival and a weekend).
        assert_eq!(shift_business_days("2025-02-27", 3).unwrap(), "2025-03-06");
        assert_eq!(shift_business_days("2025-03-06", -3).unwrap(), "2025-02-27");
    }

    #[test]
    fn counts_business_days_in_month() {
        // January 2025: 23 weekdays minus New Year's Day.
        assert_eq!(business_days_in_month(2025, 1), Ok(22));
        // March 2025: 21 weekdays minus the two Carnival days.
        assert_eq!(business_days_in_month(2025, 3), Ok(19));
    }

    #[test]
    fn rejects_invalid_month() {
        assert_eq!(
            business_days_in_month(2025, 13),
            Err(CalendarError::InvalidDate("2025-13".to_owned()))
        );
    }

    #[test]
    fn out_of_range_years_fail_instead_of_lying() {
        assert_eq!(
            is_bank_holiday("1500-01-01"),
            Err(CalendarError::YearOutOfRange(1500))
        );
        assert_eq!(
            is_business_day("4100-01-04"),
            Err(CalendarError::YearOutOfRange(4100))
        );
    }

    #[test]
    fn malformed_dates_fail() {
        assert_eq!(
            next_business_day("2025-02-30"),
            Err(CalendarError::InvalidDate("2025-02-30".to_owned()))
        );
    }
}
