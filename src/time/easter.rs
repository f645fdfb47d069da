use chrono::NaiveDate;

use crate::calendarerror::CalendarError;

/// First year for which the Gregorian Easter computation is defined here.
pub const MIN_YEAR: i32 = 1583;
/// Last supported year.
pub const MAX_YEAR: i32 = 4099;

/// Date of Easter Sunday for the given year, by the anonymous Gregorian
/// algorithm (Meeus/Jones/Butcher variant).
///
/// Every moveable holiday in the calendar is a fixed day offset from this
/// anchor. Years outside `MIN_YEAR..=MAX_YEAR` are rejected.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }

    // Every intermediate term is non-negative within the supported range, so
    // truncating integer division is the floor division the algorithm needs.
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = ((h + l - 7 * m + 114) / 31) as u32;
    let day = ((h + l - 7 * m + 114) % 31 + 1) as u32;

    // The algorithm only ever yields a day in March or April.
    Ok(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}
