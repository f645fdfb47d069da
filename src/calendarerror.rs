use thiserror::Error;

/// The failure conditions of the calendar.
///
/// Out-of-range years are the only failure the holiday tables themselves can
/// produce; the other two variants come from the typed input boundary, which
/// validates textual years and date strings strictly instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("year {0} is outside the supported range 1583..=4099")]
    YearOutOfRange(i32),
    #[error("'{0}' is not a numeric year")]
    InvalidYear(String),
    #[error("'{0}' is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}
