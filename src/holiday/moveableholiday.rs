use chrono::Duration;

use crate::calendarerror::CalendarError;
use crate::holiday::holiday::Holiday;
use crate::time::easter::easter_sunday;
use crate::time::isodate::format_iso;

const EASTER_OFFSETS: [(i64, &str); 4] = [
    (-48, "Carnaval"), // Monday
    (-47, "Carnaval"), // Tuesday
    (-2, "Sexta-Feira da Paixão"),
    (60, "Corpus Christi"),
];

/// The four holidays anchored to Easter Sunday, each a fixed day offset from
/// the anchor.
pub fn moveable_holidays(year: i32) -> Result<Vec<Holiday>, CalendarError> {
    let easter = easter_sunday(year)?;

    Ok(EASTER_OFFSETS
        .iter()
        .map(|&(days, name)| Holiday::new(format_iso(easter + Duration::days(days)), name))
        .collect())
}
