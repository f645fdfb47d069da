pub mod calendarerror;

pub mod time {
    pub mod utility;
    pub mod easter;
    pub mod isodate;
}

pub mod holiday {
    pub mod holiday;
    pub mod fixedholiday;
    pub mod moveableholiday;
    pub mod bankholiday;
}

pub mod calendar {
    pub mod businessday;
}

pub use calendarerror::CalendarError;

pub use time::easter::{MAX_YEAR, MIN_YEAR, easter_sunday};
pub use time::isodate::{DateInput, format_iso, parse_iso};

pub use holiday::bankholiday::{YearInput, Years, get_bank_holidays};
pub use holiday::fixedholiday::fixed_holidays;
pub use holiday::holiday::Holiday;
pub use holiday::moveableholiday::moveable_holidays;

pub use calendar::businessday::{
    business_days_in_month, is_bank_holiday, is_business_day, next_business_day,
    previous_business_day, shift_business_days,
};
