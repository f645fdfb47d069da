use crate::calendarerror::CalendarError;
use crate::holiday::fixedholiday::fixed_holidays;
use crate::holiday::holiday::Holiday;
use crate::holiday::moveableholiday::moveable_holidays;
use crate::time::easter::{MAX_YEAR, MIN_YEAR};

/// One requested year, as a number or in the textual form callers often carry
/// around (query parameters, spreadsheet cells).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearInput {
    Number(i32),
    Text(String),
}

impl YearInput {
    fn resolve(&self) -> Result<i32, CalendarError> {
        let year = match self {
            YearInput::Number(year) => *year,
            YearInput::Text(year_str) => year_str
                .trim()
                .parse::<i32>()
                .map_err(|_| CalendarError::InvalidYear(year_str.clone()))?,
        };

        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(year)
        } else {
            Err(CalendarError::YearOutOfRange(year))
        }
    }
}

impl From<i32> for YearInput {
    fn from(year: i32) -> YearInput {
        YearInput::Number(year)
    }
}

impl From<&str> for YearInput {
    fn from(year_str: &str) -> YearInput {
        YearInput::Text(year_str.to_owned())
    }
}

impl From<String> for YearInput {
    fn from(year_str: String) -> YearInput {
        YearInput::Text(year_str)
    }
}

/// Year argument of [`get_bank_holidays`]: a single year or a sequence of
/// years, numeric and textual forms freely mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Years {
    Single(YearInput),
    Many(Vec<YearInput>),
}

impl Years {
    fn into_inputs(self) -> Vec<YearInput> {
        match self {
            Years::Single(year) => vec![year],
            Years::Many(years) => years,
        }
    }
}

impl From<i32> for Years {
    fn from(year: i32) -> Years {
        Years::Single(YearInput::Number(year))
    }
}

impl From<&str> for Years {
    fn from(year_str: &str) -> Years {
        Years::Single(YearInput::from(year_str))
    }
}

impl From<String> for Years {
    fn from(year_str: String) -> Years {
        Years::Single(YearInput::Text(year_str))
    }
}

impl From<YearInput> for Years {
    fn from(year: YearInput) -> Years {
        Years::Single(year)
    }
}

impl From<Vec<YearInput>> for Years {
    fn from(years: Vec<YearInput>) -> Years {
        Years::Many(years)
    }
}

impl From<Vec<i32>> for Years {
    fn from(years: Vec<i32>) -> Years {
        Years::Many(years.into_iter().map(YearInput::Number).collect())
    }
}

impl From<&[i32]> for Years {
    fn from(years: &[i32]) -> Years {
        Years::Many(years.iter().copied().map(YearInput::Number).collect())
    }
}

impl From<Vec<&str>> for Years {
    fn from(years: Vec<&str>) -> Years {
        Years::Many(years.into_iter().map(YearInput::from).collect())
    }
}

impl From<Vec<String>> for Years {
    fn from(years: Vec<String>) -> Years {
        Years::Many(years.into_iter().map(YearInput::Text).collect())
    }
}

/// All national bank holidays for the requested year(s), sorted ascending by
/// date string.
///
/// Years are resolved in the order given; the first year outside
/// `MIN_YEAR..=MAX_YEAR` fails the whole call, never a partial result.
/// Requesting the same year twice duplicates its holidays in the output.
pub fn get_bank_holidays(years: impl Into<Years>) -> Result<Vec<Holiday>, CalendarError> {
    let mut holidays = Vec::new();

    for input in years.into().into_inputs() {
        let year = input.resolve()?;
        holidays.extend(fixed_holidays(year));
        holidays.extend(moveable_holidays(year)?);
    }

    holidays.sort_by(|a, b| a.date().cmp(b.date()));
    Ok(holidays)
}
