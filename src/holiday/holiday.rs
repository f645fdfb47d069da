use serde::{Deserialize, Serialize};

/// A single bank holiday: the canonical `YYYY-MM-DD` date and the official
/// name. Names repeat within a year ("Carnaval" falls on two days); the
/// (date, name) pair does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    date: String,
    name: String,
}

impl Holiday {
    pub fn new(date: String, name: &str) -> Holiday {
        Holiday {
            date,
            name: name.to_owned(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_date_name_record() {
        let holiday = Holiday::new("2025-12-25".to_owned(), "Natal");
        assert_eq!(
            serde_json::to_string(&holiday).unwrap(),
            r#"{"date":"2025-12-25","name":"Natal"}"#
        );
    }

    #[test]
    fn deserializes_back() {
        let holiday: Holiday =
            serde_json::from_str(r#"{"date":"2025-01-01","name":"Confraternização Universal"}"#)
                .unwrap();
        assert_eq!(holiday.date(), "2025-01-01");
        assert_eq!(holiday.name(), "Confraternização Universal");
    }
}
