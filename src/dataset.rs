use std::path::Path;

use crate::csv_reader::{self, Record};
use crate::error::{AnalysisError, Result};

pub const HIGHER_EDUCATION: &[&str] = &["Bachelors", "Masters", "Doctorate"];
pub const RICH_SALARY: &str = ">50K";

impl Record {
    pub fn is_rich(&self) -> bool {
        self.salary == RICH_SALARY
    }

    pub fn has_higher_education(&self) -> bool {
        HIGHER_EDUCATION.contains(&self.education.as_str())
    }
}

/// The loaded table. Never empty, never modified after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        Ok(Dataset { records })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Dataset::new(csv_reader::read_data(path)?)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(education: &str, salary: &str) -> Record {
        Record {
            age: 30,
            sex: "Female".into(),
            race: "White".into(),
            education: education.into(),
            occupation: "Sales".into(),
            native_country: "United-States".into(),
            hours_per_week: 40,
            salary: salary.into(),
        }
    }

    #[test]
    fn rejects_empty_dataset() {
        assert!(matches!(Dataset::new(vec![]), Err(AnalysisError::EmptyDataset)));
    }

    #[test]
    fn classifies_education_and_salary() {
        assert!(record("Doctorate", ">50K").has_higher_education());
        assert!(!record("Some-college", ">50K").has_higher_education());
        assert!(record("HS-grad", ">50K").is_rich());
        assert!(!record("HS-grad", "<=50K").is_rich());
    }
}
