//! Regression check of a [`ResultSet`] against fixed expected values.

use std::fmt;

use tracing::{info, warn};

use crate::analyzer::DemographicAnalyzer;
use crate::config::AnalyzerConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::result_set::{ResultSet, StatValue};

/// Absolute tolerance for the one-decimal statistics.
pub const FLOAT_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct Expectations {
    pub race_count: Vec<(String, u64)>,
    pub average_age_men: f64,
    pub percentage_bachelors: f64,
    pub higher_education_rich: f64,
    pub lower_education_rich: f64,
    pub min_work_hours: u32,
    pub rich_percentage: f64,
    pub highest_earning_country: String,
    pub highest_earning_country_percentage: f64,
    pub top_in_occupation: String,
}

impl Expectations {
    /// Known values for the 32,561-row adult census file.
    pub fn adult_reference() -> Self {
        Expectations {
            race_count: vec![
                ("White".to_string(), 27816),
                ("Black".to_string(), 3124),
                ("Asian-Pac-Islander".to_string(), 1039),
                ("Amer-Indian-Eskimo".to_string(), 311),
                ("Other".to_string(), 271),
            ],
            average_age_men: 39.4,
            percentage_bachelors: 16.4,
            higher_education_rich: 46.5,
            lower_education_rich: 17.4,
            min_work_hours: 1,
            rich_percentage: 10.0,
            highest_earning_country: "Iran".to_string(),
            highest_earning_country_percentage: 41.9,
            top_in_occupation: "Prof-specialty".to_string(),
        }
    }

    fn as_result_set(&self) -> ResultSet {
        ResultSet {
            race_count: self.race_count.clone(),
            average_age_men: self.average_age_men,
            percentage_bachelors: self.percentage_bachelors,
            higher_education_rich: self.higher_education_rich,
            lower_education_rich: self.lower_education_rich,
            min_work_hours: self.min_work_hours,
            rich_percentage: self.rich_percentage,
            highest_earning_country: self.highest_earning_country.clone(),
            highest_earning_country_percentage: self.highest_earning_country_percentage,
            top_in_occupation: self.top_in_occupation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub statistic: &'static str,
    pub expected: StatValue,
    pub actual: StatValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.statistic, self.expected, self.actual
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    checked: usize,
    mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_success() {
            return write!(f, "all {} statistics match", self.checked);
        }
        writeln!(
            f,
            "{} of {} statistics differ:",
            self.mismatches.len(),
            self.checked
        )?;
        for (i, mismatch) in self.mismatches.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {mismatch}")?;
        }
        Ok(())
    }
}

fn agrees(expected: &StatValue, actual: &StatValue) -> bool {
    match (expected, actual) {
        (StatValue::Float(e), StatValue::Float(a)) => (e - a).abs() <= FLOAT_TOLERANCE,
        (e, a) => e == a,
    }
}

pub struct Verifier {
    expected: Expectations,
}

impl Verifier {
    pub fn new(expected: Expectations) -> Self {
        Verifier { expected }
    }

    /// Compares every entry; never stops at the first mismatch.
    pub fn check(&self, results: &ResultSet) -> VerificationReport {
        let expected = self.expected.as_result_set().entries();
        let actual = results.entries();
        let checked = expected.len();

        let mismatches = expected
            .into_iter()
            .zip(actual)
            .filter(|((_, e), (_, a))| !agrees(e, a))
            .map(|((statistic, expected), (_, actual))| Mismatch {
                statistic,
                expected,
                actual,
            })
            .collect::<Vec<_>>();

        for mismatch in &mismatches {
            warn!(statistic = mismatch.statistic, "{mismatch}");
        }
        VerificationReport {
            checked,
            mismatches,
        }
    }

    /// Loads the configured dataset, analyzes it and checks the result.
    pub fn run(&self, config: &AnalyzerConfig) -> Result<VerificationReport> {
        let dataset = Dataset::load(&config.data_path)?;
        let results = DemographicAnalyzer::new(&dataset).analyze()?;
        if config.print_data {
            println!("{results}");
        }
        let report = self.check(&results);
        info!(
            checked = report.checked(),
            failed = report.mismatches().len(),
            "verification finished"
        );
        Ok(report)
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Verifier::new(Expectations::adult_reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values_pass() {
        let results = Expectations::adult_reference().as_result_set();
        let report = Verifier::default().check(&results);
        assert!(report.is_success());
        assert_eq!(report.checked(), 10);
        assert_eq!(report.to_string(), "all 10 statistics match");
    }

    #[test]
    fn floats_within_tolerance_pass() {
        let mut results = Expectations::adult_reference().as_result_set();
        results.average_age_men = 39.43;
        results.rich_percentage = 9.96;
        assert!(Verifier::default().check(&results).is_success());
    }

    #[test]
    fn reports_every_mismatch() {
        let mut results = Expectations::adult_reference().as_result_set();
        results.average_age_men = 40.0;
        results.min_work_hours = 2;
        results.highest_earning_country = "Taiwan".to_string();
        results.race_count.swap(0, 1);

        let report = Verifier::default().check(&results);
        let failed = report
            .mismatches()
            .iter()
            .map(|m| m.statistic)
            .collect::<Vec<_>>();
        assert_eq!(
            failed,
            ["race_count", "average_age_men", "min_work_hours", "highest_earning_country"]
        );
        let text = report.to_string();
        assert!(text.starts_with("4 of 10 statistics differ:"));
        assert!(text.contains("highest_earning_country: expected Iran, got Taiwan"));
        assert!(text.contains("average_age_men: expected 39.4, got 40.0"));
    }
}
