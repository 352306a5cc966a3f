//! Descriptive statistics over the "adult" census income table.
//!
//! [`calculate_demographic_data`] loads the table, computes every statistic
//! and returns them as a [`ResultSet`]. [`Verifier`] checks a run against the
//! known reference values.

pub mod analyzer;
pub mod config;
pub mod csv_reader;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod result_set;
pub mod verifier;

pub use analyzer::DemographicAnalyzer;
pub use config::AnalyzerConfig;
pub use csv_reader::Record;
pub use dataset::Dataset;
pub use error::{AnalysisError, Result};
pub use result_set::{Report, ResultSet, StatValue};
pub use verifier::{Expectations, VerificationReport, Verifier};

/// Analyzes the dataset at `ADULT_DATA_PATH` (default `adult.data.csv`).
pub fn calculate_demographic_data(print_data: bool) -> Result<ResultSet> {
    calculate_demographic_data_from(&AnalyzerConfig::from_env(print_data))
}

pub fn calculate_demographic_data_from(config: &AnalyzerConfig) -> Result<ResultSet> {
    let dataset = Dataset::load(&config.data_path)?;
    let results = DemographicAnalyzer::new(&dataset).analyze()?;
    if config.print_data {
        println!("{results}");
    }
    Ok(results)
}
