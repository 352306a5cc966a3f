use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("dataset contains no records")]
    EmptyDataset,

    /// A ratio, mean, extremum or mode was asked of a subset with no rows.
    #[error("cannot compute {statistic}: no records where {subset}")]
    EmptySubset {
        statistic: &'static str,
        subset: &'static str,
    },
}

impl AnalysisError {
    pub fn is_input_error(&self) -> bool {
        !self.is_computation_error()
    }

    pub fn is_computation_error(&self) -> bool {
        matches!(self, AnalysisError::EmptySubset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        let empty = AnalysisError::EmptySubset {
            statistic: "top_IN_occupation",
            subset: "native-country is India and salary is >50K",
        };
        assert!(empty.is_computation_error());
        assert!(!empty.is_input_error());
        assert!(AnalysisError::EmptyDataset.is_input_error());
        assert!(AnalysisError::MissingColumn("race").is_input_error());
    }

    #[test]
    fn empty_subset_message_names_statistic() {
        let err = AnalysisError::EmptySubset {
            statistic: "average_age_men",
            subset: "sex is Male",
        };
        assert_eq!(
            err.to_string(),
            "cannot compute average_age_men: no records where sex is Male"
        );
    }
}
