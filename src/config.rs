use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "adult.data.csv";
pub const DATA_PATH_ENV: &str = "ADULT_DATA_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub data_path: PathBuf,
    /// Write the plain-text report to stdout after analysis.
    pub print_data: bool,
}

impl AnalyzerConfig {
    pub fn new<P: Into<PathBuf>>(data_path: P, print_data: bool) -> Self {
        AnalyzerConfig {
            data_path: data_path.into(),
            print_data,
        }
    }

    /// Data path from `ADULT_DATA_PATH`, falling back to `adult.data.csv`.
    pub fn from_env(print_data: bool) -> Self {
        let data_path = env::var_os(DATA_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        AnalyzerConfig::new(data_path, print_data)
    }

    pub fn with_data_path<P: Into<PathBuf>>(mut self, data_path: Option<P>) -> Self {
        if let Some(p) = data_path {
            self.data_path = p.into();
        }
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig::new(DEFAULT_DATA_PATH, true)
    }
}
