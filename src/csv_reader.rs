use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};

/// Columns every input file has to carry. Any other column is ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "age",
    "sex",
    "race",
    "education",
    "occupation",
    "native-country",
    "hours-per-week",
    "salary",
];

/// One row of the census table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub age: u32,
    pub sex: String,
    pub race: String,
    pub education: String,
    pub occupation: String,
    #[serde(rename = "native-country")]
    pub native_country: String,
    #[serde(rename = "hours-per-week")]
    pub hours_per_week: u32,
    pub salary: String,
}

pub fn read_data<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalysisError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_from(file)?;
    info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

pub fn read_from<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    debug!(columns = headers.len(), "read header row");
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(AnalysisError::MissingColumn(column));
        }
    }

    let mut records = Vec::<Record>::new();
    for result in rdr.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    Ok(records)
}
