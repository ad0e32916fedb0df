use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error("cannot open dataset {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset row")]
    Parse(#[from] csv::Error),
    #[error("row {row}: month {month} is outside 1..=12")]
    InvalidMonth { row: usize, month: u8 },
    #[error("row {row}: {column} is not a finite number")]
    NotFinite { row: usize, column: &'static str },
}

/// One row of the weather station export
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(rename = "mes")]
    pub month: u8,
    #[serde(rename = "temperatura_c")]
    pub temperature_c: f64,
    #[serde(rename = "humedad_pct")]
    pub humidity_pct: f64,
}

/// Load every observation from a CSV file with a header row
pub fn load_observations(path: impl AsRef<Path>) -> Result<Vec<Observation>, ClimateError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ClimateError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let observations = read_observations(file)?;
    log::info!(
        "loaded {} observations from {}",
        observations.len(),
        path.display()
    );
    Ok(observations)
}

/// Parse observations from any CSV source; columns other than the three
/// known ones are ignored
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>, ClimateError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut observations = Vec::new();
    for (i, record) in csv_reader.deserialize::<Observation>().enumerate() {
        let observation = record?;
        // Header is line 1, first data row is row 2
        let row = i + 2;
        if !(1..=12).contains(&observation.month) {
            return Err(ClimateError::InvalidMonth {
                row,
                month: observation.month,
            });
        }
        if !observation.temperature_c.is_finite() {
            return Err(ClimateError::NotFinite {
                row,
                column: "temperatura_c",
            });
        }
        if !observation.humidity_pct.is_finite() {
            return Err(ClimateError::NotFinite {
                row,
                column: "humedad_pct",
            });
        }
        observations.push(observation);
    }
    Ok(observations)
}
