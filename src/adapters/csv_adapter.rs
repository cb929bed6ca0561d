//! CSV file series adapter.
//!
//! One file per instrument, `<base>/<kind>.csv`, with a `date,value` header.

use crate::domain::error::CarbondashError;
use crate::domain::instrument::{ALL_INSTRUMENTS, Instrument};
use crate::domain::series::{Series, coerce_str};
use crate::ports::data_port::SeriesPort;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, instrument: Instrument) -> PathBuf {
        self.base_path.join(format!("{}.csv", instrument.kind()))
    }
}

impl SeriesPort for CsvAdapter {
    fn fetch_series(&self, instrument: Instrument) -> Result<Series, CarbondashError> {
        let path = self.csv_path(instrument);
        let content = fs::read_to_string(&path).map_err(|e| CarbondashError::DataSource {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .from_reader(content.as_bytes());
        let mut series = Series::empty();

        for (line, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| CarbondashError::DataSource {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date = record.get(0).ok_or_else(|| CarbondashError::DataSource {
                reason: "missing date column".into(),
            })?;
            let raw_value = record.get(1).ok_or_else(|| CarbondashError::DataSource {
                reason: "missing value column".into(),
            })?;

            let value = coerce_str(raw_value);
            if value.is_nan() {
                log::warn!(
                    "{}: non-numeric value {:?} on row {}",
                    path.display(),
                    raw_value,
                    line + 1
                );
            }

            series.dates.push(date.to_string());
            series.values.push(value);
        }

        log::debug!("loaded {} rows from {}", series.len(), path.display());
        Ok(series)
    }

    fn list_instruments(&self) -> Result<Vec<Instrument>, CarbondashError> {
        if !self.base_path.is_dir() {
            return Err(CarbondashError::DataSource {
                reason: format!("{} is not a directory", self.base_path.display()),
            });
        }

        Ok(ALL_INSTRUMENTS
            .iter()
            .copied()
            .filter(|&i| self.csv_path(i).is_file())
            .collect())
    }

    fn get_data_range(
        &self,
        instrument: Instrument,
    ) -> Result<Option<(String, String, usize)>, CarbondashError> {
        Ok(self.fetch_series(instrument)?.date_range())
    }
}
