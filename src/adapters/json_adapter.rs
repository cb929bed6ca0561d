//! JSON document series adapter.
//!
//! One document per instrument, `<base>/<kind>.json`, in either of two shapes:
//!
//! - a date-keyed map as the remote price store keeps it:
//!   `{"2024-01-05": "10.5", "2024-01-12": 11.0, ...}`
//! - parallel arrays: `{"dates": ["2024-01-05", ...], "values": [10.5, ...]}`

use crate::domain::error::CarbondashError;
use crate::domain::instrument::{ALL_INSTRUMENTS, Instrument};
use crate::domain::series::{Series, coerce_json};
use crate::ports::data_port::SeriesPort;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnDocument {
    dates: Option<Vec<String>>,
    values: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeriesDocument {
    Columns(ColumnDocument),
    ByDate(BTreeMap<String, serde_json::Value>),
}

impl SeriesDocument {
    /// A column document missing either array becomes a deliberately
    /// mismatched series, which resamples to nothing. Date-keyed entries come
    /// out in key order.
    fn into_series(self) -> Series {
        match self {
            SeriesDocument::Columns(doc) => {
                let values = doc
                    .values
                    .map(|vs| vs.iter().map(coerce_json).collect::<Vec<_>>());
                match (doc.dates, values) {
                    (Some(dates), Some(values)) => Series::new(dates, values),
                    (Some(dates), None) => Series::new(dates, Vec::new()),
                    (None, Some(values)) => Series::new(Vec::new(), values),
                    (None, None) => Series::empty(),
                }
            }
            SeriesDocument::ByDate(entries) => entries
                .iter()
                .map(|(date, value)| (date.as_str(), coerce_json(value)))
                .collect(),
        }
    }
}

pub struct JsonAdapter {
    base_path: PathBuf,
}

impl JsonAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn json_path(&self, instrument: Instrument) -> PathBuf {
        self.base_path.join(format!("{}.json", instrument.kind()))
    }
}

impl SeriesPort for JsonAdapter {
    fn fetch_series(&self, instrument: Instrument) -> Result<Series, CarbondashError> {
        let path = self.json_path(instrument);
        let content = fs::read_to_string(&path).map_err(|e| CarbondashError::DataSource {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let doc: SeriesDocument =
            serde_json::from_str(&content).map_err(|e| CarbondashError::DataSource {
                reason: format!("invalid JSON in {}: {}", path.display(), e),
            })?;

        let series = doc.into_series();
        if !series.is_well_formed() {
            log::warn!(
                "{}: {} dates but {} values",
                path.display(),
                series.dates.len(),
                series.values.len()
            );
        }
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
            .filter(|&i| self.json_path(i).is_file())
            .collect())
    }

    fn get_data_range(
        &self,
        instrument: Instrument,
    ) -> Result<Option<(String, String, usize)>, CarbondashError> {
        Ok(self.fetch_series(instrument)?.date_range())
    }
}
