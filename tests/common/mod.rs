#![allow(dead_code)]

use carbondash::domain::error::CarbondashError;
use carbondash::domain::instrument::Instrument;
use carbondash::domain::series::Series;
use carbondash::ports::data_port::SeriesPort;
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct MockSeriesPort {
    pub data: HashMap<Instrument, Series>,
    pub errors: HashMap<Instrument, String>,
}

impl MockSeriesPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, instrument: Instrument, series: Series) -> Self {
        self.data.insert(instrument, series);
        self
    }

    pub fn with_error(mut self, instrument: Instrument, reason: &str) -> Self {
        self.errors.insert(instrument, reason.to_string());
        self
    }
}

impl SeriesPort for MockSeriesPort {
    fn fetch_series(&self, instrument: Instrument) -> Result<Series, CarbondashError> {
        if let Some(reason) = self.errors.get(&instrument) {
            return Err(CarbondashError::DataSource {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(&instrument).cloned().unwrap_or_default())
    }

    fn list_instruments(&self) -> Result<Vec<Instrument>, CarbondashError> {
        let mut list: Vec<Instrument> = self.data.keys().copied().collect();
        list.sort();
        Ok(list)
    }

    fn get_data_range(
        &self,
        instrument: Instrument,
    ) -> Result<Option<(String, String, usize)>, CarbondashError> {
        Ok(self.fetch_series(instrument)?.date_range())
    }
}

pub fn series(points: &[(&str, f64)]) -> Series {
    points.iter().map(|&(d, v)| (d, v)).collect()
}

pub fn strs(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

/// Every calendar day from `start`, valued by day index.
pub fn daily_series(start: &str, days: usize) -> Series {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    (0..days)
        .map(|i| {
            let date = start + chrono::Duration::days(i as i64);
            (date.format("%Y-%m-%d").to_string(), i as f64)
        })
        .collect()
}

/// Weekdays only, the way an exchange publishes closes.
pub fn business_day_series(start: &str, days: usize) -> Series {
    use chrono::{Datelike, Weekday};
    let full = daily_series(start, days);
    full.points()
        .filter(|(d, _)| {
            let date = NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap();
            !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
        })
        .map(|(d, v)| (d.to_string(), v))
        .collect()
}
