//! Summary statistics over a (usually resampled) series.

use crate::domain::series::Series;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub average: Option<f64>,
    pub latest: Option<f64>,
}

impl SeriesSummary {
    pub fn of(series: &Series) -> Self {
        let values = &series.values[..series.len()];
        if values.is_empty() {
            return Self::default();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let average = values.iter().sum::<f64>() / values.len() as f64;

        Self {
            count: values.len(),
            min: Some(min),
            max: Some(max),
            average: Some(average),
            latest: values.last().copied(),
        }
    }
}
