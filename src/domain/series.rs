//! Parallel date/value series.

use crate::domain::calendar_date::CalendarDate;
use serde::Serialize;

/// A price series as two parallel vectors: `dates[i]` belongs to `values[i]`.
///
/// Fields are public so callers can hand over whatever an upstream source
/// produced; [`Series::is_well_formed`] tells whether the shapes agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    pub dates: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(dates: Vec<String>, values: Vec<f64>) -> Self {
        Self { dates, values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.dates.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_well_formed(&self) -> bool {
        self.dates.len() == self.values.len()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// The last `n` points, or the whole series when it is shorter.
    pub fn tail(&self, n: usize) -> Series {
        let len = self.len();
        let start = len.saturating_sub(n);
        Series {
            dates: self.dates[start..len].to_vec(),
            values: self.values[start..len].to_vec(),
        }
    }

    /// Earliest and latest well-formed date (original strings) and the entry
    /// count. `None` when no entry has a valid date.
    pub fn date_range(&self) -> Option<(String, String, usize)> {
        let mut first: Option<(CalendarDate, &str)> = None;
        let mut last: Option<(CalendarDate, &str)> = None;

        for raw in &self.dates[..self.len()] {
            let Ok(date) = CalendarDate::parse(raw) else {
                continue;
            };
            if first.is_none_or(|(d, _)| date < d) {
                first = Some((date, raw.as_str()));
            }
            if last.is_none_or(|(d, _)| date >= d) {
                last = Some((date, raw.as_str()));
            }
        }

        match (first, last) {
            (Some((_, f)), Some((_, l))) => Some((f.to_string(), l.to_string(), self.len())),
            _ => None,
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut series = Series::empty();
        for (date, value) in iter {
            series.dates.push(date.into());
            series.values.push(value);
        }
        series
    }
}

/// Numeric coercion of a text cell: blank is 0, unparsable is NaN.
pub fn coerce_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Numeric coercion of a JSON document value.
pub fn coerce_json(value: &serde_json::Value) -> f64 {
    use serde_json::Value;
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}
