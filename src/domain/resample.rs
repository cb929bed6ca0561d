//! Resampling of daily close series into weekly, monthly and yearly points.
//!
//! - Week: Friday observations only. A week without a Friday contributes nothing.
//! - Month: the month-end observation, else the latest one in that month.
//! - Year: the December 31 observation, else the latest one in that year.
//!
//! The full history is kept; trimming to a visible window is left to the caller.

use crate::domain::calendar_date::CalendarDate;
use crate::domain::error::CarbondashError;
use crate::domain::series::Series;
use crate::domain::timeframe::Category;
use std::collections::BTreeMap;

/// What to do with a date string that is not a valid `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedDatePolicy {
    /// Skip the entry and its value.
    #[default]
    Drop,
    /// Fail the whole call.
    Reject,
}

#[derive(Debug, Clone, Copy)]
struct Observation<'a> {
    date: CalendarDate,
    raw: &'a str,
    value: f64,
}

#[derive(Debug, Default)]
struct Slot {
    anchor: Option<usize>,
    latest: Option<usize>,
}

impl Slot {
    fn pick(&self) -> Option<usize> {
        self.anchor.or(self.latest)
    }
}

/// Resample `dates`/`values` for `category`, dropping malformed dates.
///
/// Mismatched lengths and empty input give an empty series.
pub fn resample<S: AsRef<str>>(dates: &[S], values: &[f64], category: Category) -> Series {
    try_resample(dates, values, category, MalformedDatePolicy::Drop).unwrap_or_default()
}

/// Like [`resample`], with the malformed-date handling chosen by `policy`.
pub fn try_resample<S: AsRef<str>>(
    dates: &[S],
    values: &[f64],
    category: Category,
    policy: MalformedDatePolicy,
) -> Result<Series, CarbondashError> {
    if dates.len() != values.len() {
        log::debug!(
            "shape mismatch: {} dates vs {} values, returning empty series",
            dates.len(),
            values.len()
        );
        return Ok(Series::empty());
    }
    if dates.is_empty() {
        return Ok(Series::empty());
    }

    let observations = sorted_observations(dates, values, policy)?;

    let selected: Vec<&Observation> = match category {
        Category::Week => observations.iter().filter(|o| o.date.is_friday()).collect(),
        Category::Month => anchored(
            &observations,
            |d| (d.year(), d.month()),
            CalendarDate::is_month_end,
        ),
        Category::Year => anchored(&observations, |d| d.year(), CalendarDate::is_year_end),
    };

    log::debug!(
        "resampled {} points into {} {} points",
        dates.len(),
        selected.len(),
        category
    );

    Ok(selected
        .into_iter()
        .map(|o| (o.raw, o.value))
        .collect())
}

impl Series {
    pub fn resample(&self, category: Category) -> Series {
        resample(&self.dates, &self.values, category)
    }
}

fn sorted_observations<'a, S: AsRef<str>>(
    dates: &'a [S],
    values: &[f64],
    policy: MalformedDatePolicy,
) -> Result<Vec<Observation<'a>>, CarbondashError> {
    let mut observations = Vec::with_capacity(dates.len());

    for (index, (raw, &value)) in dates.iter().zip(values).enumerate() {
        let raw = raw.as_ref();
        match CalendarDate::parse(raw) {
            Ok(date) => observations.push(Observation { date, raw, value }),
            Err(source) => match policy {
                MalformedDatePolicy::Drop => {
                    log::warn!("dropping entry {index}: {source} ({raw:?})");
                }
                MalformedDatePolicy::Reject => {
                    return Err(CarbondashError::MalformedDate {
                        index,
                        value: raw.to_string(),
                        source,
                    });
                }
            },
        }
    }

    // stable: equal dates keep their input order
    observations.sort_by_key(|o| o.date);
    Ok(observations)
}

/// One point per bucket: the anchor observation if the bucket has one,
/// otherwise its latest observation. Later duplicates win both roles.
fn anchored<'o, 'a, K, F, A>(
    observations: &'o [Observation<'a>],
    key: F,
    is_anchor: A,
) -> Vec<&'o Observation<'a>>
where
    K: Ord,
    F: Fn(&CalendarDate) -> K,
    A: Fn(&CalendarDate) -> bool,
{
    let mut buckets: BTreeMap<K, Slot> = BTreeMap::new();

    for (i, obs) in observations.iter().enumerate() {
        let slot = buckets.entry(key(&obs.date)).or_default();
        let newer = slot
            .latest
            .is_none_or(|prev| obs.date >= observations[prev].date);
        if newer {
            slot.latest = Some(i);
        }
        if is_anchor(&obs.date) {
            slot.anchor = Some(i);
        }
    }

    buckets
        .values()
        .filter_map(Slot::pick)
        .map(|i| &observations[i])
        .collect()
}
