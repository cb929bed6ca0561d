//! Timeframe vocabulary.
//!
//! Chart timeframes come from a fixed set of labels. Each label resolves to a
//! [`Category`] through an explicit lookup table, so a label that is not in the
//! table is an error instead of silently falling through to yearly bars.

use crate::domain::error::CarbondashError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Week,
    Month,
    Year,
}

impl Category {
    /// Number of most recent bars a chart shows before the user scrolls.
    pub fn initial_bars(self) -> usize {
        match self {
            Category::Week => 8,
            Category::Month => 6,
            Category::Year => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Week => write!(f, "week"),
            Category::Month => write!(f, "month"),
            Category::Year => write!(f, "year"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timeframe {
    pub label: &'static str,
    pub alias: &'static str,
    pub category: Category,
}

pub const TIMEFRAMES: [Timeframe; 7] = [
    Timeframe {
        label: "1주",
        alias: "1w",
        category: Category::Week,
    },
    Timeframe {
        label: "1개월",
        alias: "1mo",
        category: Category::Month,
    },
    Timeframe {
        label: "3개월",
        alias: "3mo",
        category: Category::Month,
    },
    Timeframe {
        label: "6개월",
        alias: "6mo",
        category: Category::Month,
    },
    Timeframe {
        label: "1년",
        alias: "1y",
        category: Category::Year,
    },
    Timeframe {
        label: "3년",
        alias: "3y",
        category: Category::Year,
    },
    Timeframe {
        label: "5년",
        alias: "5y",
        category: Category::Year,
    },
];

pub const DEFAULT_TIMEFRAME: Timeframe = TIMEFRAMES[0];

impl Timeframe {
    pub fn from_label(label: &str) -> Result<Self, CarbondashError> {
        let trimmed = label.trim();
        TIMEFRAMES
            .iter()
            .find(|tf| tf.label == trimmed || tf.alias.eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| CarbondashError::UnknownTimeframe {
                label: label.to_string(),
            })
    }
}

impl FromStr for Timeframe {
    type Err = CarbondashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
