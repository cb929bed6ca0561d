//! Instruments shown on the dashboard.

use crate::domain::error::CarbondashError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Instrument {
    Coal,
    NaturalGas,
    Wti,
    Ets,
}

pub const ALL_INSTRUMENTS: [Instrument; 4] = [
    Instrument::Coal,
    Instrument::NaturalGas,
    Instrument::Wti,
    Instrument::Ets,
];

impl Instrument {
    /// Short identifier, also the data file stem.
    pub fn kind(self) -> &'static str {
        match self {
            Instrument::Coal => "coal",
            Instrument::NaturalGas => "nag",
            Instrument::Wti => "wti",
            Instrument::Ets => "ets",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Instrument::Coal => "석탄",
            Instrument::NaturalGas => "천연가스",
            Instrument::Wti => "WTI 원유",
            Instrument::Ets => "탄소배출권 (KAU)",
        }
    }

    pub fn currency_symbol(self) -> &'static str {
        match self {
            Instrument::Ets => "₩",
            Instrument::Coal | Instrument::NaturalGas | Instrument::Wti => "$",
        }
    }

    /// Recognise an instrument from a card title such as `탄소배출권 (KAU24)`.
    pub fn from_title(title: &str) -> Option<Self> {
        if title.contains("KAU") || title.contains("탄소배출권") || title.contains("ETS") {
            Some(Instrument::Ets)
        } else if title.contains("석탄") {
            Some(Instrument::Coal)
        } else if title.contains("천연가스") {
            Some(Instrument::NaturalGas)
        } else if title.contains("WTI") || title.contains("석유") {
            Some(Instrument::Wti)
        } else {
            None
        }
    }
}

impl FromStr for Instrument {
    type Err = CarbondashError;

    /// Accepts a kind (`coal`, `NAG`, ...) or a title the kind can be
    /// recognised from.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_INSTRUMENTS
            .iter()
            .copied()
            .find(|i| i.kind().eq_ignore_ascii_case(needle))
            .or_else(|| Instrument::from_title(needle))
            .ok_or_else(|| CarbondashError::UnknownInstrument {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
