//! Resolved run settings.

use crate::domain::resample::MalformedDatePolicy;
use crate::domain::timeframe::{DEFAULT_TIMEFRAME, Timeframe};
use std::path::PathBuf;

/// On-disk layout of series files (and of exports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FileFormat {
    #[default]
    Csv,
    Json,
}

impl FileFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
        }
    }
}

pub fn parse_policy(value: &str) -> Option<MalformedDatePolicy> {
    match value.trim().to_lowercase().as_str() {
        "drop" => Some(MalformedDatePolicy::Drop),
        "reject" => Some(MalformedDatePolicy::Reject),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub data_format: FileFormat,
    pub timeframe: Timeframe,
    pub malformed_dates: MalformedDatePolicy,
    pub export_format: FileFormat,
    /// Keep only this many most recent points in the output; `None` keeps all.
    pub tail: Option<usize>,
    pub print_summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            data_format: FileFormat::Csv,
            timeframe: DEFAULT_TIMEFRAME,
            malformed_dates: MalformedDatePolicy::Drop,
            export_format: FileFormat::Csv,
            tail: None,
            print_summary: true,
        }
    }
}
