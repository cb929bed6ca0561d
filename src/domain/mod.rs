//! Core domain types and logic.

pub mod calendar_date;
pub mod timeframe;
pub mod series;
pub mod resample;
pub mod instrument;
pub mod summary;
pub mod settings;
pub mod config_validation;
pub mod error;
