//! Configuration validation.
//!
//! Every key is optional, but a key that is present must hold a usable value.

use crate::domain::error::CarbondashError;
use crate::domain::settings::{FileFormat, parse_policy};
use crate::domain::timeframe::Timeframe;
use crate::ports::config_port::ConfigPort;

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), CarbondashError> {
    validate_data_dir(config)?;
    validate_format(config, "data")?;
    validate_timeframe(config)?;
    validate_malformed_dates(config)?;
    validate_format(config, "export")?;
    validate_tail(config)?;
    Ok(())
}

fn validate_data_dir(config: &dyn ConfigPort) -> Result<(), CarbondashError> {
    match config.get_string("data", "dir") {
        Some(dir) if dir.trim().is_empty() => Err(CarbondashError::ConfigInvalid {
            section: "data".to_string(),
            key: "dir".to_string(),
            reason: "dir must not be empty".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_format(config: &dyn ConfigPort, section: &str) -> Result<(), CarbondashError> {
    match config.get_string(section, "format") {
        Some(value) if FileFormat::parse(&value).is_none() => {
            Err(CarbondashError::ConfigInvalid {
                section: section.to_string(),
                key: "format".to_string(),
                reason: format!("unsupported format '{}', expected csv or json", value),
            })
        }
        _ => Ok(()),
    }
}

fn validate_timeframe(config: &dyn ConfigPort) -> Result<(), CarbondashError> {
    match config.get_string("resample", "timeframe") {
        Some(label) => Timeframe::from_label(&label).map(|_| ()).map_err(|_| {
            CarbondashError::ConfigInvalid {
                section: "resample".to_string(),
                key: "timeframe".to_string(),
                reason: format!("unknown timeframe '{}'", label),
            }
        }),
        None => Ok(()),
    }
}

fn validate_malformed_dates(config: &dyn ConfigPort) -> Result<(), CarbondashError> {
    match config.get_string("resample", "malformed_dates") {
        Some(value) if parse_policy(&value).is_none() => Err(CarbondashError::ConfigInvalid {
            section: "resample".to_string(),
            key: "malformed_dates".to_string(),
            reason: "malformed_dates must be drop or reject".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_tail(config: &dyn ConfigPort) -> Result<(), CarbondashError> {
    if config.get_int("export", "tail", 0) < 0 {
        return Err(CarbondashError::ConfigInvalid {
            section: "export".to_string(),
            key: "tail".to_string(),
            reason: "tail must be non-negative".to_string(),
        });
    }
    Ok(())
}
