//! Resampled series export port trait.

use crate::domain::error::CarbondashError;
use crate::domain::instrument::Instrument;
use crate::domain::series::Series;
use crate::domain::timeframe::Timeframe;

/// Port for writing a resampled series somewhere outside the process.
pub trait ExportPort {
    fn write(
        &self,
        series: &Series,
        instrument: Instrument,
        timeframe: Timeframe,
        output_path: &str,
    ) -> Result<(), CarbondashError>;
}
