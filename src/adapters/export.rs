//! CSV and JSON writers for resampled series.

use crate::domain::error::CarbondashError;
use crate::domain::instrument::Instrument;
use crate::domain::series::Series;
use crate::domain::settings::FileFormat;
use crate::domain::timeframe::Timeframe;
use crate::ports::export_port::ExportPort;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Serialize)]
struct ExportDocument<'a> {
    instrument: &'a str,
    timeframe: &'a str,
    category: String,
    dates: &'a [String],
    values: &'a [f64],
}

fn export_error(e: impl std::fmt::Display) -> CarbondashError {
    CarbondashError::DataSource {
        reason: format!("export failed: {}", e),
    }
}

/// `date,value` rows with a header line.
pub fn write_csv<W: Write>(series: &Series, writer: W) -> Result<(), CarbondashError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "value"]).map_err(export_error)?;
    for (date, value) in series.points() {
        wtr.write_record([date, value.to_string().as_str()])
            .map_err(export_error)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Pretty-printed document; `NaN` values are written as `null`.
pub fn write_json<W: Write>(
    series: &Series,
    instrument: Instrument,
    timeframe: Timeframe,
    mut writer: W,
) -> Result<(), CarbondashError> {
    let len = series.len();
    let doc = ExportDocument {
        instrument: instrument.kind(),
        timeframe: timeframe.label,
        category: timeframe.category.to_string(),
        dates: &series.dates[..len],
        values: &series.values[..len],
    };
    serde_json::to_writer_pretty(&mut writer, &doc).map_err(export_error)?;
    writeln!(writer)?;
    Ok(())
}

pub struct CsvExporter;

impl ExportPort for CsvExporter {
    fn write(
        &self,
        series: &Series,
        _instrument: Instrument,
        _timeframe: Timeframe,
        output_path: &str,
    ) -> Result<(), CarbondashError> {
        let file = File::create(output_path)?;
        write_csv(series, BufWriter::new(file))
    }
}

pub struct JsonExporter;

impl ExportPort for JsonExporter {
    fn write(
        &self,
        series: &Series,
        instrument: Instrument,
        timeframe: Timeframe,
        output_path: &str,
    ) -> Result<(), CarbondashError> {
        let file = File::create(output_path)?;
        write_json(series, instrument, timeframe, BufWriter::new(file))
    }
}

pub fn exporter_for(format: FileFormat) -> Box<dyn ExportPort> {
    match format {
        FileFormat::Csv => Box::new(CsvExporter),
        FileFormat::Json => Box::new(JsonExporter),
    }
}
