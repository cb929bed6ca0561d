//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::export::{exporter_for, write_csv, write_json};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_adapter::JsonAdapter;
use crate::domain::config_validation::validate_config;
use crate::domain::error::CarbondashError;
use crate::domain::instrument::Instrument;
use crate::domain::resample::{MalformedDatePolicy, try_resample};
use crate::domain::series::Series;
use crate::domain::settings::{FileFormat, Settings, parse_policy};
use crate::domain::summary::SeriesSummary;
use crate::domain::timeframe::{TIMEFRAMES, Timeframe};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::SeriesPort;

#[derive(Parser, Debug)]
#[command(
    name = "carbondash",
    about = "Resample commodity and carbon-credit price series"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resample one instrument into weekly, monthly or yearly points
    Resample {
        /// coal, nag, wti or ets, or a title such as 탄소배출권
        #[arg(short, long)]
        instrument: String,
        /// Timeframe label, e.g. 1주, 3개월, 1년 (or 1w, 3mo, 1y)
        #[arg(short, long)]
        timeframe: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Layout of the series files in the data directory
        #[arg(long, value_enum)]
        source: Option<FileFormat>,
        /// Output layout
        #[arg(short, long, value_enum)]
        format: Option<FileFormat>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep only the most recent N points; no value means the timeframe's
        /// initial bar count, 0 keeps everything
        #[arg(long, num_args = 0..=1)]
        tail: Option<Option<usize>>,
        /// Fail on malformed dates instead of dropping them
        #[arg(long)]
        strict: bool,
    },
    /// Show the data range of each instrument
    Info {
        #[arg(short, long)]
        instrument: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long, value_enum)]
        source: Option<FileFormat>,
    },
    /// List the supported timeframes
    Timeframes,
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub timeframe: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub source: Option<FileFormat>,
    pub format: Option<FileFormat>,
    pub tail: Option<Option<usize>>,
    pub strict: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Resample {
            instrument,
            timeframe,
            config,
            data_dir,
            source,
            format,
            output,
            tail,
            strict,
        } => {
            let overrides = Overrides {
                timeframe,
                data_dir,
                source,
                format,
                tail,
                strict,
            };
            run_resample(&instrument, config.as_ref(), &overrides, output.as_ref())
        }
        Command::Info {
            instrument,
            config,
            data_dir,
            source,
        } => {
            let overrides = Overrides {
                data_dir,
                source,
                ..Overrides::default()
            };
            run_info(instrument.as_deref(), config.as_ref(), &overrides)
        }
        Command::Timeframes => run_timeframes(),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = CarbondashError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Text printed for a failed command. A malformed date is shown with a
/// caret under the offending character.
pub fn error_message(err: &CarbondashError) -> String {
    match err {
        CarbondashError::MalformedDate { index, value, source } => format!(
            "error: malformed date at index {}:\n{}",
            index,
            source.display_with_context(value)
        ),
        other => format!("error: {other}"),
    }
}

fn report(err: CarbondashError) -> ExitCode {
    eprintln!("{}", error_message(&err));
    (&err).into()
}

fn require_data_dir(settings: &Settings) -> Result<PathBuf, CarbondashError> {
    settings
        .data_dir
        .clone()
        .ok_or_else(|| CarbondashError::ConfigMissing {
            section: "data".into(),
            key: "dir".into(),
        })
}

/// Resolve settings: command line first, then the config file, then defaults.
pub fn build_settings(
    config: Option<&dyn ConfigPort>,
    overrides: &Overrides,
) -> Result<Settings, CarbondashError> {
    let mut settings = Settings::default();

    if let Some(config) = config {
        validate_config(config)?;

        if let Some(dir) = config.get_string("data", "dir") {
            settings.data_dir = Some(PathBuf::from(dir.trim()));
        }
        if let Some(format) = config
            .get_string("data", "format")
            .and_then(|v| FileFormat::parse(&v))
        {
            settings.data_format = format;
        }
        if let Some(label) = config.get_string("resample", "timeframe") {
            settings.timeframe = Timeframe::from_label(&label)?;
        }
        if let Some(policy) = config
            .get_string("resample", "malformed_dates")
            .and_then(|v| parse_policy(&v))
        {
            settings.malformed_dates = policy;
        }
        if let Some(format) = config
            .get_string("export", "format")
            .and_then(|v| FileFormat::parse(&v))
        {
            settings.export_format = format;
        }
        let tail = config.get_int("export", "tail", 0);
        if tail > 0 {
            settings.tail = Some(tail as usize);
        }
        settings.print_summary = config.get_bool("export", "summary", true);
    }

    if let Some(label) = &overrides.timeframe {
        settings.timeframe = Timeframe::from_label(label)?;
    }
    if let Some(dir) = &overrides.data_dir {
        settings.data_dir = Some(dir.clone());
    }
    if let Some(format) = overrides.source {
        settings.data_format = format;
    }
    if let Some(format) = overrides.format {
        settings.export_format = format;
    }
    match overrides.tail {
        Some(Some(0)) => settings.tail = None,
        Some(Some(n)) => settings.tail = Some(n),
        Some(None) => settings.tail = Some(settings.timeframe.category.initial_bars()),
        None => {}
    }
    if overrides.strict {
        settings.malformed_dates = MalformedDatePolicy::Reject;
    }

    Ok(settings)
}

pub fn open_source(dir: &Path, format: FileFormat) -> Box<dyn SeriesPort> {
    match format {
        FileFormat::Csv => Box::new(CsvAdapter::new(dir.to_path_buf())),
        FileFormat::Json => Box::new(JsonAdapter::new(dir.to_path_buf())),
    }
}

fn resolve_settings(
    config_path: Option<&PathBuf>,
    overrides: &Overrides,
) -> Result<Settings, ExitCode> {
    let adapter = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            Some(load_config(path)?)
        }
        None => None,
    };

    build_settings(adapter.as_ref().map(|a| a as &dyn ConfigPort), overrides).map_err(report)
}

fn run_resample(
    instrument: &str,
    config_path: Option<&PathBuf>,
    overrides: &Overrides,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    let instrument: Instrument = match instrument.parse() {
        Ok(i) => i,
        Err(e) => return report(e),
    };

    let settings = match resolve_settings(config_path, overrides) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let data_dir = match require_data_dir(&settings) {
        Ok(dir) => dir,
        Err(e) => return report(e),
    };

    let port = open_source(&data_dir, settings.data_format);
    run_resample_pipeline(port.as_ref(), instrument, &settings, output_path)
}

/// Fetch, resample and trim one instrument.
pub fn resample_instrument(
    port: &dyn SeriesPort,
    instrument: Instrument,
    settings: &Settings,
) -> Result<Series, CarbondashError> {
    let raw = port.fetch_series(instrument)?;
    if raw.dates.is_empty() && raw.values.is_empty() {
        return Err(CarbondashError::NoData {
            instrument: instrument.to_string(),
        });
    }

    let resampled = try_resample(
        &raw.dates,
        &raw.values,
        settings.timeframe.category,
        settings.malformed_dates,
    )?;

    Ok(match settings.tail {
        Some(n) => resampled.tail(n),
        None => resampled,
    })
}

pub fn run_resample_pipeline(
    port: &dyn SeriesPort,
    instrument: Instrument,
    settings: &Settings,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    eprintln!(
        "Resampling {} ({}) to {} ({})",
        instrument.title(),
        instrument,
        settings.timeframe,
        settings.timeframe.category
    );

    let series = match resample_instrument(port, instrument, settings) {
        Ok(s) => s,
        Err(e) => return report(e),
    };

    if series.is_empty() {
        eprintln!("warning: no {} points for {}", settings.timeframe.category, instrument);
    }

    if settings.print_summary {
        print_summary(&series, instrument);
    }

    let written = match output_path {
        Some(path) => {
            let path_str = path.display().to_string();
            exporter_for(settings.export_format)
                .write(&series, instrument, settings.timeframe, &path_str)
                .map(|()| eprintln!("\nSeries written to: {}", path_str))
        }
        None => {
            let stdout = io::stdout();
            match settings.export_format {
                FileFormat::Csv => write_csv(&series, stdout.lock()),
                FileFormat::Json => {
                    write_json(&series, instrument, settings.timeframe, stdout.lock())
                }
            }
        }
    };

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn print_summary(series: &Series, instrument: Instrument) {
    let summary = SeriesSummary::of(series);
    let symbol = instrument.currency_symbol();
    let fmt = |v: Option<f64>| match v {
        Some(v) => format!("{}{:.2}", symbol, v),
        None => "-".to_string(),
    };

    eprintln!("\n=== Summary ===");
    eprintln!("Points:   {}", summary.count);
    if let (Some(first), Some(last)) = (series.dates.first(), series.dates.last()) {
        eprintln!("Range:    {} to {}", first, last);
    }
    eprintln!("Latest:   {}", fmt(summary.latest));
    eprintln!("High:     {}", fmt(summary.max));
    eprintln!("Low:      {}", fmt(summary.min));
    eprintln!("Average:  {}", fmt(summary.average));
}

fn run_info(
    instrument: Option<&str>,
    config_path: Option<&PathBuf>,
    overrides: &Overrides,
) -> ExitCode {
    let settings = match resolve_settings(config_path, overrides) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let data_dir = match require_data_dir(&settings) {
        Ok(dir) => dir,
        Err(e) => return report(e),
    };

    let port = open_source(&data_dir, settings.data_format);
    run_info_pipeline(port.as_ref(), instrument)
}

pub fn run_info_pipeline(port: &dyn SeriesPort, instrument: Option<&str>) -> ExitCode {
    let instruments = match instrument {
        Some(name) => match name.parse::<Instrument>() {
            Ok(i) => vec![i],
            Err(e) => return report(e),
        },
        None => match port.list_instruments() {
            Ok(list) => list,
            Err(e) => return report(e),
        },
    };

    if instruments.is_empty() {
        eprintln!("No instrument data found");
        return ExitCode::SUCCESS;
    }

    for i in &instruments {
        match port.get_data_range(*i) {
            Ok(Some((first, last, count))) => {
                println!("{}: {} entries, {} to {}", i, count, first, last);
            }
            Ok(None) => {
                eprintln!("{}: no data found", i);
            }
            Err(e) => {
                eprintln!("error querying {}: {}", i, e);
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_timeframes() -> ExitCode {
    println!("{:<8} {:<6} {:<6} {}", "label", "alias", "period", "initial bars");
    for tf in &TIMEFRAMES {
        println!(
            "{:<8} {:<6} {:<6} {}",
            tf.label,
            tf.alias,
            tf.category,
            tf.category.initial_bars()
        );
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let settings = match build_settings(Some(&adapter as &dyn ConfigPort), &Overrides::default()) {
        Ok(s) => s,
        Err(e) => return report(e),
    };

    eprintln!("\nResolved settings:");
    match &settings.data_dir {
        Some(dir) => eprintln!("  data dir:        {}", dir.display()),
        None => eprintln!("  data dir:        (not set, --data-dir required)"),
    }
    eprintln!("  data format:     {}", settings.data_format.extension());
    eprintln!(
        "  timeframe:       {} ({})",
        settings.timeframe, settings.timeframe.category
    );
    eprintln!("  malformed dates: {:?}", settings.malformed_dates);
    eprintln!("  export format:   {}", settings.export_format.extension());
    match settings.tail {
        Some(n) => eprintln!("  tail:            {}", n),
        None => eprintln!("  tail:            all"),
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
