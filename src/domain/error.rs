//! Domain error types.

/// A date string that does not follow the fixed `YYYY-MM-DD` layout, with the
/// byte offset of the first offending character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date at position {position}: {message}")]
pub struct DateParseError {
    pub message: String,
    pub position: usize,
}

impl DateParseError {
    pub(crate) fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Format the error with a caret pointing at the error position in the input.
    pub fn display_with_context(&self, input: &str) -> String {
        let caret = " ".repeat(self.position) + "^";
        format!(
            "{input}\n{caret}\n{err}",
            input = input,
            caret = caret,
            err = self
        )
    }
}

/// Top-level error type for carbondash.
#[derive(Debug, thiserror::Error)]
pub enum CarbondashError {
    #[error("data source error: {reason}")]
    DataSource { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("unknown timeframe '{label}'")]
    UnknownTimeframe { label: String },

    #[error("unknown instrument '{name}'")]
    UnknownInstrument { name: String },

    #[error("malformed date '{value}' at index {index}: {source}")]
    MalformedDate {
        index: usize,
        value: String,
        #[source]
        source: DateParseError,
    },

    #[error("no data for {instrument}")]
    NoData { instrument: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&CarbondashError> for std::process::ExitCode {
    fn from(err: &CarbondashError) -> Self {
        let code: u8 = match err {
            CarbondashError::Io(_) => 1,
            CarbondashError::ConfigParse { .. }
            | CarbondashError::ConfigMissing { .. }
            | CarbondashError::ConfigInvalid { .. } => 2,
            CarbondashError::DataSource { .. } => 3,
            CarbondashError::UnknownTimeframe { .. }
            | CarbondashError::UnknownInstrument { .. } => 4,
            CarbondashError::MalformedDate { .. } | CarbondashError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
