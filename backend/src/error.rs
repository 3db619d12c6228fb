//! Error types for dataset analysis.
//!
//! Every failure that can happen between receiving an upload and writing the
//! frequency chart is expressed as an [`AnalysisError`], so the HTTP layer can
//! map it to a status code instead of surfacing a panic.

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type for analysis operations
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The upload could not be parsed as CSV.
    #[error("Malformed CSV: {message}{}", line_suffix(.line))]
    MalformedCsv {
        message: String,
        /// 1-based line number reported by the parser, when known
        line: Option<u64>,
    },

    /// The upload has no header row or no columns to read text from.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// The chart directory could not be prepared or written.
    #[error("Chart storage error: {message}")]
    ChartIo {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" (line {})", line),
        None => String::new(),
    }
}

impl AnalysisError {
    /// Build a chart storage error with a description of the failed step.
    pub fn chart_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::ChartIo {
            message: message.into(),
            source,
        }
    }

    /// Whether the error was caused by the client's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedCsv { .. } | Self::EmptyDataset(_))
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = match err.kind() {
            csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
            _ => err.to_string(),
        };
        Self::MalformedCsv { message, line }
    }
}
