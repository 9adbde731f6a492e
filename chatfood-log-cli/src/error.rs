//! CLI-specific error types and exit code mapping

use chatfood_log_analyzer::LogAnalyzerError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input log source could not be opened.
    #[error("log file not found or unreadable: {0}")]
    SourceUnavailable(String),

    /// Reading the input failed part-way through.
    #[error("log analysis failed: {0}")]
    Ingestion(String),

    /// A command-level operation failed.
    #[error("{0}")]
    Command(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                              |
    /// |------|--------------------------------------|
    /// | 0    | Success                              |
    /// | 1    | General / command error              |
    /// | 2    | Configuration error                  |
    /// | 3    | Log source unavailable               |
    /// | 4    | Ingestion fault mid-stream           |
    /// | 10   | IO error                             |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::SourceUnavailable(_) => 3,
            Self::Ingestion(_) => 4,
            Self::Io(_) => 10,
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}

impl From<LogAnalyzerError> for CliError {
    fn from(e: LogAnalyzerError) -> Self {
        match e {
            LogAnalyzerError::SourceUnavailable { path, source } => {
                Self::SourceUnavailable(format!("{path}: {source}"))
            }
            err @ LogAnalyzerError::Ingestion { .. } => Self::Ingestion(err.to_string()),
            err @ LogAnalyzerError::Config { .. } => Self::Config(err.to_string()),
            LogAnalyzerError::Io(io) => Self::Io(io),
            err @ LogAnalyzerError::Regex(_) => Self::Command(err.to_string()),
        }
    }
}
