use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("A match has already been started on this board")]
    MatchAlreadyStarted,

    #[error("An active match was not found")]
    NoActiveMatch,

    #[error("Invalid team name '{name}': {reason}")]
    InvalidTeamName { name: String, reason: String },

    #[error("Score values must not be negative. Provided value: {value}")]
    InvalidScore { value: i64 },

    #[error("Replay error: {message}")]
    ReplayError { message: String },

    #[error("Feed request failed: {0}")]
    FeedError(#[from] reqwest::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Validation,
    Configuration,
    Network,
    Report,
    System,
}

impl ScoreboardError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤可重試
            Self::FeedError(_) => ErrorSeverity::Medium,
            Self::IoError(_) | Self::ZipError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MatchAlreadyStarted | Self::NoActiveMatch | Self::ReplayError { .. } => {
                ErrorCategory::Domain
            }
            Self::InvalidTeamName { .. } | Self::InvalidScore { .. } => ErrorCategory::Validation,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::FeedError(_) => ErrorCategory::Network,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Report
            }
            Self::IoError(_) | Self::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MatchAlreadyStarted => "Finish the current match before starting a new one",
            Self::NoActiveMatch => "Start a match before updating or finishing it",
            Self::InvalidTeamName { .. } => "Provide non-blank team names without control characters",
            Self::InvalidScore { .. } => "Scores must be whole numbers of zero or more",
            Self::ReplayError { .. } => {
                "Check the event ordering (a match must start before it is updated or finished), or run with --lenient"
            }
            Self::FeedError(_) => "Check the feed endpoint and network connectivity, then retry",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Review the configuration values, see --help for defaults",
            Self::IoError(_) | Self::ZipError(_) => {
                "Check the output path permissions and available disk space"
            }
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                "Re-run with --verbose and report the log output"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FeedError(e) => format!("Could not reach the match feed: {}", e),
            Self::IoError(e) => format!("File system problem: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_high_severity() {
        assert_eq!(ScoreboardError::NoActiveMatch.severity(), ErrorSeverity::High);
        assert_eq!(
            ScoreboardError::MatchAlreadyStarted.category(),
            ErrorCategory::Domain
        );
    }

    #[test]
    fn io_errors_are_critical() {
        let error = ScoreboardError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert_eq!(error.category(), ErrorCategory::System);
    }

    #[test]
    fn negative_score_message_names_the_value() {
        let error = ScoreboardError::InvalidScore { value: -3 };
        assert_eq!(
            error.to_string(),
            "Score values must not be negative. Provided value: -3"
        );
    }
}
