use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Game {game} is invalid: {reason}")]
    InvalidGame { game: String, reason: String },

    #[error("Game {game}, frame {frame}: {reason}")]
    InvalidFrame {
        game: String,
        frame: u32,
        reason: String,
    },

    #[error("Unsupported input format: {format}")]
    UnsupportedFormat { format: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failed run; never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Low | Self::High => 1,
            Self::Medium => 2,
            Self::Critical => 3,
        }
    }
}

impl AnalyticsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) | Self::UnsupportedFormat { .. } => {
                ErrorCategory::Data
            }
            Self::TomlError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::InvalidGame { .. } | Self::InvalidFrame { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and that you have permission to read and write it",
            Self::SerializationError(_) => "Make sure the input is a JSON array of games",
            Self::CsvError(_) => {
                "Make sure the CSV has the columns game_id,date,frame_number,score,is_strike,is_spare,is_split,notes"
            }
            Self::TomlError(_) => "Fix the syntax of the configuration file",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again"
            }
            Self::InvalidGame { .. } => "Every game needs exactly 10 frames numbered 1 to 10",
            Self::InvalidFrame { .. } => "Correct the frame score or its strike/spare flags",
            Self::UnsupportedFormat { .. } => "Use a .json or .csv input file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not access a file: {}", e),
            Self::InvalidFrame { game, frame, reason } => {
                format!("Frame {} of game {} was rejected: {}", frame, game, reason)
            }
            Self::InvalidGame { game, reason } => format!("Game {} was rejected: {}", game, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_medium_severity() {
        let err = AnalyticsError::InvalidFrame {
            game: "3".to_string(),
            frame: 4,
            reason: "Strike frames must have a score of 10".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(
            err.user_friendly_message(),
            "Frame 4 of game 3 was rejected: Strike frames must have a score of 10"
        );
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = AnalyticsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "games.json",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_severity_exits_nonzero() {
        assert_eq!(ErrorSeverity::Low.exit_code(), 1);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);

        let err = AnalyticsError::UnsupportedFormat {
            format: "xlsx".to_string(),
        };
        assert_eq!(err.severity().exit_code(), 1);
    }
}
