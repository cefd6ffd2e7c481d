use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl AdvisorError {
    /// Short message suitable for printing to an end user, without the
    /// underlying error chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdvisorError::IoError(_) => "Could not read or write a file".to_string(),
            AdvisorError::SerializationError(_) => {
                "Could not serialize the report output".to_string()
            }
            AdvisorError::CsvError(_) => "Could not produce the CSV export".to_string(),
            AdvisorError::InvalidInputError { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            AdvisorError::InvalidConfigValueError { field, value, .. } => {
                format!("Survey file has an invalid value for {}: '{}'", field, value)
            }
            AdvisorError::ConfigValidationError { field, message } => {
                format!("Survey file problem in {}: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdvisorError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            AdvisorError::SerializationError(_) | AdvisorError::CsvError(_) => {
                "This is likely a bug; re-run with --verbose and report the log"
            }
            AdvisorError::InvalidInputError { .. } => {
                "Run with --help to see the accepted values for each flag"
            }
            AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::ConfigValidationError { .. } => {
                "Fix the survey TOML file and run the job again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
