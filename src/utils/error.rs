use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid amount '{token}': {source}")]
    InvalidAmount {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Missing '{axis}' coordinate: input ended before a value was read")]
    MissingToken { axis: char },

    #[error("Invalid '{axis}' coordinate '{token}': {source}")]
    InvalidNumber {
        axis: char,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Input line {line} is not valid UTF-8: {source}")]
    InvalidEncoding {
        line: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("Unexpected trailing input: '{token}'")]
    TrailingInput { token: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Io,
    Processing,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            DemoError::ProcessingError { .. } => ErrorCategory::Processing,
            DemoError::InvalidAmount { .. }
            | DemoError::MissingToken { .. }
            | DemoError::InvalidNumber { .. }
            | DemoError::InvalidEncoding { .. }
            | DemoError::TrailingInput { .. } => ErrorCategory::Input,
        }
    }

    /// Process exit code for the demo binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config | ErrorCategory::Processing => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Io => format!("File system error: {}", self),
            ErrorCategory::Processing => format!("Demo failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
