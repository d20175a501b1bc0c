use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Snippets directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("No slot snippets found under {path}")]
    NoSlotsDiscovered { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse severity bucket, mapped to an exit code by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl MatrixError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MatrixError::DirectoryNotFound { .. }
            | MatrixError::NoSlotsDiscovered { .. }
            | MatrixError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MatrixError::IoError(_) | MatrixError::TomlError(_) => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatrixError::DirectoryNotFound { .. } => {
                "Pass --snippets-dir pointing at the snippets directory"
            }
            MatrixError::NoSlotsDiscovered { .. } => {
                "Snippet directories must be named Slot<N>_<Module>, e.g. Slot0_Dongle"
            }
            MatrixError::IoError(_) => "Check that the config file exists and is readable",
            MatrixError::TomlError(_) => "Fix the TOML syntax in the config file",
            MatrixError::InvalidConfigValueError { .. } => "Adjust the flagged value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
