use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Errors the user caused and can fix; printed without decoration
    #[error("Usage: {program} <names_file>")]
    Usage { program: String },

    #[error("[!] File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a usage error for the given program name
    pub fn usage(program: impl Into<String>) -> Self {
        Self::Usage {
            program: program.into(),
        }
    }

    /// Create a missing-input error for the given path
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// True for errors caused by how the program was invoked.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Usage { .. } | AppError::FileNotFound { .. })
    }

    /// The line printed to stderr for this error.
    ///
    /// User errors are shown bare. Anything else gets an `Error:` prefix; the
    /// wrapped cause is already part of every variant's message, so the
    /// source chain is not repeated.
    pub fn diagnostic(&self) -> String {
        if self.is_user_error() {
            self.to_string()
        } else {
            format!("Error: {self}")
        }
    }
}
