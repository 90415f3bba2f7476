use std::error::Error;

/// Exit status for errors the user can fix by changing the request.
pub const USER_ERROR_EXIT_CODE: i32 = 1;

/// Exit status for errors coming from the environment (disk, permissions).
pub const SYSTEM_ERROR_EXIT_CODE: i32 = 2;

/// Classification shared by every error a front end may have to report.
pub trait FolioError: Error + Send + Sync + 'static {
    /// Stable code, logged as `error_code` and safe to match on in scripts.
    fn error_code(&self) -> &'static str;

    /// User errors are logged as warnings; everything else as errors.
    fn is_user_error(&self) -> bool {
        false
    }

    fn exit_code(&self) -> i32 {
        if self.is_user_error() {
            USER_ERROR_EXIT_CODE
        } else {
            SYSTEM_ERROR_EXIT_CODE
        }
    }
}

impl FolioError for std::io::Error {
    fn error_code(&self) -> &'static str {
        "IO_ERROR"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid default category '{category}'. Supported values: all, web, app, game")]
    InvalidCategory { category: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl FolioError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidCategory { .. } => "CONFIG_INVALID_CATEGORY",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::IoError { .. })
    }
}
