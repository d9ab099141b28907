//! Error types for strip-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit status for configuration mistakes, matching clap's usage errors.
pub const EXIT_CONFIG: i32 = 2;

/// Exit status for runtime failures such as unreadable input.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from strip-blocks
    #[error(transparent)]
    Blocks(#[from] strip_blocks::Error),

    /// Error from strip-fs
    #[error(transparent)]
    Fs(#[from] strip_fs::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether the run was rejected before any input was processed.
    pub fn is_config(&self) -> bool {
        match self {
            Self::Blocks(e) => e.is_config(),
            Self::Fs(e) => e.is_config(),
            Self::User { .. } => true,
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config() {
            EXIT_CONFIG
        } else {
            EXIT_FAILURE
        }
    }
}
