//! Error types for strip-blocks

/// Result type for strip-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a removal.
///
/// Nothing in the scanning or removal passes can fail; every variant here is
/// detected before the document is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{which} marker must not be empty")]
    EmptyMarker { which: &'static str },

    #[error("invalid range: START must be <= END (got {start} > {end})")]
    InvalidRange { start: i64, end: i64 },
}

impl Error {
    /// Whether this error stems from caller configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::EmptyMarker { .. } | Self::InvalidRange { .. })
    }
}
