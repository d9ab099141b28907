//! Start and end delimiters recognised by the span finder.

use crate::error::{Error, Result};

pub const DEFAULT_START_MARKER: &str = "<SAMPLE>";
pub const DEFAULT_END_MARKER: &str = "<SOURCE>";

/// A pair of literal delimiters. Both are matched verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    start: String,
    end: String,
}

impl Markers {
    /// Builds a marker pair, rejecting empty delimiters.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() {
            return Err(Error::EmptyMarker { which: "start" });
        }
        if end.is_empty() {
            return Err(Error::EmptyMarker { which: "end" });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}
