//! Where text comes from and where it goes.

use std::fmt;
use std::path::{Path, PathBuf};

/// Argument value meaning "standard input" or "standard output".
pub const STDIO_SENTINEL: &str = "-";

/// Input location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

/// Output location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

fn is_sentinel(path: &Path) -> bool {
    path.as_os_str() == STDIO_SENTINEL
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        if is_sentinel(&path) {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl From<&str> for Source {
    fn from(arg: &str) -> Self {
        Self::from(PathBuf::from(arg))
    }
}

impl From<PathBuf> for Sink {
    fn from(path: PathBuf) -> Self {
        if is_sentinel(&path) {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }
}

impl From<&str> for Sink {
    fn from(arg: &str) -> Self {
        Self::from(PathBuf::from(arg))
    }
}

impl Source {
    /// Path used when reporting errors.
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("<stdin>"),
            Self::File(path) => path.clone(),
        }
    }
}

impl Sink {
    /// Path used when reporting errors.
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Stdout => PathBuf::from("<stdout>"),
            Self::File(path) => path.clone(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_path().display())
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_path().display())
    }
}
