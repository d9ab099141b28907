//! Input, output and configuration boundary for block-strip.
//!
//! Everything that touches the outside world lives here: resolving the `-`
//! sentinel to a standard stream, lenient UTF-8 decoding, atomic file writes
//! and loading marker configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod stream;

pub use config::{ConfigStore, MarkerConfig, StripConfig};
pub use error::{Error, Result};
pub use io::{decode_lenient, read_source, write_atomic, write_sink};
pub use stream::{STDIO_SENTINEL, Sink, Source};
