//! The strip command: read, remove selected blocks, write.

use std::path::Path;

use strip_blocks::{Markers, Removal, Selection, SelectionSet, remove_blocks};
use strip_fs::{Sink, Source, StripConfig, read_source, write_sink};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// A fully validated invocation. Building one performs no output I/O.
#[derive(Debug, Clone)]
pub struct StripJob {
    pub source: Source,
    pub sink: Sink,
    pub selection: SelectionSet,
    pub markers: Markers,
}

impl StripJob {
    /// Validate the command line. Configuration errors surface here, before
    /// the input is read or the output is touched.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        // clap's required selection group makes the `None` case unreachable
        // from the command line; it stays an error for hand-built `Cli`s.
        let selection = cli
            .selection
            .to_selection()
            .ok_or_else(|| CliError::user("one of --indices, --first or --range is required"))?;

        let markers = resolve_markers(
            cli.config.as_deref(),
            cli.start_marker.as_deref(),
            cli.end_marker.as_deref(),
        )?;

        Self::new(
            Source::from(cli.input.clone()),
            Sink::from(cli.output.clone()),
            &selection,
            markers,
        )
    }

    pub fn new(source: Source, sink: Sink, selection: &Selection, markers: Markers) -> Result<Self> {
        Ok(Self {
            source,
            sink,
            selection: selection.resolve()?,
            markers,
        })
    }

    /// Read the input, remove the selected blocks and write the result.
    pub fn run(&self) -> Result<Removal> {
        let text = read_source(&self.source)?;
        let removal = remove_blocks(&text, &self.markers, &self.selection);

        if !removal.ignored.is_empty() {
            tracing::debug!(
                ignored = ?removal.ignored,
                found = removal.found,
                "some requested blocks do not exist"
            );
        }

        write_sink(&self.sink, &removal.text)?;

        tracing::info!(
            "removed {} of {} blocks from {}",
            removal.removed.len(),
            removal.found,
            self.source
        );
        Ok(removal)
    }
}

/// Combine marker settings. Command-line flags win over the config file,
/// which wins over the built-in markers.
pub fn resolve_markers(
    config_path: Option<&Path>,
    start_flag: Option<&str>,
    end_flag: Option<&str>,
) -> Result<Markers> {
    let config = match config_path {
        Some(path) => StripConfig::load(path)?,
        None => StripConfig::default(),
    };
    let defaults = Markers::default();

    let start = start_flag
        .map(str::to_owned)
        .or(config.markers.start)
        .unwrap_or_else(|| defaults.start().to_owned());
    let end = end_flag
        .map(str::to_owned)
        .or(config.markers.end)
        .unwrap_or_else(|| defaults.end().to_owned());

    tracing::debug!(%start, %end, "using markers");
    Ok(Markers::new(start, end)?)
}
