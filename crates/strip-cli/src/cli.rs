//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser};
use strip_blocks::Selection;

/// Remove <SAMPLE>…<SOURCE> blocks by index list, first N, or range
#[derive(Parser, Debug)]
#[command(name = "strip-blocks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  strip-blocks data.txt clean.txt -i 2 5      # Remove blocks 2 and 5
  strip-blocks - - --first 3 < in > out       # Remove the first three blocks
  strip-blocks data.txt - --range 4 10        # Remove blocks 4 through 10")]
pub struct Cli {
    /// Input file (or '-' for stdin)
    pub input: PathBuf,

    /// Output file (or '-' for stdout)
    pub output: PathBuf,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Marker that opens a block [default: <SAMPLE>]
    #[arg(long, value_name = "MARKER")]
    pub start_marker: Option<String>,

    /// Marker that closes a block [default: <SOURCE>]
    #[arg(long, value_name = "MARKER")]
    pub end_marker: Option<String>,

    /// Config file with marker settings (.toml, .json, .yaml)
    #[arg(short, long, env = "STRIP_BLOCKS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which blocks to remove. Exactly one mode must be given.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct SelectionArgs {
    /// 1-based list of blocks to remove
    #[arg(short, long, num_args = 1.., value_name = "N", allow_negative_numbers = true)]
    pub indices: Option<Vec<i64>>,

    /// Remove the first N blocks
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub first: Option<i64>,

    /// Remove blocks START through END (inclusive)
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["START", "END"],
        allow_negative_numbers = true
    )]
    pub range: Option<Vec<i64>>,
}

impl SelectionArgs {
    /// The selection mode the user picked, if any.
    pub fn to_selection(&self) -> Option<Selection> {
        if let Some(indices) = &self.indices {
            return Some(Selection::Indices(indices.clone()));
        }
        if let Some(count) = self.first {
            return Some(Selection::First(count));
        }
        match self.range.as_deref() {
            Some(&[start, end]) => Some(Selection::Range { start, end }),
            _ => None,
        }
    }
}
