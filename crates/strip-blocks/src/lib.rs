//! Locate and remove delimited text blocks.
//!
//! A block runs from a start marker to the nearest following end marker:
//!
//! ```text
//! <SAMPLE>
//! content, possibly spanning lines
//! <SOURCE>
//! ```
//!
//! Blocks are numbered from 1 in document order. Callers pick which ones to
//! drop with a [`Selection`] (explicit ordinals, the first N, or an inclusive
//! range), resolve it into a [`SelectionSet`], and hand it to
//! [`remove_blocks`]. Ordinals outside `1..=N` are ignored.
//!
//! ```
//! use strip_blocks::{Markers, Selection, remove_blocks};
//!
//! let doc = "A <SAMPLE>x<SOURCE> B <SAMPLE>y<SOURCE> C";
//! let set = Selection::First(1).resolve().unwrap();
//! let removal = remove_blocks(doc, &Markers::default(), &set);
//! assert_eq!(removal.text, "A  B <SAMPLE>y<SOURCE> C");
//! ```

pub mod error;
pub mod markers;
pub mod remover;
pub mod selection;
pub mod span;

pub use error::{Error, Result};
pub use markers::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, Markers};
pub use remover::{Removal, remove_blocks, remove_spans};
pub use selection::{Selection, SelectionSet};
pub use span::{Block, Span, count_blocks, find_blocks, find_spans};
