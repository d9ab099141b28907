//! Block removal.

use crate::markers::Markers;
use crate::selection::SelectionSet;
use crate::span::{Span, find_spans};

/// Outcome of [`remove_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The document with the selected blocks deleted.
    pub text: String,
    /// Number of blocks detected in the input.
    pub found: usize,
    /// Ordinals that were removed, ascending.
    pub removed: Vec<usize>,
    /// Explicitly requested ordinals that matched no block.
    pub ignored: Vec<i64>,
}

/// Deletes the selected `spans` from `text` and returns the remainder.
///
/// `spans` must come from [`find_spans`] over the same `text`. Deletion runs
/// from the highest ordinal down, so the offsets of every span still to be
/// deleted stay valid. `text` itself is left untouched.
///
/// # Panics
/// Panics if a selected span lies outside `text` or does not start and end
/// on a `char` boundary, which can only happen when `spans` were found in a
/// different document.
pub fn remove_spans(text: &str, spans: &[Span], selection: &SelectionSet) -> String {
    let mut result = text.to_string();

    for ordinal in selection.within(spans.len()).into_iter().rev() {
        let span = spans[ordinal - 1];
        tracing::trace!(ordinal, start = span.start, end = span.end, "removing block");
        result.replace_range(span.range(), "");
    }

    result
}

/// Finds every block in `text` and removes the selected ones.
///
/// # Example
/// ```
/// use strip_blocks::{Markers, Selection, remove_blocks};
///
/// let doc = "A <SAMPLE>x<SOURCE> B <SAMPLE>y<SOURCE> C";
/// let set = Selection::Range { start: 1, end: 2 }.resolve().unwrap();
/// let removal = remove_blocks(doc, &Markers::default(), &set);
/// assert_eq!(removal.text, "A  B  C");
/// assert_eq!(removal.removed, vec![1, 2]);
/// ```
pub fn remove_blocks(text: &str, markers: &Markers, selection: &SelectionSet) -> Removal {
    let spans = find_spans(text, markers);
    let removed = selection.within(spans.len());
    let ignored = selection.ignored(spans.len());

    tracing::debug!(found = spans.len(), selected = removed.len(), "located blocks");
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "ignoring ordinals with no matching block");
    }

    Removal {
        text: remove_spans(text, &spans, selection),
        found: spans.len(),
        removed,
        ignored,
    }
}
