//! Block detection.
//!
//! Blocks are found with a plain forward scan: locate the next start marker,
//! then the nearest end marker after it, record the span and resume right
//! after that end marker. The result is lazy (earliest closing) matching with
//! no overlap, in document order.

use std::ops::Range;

use crate::markers::Markers;

/// Half-open byte range `[start, end)` covering one block, markers included.
///
/// Both offsets always fall on `char` boundaries of the scanned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The covered text of `document`, which must be the scanned document.
    pub fn slice<'a>(&self, document: &'a str) -> &'a str {
        &document[self.range()]
    }
}

/// A detected block with its position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 1-based position in document order.
    pub ordinal: usize,
    /// Extent of the block including both markers.
    pub span: Span,
    /// Text between the markers, verbatim.
    pub content: String,
    /// 1-based line of the start marker.
    pub start_line: usize,
    /// 1-based line of the end marker.
    pub end_line: usize,
}

/// Scans `text` and yields `(span, content_range)` pairs in document order.
struct SpanScanner<'a> {
    text: &'a str,
    markers: &'a Markers,
    cursor: usize,
}

impl<'a> SpanScanner<'a> {
    fn new(text: &'a str, markers: &'a Markers) -> Self {
        Self {
            text,
            markers,
            cursor: 0,
        }
    }
}

impl Iterator for SpanScanner<'_> {
    type Item = (Span, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.text.get(self.cursor..)?;
        let open = self.cursor + rest.find(self.markers.start())?;
        let content_start = open + self.markers.start().len();

        // A start marker with no end marker after it closes nothing, and
        // neither can any later start marker.
        let Some(close_offset) = self.text[content_start..].find(self.markers.end()) else {
            self.cursor = self.text.len() + 1;
            return None;
        };
        let content_end = content_start + close_offset;
        let close = content_end + self.markers.end().len();

        self.cursor = close;
        Some((Span::new(open, close), content_start..content_end))
    }
}

/// Returns the span of every block in `text`, in document order.
///
/// # Example
/// ```
/// use strip_blocks::{Markers, find_spans};
///
/// let spans = find_spans("<SAMPLE>a<SOURCE>b<SOURCE>", &Markers::default());
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].end, "<SAMPLE>a<SOURCE>".len());
/// ```
pub fn find_spans(text: &str, markers: &Markers) -> Vec<Span> {
    SpanScanner::new(text, markers).map(|(span, _)| span).collect()
}

/// Returns every block in `text` with its content and line positions.
pub fn find_blocks(text: &str, markers: &Markers) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut line = 1;
    let mut counted_to = 0;

    for (index, (span, content)) in SpanScanner::new(text, markers).enumerate() {
        line += newlines(&text[counted_to..span.start]);
        let start_line = line;
        line += newlines(&text[span.start..content.end]);
        let end_line = line;
        counted_to = content.end;

        blocks.push(Block {
            ordinal: index + 1,
            span,
            content: text[content].to_string(),
            start_line,
            end_line,
        });
    }

    blocks
}

/// Number of blocks in `text`.
pub fn count_blocks(text: &str, markers: &Markers) -> usize {
    SpanScanner::new(text, markers).count()
}

fn newlines(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers::default()
    }

    #[test]
    fn test_no_blocks() {
        assert!(find_spans("plain text", &markers()).is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(find_spans("", &markers()).is_empty());
        assert_eq!(count_blocks("", &markers()), 0);
    }

    #[test]
    fn test_single_block_span() {
        let text = "ab<SAMPLE>x<SOURCE>cd";
        let spans = find_spans(text, &markers());
        assert_eq!(spans, vec![Span::new(2, 19)]);
        assert_eq!(spans[0].slice(text), "<SAMPLE>x<SOURCE>");
    }

    #[test]
    fn test_lazy_match_stops_at_first_end() {
        let text = "<SAMPLE>a<SOURCE>b<SOURCE>";
        let spans = find_spans(text, &markers());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].slice(text), "<SAMPLE>a<SOURCE>");
        assert_eq!(&text[spans[0].end..], "b<SOURCE>");
    }

    #[test]
    fn test_unterminated_start_produces_nothing() {
        let text = "<SAMPLE>a<SOURCE> tail <SAMPLE>never closed";
        let spans = find_spans(text, &markers());
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].end..], " tail <SAMPLE>never closed");
    }

    #[test]
    fn test_inner_start_marker_does_not_nest() {
        let text = "<SAMPLE>a<SAMPLE>b<SOURCE>c<SOURCE>";
        let spans = find_spans(text, &markers());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].slice(text), "<SAMPLE>a<SAMPLE>b<SOURCE>");
    }

    #[test]
    fn test_identical_markers_pair_up() {
        let markers = Markers::new("---", "---").unwrap();
        let text = "---a---b---c---";
        let spans = find_spans(text, &markers);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].slice(text), "---a---");
        assert_eq!(spans[1].slice(text), "---c---");
    }

    #[test]
    fn test_multibyte_text_keeps_char_boundaries() {
        let text = "Қазақ <SAMPLE>сөз<SOURCE> соңы";
        let spans = find_spans(text, &markers());
        assert_eq!(spans.len(), 1);
        assert!(text.is_char_boundary(spans[0].start));
        assert!(text.is_char_boundary(spans[0].end));
        assert_eq!(spans[0].slice(text), "<SAMPLE>сөз<SOURCE>");
    }

    #[test]
    fn test_find_blocks_lines_and_content() {
        let text = "line 1\n<SAMPLE>\n<PROMPT> q\n<SOURCE> x\n\n<SAMPLE>y<SOURCE>";
        let blocks = find_blocks(text, &markers());
        assert_eq!(blocks.len(), 2);

        assert_eq!(blocks[0].ordinal, 1);
        assert_eq!(blocks[0].content, "\n<PROMPT> q\n");
        assert_eq!(blocks[0].start_line, 2);
        assert_eq!(blocks[0].end_line, 4);

        assert_eq!(blocks[1].ordinal, 2);
        assert_eq!(blocks[1].content, "y");
        assert_eq!(blocks[1].start_line, 6);
        assert_eq!(blocks[1].end_line, 6);
    }

    #[test]
    fn test_span_helpers() {
        let span = Span::new(3, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 3..7);
        assert!(Span::new(5, 5).is_empty());
    }
}
