//! The host capability boundary.
//!
//! The kernel never owns a document. Line access, block-span resolution, foldable-range
//! computation, and fold application all belong to the host editor and reach the kernel through
//! [`FoldView`]. The indirection keeps the fold algorithm testable against a fake document model
//! and independent of any particular editor's internals.

/// The layout block a line belongs to, as an inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// First line of the block.
    pub first_line: usize,
    /// Last line of the block (inclusive).
    pub last_line: usize,
}

impl BlockSpan {
    /// Create a block span covering an inclusive line range.
    pub fn new(first_line: usize, last_line: usize) -> Self {
        Self {
            first_line,
            last_line,
        }
    }

    /// A block consisting of a single line.
    pub fn line(line: usize) -> Self {
        Self::new(line, line)
    }
}

/// A collapsible character-offset span reported by the host, end exclusive.
///
/// The kernel treats the offsets as opaque: it only checks for the degenerate zero-width case
/// before handing the range back to [`FoldView::fold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldRange {
    /// Start offset of the collapsible region.
    pub start: usize,
    /// End offset of the collapsible region (exclusive).
    pub end: usize,
}

impl FoldRange {
    /// Create a fold range from start/end offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns `true` for a degenerate range with nothing to fold.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Host capabilities the fold engine runs against.
///
/// All methods are line-oriented and bounds-checked by convention: out-of-range lines yield
/// `None` rather than panicking, and a host with no active compatible view can satisfy the trait
/// with an empty document, turning every kernel operation into a silent no-op.
pub trait FoldView {
    /// Total number of lines in the document.
    fn line_count(&self) -> usize;

    /// Text of the given line without its trailing newline, or `None` when out of range.
    fn line_text(&self, line: usize) -> Option<String>;

    /// The layout block the given line belongs to, or `None` when out of range.
    fn block_span(&self, line: usize) -> Option<BlockSpan>;

    /// The largest collapsible region anchored at the given block.
    ///
    /// `None` means nothing is foldable there (a leaf item, or a line already hidden inside a
    /// collapsed region). This is an expected condition, not an error.
    fn foldable_range(&self, span: BlockSpan) -> Option<FoldRange>;

    /// Collapse the given range in the visible document state.
    ///
    /// Re-folding an already collapsed range must be harmless; the kernel may revisit the same
    /// region across recursive passes.
    fn fold(&mut self, range: FoldRange);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_range_is_empty() {
        assert!(FoldRange::new(10, 10).is_empty());
        assert!(!FoldRange::new(10, 11).is_empty());
    }

    #[test]
    fn test_single_line_block() {
        let span = BlockSpan::line(7);
        assert_eq!(span.first_line, 7);
        assert_eq!(span.last_line, 7);
    }
}
