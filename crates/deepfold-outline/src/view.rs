//! [`FoldView`] implementation over an outline document.
//!
//! In an outline, a list item's layout block is the item line itself; the collapsible region
//! anchored there is the run of more deeply indented lines below it. Blank lines inside that run
//! belong to it only when deeper content follows them, so trailing blank lines never fold.

use deepfold::{BlockSpan, DeferredFold, FoldConfig, FoldRange, FoldView, indent_width};

use crate::document::OutlineDocument;
use crate::folding::FoldingManager;
use crate::note::note_tags;

/// Handle a note-open event.
///
/// The event may arrive without a compatible view focused; `None` means there is nothing to do.
/// Otherwise the note's tags feed the applicability gate, and the returned task (if any) should
/// be run against the view after its delay.
pub fn on_note_open(view: Option<&OutlineView>, config: &FoldConfig) -> Option<DeferredFold> {
    let view = view?;
    let tags = note_tags(&view.document().get_text());
    deepfold::on_document_open(config, &tags)
}

/// A foldable view over an [`OutlineDocument`]: the document snapshot plus its collapse state.
pub struct OutlineView {
    document: OutlineDocument,
    folds: FoldingManager,
}

impl OutlineView {
    /// Wrap a document snapshot with empty collapse state.
    pub fn new(document: OutlineDocument) -> Self {
        Self {
            document,
            folds: FoldingManager::new(),
        }
    }

    /// Build a view directly from text.
    pub fn from_text(text: &str) -> Self {
        Self::new(OutlineDocument::from_text(text))
    }

    /// The underlying document snapshot.
    pub fn document(&self) -> &OutlineDocument {
        &self.document
    }

    /// The collapse state.
    pub fn folds(&self) -> &FoldingManager {
        &self.folds
    }

    /// Mutable collapse state, for the host's expand/unfold surface.
    pub fn folds_mut(&mut self) -> &mut FoldingManager {
        &mut self.folds
    }

    /// The lines a renderer would show: hidden lines dropped, collapsed anchors suffixed with
    /// their placeholder.
    pub fn visible_lines(&self) -> Vec<String> {
        (0..self.document.line_count())
            .filter(|&line| !self.folds.is_line_hidden(line))
            .filter_map(|line| {
                let text = self.document.line_text(line)?;
                Some(match self.folds.collapsed_anchor(line) {
                    Some(region) => format!("{text} {}", region.placeholder),
                    None => text,
                })
            })
            .collect()
    }

    /// Last line of the run of lines below `line` indented more deeply than it.
    ///
    /// Blank lines are provisional: skipped while scanning, part of the run only when a deeper
    /// line follows. `None` for a leaf item.
    fn last_child_line(&self, line: usize) -> Option<usize> {
        let base = indent_width(&self.document.line_text(line)?);
        let mut last = None;
        for idx in line + 1..self.document.line_count() {
            let text = self.document.line_text(idx)?;
            if text.trim().is_empty() {
                continue;
            }
            if indent_width(&text) <= base {
                break;
            }
            last = Some(idx);
        }
        last
    }
}

impl FoldView for OutlineView {
    fn line_count(&self) -> usize {
        self.document.line_count()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.document.line_text(line)
    }

    fn block_span(&self, line: usize) -> Option<BlockSpan> {
        (line < self.document.line_count()).then(|| BlockSpan::line(line))
    }

    fn foldable_range(&self, span: BlockSpan) -> Option<FoldRange> {
        let line = span.first_line;

        // A line swallowed by an earlier fold has no range of its own anymore.
        if self.folds.is_line_hidden(line) {
            return None;
        }

        let last = self.last_child_line(line)?;
        Some(FoldRange::new(
            self.document.line_end_char(line),
            self.document.line_end_char(last),
        ))
    }

    fn fold(&mut self, range: FoldRange) {
        if range.is_empty() {
            return;
        }

        let start_line = self.document.char_to_line(range.start);
        let end_line = self.document.char_to_line(range.end);
        log::trace!(
            target: "deepfold_outline::view",
            "collapsing lines {start_line}..={end_line}"
        );
        self.folds.collapse_region(start_line, end_line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_span_is_the_item_line() {
        let view = OutlineView::from_text("- a\n    - b");
        assert_eq!(view.block_span(0), Some(BlockSpan::line(0)));
        assert_eq!(view.block_span(5), None);
    }

    #[test]
    fn test_leaf_item_has_no_range() {
        let view = OutlineView::from_text("- a\n- b");
        assert_eq!(view.foldable_range(BlockSpan::line(0)), None);
    }

    #[test]
    fn test_range_covers_children() {
        let view = OutlineView::from_text("- a\n    - b\n    - c\n- d");
        let range = view.foldable_range(BlockSpan::line(0)).expect("foldable");

        // From the end of "- a" to the end of "    - c".
        assert_eq!(range.start, 3);
        assert_eq!(range.end, 19);
    }

    #[test]
    fn test_blank_line_inside_children_folds_with_them() {
        let view = OutlineView::from_text("- a\n    - b\n\n    - c\n- d");
        let range = view.foldable_range(BlockSpan::line(0)).expect("foldable");
        let mut view = view;
        view.fold(range);

        assert_eq!(view.visible_lines(), vec!["- a [...]", "- d"]);
    }

    #[test]
    fn test_trailing_blank_lines_stay_out() {
        let view = OutlineView::from_text("- a\n    - b\n\n- c");
        let range = view.foldable_range(BlockSpan::line(0)).expect("foldable");
        let mut view = view;
        view.fold(range);

        // The blank separator line stays visible; only "    - b" folded away.
        assert_eq!(view.visible_lines(), vec!["- a [...]", "", "- c"]);
    }

    #[test]
    fn test_hidden_line_reports_no_range() {
        let mut view = OutlineView::from_text("- a\n    - b\n        - c\n- d");
        let range = view.foldable_range(BlockSpan::line(0)).expect("foldable");
        view.fold(range);

        assert_eq!(view.foldable_range(BlockSpan::line(1)), None);
    }

    #[test]
    fn test_refolding_same_range_is_idempotent() {
        let mut view = OutlineView::from_text("- a\n    - b");
        let range = view.foldable_range(BlockSpan::line(0)).expect("foldable");
        view.fold(range);
        view.fold(range);

        assert_eq!(view.folds().regions().len(), 1);
    }
}
