//! Fold region management: collapse state and logical/visual line mapping.
//!
//! Regions nest: folding an ancestor item hides descendants whose own regions stay collapsed,
//! so expanding the ancestor later reveals them still folded. The manager keeps its region list
//! sorted and deduplicated by span; re-collapsing an existing span is a state change on that
//! region, never a duplicate entry.

/// A foldable region over an inclusive line range.
///
/// `start_line` is the anchor and stays visible; lines `start_line + 1 ..= end_line` hide when
/// the region collapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    /// Anchor line; remains visible when collapsed.
    pub start_line: usize,
    /// Last hidden line (inclusive).
    pub end_line: usize,
    /// Whether the region is currently collapsed.
    pub is_collapsed: bool,
    /// Placeholder shown on the anchor line while collapsed.
    pub placeholder: String,
}

impl FoldRegion {
    /// Create an expanded region for an inclusive line range.
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            is_collapsed: false,
            placeholder: String::from("[...]"),
        }
    }

    /// Collapse the region.
    pub fn collapse(&mut self) {
        self.is_collapsed = true;
    }

    /// Expand the region.
    pub fn expand(&mut self) {
        self.is_collapsed = false;
    }

    /// Toggle the collapse state.
    pub fn toggle(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }

    /// Number of lines this region hides while collapsed.
    pub fn hidden_lines(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }

    /// Check whether a line falls inside the region (anchor included).
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// Collapse state for one document.
#[derive(Debug, Default)]
pub struct FoldingManager {
    /// Regions kept sorted by `(start_line, end_line)`, unique by span.
    regions: Vec<FoldRegion>,
}

impl FoldingManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Collapse the region spanning exactly `start_line ..= end_line`, creating it on first use.
    ///
    /// Degenerate spans (`end_line <= start_line`) are ignored. Re-collapsing an existing span
    /// leaves the region list unchanged, which makes repeated fold passes idempotent.
    pub fn collapse_region(&mut self, start_line: usize, end_line: usize) {
        if end_line <= start_line {
            return;
        }

        let key = (start_line, end_line);
        match self
            .regions
            .binary_search_by_key(&key, |r| (r.start_line, r.end_line))
        {
            Ok(idx) => self.regions[idx].collapse(),
            Err(idx) => {
                let mut region = FoldRegion::new(start_line, end_line);
                region.collapse();
                self.regions.insert(idx, region);
            }
        }
    }

    /// Expand the innermost region anchored at `line`, or the innermost collapsed region that
    /// contains it. Returns `false` when there is nothing to expand.
    pub fn expand_line(&mut self, line: usize) -> bool {
        // Prefer a region starting at the line (the visible anchor the user acts on).
        let anchored = self
            .regions
            .iter_mut()
            .filter(|r| r.start_line == line && r.is_collapsed)
            .min_by_key(|r| r.end_line);
        if let Some(region) = anchored {
            region.expand();
            return true;
        }

        let containing = self
            .regions
            .iter_mut()
            .filter(|r| r.contains_line(line) && r.is_collapsed)
            .min_by_key(|r| r.hidden_lines());
        match containing {
            Some(region) => {
                region.expand();
                true
            }
            None => false,
        }
    }

    /// Expand every region.
    pub fn expand_all(&mut self) {
        for region in &mut self.regions {
            region.expand();
        }
    }

    /// Drop all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// All regions, sorted by span.
    pub fn regions(&self) -> &[FoldRegion] {
        &self.regions
    }

    /// Number of currently collapsed regions.
    pub fn collapsed_count(&self) -> usize {
        self.regions.iter().filter(|r| r.is_collapsed).count()
    }

    /// The innermost collapsed region anchored at `line`, if any.
    ///
    /// This is the region whose placeholder belongs on the line while it is collapsed.
    pub fn collapsed_anchor(&self, line: usize) -> Option<&FoldRegion> {
        self.regions
            .iter()
            .filter(|r| r.start_line == line && r.is_collapsed)
            .min_by_key(|r| r.end_line)
    }

    /// Whether a line is hidden inside some collapsed region (anchors stay visible).
    pub fn is_line_hidden(&self, line: usize) -> bool {
        self.regions
            .iter()
            .any(|r| r.is_collapsed && line > r.start_line && line <= r.end_line)
    }

    /// Merged, sorted list of hidden line intervals (inclusive), across all collapsed regions.
    ///
    /// Nested and overlapping collapsed regions merge here so hidden lines are never counted
    /// twice by the visual mapping.
    fn hidden_spans(&self) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = self
            .regions
            .iter()
            .filter(|r| r.is_collapsed && r.end_line > r.start_line)
            .map(|r| (r.start_line + 1, r.end_line))
            .collect();
        spans.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some((_, last_end)) if start <= *last_end + 1 => *last_end = (*last_end).max(end),
                _ => merged.push((start, end)),
            }
        }
        merged
    }

    /// Visual row of a logical line, or `None` when the line is hidden.
    pub fn logical_to_visual(&self, line: usize) -> Option<usize> {
        let mut hidden_before = 0;
        for (start, end) in self.hidden_spans() {
            if line < start {
                break;
            }
            if line <= end {
                return None;
            }
            hidden_before += end - start + 1;
        }
        Some(line - hidden_before)
    }

    /// Number of visible lines out of `line_count` total.
    pub fn visible_line_count(&self, line_count: usize) -> usize {
        let hidden: usize = self
            .hidden_spans()
            .iter()
            .map(|(start, end)| {
                let start = (*start).min(line_count);
                let end = (*end + 1).min(line_count);
                end - start
            })
            .sum();
        line_count - hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_creates_then_dedups() {
        let mut folds = FoldingManager::new();
        folds.collapse_region(1, 3);
        folds.collapse_region(1, 3);

        assert_eq!(folds.regions().len(), 1);
        assert_eq!(folds.collapsed_count(), 1);
    }

    #[test]
    fn test_degenerate_span_ignored() {
        let mut folds = FoldingManager::new();
        folds.collapse_region(2, 2);
        folds.collapse_region(3, 1);
        assert!(folds.regions().is_empty());
    }

    #[test]
    fn test_anchor_visible_children_hidden() {
        let mut folds = FoldingManager::new();
        folds.collapse_region(1, 3);

        assert!(!folds.is_line_hidden(1));
        assert!(folds.is_line_hidden(2));
        assert!(folds.is_line_hidden(3));
        assert!(!folds.is_line_hidden(4));
    }

    #[test]
    fn test_visual_mapping_skips_hidden_lines() {
        let mut folds = FoldingManager::new();
        folds.collapse_region(1, 3);

        assert_eq!(folds.logical_to_visual(0), Some(0));
        assert_eq!(folds.logical_to_visual(1), Some(1));
        assert_eq!(folds.logical_to_visual(2), None);
        assert_eq!(folds.logical_to_visual(4), Some(2));
        assert_eq!(folds.visible_line_count(6), 4);
    }

    #[test]
    fn test_nested_regions_do_not_double_count() {
        let mut folds = FoldingManager::new();
        folds.collapse_region(2, 3);
        folds.collapse_region(1, 3);

        // Lines 2 and 3 are hidden once, not twice.
        assert_eq!(folds.logical_to_visual(4), Some(2));
        assert_eq!(folds.visible_line_count(5), 3);
    }

    #[test]
    fn test_expand_ancestor_reveals_nested_still_collapsed() {
        let mut folds = FoldingManager::new();
        folds.collapse_region(2, 3);
        folds.collapse_region(1, 3);

        assert!(folds.expand_line(1));

        // The outer region opened; the inner one reappears collapsed.
        assert!(!folds.is_line_hidden(2));
        assert!(folds.is_line_hidden(3));
        assert_eq!(folds.collapsed_count(), 1);
    }

    #[test]
    fn test_expand_all() {
        let mut folds = FoldingManager::new();
        folds.collapse_region(0, 2);
        folds.collapse_region(4, 6);
        folds.expand_all();

        assert_eq!(folds.collapsed_count(), 0);
        assert_eq!(folds.visible_line_count(8), 8);
        // Regions survive expansion for later re-collapse.
        assert_eq!(folds.regions().len(), 2);
    }

    #[test]
    fn test_expand_line_with_nothing_collapsed() {
        let mut folds = FoldingManager::new();
        assert!(!folds.expand_line(0));
    }
}
