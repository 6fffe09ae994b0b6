//! Depth passes and the recursive fold orchestrator.
//!
//! One *pass* sweeps the document at a single depth threshold: claim the next unvisited list
//! item at or beyond the threshold, ask the host for its foldable range, apply it, repeat until
//! nothing remains. Recursive folding runs one pass per depth level, deepest first, so that by
//! the time an ancestor folds, its descendants are already collapsed inside the folded region.

use std::collections::HashSet;

use crate::config::FoldConfig;
use crate::indent::{indent_width, is_list_item};
use crate::view::FoldView;

/// Depth decrement between recursive passes: one outline nesting level.
pub const DEPTH_STEP: usize = 4;

/// Claim the next foldable list-item line at or beyond `min_depth`.
///
/// Scans lines in ascending order, skipping lines that are shallower than `min_depth`, are not
/// list items, or were already claimed this pass. The first match is inserted into `visited`
/// before it is returned: find and claim are a single operation, which is what bounds a pass
/// at one claim per line and rules out revisiting a line within the pass.
fn claim_next<V: FoldView>(
    view: &V,
    visited: &mut HashSet<usize>,
    min_depth: usize,
) -> Option<usize> {
    for line in 0..view.line_count() {
        if visited.contains(&line) {
            continue;
        }
        let Some(text) = view.line_text(line) else {
            continue;
        };
        if indent_width(&text) < min_depth || !is_list_item(&text) {
            continue;
        }
        visited.insert(line);
        return Some(line);
    }
    None
}

/// Run one fold pass over the document at a single depth threshold.
///
/// Every claimed line either folds or is skipped silently: a line with no block span, no
/// foldable range (a leaf item, or a line hidden inside an earlier fold), or a degenerate
/// zero-width range is an expected non-error. The visited set grows by exactly one entry per
/// iteration, so the pass terminates after at most `line_count + 1` claims.
pub fn fold_at_depth<V: FoldView>(view: &mut V, min_depth: usize) {
    let mut visited = HashSet::new();
    let mut folded = 0usize;

    while let Some(line) = claim_next(view, &mut visited, min_depth) {
        let Some(span) = view.block_span(line) else {
            continue;
        };
        let Some(range) = view.foldable_range(span) else {
            continue;
        };
        if range.is_empty() {
            continue;
        }
        view.fold(range);
        folded += 1;
    }

    log::debug!(
        target: "deepfold::engine",
        "pass at depth {min_depth}: folded {folded} of {} claimed lines",
        visited.len()
    );
}

/// Run a full fold according to the configuration.
///
/// Non-recursive mode is a single pass at the configured threshold. Recursive mode steps from
/// the document's maximum indentation (rounded down to a multiple of [`DEPTH_STEP`]) down to the
/// threshold, one pass per level. When the threshold exceeds everything in the document the loop
/// body never runs; nothing is deep enough to fold.
pub fn fold_deep<V: FoldView>(view: &mut V, config: &FoldConfig) {
    let level = config.indentation_fold_level;

    if !config.recursive_fold {
        fold_at_depth(view, level);
        return;
    }

    let max_indent = (0..view.line_count())
        .filter_map(|line| view.line_text(line))
        .map(|text| indent_width(&text))
        .max()
        .unwrap_or(0);
    let start_depth = max_indent - max_indent % DEPTH_STEP;

    log::debug!(
        target: "deepfold::engine",
        "recursive fold from depth {start_depth} down to {level}"
    );

    let mut depth = start_depth;
    while depth >= level {
        fold_at_depth(view, depth);
        match depth.checked_sub(DEPTH_STEP) {
            Some(next) => depth = next,
            None => break,
        }
    }
}
