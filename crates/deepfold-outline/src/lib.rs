#![warn(missing_docs)]
//! `deepfold-outline` - Outline document integration for the `deepfold` kernel.
//!
//! This crate supplies the host side of the fold pipeline for plain-text outlines (indented
//! bullet lists, optionally with YAML front-matter):
//!
//! - [`OutlineDocument`] - an immutable, rope-backed line snapshot
//! - [`FoldingManager`] - collapse state with logical/visual line mapping
//! - [`OutlineView`] - the [`deepfold::FoldView`] implementation, deriving a list item's
//!   foldable range from the indentation run below it
//! - [`note_tags`] - front-matter + inline tag extraction for the applicability gate
//!
//! # Quick Start
//!
//! ```rust
//! use deepfold::{FoldConfig, on_document_open};
//! use deepfold_outline::{OutlineView, note_tags};
//!
//! let text = "- task\n    - step\n        - detail note\n";
//! let mut view = OutlineView::from_text(text);
//!
//! let config = FoldConfig {
//!     indentation_fold_level: 4,
//!     recursive_fold: true,
//!     ..FoldConfig::default()
//! };
//!
//! if let Some(task) = on_document_open(&config, &note_tags(text)) {
//!     // A real host waits task.delay() for layout to settle first.
//!     task.run(&mut view);
//! }
//!
//! assert_eq!(view.folds().collapsed_count(), 1);
//! ```

pub mod document;
pub mod folding;
pub mod note;
pub mod view;

pub use document::OutlineDocument;
pub use folding::{FoldRegion, FoldingManager};
pub use note::{front_matter_tags, inline_tags, note_tags};
pub use view::{OutlineView, on_note_open};
