#![warn(missing_docs)]
//! `deepfold` - Headless Auto-Fold Kernel for Indented Outlines
//!
//! # Overview
//!
//! `deepfold` collapses deeply indented bullet-list items so a document opens in a shallow,
//! skimmable view while every branch stays expandable on demand. The crate is headless: it owns
//! no text and applies no visual state itself. A host editor exposes its document and fold
//! primitives through the [`FoldView`] trait, and the kernel drives them.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Open Trigger (gate + deferred task)        │  ← Host event plumbing
//! ├─────────────────────────────────────────────┤
//! │  Recursive Orchestrator (depth descent)     │  ← fold_deep
//! ├─────────────────────────────────────────────┤
//! │  Depth Pass (claim / range / apply loop)    │  ← fold_at_depth
//! ├─────────────────────────────────────────────┤
//! │  Indentation Measurement                    │  ← indent_width
//! ├─────────────────────────────────────────────┤
//! │  Host View (FoldView: lines, ranges, fold)  │  ← provided by the host
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use deepfold::{FoldConfig, ShowMethod, on_document_open};
//!
//! let config = FoldConfig {
//!     indentation_fold_level: 8,
//!     recursive_fold: true,
//!     show_method: ShowMethod::Always,
//! };
//!
//! // Stage one: the gate decides synchronously on the open event.
//! let Some(task) = on_document_open(&config, &[]) else {
//!     return;
//! };
//!
//! // Stage two: the host schedules the task and runs it after layout settles.
//! let _wait = task.delay();
//! // task.run(&mut view);
//! ```
//!
//! # Module Description
//!
//! - [`indent`] - tab-expanded indentation depth and list-item detection
//! - [`view`] - the host capability boundary ([`FoldView`], [`BlockSpan`], [`FoldRange`])
//! - [`engine`] - depth passes and the recursive orchestrator
//! - [`config`] - fold configuration, applicability rule, JSON persistence
//! - [`trigger`] - the document-open pipeline (gate decision + deferred task)
//!
//! # Error Policy
//!
//! Folding is cosmetic and best-effort. Missing ranges, degenerate ranges, and documents with
//! nothing deep enough to fold are silent skips, not errors. Hard errors exist only at the
//! configuration-store boundary ([`ConfigError`]).

pub mod config;
pub mod engine;
pub mod indent;
pub mod trigger;
pub mod view;

pub use config::{ConfigError, ConfigStore, FoldConfig, ShowMethod};
pub use engine::{DEPTH_STEP, fold_at_depth, fold_deep};
pub use indent::{TAB_WIDTH, indent_width, is_list_item};
pub use trigger::{DeferredFold, FOLD_ON_OPEN_DELAY, on_document_open};
pub use view::{BlockSpan, FoldRange, FoldView};
