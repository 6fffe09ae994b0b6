//! The document-open pipeline.
//!
//! Opening a document runs two stages. Stage one is synchronous: the applicability rule decides
//! from the document's tags whether folding applies at all. Stage two is deferred: the fold
//! itself runs only after the host has finished laying the document out, because fold ranges
//! queried against a half-rendered view can come back stale. The deferral is a one-shot task;
//! dropping it without running it cancels the fold.

use std::time::Duration;

use crate::config::FoldConfig;
use crate::engine::fold_deep;
use crate::view::FoldView;

/// How long the host should wait between the open event and running the fold.
///
/// A post-render accommodation for the host, not part of the fold algorithm's contract.
pub const FOLD_ON_OPEN_DELAY: Duration = Duration::from_millis(100);

/// A one-shot fold task produced by the gate for a document that passed it.
///
/// Carries a snapshot of the configuration taken at gate time, so a settings change between the
/// open event and the deferred run does not alter an in-flight fold.
#[derive(Debug, Clone)]
pub struct DeferredFold {
    config: FoldConfig,
}

impl DeferredFold {
    /// How long to wait after the open event before calling [`DeferredFold::run`].
    pub fn delay(&self) -> Duration {
        FOLD_ON_OPEN_DELAY
    }

    /// Run the fold against the now laid-out view, consuming the task.
    pub fn run<V: FoldView>(self, view: &mut V) {
        fold_deep(view, &self.config);
    }
}

/// Stage one of the open pipeline: decide whether the opened document folds.
///
/// `doc_tags` is the document's combined tag set (front-matter plus inline), as reported by the
/// host's metadata lookup. Returns `None` when the applicability rule rejects the document; an
/// open event that carries no document never reaches this gate.
pub fn on_document_open(config: &FoldConfig, doc_tags: &[String]) -> Option<DeferredFold> {
    if !config.show_method.matches(doc_tags) {
        log::debug!(target: "deepfold::trigger", "gate rejected document (tags: {doc_tags:?})");
        return None;
    }
    Some(DeferredFold {
        config: config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowMethod;

    #[test]
    fn test_gate_never_rejects_everything() {
        let config = FoldConfig {
            show_method: ShowMethod::Never,
            ..FoldConfig::default()
        };
        assert!(on_document_open(&config, &[]).is_none());
        assert!(on_document_open(&config, &["detail".to_string()]).is_none());
    }

    #[test]
    fn test_gate_always_accepts_untagged() {
        let config = FoldConfig::default();
        assert!(on_document_open(&config, &[]).is_some());
    }

    #[test]
    fn test_gate_tagged_matches_case_insensitively() {
        let config = FoldConfig {
            show_method: ShowMethod::Tagged {
                tags: vec!["detail".to_string()],
            },
            ..FoldConfig::default()
        };
        assert!(on_document_open(&config, &["Detail".to_string(), "x".to_string()]).is_some());
        assert!(on_document_open(&config, &["other".to_string()]).is_none());
    }

    #[test]
    fn test_task_snapshots_config_at_gate_time() {
        let mut config = FoldConfig {
            indentation_fold_level: 4,
            ..FoldConfig::default()
        };
        let task = on_document_open(&config, &[]).expect("gate accepts");

        // Mutating the live config after the gate does not touch the in-flight task.
        config.indentation_fold_level = 0;
        assert_eq!(task.config.indentation_fold_level, 4);
        assert_eq!(task.delay(), FOLD_ON_OPEN_DELAY);
    }
}
