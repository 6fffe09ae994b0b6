//! Open a note, run the fold-on-open pipeline, and print the skimmable view.
//!
//! Run with: `cargo run --example auto_fold`

use deepfold::FoldConfig;
use deepfold_outline::{OutlineView, on_note_open};

const NOTE: &str = "\
---
tags: [detail]
---
- release checklist
    - cut the branch
        - freeze dependency versions
            - pin the registry snapshot
            - record lockfile hash
        - tag the commit
    - run the release build
- announce
    - draft the post
";

fn main() {
    let config = FoldConfig {
        indentation_fold_level: 8,
        recursive_fold: true,
        ..FoldConfig::default()
    };

    let mut view = OutlineView::from_text(NOTE);

    // Stage one: synchronous gate decision from the note's tags.
    let Some(task) = on_note_open(Some(&view), &config) else {
        println!("gate rejected the document, nothing to do");
        return;
    };

    // Stage two: a real host schedules this after layout settles; here we just wait it out.
    std::thread::sleep(task.delay());
    task.run(&mut view);

    println!("visible after fold-on-open:");
    for line in view.visible_lines() {
        println!("  {line}");
    }
}
