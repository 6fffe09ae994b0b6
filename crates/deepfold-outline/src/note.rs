//! Note metadata: front-matter and inline tags.
//!
//! The applicability gate only needs a tag set, and tag metadata in real notes is messy. This
//! module is deliberately tolerant: a missing front-matter block, YAML that does not parse, or a
//! `tags:` field of the wrong shape all degrade to "no tags" rather than an error; an
//! unmatched document simply does not fold.

use regex::Regex;
use serde_yaml::Value;
use std::sync::OnceLock;

fn inline_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"#[A-Za-z0-9_][A-Za-z0-9_/-]*").expect("valid inline tag pattern")
    })
}

/// Split off the leading `---` fenced front-matter block, returning `(yaml, body)`.
///
/// Returns no block unless the document starts with the fence and closes it.
fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix("---") else {
        return (None, text);
    };
    if !rest.starts_with('\n') && !rest.starts_with("\r\n") {
        return (None, text);
    }
    match rest.find("\n---") {
        Some(end) => {
            let body = rest[end + 4..].trim_start_matches(['\r', '\n']);
            (Some(&rest[..end]), body)
        }
        None => (None, text),
    }
}

/// Tags declared in the YAML front-matter block.
///
/// `tags:` may be a sequence of strings or a single string; any other shape yields no tags.
pub fn front_matter_tags(text: &str) -> Vec<String> {
    let (Some(block), _) = split_front_matter(text) else {
        return Vec::new();
    };
    let Ok(value) = serde_yaml::from_str::<Value>(block) else {
        log::debug!(target: "deepfold_outline::note", "unparseable front-matter, treating as untagged");
        return Vec::new();
    };

    match value.get("tags") {
        Some(Value::String(tag)) => vec![tag.clone()],
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

/// Inline `#tag` tokens in the document body (front-matter excluded).
pub fn inline_tags(text: &str) -> Vec<String> {
    let (_, body) = split_front_matter(text);
    inline_tag_pattern()
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The document's combined tag set: front-matter tags plus inline tags.
///
/// Original spelling is preserved (the gate normalizes at match time); exact duplicates are
/// dropped.
pub fn note_tags(text: &str) -> Vec<String> {
    let mut tags = front_matter_tags(text);
    for tag in inline_tags(text) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
