//! Outline document snapshot.
//!
//! An immutable, rope-backed view of the text being folded. The fold pipeline only ever reads
//! line content and maps between lines and character offsets; edits stay with the host editor.

use deepfold::indent_width;
use ropey::Rope;

/// An immutable outline text snapshot with O(log n) line access.
pub struct OutlineDocument {
    rope: Rope,
}

impl OutlineDocument {
    /// Build a document snapshot from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of the given line without its trailing newline, or `None` when out of range.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    /// Character offset of the start of the given line.
    pub fn line_to_char(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// Character offset just past the last content character of the given line, excluding the
    /// newline.
    pub fn line_end_char(&self, line: usize) -> usize {
        match self.line_text(line) {
            Some(text) => self.rope.line_to_char(line) + text.chars().count(),
            None => self.rope.len_chars(),
        }
    }

    /// Line containing the given character offset (clamped to the document).
    pub fn char_to_line(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    /// Greatest indentation depth over all lines; 0 for an empty document.
    pub fn max_indent(&self) -> usize {
        (0..self.line_count())
            .filter_map(|line| self.line_text(line))
            .map(|text| indent_width(&text))
            .max()
            .unwrap_or(0)
    }

    /// Complete document text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_access_strips_newline() {
        let doc = OutlineDocument::from_text("- a\n    - b\n- c");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(0).as_deref(), Some("- a"));
        assert_eq!(doc.line_text(1).as_deref(), Some("    - b"));
        assert_eq!(doc.line_text(3), None);
    }

    #[test]
    fn test_line_offsets() {
        let doc = OutlineDocument::from_text("ab\ncd\nef");
        assert_eq!(doc.line_to_char(0), 0);
        assert_eq!(doc.line_to_char(1), 3);
        assert_eq!(doc.line_end_char(0), 2);
        assert_eq!(doc.line_end_char(2), 8);

        // The offset of a line's newline still maps to that line.
        assert_eq!(doc.char_to_line(2), 0);
        assert_eq!(doc.char_to_line(3), 1);
    }

    #[test]
    fn test_max_indent() {
        let doc = OutlineDocument::from_text("- a\n    - b\n\t\t- c");
        assert_eq!(doc.max_indent(), 8);

        assert_eq!(OutlineDocument::from_text("").max_indent(), 0);
    }
}
