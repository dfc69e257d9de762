// src/document.rs - In-memory text plus its optional backing file

use ropey::Rope;
use std::path::{Path, PathBuf};

/// The text being edited and the file it belongs to, if any.
///
/// `path` is only ever assigned by the session after an Open or a Save-as;
/// editing never touches it.
pub struct Document {
    pub rope: Rope,
    pub path: Option<PathBuf>,
    pub modified: bool,
    pub version: usize,
}

impl Document {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            path: None,
            modified: false,
            version: 0,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Name shown in the status bar.
    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "Untitled".to_string(),
        }
    }

    /// Drop the content and the backing path.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.path = None;
        self.modified = false;
        self.version = 0;
    }

    /// Replace the whole content with freshly loaded text.
    pub fn load(&mut self, text: &str, path: PathBuf) {
        self.rope = Rope::from_str(text);
        self.path = Some(path);
        self.modified = false;
        self.version = 0;
    }

    pub fn insert_char(&mut self, ch: char, line: usize, col: usize) {
        let char_idx = self.char_index(line, col);
        self.rope.insert_char(char_idx, ch);
        self.touch();
    }

    pub fn insert_text(&mut self, text: &str, line: usize, col: usize) {
        let char_idx = self.char_index(line, col);
        self.rope.insert(char_idx, text);
        self.touch();
    }

    /// Backspace: remove the character before `(line, col)`, joining with the
    /// previous line at column 0. Returns false when there is nothing to remove.
    pub fn delete_char(&mut self, line: usize, col: usize) -> bool {
        let char_idx = self.char_index(line, col);
        if char_idx == 0 {
            return false;
        }
        // A "\r\n" pair goes away as one line break.
        let start = if col == 0 && char_idx >= 2 && self.rope.slice(char_idx - 2..char_idx) == "\r\n" {
            char_idx - 2
        } else {
            char_idx - 1
        };
        self.rope.remove(start..char_idx);
        self.touch();
        true
    }

    /// Delete: remove the character at `(line, col)`.
    pub fn delete_forward(&mut self, line: usize, col: usize) -> bool {
        let char_idx = self.char_index(line, col);
        let len = self.rope.len_chars();
        if char_idx >= len {
            return false;
        }
        let end = if char_idx + 2 <= len && self.rope.slice(char_idx..char_idx + 2) == "\r\n" {
            char_idx + 2
        } else {
            char_idx + 1
        };
        self.rope.remove(char_idx..end);
        self.touch();
        true
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line text without its line break.
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let len = self.line_len(line_idx);
            Some(self.rope.line(line_idx).slice(..len).to_string())
        } else {
            None
        }
    }

    /// Number of characters on a line, excluding the line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && is_line_break(line.char(len - 1)) {
            let last = line.char(len - 1);
            len -= 1;
            if last == '\n' && len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn char_index(&self, line: usize, col: usize) -> usize {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(line) + col.min(self.line_len(line))
    }

    fn touch(&mut self) {
        self.modified = true;
        self.version += 1;
    }
}

/// Every break ropey splits lines on.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[test]
fn test_insert_char() {
    let mut doc = Document::new();
    doc.insert_char('a', 0, 0);
    assert_eq!(doc.line(0).unwrap(), "a");
    assert!(doc.modified);
    assert_eq!(doc.version, 1);
}

#[test]
fn test_new_document_is_empty_and_untitled() {
    let doc = Document::new();
    assert!(doc.is_empty());
    assert!(doc.path().is_none());
    assert_eq!(doc.display_name(), "Untitled");
    assert_eq!(doc.line_count(), 1);
}

#[test]
fn test_backspace_joins_lines() {
    let mut doc = Document::new();
    doc.insert_text("ab\ncd", 0, 0);
    assert_eq!(doc.line_count(), 2);
    assert!(doc.delete_char(1, 0));
    assert_eq!(doc.text(), "abcd");
    assert!(!doc.delete_char(0, 0));
}

#[test]
fn test_crlf_is_one_break() {
    let mut doc = Document::new();
    doc.load("one\r\ntwo", PathBuf::from("crlf.txt"));
    assert_eq!(doc.line(0).unwrap(), "one");
    assert_eq!(doc.line_len(0), 3);
    assert!(doc.delete_forward(0, 3));
    assert_eq!(doc.text(), "onetwo");
}

#[test]
fn test_load_then_clear() {
    let mut doc = Document::new();
    doc.load("hello\nworld", PathBuf::from("/tmp/hello.txt"));
    assert_eq!(doc.line(1).unwrap(), "world");
    assert_eq!(doc.display_name(), "hello.txt");
    assert!(!doc.modified);

    doc.clear();
    assert!(doc.is_empty());
    assert!(doc.path.is_none());
}

#[test]
fn test_out_of_range_positions_clamp() {
    let mut doc = Document::new();
    doc.insert_text("abc", 0, 0);
    doc.insert_char('!', 5, 99);
    assert_eq!(doc.text(), "abc!");
    assert!(!doc.delete_forward(0, 4));
}

#[test]
fn test_other_line_breaks_are_not_text() {
    let mut doc = Document::new();
    doc.load("a\rbb\u{2028}ccc\u{0C}d", PathBuf::from("breaks.txt"));
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.line(0).unwrap(), "a");
    assert_eq!(doc.line_len(1), 2);
    assert_eq!(doc.line(2).unwrap(), "ccc");
    assert_eq!(doc.line_len(3), 1);

    // Typing at the end of a line lands before its break
    doc.insert_char('!', 1, 99);
    assert_eq!(doc.line(1).unwrap(), "bb!");
    assert_eq!(doc.line_count(), 4);
}
