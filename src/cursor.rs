// src/cursor.rs - Caret position and motion within a document

use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
    /// Column vertical motion tries to return to.
    pub desired_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            desired_col: 0,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn move_left(&mut self, doc: &Document) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.col = doc.line_len(self.line);
        }
        self.desired_col = self.col;
    }

    pub fn move_right(&mut self, doc: &Document) {
        if self.col < doc.line_len(self.line) {
            self.col += 1;
        } else if self.line + 1 < doc.line_count() {
            self.line += 1;
            self.col = 0;
        }
        self.desired_col = self.col;
    }

    pub fn move_up(&mut self, doc: &Document) {
        if self.line > 0 {
            self.line -= 1;
            self.col = self.desired_col.min(doc.line_len(self.line));
        }
    }

    pub fn move_down(&mut self, doc: &Document) {
        if self.line + 1 < doc.line_count() {
            self.line += 1;
            self.col = self.desired_col.min(doc.line_len(self.line));
        }
    }

    pub fn move_line_start(&mut self) {
        self.col = 0;
        self.desired_col = 0;
    }

    pub fn move_line_end(&mut self, doc: &Document) {
        self.col = doc.line_len(self.line);
        self.desired_col = self.col;
    }

    /// Pull the cursor back inside the document after its text changed.
    pub fn clamp(&mut self, doc: &Document) {
        let max_line = doc.line_count().saturating_sub(1);
        self.line = self.line.min(max_line);
        self.col = self.col.min(doc.line_len(self.line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn doc(text: &str) -> Document {
        let mut doc = Document::new();
        doc.insert_text(text, 0, 0);
        doc
    }

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new();
        assert_eq!(cursor.line, 0);
        assert_eq!(cursor.col, 0);
        assert_eq!(cursor.desired_col, 0);
    }

    #[test]
    fn test_horizontal_motion_wraps_lines() {
        let doc = doc("ab\ncd");
        let mut cursor = Cursor::new();
        cursor.move_line_end(&doc);
        assert_eq!(cursor.col, 2);
        cursor.move_right(&doc);
        assert_eq!((cursor.line, cursor.col), (1, 0));
        cursor.move_left(&doc);
        assert_eq!((cursor.line, cursor.col), (0, 2));
    }

    #[test]
    fn test_vertical_motion_keeps_desired_col() {
        let doc = doc("long line\nab\nanother long");
        let mut cursor = Cursor::new();
        cursor.move_line_end(&doc);
        cursor.move_down(&doc);
        assert_eq!(cursor.col, 2);
        cursor.move_down(&doc);
        assert_eq!(cursor.col, 9);
    }

    #[test]
    fn test_clamp_after_clear() {
        let mut doc = doc("one\ntwo\nthree");
        let mut cursor = Cursor { line: 2, col: 5, desired_col: 5 };
        doc.clear();
        cursor.clamp(&doc);
        assert_eq!((cursor.line, cursor.col), (0, 0));
    }

    proptest! {
        #[test]
        fn motion_stays_in_bounds(text in "[a-c\n]{0,40}", moves in prop::collection::vec(0..6u8, 0..60)) {
            let doc = doc(&text);
            let mut cursor = Cursor::new();
            for m in moves {
                match m {
                    0 => cursor.move_left(&doc),
                    1 => cursor.move_right(&doc),
                    2 => cursor.move_up(&doc),
                    3 => cursor.move_down(&doc),
                    4 => cursor.move_line_start(),
                    _ => cursor.move_line_end(&doc),
                }
                prop_assert!(cursor.line < doc.line_count());
                prop_assert!(cursor.col <= doc.line_len(cursor.line));
            }
        }
    }
}
