// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthChar;

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Editor pane widget that renders the visible slice of the document
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.general.background)
            .fg(self.theme.general.foreground);
        buf.set_style(area, style);

        let doc = self.editor.session.document();
        let viewport = &self.editor.viewport;

        for row in 0..area.height {
            let line_idx = viewport.offset_line + row as usize;
            let Some(line) = doc.line(line_idx) else {
                break;
            };
            let visible: String = line
                .chars()
                .skip(viewport.offset_col)
                .take(area.width as usize)
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            buf.set_stringn(area.x, area.y + row, visible, area.width as usize, style);
        }
    }
}

/// Screen cells a character takes; control characters show as one blank.
pub fn cell_width(c: char) -> usize {
    if c.is_control() {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

/// Screen column of char column `col` when the line is drawn from `offset_col`.
pub fn display_col(line: &str, offset_col: usize, col: usize) -> usize {
    line.chars()
        .skip(offset_col)
        .take(col.saturating_sub(offset_col))
        .map(cell_width)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EditorSession;
    use crate::storage::DiskStore;
    use std::path::PathBuf;

    fn row_text(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf.get(x, y).symbol().to_string()).collect()
    }

    #[test]
    fn test_renders_scrolled_lines() {
        let mut editor = Editor::new(EditorSession::new(Box::new(DiskStore), PathBuf::from(".")));
        editor
            .session
            .document_mut()
            .insert_text("first\nsecond\nthird", 0, 0);
        editor.viewport.offset_line = 1;
        editor.viewport.offset_col = 1;

        let theme = Theme::default();
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&editor, &theme).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0, 6), "econd ");
        assert_eq!(row_text(&buf, 1, 6), "hird  ");
        assert_eq!(row_text(&buf, 2, 6), "      ");
        assert_eq!(buf.get(0, 2).bg, theme.general.background);
    }

    #[test]
    fn test_tabs_take_one_cell() {
        let mut editor = Editor::new(EditorSession::new(Box::new(DiskStore), PathBuf::from(".")));
        editor.session.document_mut().insert_text("a\tb", 0, 0);

        let theme = Theme::default();
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&editor, &theme).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0, 4), "a b ");
    }

    #[test]
    fn test_display_col_counts_wide_chars_twice() {
        assert_eq!(display_col("abc", 0, 2), 2);
        assert_eq!(display_col("日本x", 0, 2), 4);
        assert_eq!(display_col("日本x", 1, 3), 3);
        assert_eq!(display_col("a\tb", 0, 3), 3);
        assert_eq!(display_col("ab", 5, 2), 0);
    }
}
