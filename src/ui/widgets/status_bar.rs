// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Status bar widget showing file name, modified marker, cursor position and the last message
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    pub fn status_text(&self) -> String {
        let doc = self.editor.session.document();
        let base_status = format!(
            " {}{} | {}:{}",
            doc.display_name(),
            if doc.modified { " [+]" } else { "" },
            self.editor.cursor.line + 1,
            self.editor.cursor.col + 1,
        );

        match &self.editor.status_message {
            Some(msg) => format!("{} | {}", base_status, msg),
            None => base_status,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.ui.status_bar_fg);

        // Fill the whole row, not only the text
        buf.set_style(area, style);
        let line_widget = Line::from(self.status_text()).style(style);
        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
