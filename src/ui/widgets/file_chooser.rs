// src/ui/widgets/file_chooser.rs - Open / Save As dialog

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::ui::file_chooser::{ChooserKind, FileChooserState};
use crate::ui::theme::Theme;
use crate::ui::widgets::dialog::centered_rect;

pub struct FileChooserWidget<'a> {
    pub state: &'a mut FileChooserState,
    pub theme: &'a Theme,
}

impl<'a> FileChooserWidget<'a> {
    pub fn new(state: &'a mut FileChooserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn calculate_position(area: Rect) -> Rect {
        let width = (area.width.saturating_sub(8)).clamp(30.min(area.width), 90);
        let height = (area.height.saturating_sub(4)).clamp(10.min(area.height), 30);
        centered_rect(width, height, area)
    }
}

impl Widget for FileChooserWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let base = Style::default()
            .bg(self.theme.ui.dialog_bg)
            .fg(self.theme.ui.dialog_fg);
        let muted = base.fg(self.theme.ui.muted);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(self.theme.ui.border))
            .title(format!(" {} ", self.state.title))
            .title_style(base.add_modifier(Modifier::BOLD))
            .style(base);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Current directory
                Constraint::Min(1),    // Entries
                Constraint::Length(1), // File name input
                Constraint::Length(1), // Filter + key help
            ])
            .split(inner);

        Paragraph::new(Line::from(vec![
            Span::styled("Look in: ", muted),
            Span::styled(self.state.current_dir.display().to_string(), base),
        ]))
        .render(chunks[0], buf);

        // Entry list
        let mut lines = Vec::new();
        if let Some(err) = &self.state.error {
            lines.push(Line::from(Span::styled(
                format!("Cannot read directory: {}", err),
                base.fg(self.theme.ui.error),
            )));
        }
        let list_height = (chunks[1].height as usize).saturating_sub(lines.len());
        let range = self.state.visible_range(list_height);
        for (offset, entry) in self.state.entries[range.clone()].iter().enumerate() {
            let is_selected = range.start + offset == self.state.selected_index;
            let label = if entry.is_dir {
                format!(" {}/", entry.name)
            } else {
                format!(" {}", entry.name)
            };
            let style = if is_selected {
                Style::default()
                    .bg(self.theme.ui.selection_fg)
                    .fg(self.theme.ui.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else if entry.is_dir {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            lines.push(Line::from(Span::styled(label, style)));
        }
        Paragraph::new(lines).render(chunks[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("File name: ", muted),
            Span::styled(format!("{}_", self.state.name_input), base),
        ]))
        .render(chunks[2], buf);

        let action = match self.state.kind {
            ChooserKind::Open => "open",
            ChooserKind::Save => "save",
        };
        Paragraph::new(Line::from(vec![
            Span::styled(self.state.filter().label, base),
            Span::styled(
                format!("  Tab: filter  Enter: {}  Esc: cancel", action),
                muted,
            ),
        ]))
        .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::FileDialog;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_renders_entries_and_filter() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("letter.txt"), "hi").unwrap();
        let dialog = FileDialog::text_files("Open", dir.path().to_path_buf());
        let mut state = FileChooserState::new(ChooserKind::Open, &dialog);

        let theme = Theme::default();
        let screen = Rect::new(0, 0, 80, 24);
        let area = FileChooserWidget::calculate_position(screen);
        let mut buf = Buffer::empty(screen);
        FileChooserWidget::new(&mut state, &theme).render(area, &mut buf);

        let mut text = String::new();
        for y in 0..screen.height {
            for x in 0..screen.width {
                text.push_str(buf.get(x, y).symbol());
            }
            text.push('\n');
        }
        assert!(text.contains("letter.txt"));
        assert!(text.contains("Text files (*.txt)"));
        assert!(text.contains("File name:"));
    }

    #[test]
    fn test_position_fits_small_screens() {
        let screen = Rect::new(0, 0, 20, 8);
        let area = FileChooserWidget::calculate_position(screen);
        assert!(area.width <= screen.width);
        assert!(area.height <= screen.height);
    }
}
