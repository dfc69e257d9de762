// src/ui/widgets/menu.rs - Menu bar and File menu dropdown

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::command::Command;
use crate::ui::theme::Theme;

pub struct MenuItem {
    pub label: &'static str,
    pub shortcut: &'static str,
    pub command: Command,
}

pub const FILE_MENU: [MenuItem; 3] = [
    MenuItem {
        label: "New",
        shortcut: "Ctrl+N",
        command: Command::New,
    },
    MenuItem {
        label: "Open",
        shortcut: "Ctrl+O",
        command: Command::Open,
    },
    MenuItem {
        label: "Save",
        shortcut: "Ctrl+S",
        command: Command::Save,
    },
];

/// Top row with the "File" title.
pub struct MenuBar<'a> {
    pub open: bool,
    pub theme: &'a Theme,
}

impl<'a> MenuBar<'a> {
    pub fn new(open: bool, theme: &'a Theme) -> Self {
        Self { open, theme }
    }
}

impl Widget for MenuBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = Style::default()
            .bg(self.theme.ui.menu_bar_bg)
            .fg(self.theme.ui.menu_bar_fg);
        let title = if self.open {
            Style::default()
                .bg(self.theme.ui.selection_bg)
                .fg(self.theme.ui.selection_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            bar
        };

        buf.set_style(area, bar);
        let line = Line::from(vec![
            Span::styled(" File ", title),
            Span::styled("  F10: menu  Ctrl+Q: quit", bar.add_modifier(Modifier::DIM)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Dropdown listing the File menu items.
pub struct FileMenu<'a> {
    pub selected_index: usize,
    pub theme: &'a Theme,
}

impl<'a> FileMenu<'a> {
    pub fn new(selected_index: usize, theme: &'a Theme) -> Self {
        Self {
            selected_index,
            theme,
        }
    }

    /// Dropdown area hanging below the "File" title.
    pub fn calculate_position(area: Rect) -> Rect {
        let inner_width = FILE_MENU
            .iter()
            .map(|item| item.label.len() + item.shortcut.len() + 4)
            .max()
            .unwrap_or(16) as u16;

        let width = (inner_width + 2).min(area.width);
        let height = (FILE_MENU.len() as u16 + 2).min(area.height.saturating_sub(1));

        Rect {
            x: area.x,
            y: area.y + 1,
            width,
            height,
        }
    }
}

impl Widget for FileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let inner_width = area.width.saturating_sub(2) as usize;
        let mut lines = Vec::new();

        for (i, item) in FILE_MENU.iter().enumerate() {
            let style = if i == self.selected_index {
                Style::default()
                    .fg(self.theme.ui.selection_fg)
                    .bg(self.theme.ui.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(self.theme.ui.menu_bar_fg)
                    .bg(self.theme.ui.menu_bar_bg)
            };

            let gap = inner_width.saturating_sub(item.label.len() + item.shortcut.len() + 2);
            let text = format!(" {}{}{} ", item.label, " ".repeat(gap), item.shortcut);
            lines.push(Line::from(vec![Span::styled(text, style)]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(self.theme.ui.menu_bar_fg)
                    .bg(self.theme.ui.menu_bar_bg),
            );

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
