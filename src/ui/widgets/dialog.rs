// src/ui/widgets/dialog.rs - Confirmation and error dialogs

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::ui::dialog::{CONFIRM_BUTTONS, ConfirmState, MessageState};
use crate::ui::theme::Theme;

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Width and height a dialog needs to show `message` plus a button row.
fn dialog_size(message: &str, buttons_width: usize, area: Rect) -> (u16, u16) {
    let max_width = area.width.saturating_sub(4).max(10) as usize;
    let text_width = message.chars().count().max(buttons_width) + 4;
    let width = text_width.min(max_width);
    let inner = width.saturating_sub(4).max(1);
    let text_rows = message.chars().count().div_ceil(inner).max(1);
    // borders + text + blank line + buttons
    (width as u16, (text_rows + 4) as u16)
}

pub struct ConfirmDialog<'a> {
    pub state: &'a ConfirmState,
    pub theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn calculate_position(&self, area: Rect) -> Rect {
        let (width, height) = dialog_size(&self.state.message, 26, area);
        centered_rect(width, height, area)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let base = Style::default()
            .bg(self.theme.ui.dialog_bg)
            .fg(self.theme.ui.dialog_fg);

        let mut buttons = Vec::new();
        for (i, (_, label)) in CONFIRM_BUTTONS.iter().enumerate() {
            let style = if i == self.state.focused {
                Style::default()
                    .bg(self.theme.ui.selection_fg)
                    .fg(self.theme.ui.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            buttons.push(Span::styled(format!("[ {} ]", label), style));
            buttons.push(Span::styled(" ", base));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(self.theme.ui.border))
            .title(format!(" {} ", self.state.title))
            .title_style(base.add_modifier(Modifier::BOLD))
            .style(base)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        let text_height = inner.height.saturating_sub(2);
        Paragraph::new(self.state.message.as_str())
            .style(base)
            .wrap(Wrap { trim: true })
            .render(Rect { height: text_height, ..inner }, buf);

        if inner.height > 0 {
            let button_row = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            Paragraph::new(Line::from(buttons))
                .alignment(Alignment::Center)
                .render(button_row, buf);
        }
    }
}

pub struct MessageBox<'a> {
    pub state: &'a MessageState,
    pub theme: &'a Theme,
}

impl<'a> MessageBox<'a> {
    pub fn new(state: &'a MessageState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn calculate_position(&self, area: Rect) -> Rect {
        let (width, height) = dialog_size(&self.state.message, 8, area);
        centered_rect(width, height, area)
    }
}

impl Widget for MessageBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let base = Style::default()
            .bg(self.theme.ui.dialog_bg)
            .fg(self.theme.ui.dialog_fg);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(self.theme.ui.error))
            .title(format!(" {} ", self.state.title))
            .title_style(base.fg(self.theme.ui.error).add_modifier(Modifier::BOLD))
            .style(base)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        let text_height = inner.height.saturating_sub(2);
        Paragraph::new(self.state.message.as_str())
            .style(base)
            .wrap(Wrap { trim: true })
            .render(Rect { height: text_height, ..inner }, buf);

        if inner.height > 0 {
            let button_row = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            Paragraph::new(Line::from(Span::styled(
                "[ OK ]",
                Style::default()
                    .bg(self.theme.ui.selection_fg)
                    .fg(self.theme.ui.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .render(button_row, buf);
        }
    }
}
