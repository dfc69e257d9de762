// ui/renderer.rs - Ratatui-based renderer for the editor screen and its dialogs

use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};

use crate::editor::Editor;
use crate::mode::Mode;
use crate::ui::dialog::{ConfirmState, MessageState};
use crate::ui::file_chooser::FileChooserState;
use crate::ui::theme::Theme;
use crate::ui::widgets::dialog::{ConfirmDialog, MessageBox};
use crate::ui::widgets::editor_pane::{EditorPane, display_col};
use crate::ui::widgets::file_chooser::FileChooserWidget;
use crate::ui::widgets::menu::{FileMenu, MenuBar};
use crate::ui::widgets::status_bar::StatusBar;

/// A modal dialog drawn over the last editor frame.
pub enum Overlay<'a> {
    Confirm(&'a ConfirmState),
    Message(&'a MessageState),
    FileChooser(&'a mut FileChooserState),
}

/// Ratatui-based renderer for the text editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    /// Last full editor frame; dialogs are painted on top of it.
    backdrop: Buffer,
}

impl TuiRenderer {
    pub fn new(theme: Theme) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme,
            backdrop: Buffer::default(),
        })
    }

    /// Draw the editor UI
    pub fn draw(&mut self, editor: &Editor) -> io::Result<()> {
        let theme = &self.theme;
        let frame = self.terminal.draw(|f| render_editor(f, editor, theme))?;
        self.backdrop = frame.buffer.clone();
        Ok(())
    }

    /// Draw a dialog over the last editor frame
    pub fn draw_overlay(&mut self, overlay: Overlay<'_>) -> io::Result<()> {
        let theme = &self.theme;
        let backdrop = &self.backdrop;
        self.terminal.draw(|f| {
            let size = f.size();
            // After a resize the old frame no longer lines up; draw the dialog alone.
            if backdrop.area == size {
                f.buffer_mut().merge(backdrop);
            }
            match overlay {
                Overlay::Confirm(state) => {
                    let dialog = ConfirmDialog::new(state, theme);
                    let area = dialog.calculate_position(size);
                    f.render_widget(dialog, area);
                }
                Overlay::Message(state) => {
                    let dialog = MessageBox::new(state, theme);
                    let area = dialog.calculate_position(size);
                    f.render_widget(dialog, area);
                }
                Overlay::FileChooser(state) => {
                    let area = FileChooserWidget::calculate_position(size);
                    f.render_widget(FileChooserWidget::new(state, theme), area);
                }
            }
        })?;
        Ok(())
    }
}

/// Menu bar, text area and status bar, plus the File menu when it is open.
pub fn render_editor(f: &mut Frame, editor: &Editor, theme: &Theme) {
    let size = f.size();
    if size.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu bar
            Constraint::Min(1),    // Text area
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    let menu_open = editor.mode == Mode::Menu;
    f.render_widget(MenuBar::new(menu_open, theme), chunks[0]);
    f.render_widget(EditorPane::new(editor, theme), chunks[1]);
    f.render_widget(StatusBar::new(editor, theme), chunks[2]);

    if menu_open {
        let menu_area = FileMenu::calculate_position(size);
        f.render_widget(FileMenu::new(editor.menu_selected, theme), menu_area);
    } else {
        let text_area = chunks[1];
        let cursor_row = editor
            .cursor
            .line
            .saturating_sub(editor.viewport.offset_line) as u16;
        let line = editor
            .session
            .document()
            .line(editor.cursor.line)
            .unwrap_or_default();
        let cursor_col =
            display_col(&line, editor.viewport.offset_col, editor.cursor.col) as u16;
        if cursor_row < text_area.height && cursor_col < text_area.width {
            f.set_cursor(text_area.x + cursor_col, text_area.y + cursor_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EditorSession;
    use crate::storage::DiskStore;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf.get(x, y).symbol().to_string()).collect()
    }

    #[test]
    fn test_layout_rows() {
        let mut editor = Editor::new(EditorSession::new(Box::new(DiskStore), PathBuf::from(".")));
        editor.session.document_mut().insert_text("Hello", 0, 0);
        let theme = Theme::default();

        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        let frame = terminal.draw(|f| render_editor(f, &editor, &theme)).unwrap();

        assert!(row(frame.buffer, 0).starts_with(" File "));
        assert!(row(frame.buffer, 1).starts_with("Hello"));
        assert!(row(frame.buffer, 4).starts_with(" Untitled [+] | 1:1"));
    }

    #[test]
    fn test_open_menu_is_drawn() {
        let mut editor = Editor::new(EditorSession::new(Box::new(DiskStore), PathBuf::from(".")));
        editor.mode = Mode::Menu;
        let theme = Theme::default();

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let frame = terminal.draw(|f| render_editor(f, &editor, &theme)).unwrap();

        assert!(row(frame.buffer, 2).contains("New"));
        assert!(row(frame.buffer, 3).contains("Open"));
        assert!(row(frame.buffer, 4).contains("Save"));
    }

    #[test]
    fn test_cursor_after_wide_chars() {
        let mut editor = Editor::new(EditorSession::new(Box::new(DiskStore), PathBuf::from(".")));
        editor.session.document_mut().insert_text("日本語", 0, 0);
        editor.cursor.col = 2;
        let theme = Theme::default();

        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        terminal.draw(|f| render_editor(f, &editor, &theme)).unwrap();

        assert_eq!(terminal.get_cursor().unwrap(), (4, 1));
    }
}
