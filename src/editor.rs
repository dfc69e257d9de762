// src/editor.rs - Core editor coordinator

use log::debug;

use crate::command::Command;
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::prompt::Prompter;
use crate::session::{EditorSession, Outcome};
use crate::ui::widgets::menu::FILE_MENU;
use crate::viewport::Viewport;

pub struct Editor {
    pub session: EditorSession,
    pub cursor: Cursor,
    pub mode: Mode,
    pub viewport: Viewport,
    pub menu_selected: usize,
    pub status_message: Option<String>,
}

impl Editor {
    pub fn new(session: EditorSession) -> Self {
        Self {
            session,
            cursor: Cursor::new(),
            mode: Mode::Edit,
            viewport: Viewport::new(20, 80),
            menu_selected: 0,
            status_message: None,
        }
    }

    /// Run one command to completion. Returns true when the editor should quit.
    pub fn execute_command(&mut self, cmd: Command, ui: &mut dyn Prompter) -> bool {
        if cmd.is_file_command() {
            self.mode = Mode::Edit;
        }

        match cmd {
            Command::Quit => return true,
            Command::New => {
                let outcome = self.session.new_document(ui);
                self.after_file_command(cmd, outcome);
            }
            Command::Open => {
                let outcome = self.session.open(ui);
                self.after_file_command(cmd, outcome);
            }
            Command::Save => {
                let outcome = self.session.save(ui);
                self.after_file_command(cmd, outcome);
            }
            Command::InsertChar(c) => {
                let doc = self.session.document_mut();
                doc.insert_char(c, self.cursor.line, self.cursor.col);
                if c == '\n' {
                    self.cursor.line += 1;
                    self.cursor.col = 0;
                } else {
                    self.cursor.col += 1;
                }
                self.cursor.desired_col = self.cursor.col;
                self.status_message = None;
            }
            Command::DeleteChar => {
                let (line, col) = (self.cursor.line, self.cursor.col);
                let prev_len = if line > 0 {
                    self.session.document().line_len(line - 1)
                } else {
                    0
                };
                if self.session.document_mut().delete_char(line, col) {
                    if col > 0 {
                        self.cursor.col -= 1;
                    } else {
                        self.cursor.line -= 1;
                        self.cursor.col = prev_len;
                    }
                    self.cursor.desired_col = self.cursor.col;
                }
            }
            Command::DeleteForward => {
                self.session
                    .document_mut()
                    .delete_forward(self.cursor.line, self.cursor.col);
            }
            Command::MoveLeft => self.cursor.move_left(self.session.document()),
            Command::MoveRight => self.cursor.move_right(self.session.document()),
            Command::MoveUp => self.cursor.move_up(self.session.document()),
            Command::MoveDown => self.cursor.move_down(self.session.document()),
            Command::MoveLineStart => self.cursor.move_line_start(),
            Command::MoveLineEnd => self.cursor.move_line_end(self.session.document()),
            Command::OpenMenu => {
                self.mode = Mode::Menu;
                self.menu_selected = 0;
            }
            Command::CloseMenu => self.mode = Mode::Edit,
            Command::MenuNext => {
                self.menu_selected = (self.menu_selected + 1) % FILE_MENU.len();
            }
            Command::MenuPrev => {
                self.menu_selected = if self.menu_selected == 0 {
                    FILE_MENU.len() - 1
                } else {
                    self.menu_selected - 1
                };
            }
            Command::MenuAccept => {
                self.mode = Mode::Edit;
                if let Some(item) = FILE_MENU.get(self.menu_selected) {
                    return self.execute_command(item.command, ui);
                }
            }
        }

        self.cursor.clamp(self.session.document());
        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor.col);
        false
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        // Menu bar and status bar take one row each.
        self.viewport
            .resize((rows as usize).saturating_sub(2), cols as usize);
        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor.col);
    }

    fn after_file_command(&mut self, cmd: Command, outcome: Outcome) {
        debug!("{cmd:?} finished: {outcome:?}");
        let replaced = outcome == Outcome::Completed && cmd != Command::Save;
        if replaced {
            self.cursor.reset();
            self.viewport.reset();
        }
        let name = self.session.document().display_name();
        self.status_message = Some(match (cmd, outcome) {
            (Command::Save, Outcome::Completed) => format!("Saved {name}"),
            (Command::Open, Outcome::Completed) => format!("Opened {name}"),
            (_, Outcome::Completed) => "New document".to_string(),
            (_, Outcome::Cancelled) => format!("{cmd:?} cancelled"),
            (_, Outcome::Failed) => format!("{cmd:?} failed"),
        });
    }
}
