// ui/prompter.rs - Modal dialogs in the terminal

use crossterm::event::{Event, KeyEvent, KeyEventKind, read};
use log::warn;
use std::io;
use std::path::PathBuf;

use crate::prompt::{Confirm, FileDialog, Prompter};
use crate::storage::FileAccessError;
use crate::ui::dialog::{ConfirmState, MessageState};
use crate::ui::file_chooser::{ChooserKind, ChooserResult, FileChooserState, overwrite_message};
use crate::ui::renderer::{Overlay, TuiRenderer};

/// Answers the session's questions by running a nested event loop per dialog.
///
/// If the terminal cannot be drawn to or read from, the dialog counts as
/// cancelled.
pub struct TerminalPrompter<'a> {
    renderer: &'a mut TuiRenderer,
}

impl<'a> TerminalPrompter<'a> {
    pub fn new(renderer: &'a mut TuiRenderer) -> Self {
        Self { renderer }
    }

    fn choose(&mut self, kind: ChooserKind, dialog: &FileDialog) -> Option<PathBuf> {
        let mut state = FileChooserState::new(kind, dialog);
        loop {
            if let Err(err) = self.renderer.draw_overlay(Overlay::FileChooser(&mut state)) {
                warn!("file dialog draw failed: {}", err);
                return None;
            }
            match read_key() {
                Ok(Some(key)) => match state.handle_key(key) {
                    ChooserResult::Continue => {}
                    ChooserResult::Chosen(path) => return Some(path),
                    // Anything but "Yes" goes back to the file list.
                    ChooserResult::ConfirmOverwrite(path) => {
                        if self.confirm("Confirm Save As", &overwrite_message(&path)) == Confirm::Yes {
                            return Some(path);
                        }
                    }
                    ChooserResult::Cancelled => return None,
                },
                Ok(None) => {}
                Err(err) => {
                    warn!("file dialog input failed: {}", err);
                    return None;
                }
            }
        }
    }
}

/// Next key press; other events (resize, release, mouse) yield `None` so the
/// caller redraws.
fn read_key() -> io::Result<Option<KeyEvent>> {
    match read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

impl Prompter for TerminalPrompter<'_> {
    fn confirm(&mut self, title: &str, message: &str) -> Confirm {
        let mut state = ConfirmState::new(title, message);
        loop {
            if let Err(err) = self.renderer.draw_overlay(Overlay::Confirm(&state)) {
                warn!("confirm dialog draw failed: {}", err);
                return Confirm::Cancel;
            }
            match read_key() {
                Ok(Some(key)) => {
                    if let Some(answer) = state.handle_key(key) {
                        return answer;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    warn!("confirm dialog input failed: {}", err);
                    return Confirm::Cancel;
                }
            }
        }
    }

    fn choose_open(&mut self, dialog: &FileDialog) -> Option<PathBuf> {
        self.choose(ChooserKind::Open, dialog)
    }

    fn choose_save(&mut self, dialog: &FileDialog) -> Option<PathBuf> {
        self.choose(ChooserKind::Save, dialog)
    }

    fn report_error(&mut self, error: &FileAccessError) {
        let state = MessageState::error(error.to_string());
        loop {
            if let Err(err) = self.renderer.draw_overlay(Overlay::Message(&state)) {
                warn!("error dialog draw failed: {}", err);
                return;
            }
            match read_key() {
                Ok(Some(key)) if state.handle_key(key) => return,
                Ok(_) => {}
                Err(err) => {
                    warn!("error dialog input failed: {}", err);
                    return;
                }
            }
        }
    }
}
