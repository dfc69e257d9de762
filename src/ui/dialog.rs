// ui/dialog.rs - Key handling for the modal yes/no/cancel and error dialogs

use crossterm::event::{KeyCode, KeyEvent};

use crate::prompt::Confirm;

pub const CONFIRM_BUTTONS: [(Confirm, &str); 3] = [
    (Confirm::Yes, "Yes"),
    (Confirm::No, "No"),
    (Confirm::Cancel, "Cancel"),
];

/// Three-way question with a focused button.
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    pub focused: usize,
}

impl ConfirmState {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            focused: 0,
        }
    }

    /// Returns the answer once the user has given one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Confirm> {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.focused = (self.focused + CONFIRM_BUTTONS.len() - 1) % CONFIRM_BUTTONS.len();
                None
            }
            KeyCode::Right | KeyCode::Tab => {
                self.focused = (self.focused + 1) % CONFIRM_BUTTONS.len();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(CONFIRM_BUTTONS[self.focused].0),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Confirm::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Confirm::No),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => Some(Confirm::Cancel),
            _ => None,
        }
    }
}

/// Error box with a single OK button.
#[derive(Debug, Clone)]
pub struct MessageState {
    pub title: String,
    pub message: String,
}

impl MessageState {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// True when the box should close.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
        )
    }
}
