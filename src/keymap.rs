// src/keymap.rs - Key events to editor commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::mode::Mode;

pub fn key_to_command(key_event: KeyEvent, mode: Mode) -> Option<Command> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);

    match mode {
        Mode::Edit => match key_event.code {
            // AltGr arrives as Ctrl+Alt on Windows.
            KeyCode::Char(c) if ctrl && alt => Some(Command::InsertChar(c)),
            KeyCode::Char('n') if ctrl => Some(Command::New),
            KeyCode::Char('o') if ctrl => Some(Command::Open),
            KeyCode::Char('s') if ctrl => Some(Command::Save),
            KeyCode::Char('q') if ctrl => Some(Command::Quit),
            KeyCode::Char('f') if alt => Some(Command::OpenMenu),
            KeyCode::F(10) => Some(Command::OpenMenu),
            KeyCode::Char(_) if ctrl || alt => None,
            KeyCode::Char(c) => Some(Command::InsertChar(c)),
            KeyCode::Enter => Some(Command::InsertChar('\n')),
            KeyCode::Tab => Some(Command::InsertChar('\t')),
            KeyCode::Backspace => Some(Command::DeleteChar),
            KeyCode::Delete => Some(Command::DeleteForward),
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Home => Some(Command::MoveLineStart),
            KeyCode::End => Some(Command::MoveLineEnd),
            _ => None,
        },
        Mode::Menu => match key_event.code {
            KeyCode::Up => Some(Command::MenuPrev),
            KeyCode::Down => Some(Command::MenuNext),
            KeyCode::Enter => Some(Command::MenuAccept),
            KeyCode::Esc | KeyCode::F(10) => Some(Command::CloseMenu),
            KeyCode::Char('f') if alt => Some(Command::CloseMenu),
            // Shortcuts still work with the menu open.
            KeyCode::Char('q') if ctrl => Some(Command::Quit),
            KeyCode::Char('n') => Some(Command::New),
            KeyCode::Char('o') => Some(Command::Open),
            KeyCode::Char('s') => Some(Command::Save),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_file_shortcuts() {
        assert_eq!(key_to_command(ctrl('n'), Mode::Edit), Some(Command::New));
        assert_eq!(key_to_command(ctrl('o'), Mode::Edit), Some(Command::Open));
        assert_eq!(key_to_command(ctrl('s'), Mode::Edit), Some(Command::Save));
        assert_eq!(key_to_command(ctrl('q'), Mode::Edit), Some(Command::Quit));
    }

    #[test]
    fn test_typing_inserts() {
        assert_eq!(
            key_to_command(key(KeyCode::Char('n')), Mode::Edit),
            Some(Command::InsertChar('n'))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Enter), Mode::Edit),
            Some(Command::InsertChar('\n'))
        );
        assert_eq!(key_to_command(ctrl('x'), Mode::Edit), None);
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), Mode::Edit),
            None
        );
    }

    #[test]
    fn test_altgr_characters_insert() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['@', '{', '\\'] {
            assert_eq!(
                key_to_command(KeyEvent::new(KeyCode::Char(c), altgr), Mode::Edit),
                Some(Command::InsertChar(c))
            );
        }
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            key_to_command(key(KeyCode::F(10)), Mode::Edit),
            Some(Command::OpenMenu)
        );
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT), Mode::Edit),
            Some(Command::OpenMenu)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Down), Mode::Menu),
            Some(Command::MenuNext)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Esc), Mode::Menu),
            Some(Command::CloseMenu)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('o')), Mode::Menu),
            Some(Command::Open)
        );
        assert_eq!(key_to_command(key(KeyCode::Char('x')), Mode::Menu), None);
    }
}
