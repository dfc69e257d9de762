#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // File menu
    New,
    Open,
    Save,
    Quit,
    // Text area
    InsertChar(char),
    DeleteChar,
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    // Menu navigation
    OpenMenu,
    CloseMenu,
    MenuNext,
    MenuPrev,
    MenuAccept,
}

impl Command {
    /// Commands that may replace or write the document.
    pub fn is_file_command(&self) -> bool {
        matches!(self, Command::New | Command::Open | Command::Save)
    }
}
