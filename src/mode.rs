#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing into the text area.
    Edit,
    /// File menu is dropped down.
    Menu,
}
