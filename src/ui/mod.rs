// ui/mod.rs - UI module definitions

pub mod dialog;
pub mod file_chooser;
pub mod prompter;
pub mod renderer;
pub mod theme;
pub mod widgets;

// Re-export commonly used types
pub use prompter::TerminalPrompter;
pub use renderer::TuiRenderer;
pub use theme::Theme;
