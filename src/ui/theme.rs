// ui/theme.rs - Colors for the editor screen and its dialogs

use ratatui::style::Color;

pub const THEME_NAMES: &[&str] = &["classic", "dark"];

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub menu_bar_bg: Color,
    pub menu_bar_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub border: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Gray window, dark gray text area with white text.
    pub fn classic() -> Self {
        Self {
            general: GeneralTheme {
                background: Color::DarkGray,
                foreground: Color::White,
            },
            ui: UiTheme {
                menu_bar_bg: Color::DarkGray,
                menu_bar_fg: Color::White,
                selection_bg: Color::Gray,
                selection_fg: Color::Black,
                status_bar_bg: Color::Gray,
                status_bar_fg: Color::Black,
                dialog_bg: Color::Gray,
                dialog_fg: Color::Black,
                border: Color::Black,
                error: Color::Red,
                muted: Color::DarkGray,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            general: GeneralTheme {
                background: Color::Black,
                foreground: Color::Rgb(248, 248, 242), // Light gray for better contrast
            },
            ui: UiTheme {
                menu_bar_bg: Color::Blue,
                menu_bar_fg: Color::White,
                selection_bg: Color::Rgb(248, 248, 242),
                selection_fg: Color::Black,
                status_bar_bg: Color::Blue,
                status_bar_fg: Color::White,
                dialog_bg: Color::Black,
                dialog_fg: Color::Rgb(248, 248, 242),
                border: Color::DarkGray,
                error: Color::Red,
                muted: Color::Rgb(98, 114, 164),
            },
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" | "default" => Some(Self::classic()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}
