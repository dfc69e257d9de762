// src/prompt.rs - What the session may ask of the user interface

use std::path::{Path, PathBuf};

use crate::storage::FileAccessError;

/// Answer to a yes/no/cancel question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Yes,
    No,
    Cancel,
}

/// One entry of a file dialog's filter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub label: &'static str,
    /// Extension without the dot; `None` matches every file.
    pub extension: Option<&'static str>,
}

impl FileFilter {
    pub const TEXT: FileFilter = FileFilter {
        label: "Text files (*.txt)",
        extension: Some("txt"),
    };

    pub const ALL: FileFilter = FileFilter {
        label: "All files (*.*)",
        extension: None,
    };

    pub fn matches(&self, path: &Path) -> bool {
        match self.extension {
            None => true,
            Some(wanted) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted)),
        }
    }

    /// Append this filter's extension when the chosen name has none.
    pub fn apply_default_extension(&self, path: PathBuf) -> PathBuf {
        match self.extension {
            Some(ext) if path.extension().is_none() => {
                let mut name = path.into_os_string();
                name.push(".");
                name.push(ext);
                PathBuf::from(name)
            }
            _ => path,
        }
    }
}

/// A request to pick a file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDialog {
    pub title: &'static str,
    pub filters: Vec<FileFilter>,
    pub initial_dir: PathBuf,
}

impl FileDialog {
    /// Text files first, everything else as the fallback.
    pub fn text_files(title: &'static str, initial_dir: PathBuf) -> Self {
        Self {
            title,
            filters: vec![FileFilter::TEXT, FileFilter::ALL],
            initial_dir,
        }
    }
}

/// Directory dialogs open in when nothing else is configured: the user's
/// documents folder, then home, then the working directory.
pub fn default_dialog_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Modal interactions the session needs from its host UI.
///
/// Every method blocks until the user answers.
pub trait Prompter {
    fn confirm(&mut self, title: &str, message: &str) -> Confirm;
    fn choose_open(&mut self, dialog: &FileDialog) -> Option<PathBuf>;
    fn choose_save(&mut self, dialog: &FileDialog) -> Option<PathBuf>;
    fn report_error(&mut self, error: &FileAccessError);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_filter_matches_txt_only() {
        assert!(FileFilter::TEXT.matches(Path::new("notes.txt")));
        assert!(FileFilter::TEXT.matches(Path::new("/home/me/NOTES.TXT")));
        assert!(!FileFilter::TEXT.matches(Path::new("main.rs")));
        assert!(!FileFilter::TEXT.matches(Path::new("README")));
    }

    #[test]
    fn test_all_filter_matches_everything() {
        assert!(FileFilter::ALL.matches(Path::new("README")));
        assert!(FileFilter::ALL.matches(Path::new("image.png")));
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(
            FileFilter::TEXT.apply_default_extension(PathBuf::from("/tmp/draft")),
            PathBuf::from("/tmp/draft.txt")
        );
        assert_eq!(
            FileFilter::TEXT.apply_default_extension(PathBuf::from("/tmp/data.csv")),
            PathBuf::from("/tmp/data.csv")
        );
        assert_eq!(
            FileFilter::ALL.apply_default_extension(PathBuf::from("/tmp/draft")),
            PathBuf::from("/tmp/draft")
        );
    }

    #[test]
    fn test_text_dialog_filter_order() {
        let dialog = FileDialog::text_files("Open", PathBuf::from("/tmp"));
        assert_eq!(dialog.filters, vec![FileFilter::TEXT, FileFilter::ALL]);
        assert_eq!(dialog.initial_dir, PathBuf::from("/tmp"));
    }
}
