// ui/file_chooser.rs - Directory browsing state behind the Open / Save As dialogs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::prompt::{FileDialog, FileFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserKind {
    Open,
    Save,
}

/// Result of feeding one key to the chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserResult {
    Continue,
    Chosen(PathBuf),
    /// Save target already exists; ask before handing it back.
    ConfirmOverwrite(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Listing of one directory plus the file name being typed.
#[derive(Debug, Clone)]
pub struct FileChooserState {
    pub kind: ChooserKind,
    pub title: String,
    pub filters: Vec<FileFilter>,
    pub filter_index: usize,
    pub current_dir: PathBuf,
    pub entries: Vec<ChooserEntry>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub name_input: String,
    pub error: Option<String>,
}

impl FileChooserState {
    pub fn new(kind: ChooserKind, dialog: &FileDialog) -> Self {
        let filters = if dialog.filters.is_empty() {
            vec![FileFilter::ALL]
        } else {
            dialog.filters.clone()
        };
        let mut state = Self {
            kind,
            title: dialog.title.to_string(),
            filters,
            filter_index: 0,
            // A relative start such as "." has no usable parent to go up to.
            current_dir: std::path::absolute(&dialog.initial_dir)
                .unwrap_or_else(|_| dialog.initial_dir.clone()),
            entries: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            name_input: String::new(),
            error: None,
        };
        state.refresh();
        state
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filters[self.filter_index]
    }

    /// Re-read the current directory: `..`, then directories, then matching
    /// files, each group sorted by name.
    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.error = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(ChooserEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }

        let read_dir = match fs::read_dir(&self.current_dir) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                debug!("cannot list {}: {}", self.current_dir.display(), err);
                self.error = Some(err.to_string());
                return;
            }
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in read_dir.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            // Follows symlinks so linked folders can be entered.
            let is_dir = path.is_dir();
            if is_dir {
                dirs.push(ChooserEntry { name, path, is_dir });
            } else if self.filter().matches(&path) {
                files.push(ChooserEntry { name, path, is_dir });
            }
        }
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    pub fn selected(&self) -> Option<&ChooserEntry> {
        self.entries.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.entries.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn cycle_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % self.filters.len();
        self.refresh();
    }

    pub fn navigate_to(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.name_input.clear();
        self.refresh();
    }

    pub fn go_up(&mut self) {
        if let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) {
            self.navigate_to(parent);
        }
    }

    /// Keep the selection inside a window of `height` rows.
    pub fn visible_range(&mut self, height: usize) -> std::ops::Range<usize> {
        let height = height.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + height {
            self.scroll_offset = self.selected_index + 1 - height;
        }
        self.scroll_offset..(self.scroll_offset + height).min(self.entries.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ChooserResult {
        // Ctrl+Alt is AltGr, which still types characters.
        if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) {
            return ChooserResult::Continue;
        }
        match key.code {
            KeyCode::Esc => ChooserResult::Cancelled,
            KeyCode::Up => {
                self.select_prev();
                ChooserResult::Continue
            }
            KeyCode::Down => {
                self.select_next();
                ChooserResult::Continue
            }
            KeyCode::Tab => {
                self.cycle_filter();
                ChooserResult::Continue
            }
            KeyCode::Backspace => {
                if self.name_input.pop().is_none() {
                    self.go_up();
                }
                ChooserResult::Continue
            }
            KeyCode::Char(c) => {
                self.name_input.push(c);
                ChooserResult::Continue
            }
            KeyCode::Enter => self.accept(),
            _ => ChooserResult::Continue,
        }
    }

    fn accept(&mut self) -> ChooserResult {
        let typed = self.name_input.trim();
        if !typed.is_empty() {
            let path = self.current_dir.join(typed);
            if path.is_dir() {
                self.navigate_to(path);
                return ChooserResult::Continue;
            }
            return self.choose(self.finish(path));
        }

        match self.selected().cloned() {
            Some(entry) if entry.is_dir => {
                self.navigate_to(entry.path);
                ChooserResult::Continue
            }
            Some(entry) => self.choose(entry.path),
            None => ChooserResult::Continue,
        }
    }

    fn choose(&self, path: PathBuf) -> ChooserResult {
        if self.kind == ChooserKind::Save && path.exists() {
            ChooserResult::ConfirmOverwrite(path)
        } else {
            ChooserResult::Chosen(path)
        }
    }

    fn finish(&self, path: PathBuf) -> PathBuf {
        match self.kind {
            ChooserKind::Save => self.filter().apply_default_extension(path),
            ChooserKind::Open => path,
        }
    }
}

/// Question asked before Save As replaces `path`.
pub fn overwrite_message(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("{name} already exists. Do you want to replace it?")
}
