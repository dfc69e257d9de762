// src/session.rs - New / Open / Save against the document and the file store

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::prompt::{Confirm, FileDialog, Prompter};
use crate::storage::{FileAccessError, FileOp, FileStore};

const SAVE_TITLE: &str = "Save File";
const SAVE_BEFORE_NEW: &str = "Do you want to save the current file before creating a new one?";
const SAVE_BEFORE_OPEN: &str = "Do you want to save the current file before opening another file?";

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    Failed,
}

/// The one document the editor works on and the commands that replace or
/// persist it.
pub struct EditorSession {
    document: Document,
    store: Box<dyn FileStore>,
    dialog_dir: PathBuf,
}

impl EditorSession {
    pub fn new(store: Box<dyn FileStore>, dialog_dir: PathBuf) -> Self {
        Self {
            document: Document::new(),
            store,
            dialog_dir,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Start over with an empty, untitled document.
    pub fn new_document(&mut self, ui: &mut dyn Prompter) -> Outcome {
        if !self.offer_save(ui, SAVE_BEFORE_NEW) {
            debug!("new document cancelled");
            return Outcome::Cancelled;
        }
        self.document.clear();
        info!("started new document");
        Outcome::Completed
    }

    /// Ask for a file and load it, replacing the current document.
    pub fn open(&mut self, ui: &mut dyn Prompter) -> Outcome {
        if !self.offer_save(ui, SAVE_BEFORE_OPEN) {
            debug!("open cancelled at save prompt");
            return Outcome::Cancelled;
        }

        let dialog = FileDialog::text_files("Open", self.dialog_dir.clone());
        let Some(path) = ui.choose_open(&dialog) else {
            debug!("open cancelled in file dialog");
            return Outcome::Cancelled;
        };

        match self.open_path(&path) {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                ui.report_error(&err);
                Outcome::Failed
            }
        }
    }

    /// Load `path` without any prompting. On failure the document is untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<(), FileAccessError> {
        match self.store.read_text(path) {
            Ok(text) => {
                self.document.load(&text, path.to_path_buf());
                info!("opened {} ({} bytes)", path.display(), text.len());
                Ok(())
            }
            Err(source) => {
                warn!("failed to open {}: {}", path.display(), source);
                Err(FileAccessError::new(FileOp::Opening, path, source))
            }
        }
    }

    /// Write the document to its backing file, asking for one first if it has none.
    pub fn save(&mut self, ui: &mut dyn Prompter) -> Outcome {
        let path = match self.document.path.clone() {
            Some(path) => path,
            None => {
                let dialog = FileDialog::text_files("Save As", self.dialog_dir.clone());
                let Some(path) = ui.choose_save(&dialog) else {
                    debug!("save cancelled in file dialog");
                    return Outcome::Cancelled;
                };
                // Recorded before the write, so it sticks even if the write fails.
                self.document.path = Some(path.clone());
                path
            }
        };

        match self.store.write_text(&path, &self.document.text()) {
            Ok(()) => {
                self.document.modified = false;
                info!("saved {}", path.display());
                Outcome::Completed
            }
            Err(source) => {
                warn!("failed to save {}: {}", path.display(), source);
                ui.report_error(&FileAccessError::new(FileOp::Saving, path, source));
                Outcome::Failed
            }
        }
    }

    /// Returns false when the user cancelled the surrounding command.
    fn offer_save(&mut self, ui: &mut dyn Prompter, message: &str) -> bool {
        if self.document.is_empty() {
            return true;
        }
        match ui.confirm(SAVE_TITLE, message) {
            Confirm::Yes => {
                // The command goes ahead whatever the save did.
                if self.save(ui) != Outcome::Completed {
                    warn!("save before replacing the document did not complete; continuing");
                }
                true
            }
            Confirm::No => true,
            Confirm::Cancel => false,
        }
    }
}
