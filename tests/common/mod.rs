// Common test utilities: a scripted user and stores that misbehave on purpose

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use jotpad::prompt::{Confirm, FileDialog, Prompter};
use jotpad::session::EditorSession;
use jotpad::storage::{DiskStore, FileAccessError, FileStore};

/// Plays back canned answers and records every question asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub confirms: VecDeque<Confirm>,
    pub open_choices: VecDeque<Option<PathBuf>>,
    pub save_choices: VecDeque<Option<PathBuf>>,
    pub confirm_messages: Vec<String>,
    pub dialogs: Vec<FileDialog>,
    pub errors: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, confirm: Confirm) -> Self {
        self.confirms.push_back(confirm);
        self
    }

    pub fn open_file(mut self, path: Option<PathBuf>) -> Self {
        self.open_choices.push_back(path);
        self
    }

    pub fn save_as(mut self, path: Option<PathBuf>) -> Self {
        self.save_choices.push_back(path);
        self
    }

    pub fn prompts_shown(&self) -> usize {
        self.confirm_messages.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, _title: &str, message: &str) -> Confirm {
        self.confirm_messages.push(message.to_string());
        self.confirms
            .pop_front()
            .expect("confirmation asked but none scripted")
    }

    fn choose_open(&mut self, dialog: &FileDialog) -> Option<PathBuf> {
        self.dialogs.push(dialog.clone());
        self.open_choices
            .pop_front()
            .expect("open dialog shown but none scripted")
    }

    fn choose_save(&mut self, dialog: &FileDialog) -> Option<PathBuf> {
        self.dialogs.push(dialog.clone());
        self.save_choices
            .pop_front()
            .expect("save dialog shown but none scripted")
    }

    fn report_error(&mut self, error: &FileAccessError) {
        self.errors.push(error.to_string());
    }
}

/// Store whose writes always fail; reads go to disk.
pub struct ReadOnlyStore;

impl FileStore for ReadOnlyStore {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        DiskStore.read_text(path)
    }

    fn write_text(&self, _path: &Path, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
    }
}

#[allow(dead_code)]
pub fn disk_session(dialog_dir: &Path) -> EditorSession {
    EditorSession::new(Box::new(DiskStore), dialog_dir.to_path_buf())
}

#[allow(dead_code)]
pub fn read_only_session(dialog_dir: &Path) -> EditorSession {
    EditorSession::new(Box::new(ReadOnlyStore), dialog_dir.to_path_buf())
}

#[allow(dead_code)]
pub fn session_with_text(dialog_dir: &Path, text: &str) -> EditorSession {
    let mut session = disk_session(dialog_dir);
    session.document_mut().insert_text(text, 0, 0);
    session
}
