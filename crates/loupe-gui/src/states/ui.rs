use std::path::{Path, PathBuf};

use loupe_core::record::PhotoRecord;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub record_path: Option<PathBuf>,
    pub record: Option<PhotoRecord>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Directory that the record's image sources are relative to.
    pub fn base_dir(&self) -> &Path {
        self.record_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."))
    }
}
