use crate::upload::{StatusMessage, SubmissionOutcome, OUTPUT_PLACEHOLDER};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// The file picked in the dialog. Only metadata is kept until submit.
#[derive(Debug, Clone)]
pub struct FileSelection {
    pub path: PathBuf,
    pub size: Option<u64>,
}

impl FileSelection {
    pub fn new(path: PathBuf) -> Self {
        let size = std::fs::metadata(&path).ok().map(|meta| meta.len());
        Self { path, size }
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

pub struct UploadState {
    pub selection: Option<FileSelection>,
    pub status: StatusMessage,
    pub output: String,
    pub is_uploading: bool,
    pub outcome_receiver: Option<Receiver<SubmissionOutcome>>,
}

impl Default for UploadState {
    fn default() -> Self {
        Self {
            selection: None,
            status: StatusMessage::idle(),
            output: OUTPUT_PLACEHOLDER.to_string(),
            is_uploading: false,
            outcome_receiver: None,
        }
    }
}

impl UploadState {
    pub fn can_submit(&self) -> bool {
        !self.is_uploading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_placeholder() {
        let state = UploadState::default();
        assert_eq!(state.output, OUTPUT_PLACEHOLDER);
        assert!(!state.status.is_error());
        assert!(state.can_submit());
    }

    #[test]
    fn selection_reads_size_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jane.pdf");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let selection = FileSelection::new(path);
        assert_eq!(selection.size, Some(2048));
        assert_eq!(selection.display_name(), "jane.pdf");
    }

    #[test]
    fn missing_file_has_no_size() {
        let selection = FileSelection::new(PathBuf::from("/definitely/not/here.pdf"));
        assert_eq!(selection.size, None);
        assert_eq!(selection.display_name(), "here.pdf");
    }
}
