use super::UploadError;
use std::path::Path;

pub const OUTPUT_PLACEHOLDER: &str = "{ /* results appear here */ }";
pub const NO_FILE_MESSAGE: &str = "Please select a file first.";
pub const UPLOADING_MESSAGE: &str = "Uploading and parsing…";
pub const DONE_MESSAGE: &str = "Done.";

/// Extensions the parse server knows how to read.
pub const RESUME_EXTENSIONS: [&str; 6] = ["pdf", "docx", "png", "jpg", "jpeg", "tiff"];

/// What a finished submission hands back to the controller.
pub type SubmissionOutcome = Result<serde_json::Value, UploadError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn idle() -> Self {
        Self::new("Choose a resume to parse.", StatusKind::Info)
    }

    pub fn no_file() -> Self {
        Self::new(NO_FILE_MESSAGE, StatusKind::Error)
    }

    pub fn uploading() -> Self {
        Self::new(UPLOADING_MESSAGE, StatusKind::Info)
    }

    pub fn done() -> Self {
        Self::new(DONE_MESSAGE, StatusKind::Success)
    }

    pub fn failed(error: &UploadError) -> Self {
        Self::new(format!("Error: {error}"), StatusKind::Error)
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::idle()
    }
}

/// A file read from disk and ready to go into the multipart body.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl SelectedFile {
    pub async fn read(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| UploadError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.bin".to_string());

        let mime = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self {
            file_name,
            bytes,
            mime,
        })
    }
}
