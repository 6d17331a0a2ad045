mod client;
mod error;
mod types;

pub use client::ParseClient;
pub use error::UploadError;
pub use types::{
    StatusKind, StatusMessage, SubmissionOutcome, OUTPUT_PLACEHOLDER,
    RESUME_EXTENSIONS,
};
