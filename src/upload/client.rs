use super::types::{SelectedFile, SubmissionOutcome};
use super::UploadError;
use crate::config::Config;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use std::path::Path;
use tracing::info;

pub const PARSE_PATH: &str = "/api/parse";

/// Sends resumes to the parse endpoint and decodes what comes back.
#[derive(Clone, Debug)]
pub struct ParseClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ParseClient {
    pub fn new(config: &Config) -> Result<Self, UploadError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        // absolute path: same origin as the server, whatever path the base URL had
        let endpoint = config
            .base_url
            .join(PARSE_PATH)
            .unwrap_or_else(|_| config.base_url.clone());

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Reads the file at `path` and runs one parse request with it.
    pub async fn parse_path(&self, path: &Path) -> SubmissionOutcome {
        let file = SelectedFile::read(path).await?;
        self.parse(file).await
    }

    pub async fn parse(&self, file: SelectedFile) -> SubmissionOutcome {
        info!(
            "Uploading '{}' ({} bytes, {}) to {}",
            file.file_name,
            file.bytes.len(),
            file.mime,
            self.endpoint
        );

        let file_name = file.file_name.clone();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)
            .map_err(|source| UploadError::InvalidMime { file_name, source })?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        info!("Parse server answered with status {}", status);

        if !status.is_success() {
            // an unreadable body is treated like an empty one
            let body = response.bytes().await.unwrap_or_default();
            return Err(UploadError::rejected(status, &body));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
