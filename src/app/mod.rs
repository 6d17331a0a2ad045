mod state;
mod ui;

use crate::upload::{
    ParseClient, StatusMessage, SubmissionOutcome, UploadError, OUTPUT_PLACEHOLDER,
};
use eframe::App;
pub use state::{FileSelection, UploadState};
use std::path::PathBuf;
use std::sync::mpsc::{self as std_mpsc, TryRecvError};
use tracing::{debug, error, info};

pub struct ResumeUploader {
    client: ParseClient,
    state: UploadState,
}

impl ResumeUploader {
    pub fn new(client: ParseClient, preselected: Option<PathBuf>) -> Self {
        info!("Initializing resume uploader for {}", client.endpoint());
        let mut app = Self {
            client,
            state: UploadState::default(),
        };
        if let Some(path) = preselected {
            app.select_file(path);
        }
        app
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn select_file(&mut self, path: PathBuf) {
        debug!("Selected file: {}", path.display());
        self.state.selection = Some(FileSelection::new(path));
    }

    /// Synchronous half of a submit. Returns the path to upload, or `None` when
    /// nothing should be sent (no file chosen, or a request already in flight).
    pub fn begin_submission(&mut self) -> Option<PathBuf> {
        if self.state.is_uploading {
            debug!("Ignoring submit while a request is in flight");
            return None;
        }

        let Some(selection) = &self.state.selection else {
            self.state.status = StatusMessage::no_file();
            return None;
        };
        let path = selection.path.clone();

        self.state.output = OUTPUT_PLACEHOLDER.to_string();
        self.state.status = StatusMessage::uploading();
        self.state.is_uploading = true;
        Some(path)
    }

    /// Runs the upload on a worker thread; the outcome comes back through a channel
    /// drained by `poll_outcome`.
    pub fn start_upload(&mut self) {
        let Some(path) = self.begin_submission() else {
            return;
        };

        let (sender, receiver) = std_mpsc::channel();
        self.state.outcome_receiver = Some(receiver);
        let client = self.client.clone();

        std::thread::spawn(move || {
            let outcome = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(client.parse_path(&path)),
                Err(e) => Err(UploadError::Runtime(e)),
            };
            // the window may already be gone
            let _ = sender.send(outcome);
        });
    }

    /// Top-level error boundary: every outcome ends up as a status line.
    pub fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.state.is_uploading = false;
        self.state.outcome_receiver = None;

        match outcome {
            Ok(value) => {
                self.state.output =
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                self.state.status = StatusMessage::done();
                info!("Parse finished");
            }
            Err(e) => {
                error!("Resume upload failed: {e:?}");
                self.state.status = StatusMessage::failed(&e);
            }
        }
    }

    /// Applies the worker's outcome if it has arrived. Returns true when the state changed.
    pub fn poll_outcome(&mut self) -> bool {
        let Some(receiver) = &self.state.outcome_receiver else {
            return false;
        };

        match receiver.try_recv() {
            Ok(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.apply_outcome(Err(UploadError::Interrupted));
                true
            }
        }
    }

    /// One blocking submission on `rt`, used without a window. Returns false when
    /// the final status is an error.
    pub fn run_once(&mut self, rt: &tokio::runtime::Runtime) -> bool {
        if let Some(path) = self.begin_submission() {
            let outcome = rt.block_on(self.client.parse_path(&path));
            self.apply_outcome(outcome);
        }
        !self.state.status.is_error()
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.poll_outcome() {
            ctx.request_repaint();
        }
        if self.state.is_uploading {
            // keep polling while the worker runs
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

impl App for ResumeUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
