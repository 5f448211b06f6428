use std::fmt;
use std::time::Duration;

use sentiment_core::form::{CsvUpload, SubmissionForm};
use sentiment_core::outcome::AnalysisOutcome;

use crate::messages::WorkerResult;

/// Oldest log lines are dropped past this count.
pub const MAX_LOG_LINES: usize = 200;

/// Which input affordance is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputTab {
    #[default]
    Text,
    File,
}

impl fmt::Display for InputTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputTab::Text => write!(f, "Text Input"),
            InputTab::File => write!(f, "File Upload"),
        }
    }
}

/// Page state. Lives for the lifetime of the window.
#[derive(Default)]
pub struct UiState {
    pub input_tab: InputTab,
    pub text_input: String,
    pub file: Option<CsvUpload>,

    /// Request in flight.
    pub loading: bool,
    pub outcome: Option<AnalysisOutcome>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UiState {
    pub fn is_busy(&self) -> bool {
        self.loading
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    /// Snapshot of both inputs, whichever tab is showing.
    pub fn form(&self) -> SubmissionForm {
        SubmissionForm {
            text: self.text_input.clone(),
            file: self.file.clone(),
        }
    }

    /// Enter the loading state and return the form to send, or `None` if a
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionForm> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.form())
    }

    /// Leave the loading state with the outcome of the last request.
    pub fn finish_submit(&mut self, outcome: AnalysisOutcome) {
        self.loading = false;
        self.outcome = Some(outcome);
    }

    pub fn select_file(&mut self, upload: CsvUpload) {
        self.add_log(format!(
            "Selected: {} ({} bytes)",
            upload.file_name,
            upload.size()
        ));
        self.file = Some(upload);
    }

    /// Select a dropped or freshly read file and bring the file tab forward.
    pub fn drop_upload(&mut self, upload: CsvUpload) {
        self.select_file(upload);
        self.input_tab = InputTab::File;
    }

    /// Fold one worker or file-reader message into the page state.
    pub fn apply_result(&mut self, result: WorkerResult) {
        match result {
            WorkerResult::FileLoaded { upload } => self.drop_upload(upload),
            WorkerResult::AnalysisComplete { outcome, elapsed } => {
                self.add_log(format!(
                    "{} ({})",
                    outcome.headline(),
                    format_duration(elapsed)
                ));
                self.finish_submit(outcome);
            }
            WorkerResult::Error { message } => {
                tracing::warn!("{message}");
                self.add_log(format!("ERROR: {message}"));
            }
            WorkerResult::Log { message } => self.add_log(message),
        }
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
