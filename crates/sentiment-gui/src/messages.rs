use std::time::Duration;

use sentiment_core::form::{CsvUpload, SubmissionForm};
use sentiment_core::outcome::AnalysisOutcome;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Post the form to the prediction endpoint.
    Analyze { form: SubmissionForm },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A picked or dropped file was read. Sent from a file-reader thread.
    FileLoaded {
        upload: CsvUpload,
    },

    /// Always sent once per `Analyze`, success or not.
    AnalysisComplete {
        outcome: AnalysisOutcome,
        elapsed: Duration,
    },

    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
