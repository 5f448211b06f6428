use serde::Serialize;

use crate::distribution::Distribution;
use crate::label::Sentiment;
use crate::prediction::Prediction;

/// Placeholder shown before the first submission.
pub const NO_PREDICTION_TEXT: &str = "No prediction yet";

/// Placeholder for the distribution panel when there is nothing to chart.
pub const NO_DISTRIBUTION_TEXT: &str = "No data to display";

/// A prediction together with its display split.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub prediction: Prediction,
    pub distribution: Distribution,
}

impl AnalysisResult {
    pub fn new(prediction: Prediction) -> Self {
        let distribution = Distribution::from_prediction(&prediction);
        Self {
            prediction,
            distribution,
        }
    }

    /// Number of labels returned by the endpoint.
    pub fn label_count(&self) -> usize {
        match &self.prediction {
            Prediction::Single(_) => 1,
            Prediction::Many(labels) => labels.len(),
        }
    }
}

/// What a submission ended with.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    Failure { message: String },
}

impl AnalysisOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisOutcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisOutcome::Failure { .. })
    }

    /// False only for a success carrying an empty label.
    pub fn has_prediction(&self) -> bool {
        match self {
            AnalysisOutcome::Success(result) => result.prediction.is_present(),
            AnalysisOutcome::Failure { .. } => true,
        }
    }

    /// Text for the prediction panel. A failure reads like a single label
    /// with no split behind it, hence the trailing `(0%)`.
    pub fn headline(&self) -> String {
        match self {
            AnalysisOutcome::Success(result) => match &result.prediction {
                Prediction::Single(label) if label.is_empty() => NO_PREDICTION_TEXT.to_string(),
                Prediction::Many(labels) => format!("{} predictions", labels.len()),
                Prediction::Single(label) => {
                    let percent = Sentiment::from_label(&label.to_lowercase())
                        .map(|s| result.distribution.percent(s))
                        .unwrap_or(0);
                    format!("{label} ({percent}%)")
                }
            },
            AnalysisOutcome::Failure { message } => format!("Error: {message} (0%)"),
        }
    }

    /// Split to chart, absent for failures.
    pub fn distribution(&self) -> Option<&Distribution> {
        match self {
            AnalysisOutcome::Success(result) => Some(&result.distribution),
            AnalysisOutcome::Failure { .. } => None,
        }
    }
}

impl From<crate::error::Result<Prediction>> for AnalysisOutcome {
    fn from(result: crate::error::Result<Prediction>) -> Self {
        match result {
            Ok(prediction) => AnalysisOutcome::Success(AnalysisResult::new(prediction)),
            Err(e) => AnalysisOutcome::failure(e.to_string()),
        }
    }
}
