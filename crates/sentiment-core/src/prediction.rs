use serde::{Deserialize, Serialize};

/// The `prediction` field of an endpoint response: one label for a text
/// submission, a list of labels for a CSV.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    Single(String),
    Many(Vec<String>),
}

impl Prediction {
    pub fn is_many(&self) -> bool {
        matches!(self, Prediction::Many(_))
    }

    /// False for an empty single label. An empty list still counts.
    pub fn is_present(&self) -> bool {
        match self {
            Prediction::Single(label) => !label.is_empty(),
            Prediction::Many(_) => true,
        }
    }
}

/// Class shares as reported by the server. Kept for logging and `--json`
/// output only; display uses [`crate::distribution::Distribution`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportedDistribution {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
}

/// Raw JSON body of a prediction response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<ReportedDistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictResponse {
    pub fn from_json(body: &[u8]) -> crate::error::Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Take the prediction out, turning an `error` body into an error. A body
    /// with neither field yields an empty label, which displays as no
    /// prediction over an all-zero split.
    pub fn into_prediction(self) -> crate::error::Result<Prediction> {
        match (self.prediction, self.error) {
            (Some(prediction), _) => Ok(prediction),
            (None, Some(message)) => Err(crate::error::SentimentError::Api(message)),
            (None, None) => Ok(Prediction::Single(String::new())),
        }
    }
}
