use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::error::{Result, SentimentError};
use crate::form::SubmissionForm;
use crate::outcome::AnalysisOutcome;
use crate::prediction::PredictResponse;

/// Blocking client for the external prediction endpoint.
///
/// One call is one `POST`; there are no retries.
pub struct SentimentClient {
    http: Client,
    endpoint: Url,
}

impl SentimentClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let raw = config
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(SentimentError::MissingEndpoint)?;

        let endpoint = Url::parse(raw).map_err(|e| SentimentError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit the form and decode the JSON body.
    pub fn predict(&self, form: &SubmissionForm) -> Result<PredictResponse> {
        info!(
            "POST {} (fields: {:?})",
            self.endpoint,
            form.field_names()
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .multipart(form.to_multipart()?)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SentimentError::HttpStatus(status.as_u16()));
        }

        let body = resp.bytes()?;
        let parsed = PredictResponse::from_json(&body)?;
        debug!("Response data: {:?}", parsed);
        Ok(parsed)
    }

    /// Submit the form and fold every failure into the outcome.
    pub fn analyze(&self, form: &SubmissionForm) -> AnalysisOutcome {
        let outcome: AnalysisOutcome = self
            .predict(form)
            .and_then(PredictResponse::into_prediction)
            .into();
        log_outcome(&outcome);
        outcome
    }
}

/// Build a client from `config` and run one analysis. A missing or invalid
/// endpoint is reported as a failed outcome like any other error.
pub fn analyze(config: &ClientConfig, form: &SubmissionForm) -> AnalysisOutcome {
    match SentimentClient::new(config) {
        Ok(client) => client.analyze(form),
        Err(e) => {
            let outcome = AnalysisOutcome::failure(e.to_string());
            log_outcome(&outcome);
            outcome
        }
    }
}

fn log_outcome(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Failure { message } => {
            error!("Error during sentiment analysis: {message}");
        }
        AnalysisOutcome::Success(result) => {
            debug!("Analysis complete: {}", outcome.headline());
            debug!("Distribution: {:?}", result.distribution);
        }
    }
}
