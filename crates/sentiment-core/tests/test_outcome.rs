use sentiment_core::error::SentimentError;
use sentiment_core::label::Sentiment;
use sentiment_core::outcome::{AnalysisOutcome, AnalysisResult, NO_PREDICTION_TEXT};
use sentiment_core::prediction::{PredictResponse, Prediction};

fn success(prediction: Prediction) -> AnalysisOutcome {
    AnalysisOutcome::Success(AnalysisResult::new(prediction))
}

#[test]
fn test_headline_single() {
    let outcome = success(Prediction::Single("positive".into()));
    assert_eq!(outcome.headline(), "positive (75%)");
}

#[test]
fn test_headline_single_mixed_case_uses_lowercase_lookup() {
    // The split is computed from the exact label (none here), so the
    // lowercase lookup finds a zero share.
    let outcome = success(Prediction::Single("Negative".into()));
    assert_eq!(outcome.headline(), "Negative (0%)");
}

#[test]
fn test_headline_single_unknown() {
    let outcome = success(Prediction::Single("sarcastic".into()));
    assert_eq!(outcome.headline(), "sarcastic (0%)");
}

#[test]
fn test_headline_many() {
    let labels = vec!["positive".to_string(), "neutral".into(), "neutral".into()];
    let outcome = success(Prediction::Many(labels));
    assert_eq!(outcome.headline(), "3 predictions");
}

#[test]
fn test_headline_failure_has_no_distribution() {
    let outcome = AnalysisOutcome::failure("HTTP error! status: 500");
    assert_eq!(outcome.headline(), "Error: HTTP error! status: 500 (0%)");
    assert!(outcome.distribution().is_none());
    assert!(outcome.is_failure());
}

#[test]
fn test_outcome_from_error() {
    let outcome: AnalysisOutcome = Err::<Prediction, _>(SentimentError::MissingEndpoint).into();
    assert_eq!(
        outcome.headline(),
        "Error: API URL is not defined in environment variables (0%)"
    );
}

#[test]
fn test_result_label_count() {
    assert_eq!(AnalysisResult::new(Prediction::Single("neutral".into())).label_count(), 1);
    assert_eq!(AnalysisResult::new(Prediction::Many(vec![])).label_count(), 0);
}

#[test]
fn test_success_distribution_matches_prediction() {
    let outcome = success(Prediction::Single("neutral".into()));
    let d = outcome.distribution().unwrap();
    assert_eq!(d.percent(Sentiment::Neutral), 75);
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

#[test]
fn test_response_single_string() {
    let r = PredictResponse::from_json(br#"{"prediction": "negative"}"#).unwrap();
    assert_eq!(r.prediction, Some(Prediction::Single("negative".into())));
}

#[test]
fn test_response_list_with_server_distribution() {
    let body = br#"{
        "prediction": ["positive", "negative"],
        "distribution": {"positive": 0.5, "neutral": 0.0, "negative": 0.5}
    }"#;
    let r = PredictResponse::from_json(body).unwrap();
    assert!(r.prediction.as_ref().unwrap().is_many());
    assert_eq!(r.distribution.unwrap().positive, 0.5);
}

#[test]
fn test_response_error_body() {
    let r = PredictResponse::from_json(br#"{"error": "No text provided"}"#).unwrap();
    let err = r.into_prediction().unwrap_err();
    assert_eq!(err.to_string(), "No text provided");
}

#[test]
fn test_response_missing_prediction_is_empty_success() {
    let r = PredictResponse::from_json(b"{}").unwrap();
    let outcome: AnalysisOutcome = r.into_prediction().into();
    assert!(!outcome.is_failure());
    assert!(!outcome.has_prediction());
    assert_eq!(outcome.headline(), NO_PREDICTION_TEXT);
    assert!(outcome.distribution().unwrap().is_empty());
}

#[test]
fn test_headline_empty_single_label_shows_placeholder() {
    let outcome = success(Prediction::Single(String::new()));
    assert_eq!(outcome.headline(), NO_PREDICTION_TEXT);
    let d = outcome.distribution().unwrap();
    for s in Sentiment::ALL {
        assert_eq!(d.percent(s), 0);
    }
}

#[test]
fn test_empty_list_still_counts_as_prediction() {
    let outcome = success(Prediction::Many(vec![]));
    assert!(outcome.has_prediction());
    assert_eq!(outcome.headline(), "0 predictions");
}

#[test]
fn test_response_not_json() {
    assert!(matches!(
        PredictResponse::from_json(b"<html>"),
        Err(SentimentError::Json(_))
    ));
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let outcome = success(Prediction::Single("positive".into()));
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["prediction"], "positive");
    assert_eq!(json["distribution"]["positive"], 0.75);

    let failed = serde_json::to_value(AnalysisOutcome::failure("boom")).unwrap();
    assert_eq!(failed["status"], "failure");
    assert_eq!(failed["message"], "boom");
}
