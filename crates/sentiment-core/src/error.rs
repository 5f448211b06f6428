use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API URL is not defined in environment variables")]
    MissingEndpoint,

    #[error("Invalid API URL {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Request failed: {0}")]
    Request(Box<reqwest::Error>),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl From<reqwest::Error> for SentimentError {
    fn from(error: reqwest::Error) -> Self {
        SentimentError::Request(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
