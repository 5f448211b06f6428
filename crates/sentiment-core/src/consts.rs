/// Environment variable holding the prediction endpoint URL.
pub const ENDPOINT_ENV: &str = "SENTIMENT_API_URL";

/// Legacy endpoint variable, checked after [`ENDPOINT_ENV`].
pub const LEGACY_ENDPOINT_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "sentiment.toml";

/// Default whole-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Share given to the predicted class when the endpoint returns one label.
pub const DOMINANT_SHARE: f64 = 0.75;

/// Share given to neutral when a polar (positive/negative) label is returned,
/// and to positive when neutral is returned.
pub const SECONDARY_SHARE: f64 = 0.15;

/// Share given to the remaining class.
pub const MINOR_SHARE: f64 = 0.10;

/// Form field carrying the free text.
pub const TEXT_FIELD: &str = "text";

/// Form field carrying the uploaded CSV.
pub const FILE_FIELD: &str = "file";

/// MIME type of uploaded files.
pub const CSV_MIME: &str = "text/csv";

/// Hue step per rendered frame of the background gradient, in degrees.
pub const GRADIENT_HUE_STEP: u16 = 1;

/// Hue offset between consecutive gradient stops, in degrees.
pub const GRADIENT_STOP_OFFSET: u16 = 60;

/// Saturation of the background gradient stops (0..1).
pub const GRADIENT_SATURATION: f32 = 1.0;

/// Lightness of the background gradient stops (0..1).
pub const GRADIENT_LIGHTNESS: f32 = 0.9;
