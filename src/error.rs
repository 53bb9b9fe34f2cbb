use thiserror::Error;

/// Errors that can occur while talking to TheMealDB.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read, JSON decode)
    #[error("Failed to fetch from TheMealDB: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("TheMealDB returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the documented envelope
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Lookup succeeded but the id matched no meal
    #[error("No meal found for id {0}")]
    MealNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
