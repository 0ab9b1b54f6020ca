use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    StatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// A client URL that matches neither page
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Input the interactive browser does not understand
    #[error("Unknown command: {0}")]
    InvalidCommand(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal input/output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
