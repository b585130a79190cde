use thiserror::Error;

/// Errors surfaced while setting up the client or presenting its results
///
/// [`SambaRequests::get`](crate::SambaRequests::get) does not use this type; it
/// returns the transport's own error untouched.
#[derive(Error, Debug)]
pub enum SambaError {
    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Building the transport or performing a request failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A decoded payload could not be rendered back to JSON
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Invalid command-line usage
    #[error("Usage: {0}")]
    Usage(String),
}
