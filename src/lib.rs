//! Minimal JSON GET client for a single configured backend.
//!
//! ```no_run
//! use samba_requests::{RequestOptions, SambaRequests};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let requests = SambaRequests::new("https://api.example.com");
//! let user: serde_json::Value = requests.get(RequestOptions::new("users/1")).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{RequestOptions, SambaRequests};
pub use crate::config::{load_config, Settings};
pub use error::SambaError;

/// Load [`Settings`] and build a client from them
pub fn from_env() -> Result<SambaRequests, SambaError> {
    let settings = load_config()?;
    Ok(SambaRequests::from_config(&settings)?)
}
