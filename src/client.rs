use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Settings;

/// Options for a single GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Path appended to the base URL after a `/` separator, used verbatim
    pub path: String,
}

impl RequestOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl From<&str> for RequestOptions {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RequestOptions {
    fn from(path: String) -> Self {
        Self { path }
    }
}

/// JSON GET client bound to a single backend base URL
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct SambaRequests {
    client: Client,
    base_url: String,
}

impl SambaRequests {
    /// Create a client for `base_url` using a default transport
    ///
    /// # Example
    /// ```
    /// use samba_requests::SambaRequests;
    ///
    /// let requests = SambaRequests::new("https://api.example.com");
    /// assert_eq!(requests.url_for("items"), "https://api.example.com/items");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client for `base_url` on top of an existing `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client from loaded settings
    ///
    /// A timeout is only applied when `timeout_secs` is set; otherwise the
    /// transport default is used.
    pub fn from_config(settings: &Settings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::with_client(
            settings.backend_url.clone(),
            builder.build()?,
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Target URL for `path`: the base URL, a literal `/`, then `path` as given
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Issue a GET for `options.path` and decode the body as JSON into `T`
    ///
    /// The HTTP status is not inspected: a 4xx/5xx response with a JSON body
    /// decodes like any other. Transport failures and body decode failures
    /// are returned as the underlying `reqwest::Error`.
    ///
    /// # Example
    /// ```no_run
    /// # use samba_requests::SambaRequests;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), reqwest::Error> {
    /// let requests = SambaRequests::new("https://api.example.com");
    /// let items: serde_json::Value = requests.get("items".into()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
    ) -> Result<T, reqwest::Error> {
        let url = self.url_for(&options.path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        debug!("{} responded with {}", url, response.status());

        response.json().await
    }
}
