use crate::client::{create_http_client, Config};
use crate::error::Result;
use crate::response::{FailureResponse, SubmitOutcome};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

/// Client for the OctoPrint REST API
pub struct OctoClient {
    /// HTTP client
    pub client: Client,
    /// Configuration
    pub config: Config,
}

impl OctoClient {
    /// Create a new client for the given server and API key.
    ///
    /// No network activity happens here; an unreachable host only
    /// surfaces once a request is made.
    pub fn new(host: String, port: u16, api_key: String) -> Self {
        Self::with_config(Config::new(host, port, api_key))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: Config) -> Self {
        OctoClient {
            client: create_http_client(config.timeout),
            config,
        }
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Issue a GET request against an API path and decode the JSON response.
    ///
    /// `path` is appended to the API base URL; `query` pairs are URL-encoded
    /// into the query string. The response body is decoded as JSON whatever
    /// the status code was; a body that is not valid JSON is an error.
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `query` - Optional query parameters
    pub fn fetch(&self, path: &str, query: Option<&HashMap<String, String>>) -> Result<Value> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url(), path))?;
        if let Some(params) = query {
            for (key, value) in params {
                url.query_pairs_mut().append_pair(key, value);
            }
        }

        let start = std::time::Instant::now();
        let response = self
            .client
            .get(url.as_str())
            .header("X-Api-Key", self.config.api_key.as_str())
            .send()?;
        let status = response.status();
        let body = response.bytes()?;

        if self.config.debug {
            eprintln!(
                "[octo] GET {} => {:?} (status: {})",
                path,
                start.elapsed(),
                status
            );
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Issue a POST request with a JSON body against an API path.
    ///
    /// `path` is appended to the API base URL as-is; segments embedding
    /// variable data (file names) must already be percent-encoded by the
    /// caller.
    ///
    /// A 2xx response yields the decoded JSON payload, falling back to the
    /// raw body text when it is not valid JSON. Any other status yields a
    /// `Failure` value carrying the status and body; the server rejecting
    /// a command is not an `Err`.
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - JSON-serializable request body
    pub fn submit<P>(&self, path: &str, body: P) -> Result<SubmitOutcome>
    where
        P: Serialize,
    {
        let url = Url::parse(&format!("{}{}", self.config.base_url(), path))?;
        let body_bytes = serde_json::to_vec(&body)?;

        let response = self
            .client
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .header("X-Api-Key", self.config.api_key.as_str())
            .body(body_bytes)
            .send()?;
        let status = response.status();
        let text = response.text()?;

        // Status and body go to stderr on every call, accepted or not.
        eprintln!("[octo] POST {} => {} {}", path, status.as_u16(), text);

        if status.is_success() {
            match serde_json::from_str(&text) {
                Ok(value) => Ok(SubmitOutcome::Json(value)),
                Err(_) => Ok(SubmitOutcome::Text(text)),
            }
        } else {
            Ok(SubmitOutcome::Failure(FailureResponse {
                status: status.as_u16(),
                body: text,
            }))
        }
    }
}

/// Lowercase string form of a boolean request field
pub(crate) fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
