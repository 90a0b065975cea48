use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Create the HTTP client used for OctoPrint API requests.
/// No timeout is applied unless one is configured, so by default calls
/// block until the transport fails or responds.
pub fn create_http_client(timeout: Option<Duration>) -> Client {
    let mut builder = ClientBuilder::new();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().expect("Failed to create HTTP client")
}

/// Configuration for the OctoPrint API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Server hostname or IP address
    pub host: String,
    /// Server port
    pub port: u16,
    /// API key sent as `X-Api-Key` on every request
    pub api_key: String,
    /// Enable debug logging
    pub debug: bool,
    /// Optional request timeout; calls have no timeout when unset
    pub timeout: Option<Duration>,
    /// Drop the `limit` query parameter from status requests when no
    /// limit is given, instead of sending the literal value `None`
    pub omit_unset_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 5000,
            api_key: String::new(),
            debug: false,
            timeout: None,
            omit_unset_limit: false,
        }
    }
}

impl Config {
    /// Create a new configuration for the given server and API key
    pub fn new(host: String, port: u16, api_key: String) -> Self {
        Config {
            host,
            port,
            api_key,
            debug: false,
            timeout: None,
            omit_unset_limit: false,
        }
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Omit the `limit` query parameter when no limit is given.
    ///
    /// By default an unset limit is sent as the literal query value
    /// `None`; enable this to drop the parameter instead.
    pub fn with_omit_unset_limit(mut self, omit: bool) -> Self {
        self.omit_unset_limit = omit;
        self
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/api", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let config = Config::new("octopi.local".to_string(), 80, "key".to_string());
        assert_eq!(config.base_url(), "http://octopi.local:80/api");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert!(config.timeout.is_none());
        assert!(!config.omit_unset_limit);
    }

    #[test]
    fn test_builder_flags() {
        let config = Config::default()
            .with_debug(true)
            .with_timeout(Duration::from_secs(5))
            .with_omit_unset_limit(true);
        assert!(config.debug);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(config.omit_unset_limit);
    }
}
