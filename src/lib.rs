//! # octoclient - OctoPrint REST API client
//!
//! A lightweight Rust client for the [OctoPrint](https://octoprint.org)
//! 3D printer server REST API. This library maps method calls to HTTP
//! requests: build a URL, attach the API key header, serialize a small
//! JSON payload, and hand back the parsed response.
//!
//! ## Features
//!
//! - Simple blocking API covering printer, job, file, and connection
//!   endpoints with JSON encoding/decoding
//! - Static API key authentication via the `X-Api-Key` header
//! - Command rejections returned as inspectable values rather than errors
//! - Response access by slash-separated paths and typed deserialization
//!
//! ## Basic Usage
//!
//! ```no_run
//! use octoclient::OctoClient;
//!
//! fn main() -> Result<(), octoclient::OctoError> {
//!     let client = OctoClient::new("octopi.local".to_string(), 80, "API_KEY".to_string());
//!
//!     // Read the current job state
//!     let job = client.get_job_status()?;
//!     println!("progress: {}", job["progress"]["completion"]);
//!
//!     // Pause the running print
//!     let outcome = client.pause_job()?;
//!     if !outcome.is_success() {
//!         eprintln!("pause rejected: {:?}", outcome.failure());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Connecting to a printer
//!
//! Connection settings are all optional; fields that are not set are left
//! out of the request and the server falls back to its saved preferences.
//!
//! ```no_run
//! use octoclient::{ConnectOptions, OctoClient};
//!
//! let client = OctoClient::new("octopi.local".to_string(), 80, "API_KEY".to_string());
//!
//! let options = ConnectOptions::new()
//!     .with_port("/dev/ttyUSB0".to_string())
//!     .with_baudrate(115200);
//! client.connect(&options)?;
//! # Ok::<(), octoclient::OctoError>(())
//! ```
//!
//! ## Selecting a file
//!
//! File names are percent-encoded into the request path for you:
//!
//! ```no_run
//! use octoclient::OctoClient;
//!
//! let client = OctoClient::new("octopi.local".to_string(), 80, "API_KEY".to_string());
//! let outcome = client.select_file("local", "my file.gcode", true)?;
//! if let Some(failure) = outcome.failure() {
//!     eprintln!("select rejected: {} {}", failure.status, failure.body);
//! }
//! # Ok::<(), octoclient::OctoError>(())
//! ```

pub mod client;
pub mod connection;
pub mod error;
pub mod files;
pub mod job;
pub mod printer;
pub mod response;
pub mod rest;

// Re-export main types for convenience
pub use client::Config;
pub use connection::ConnectOptions;
pub use error::{OctoError, Result};
pub use response::{value_at, FailureResponse, SubmitOutcome};
pub use rest::OctoClient;

// Re-export serde_json for convenience
pub use serde_json::json;
