use serde_json::Value;

use crate::error::{OctoError, Result};

/// Outcome of a command submission.
///
/// A 2xx response carries decoded JSON, or the raw body text when the body
/// is not valid JSON. Any other status is handed back as a `Failure` value
/// for the caller to inspect rather than surfaced as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Decoded JSON payload from a 2xx response
    Json(Value),
    /// Raw body text from a 2xx response that was not valid JSON
    Text(String),
    /// Non-2xx response, carrying the status code and raw body
    Failure(FailureResponse),
}

/// A rejected command: non-success HTTP status plus the raw response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body text
    pub body: String,
}

impl FailureResponse {
    /// Check for a 404 response (unknown endpoint or file)
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check for a 409 response (printer not operational or command not
    /// valid in the current state)
    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

impl SubmitOutcome {
    /// Whether the server accepted the command (2xx response)
    pub fn is_success(&self) -> bool {
        !matches!(self, SubmitOutcome::Failure(_))
    }

    /// Get the decoded JSON payload, if any
    pub fn json(&self) -> Option<&Value> {
        match self {
            SubmitOutcome::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Get the raw body text of a non-JSON 2xx response
    pub fn text(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the failure descriptor of a rejected command
    pub fn failure(&self) -> Option<&FailureResponse> {
        match self {
            SubmitOutcome::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// HTTP status code of a rejected command
    pub fn status(&self) -> Option<u16> {
        self.failure().map(|f| f.status)
    }

    /// Unmarshal the decoded JSON payload into the provided type
    pub fn apply<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        match self {
            SubmitOutcome::Json(value) => Ok(serde_json::from_value(value.clone())?),
            SubmitOutcome::Text(text) => Err(OctoError::Other(format!(
                "response body was not JSON: {}",
                text
            ))),
            SubmitOutcome::Failure(failure) => Err(OctoError::Other(format!(
                "server rejected request with status {}",
                failure.status
            ))),
        }
    }

    /// Get a value from the decoded payload by a slash-separated path.
    /// For example, "job/file/name" would access the "name" field inside
    /// the "file" object inside "job".
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.json().and_then(|value| value_at(value, path))
    }

    /// Get a string value from the decoded payload by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }
}

/// Navigate a JSON value by a slash-separated path. Object fields are
/// looked up by name, array elements by decimal index.
pub fn value_at<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut current = value;

    for part in parts {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(arr) => {
                let index: usize = part.parse().ok()?;
                arr.get(index)?
            }
            _ => return None,
        };
    }

    Some(current)
}
