//! Uniform success/failure envelope returned by every adapter operation.
//!
//! The wire form is flat: `success`, then `data` or `error`, then the echoed
//! input under a key named after its kind (`url`, `urls` or `query`).

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// The input identifier(s) echoed back for correlation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Echo {
    Url(String),
    Urls(Vec<String>),
    Query(String),
}

/// Result of a single provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub outcome: Outcome,
    pub echo: Echo,
}

impl Envelope {
    pub fn success(data: Value, echo: Echo) -> Self {
        Self { outcome: Outcome::Success(data), echo }
    }

    /// Failure envelope. An empty message is replaced so `error` is never blank.
    pub fn failure(error: impl Into<String>, echo: Echo) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = "unknown provider error".to_string();
        }
        Self { outcome: Outcome::Failure(error), echo }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;

        match &self.outcome {
            Outcome::Success(data) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            Outcome::Failure(error) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
            }
        }

        match &self.echo {
            Echo::Url(url) => map.serialize_entry("url", url)?,
            Echo::Urls(urls) => map.serialize_entry("urls", urls)?,
            Echo::Query(query) => map.serialize_entry("query", query)?,
        }

        map.end()
    }
}
