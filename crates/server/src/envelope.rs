//! Uniform JSON response wrappers.

use serde::Serialize;
use serde_json::Value;

/// Successful weather response.
#[derive(Debug, Clone, Serialize)]
pub struct DataEnvelope {
    pub success: bool,
    /// Whether `data` came from the cache rather than the upstream API.
    pub cached: bool,
    pub data: Value,
}

impl DataEnvelope {
    pub fn new(data: Value, cached: bool) -> Self {
        Self { success: true, cached, data }
    }
}

/// Failed response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}
