//! API Data Transfer Objects
//!
//! Identifier and digest bodies are plain text; only the stats endpoint
//! returns a structured JSON response.

use serde::{Deserialize, Serialize};

/// Form payload for `POST /hash`.
#[derive(Debug, Deserialize)]
pub struct CreateHashRequest {
    /// The password to hash. An absent field deserializes to an empty string
    /// and is rejected by the handler.
    #[serde(default)]
    pub password: String,
}

/// Response body for `GET /stats`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Total number of completed creation requests.
    pub total: i64,
    /// Average latency in microseconds (integer division; 0 when no requests).
    pub average: i64,
}
