//! Data Transfer Objects for the HTTP API.
//!
//! The analysis report is re-exported from the api module since it already
//! derives Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{AnalysisReport, ProcessedRow, Sentiment, SentimentCounts, TokenCount};

/// Request body for single-text prediction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Text to classify. Missing or null reads as an empty string; other
    /// non-string values are classified through their JSON rendering.
    #[serde(default)]
    pub text: Option<serde_json::Value>,
}

impl PredictRequest {
    pub fn text(&self) -> String {
        match &self.text {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Response for single-text prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub sentiment: Sentiment,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the crate serving the API
    pub version: String,
}
