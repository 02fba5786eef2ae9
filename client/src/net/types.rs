//! Wire DTOs for the client/server boundary.
//!
//! These mirror the server's `models` module field-for-field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful `/api/contact` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Error envelope returned by every failing API call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
