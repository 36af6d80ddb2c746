//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each logical store.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub mapping_store: CheckStatus,
    pub counter_store: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn from_reachable(reachable: bool, name: &str) -> Self {
        if reachable {
            Self {
                status: "ok".to_string(),
                message: Some(format!("{} reachable", name)),
            }
        } else {
            Self {
                status: "error".to_string(),
                message: Some(format!("{} unreachable", name)),
            }
        }
    }
}
