//! Response types for the health endpoint.

use serde::Serialize;

/// Top-level health report.
///
/// `status` is `"healthy"` only when every component check passes; any
/// failing component downgrades it to `"degraded"`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-component results, one field per dependency.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub cache: CheckStatus,
}

/// Outcome of a single component probe.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    /// A passing check.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    /// A failing check with a reason.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    /// Whether the probe passed.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
