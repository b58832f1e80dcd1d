//! Body of `GET /health`.

use serde::Serialize;

/// Overall service status plus the result of each probe.
///
/// `status` is `"healthy"` when every check passed and `"degraded"` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Crate version the binary was built from.
    pub version: String,
    pub checks: HealthChecks,
}

/// Probes run on each health request. The catalog only depends on PostgreSQL.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of one probe: `"ok"` or `"error"` with a short explanation.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
