use serde::{Deserialize, Serialize};

/// Body of the service's `GET /health` probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    pub fn database_connected(&self) -> bool {
        self.database.as_deref() == Some("connected")
    }
}
