//! Health Check Port
//!
//! Components that can report on their own state register under
//! [`HealthCheckProvider`]. Every registration is run, so several checks can
//! share the interface without names.

use serde::{Deserialize, Serialize};

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Component is healthy and fully operational
    Up,
    /// Component is experiencing issues but still operational
    Degraded,
    /// Component is down and not operational
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the component is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Check if the component is operational (healthy or degraded)
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Up | Self::Degraded)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the health check
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Optional error or degradation detail
    pub error: Option<String>,
}

impl HealthCheck {
    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            error: None,
        }
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Down,
            timestamp: chrono::Utc::now(),
            error,
        }
    }

    /// Create a degraded health check
    pub fn degraded<S: Into<String>>(name: S, details: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Degraded,
            timestamp: chrono::Utc::now(),
            error: details,
        }
    }
}

/// Component self-check interface
pub trait HealthCheckProvider: Send + Sync {
    /// Run the check
    fn check(&self) -> HealthCheck;
}
