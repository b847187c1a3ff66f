//! Aggregated component health
//!
//! Every component registered under `HealthCheckProvider` contributes one
//! check; the overall status is the worst of them.

use chrono::{DateTime, Utc};
use fivcglue_application::ComponentSite;
use fivcglue_domain::ports::{HealthCheck, HealthCheckProvider, HealthStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Combined result of all registered health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Worst status among the checks, `Up` when there are none
    pub status: HealthStatus,
    /// When the checks were run
    pub timestamp: DateTime<Utc>,
    /// Individual results in registration order
    pub checks: Vec<HealthCheck>,
}

impl HealthResponse {
    /// Aggregate individual checks
    pub fn from_checks(checks: Vec<HealthCheck>) -> Self {
        let status = checks
            .iter()
            .map(|check| check.status)
            .fold(HealthStatus::Up, worst);

        Self {
            status,
            timestamp: Utc::now(),
            checks,
        }
    }

    /// Check if every component is fully healthy
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }
}

fn worst(a: HealthStatus, b: HealthStatus) -> HealthStatus {
    match (a, b) {
        (HealthStatus::Down, _) | (_, HealthStatus::Down) => HealthStatus::Down,
        (HealthStatus::Degraded, _) | (_, HealthStatus::Degraded) => HealthStatus::Degraded,
        _ => HealthStatus::Up,
    }
}

/// Run every health check registered in `site`
pub fn check_all(site: &ComponentSite) -> HealthResponse {
    let checks: Vec<HealthCheck> = site
        .query_components::<dyn HealthCheckProvider>()
        .iter()
        .map(|provider| {
            let check = provider.check();
            log_health_check(&check);
            check
        })
        .collect();

    HealthResponse::from_checks(checks)
}

fn log_health_check(check: &HealthCheck) {
    if check.status.is_operational() {
        debug!(component = %check.name, status = ?check.status, "Health check passed");
    } else {
        error!(
            component = %check.name,
            details = check.error.as_deref().unwrap_or("Unknown failure"),
            "Health check failed"
        );
    }
}
