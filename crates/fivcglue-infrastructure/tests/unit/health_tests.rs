//! Health aggregation tests

use fivcglue_application::ComponentSite;
use fivcglue_domain::ports::{HealthCheck, HealthCheckProvider, HealthStatus};
use fivcglue_infrastructure::health::{HealthResponse, check_all};
use std::sync::Arc;

struct FixedCheck {
    name: &'static str,
    status: HealthStatus,
}

impl HealthCheckProvider for FixedCheck {
    fn check(&self) -> HealthCheck {
        match self.status {
            HealthStatus::Up => HealthCheck::healthy(self.name),
            HealthStatus::Degraded => {
                HealthCheck::degraded(self.name, Some("slow".to_string()))
            }
            HealthStatus::Down => HealthCheck::failed(self.name, Some("offline".to_string())),
        }
    }
}

fn register(site: &ComponentSite, name: &'static str, status: HealthStatus) {
    site.register_component::<dyn HealthCheckProvider>(Arc::new(FixedCheck { name, status }), None);
}

#[test]
fn test_no_checks_is_up() {
    let response = check_all(&ComponentSite::new());

    assert_eq!(response.status, HealthStatus::Up);
    assert!(response.checks.is_empty());
    assert!(response.is_healthy());
}

#[test]
fn test_all_checks_run_in_registration_order() {
    let site = ComponentSite::new();
    register(&site, "db", HealthStatus::Up);
    register(&site, "cache", HealthStatus::Up);

    let response = check_all(&site);

    let names: Vec<&str> = response.checks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["db", "cache"]);
    assert_eq!(response.status, HealthStatus::Up);
}

#[test]
fn test_degraded_check_degrades_overall() {
    let site = ComponentSite::new();
    register(&site, "db", HealthStatus::Up);
    register(&site, "cache", HealthStatus::Degraded);

    let response = check_all(&site);

    assert_eq!(response.status, HealthStatus::Degraded);
    assert!(!response.is_healthy());
}

#[test]
fn test_down_check_wins() {
    let response = HealthResponse::from_checks(vec![
        HealthCheck::degraded("a", None),
        HealthCheck::failed("b", Some("refused".to_string())),
        HealthCheck::healthy("c"),
    ]);

    assert_eq!(response.status, HealthStatus::Down);
    assert_eq!(response.checks[1].error.as_deref(), Some("refused"));
}

#[test]
fn test_response_serializes_lowercase_status() {
    let response = HealthResponse::from_checks(vec![HealthCheck::healthy("db")]);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status"], "up");
    assert_eq!(json["checks"][0]["name"], "db");
}
