//! Site bootstrap
//!
//! Builds the application's [`ComponentSite`] from [`AppConfig::components`]
//! using every factory the providers crate ships.

use crate::config::AppConfig;
use fivcglue_application::{ComponentSite, ComponentSiteBuilder};
use fivcglue_domain::error::Result;
use fivcglue_providers::register_default_factories;
use tracing::info;

/// Builder with the default factory table
pub fn default_builder() -> ComponentSiteBuilder {
    let mut builder = ComponentSiteBuilder::new();
    register_default_factories(&mut builder);
    builder
}

/// Build a site holding every configured component
///
/// # Errors
/// Whatever [`ComponentSiteBuilder::build`] returns for the first failing
/// component.
pub fn bootstrap(config: &AppConfig) -> Result<ComponentSite> {
    let site = default_builder().build(&config.components)?;
    info!(
        components = config.components.len(),
        registrations = site.len(),
        "Component site ready"
    );
    Ok(site)
}
