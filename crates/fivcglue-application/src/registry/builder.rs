//! Component Site Builder
//!
//! Turns an ordered list of [`ComponentSpec`] into a populated
//! [`ComponentSite`]. Specs are constructed strictly in order and every
//! constructor sees the site as built so far, so a component can look up
//! anything declared before it.
//!
//! The build is one-shot and fail-fast: the first bad spec or failing
//! constructor aborts it and the partially filled site is dropped.

use crate::registry::factory::ComponentFactory;
use crate::registry::site::ComponentSite;
use fivcglue_domain::error::{Error, Result};
use fivcglue_domain::value_objects::ComponentSpec;
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

/// Builds component sites from declarative specs
///
/// # Example
///
/// ```ignore
/// let mut builder = ComponentSiteBuilder::new();
/// fivcglue_providers::register_default_factories(&mut builder);
///
/// let site = builder.build(&[
///     ComponentSpec::new("loggers.tracing")
///         .with_entry(ComponentBinding::new(LOGGER_INTERFACE)),
///     ComponentSpec::new("caches.memory")
///         .with_entry(ComponentBinding::named(CACHE_INTERFACE, "memory")),
/// ])?;
/// ```
#[derive(Debug, Default)]
pub struct ComponentSiteBuilder {
    factories: BTreeMap<String, ComponentFactory>,
}

impl ComponentSiteBuilder {
    /// Create a builder with an empty factory table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory to the table
    ///
    /// A factory registered under an existing name replaces the old one.
    pub fn register_factory(&mut self, factory: ComponentFactory) -> &mut Self {
        let name = factory.name().to_string();
        if self.factories.insert(name.clone(), factory).is_some() {
            warn!(class = %name, "Replaced existing component factory");
        }
        self
    }

    /// Builder-style variant of [`register_factory`](Self::register_factory)
    pub fn with_factory(mut self, factory: ComponentFactory) -> Self {
        self.register_factory(factory);
        self
    }

    /// Look up a factory by name
    pub fn factory(&self, name: &str) -> Option<&ComponentFactory> {
        self.factories.get(name)
    }

    /// List all registered factories as (name, description)
    pub fn factories(&self) -> Vec<(&str, &str)> {
        self.factories
            .values()
            .map(|factory| (factory.name(), factory.description()))
            .collect()
    }

    /// Build a new site from `specs`
    ///
    /// # Errors
    /// - `Build` for an unknown class or a malformed spec
    /// - whatever a component constructor returned, unchanged
    pub fn build(&self, specs: &[ComponentSpec]) -> Result<ComponentSite> {
        self.build_on(ComponentSite::new(), specs)
    }

    /// Build on top of a seeded site
    ///
    /// Useful when some components (such as configuration) are created by
    /// hand before the declarative ones. The site is consumed; on error it is
    /// dropped along with whatever was registered into it.
    pub fn build_on(&self, site: ComponentSite, specs: &[ComponentSpec]) -> Result<ComponentSite> {
        info!(components = specs.len(), "Building component site");

        for (index, spec) in specs.iter().enumerate() {
            self.load_component(&site, index, spec)
                .inspect_err(|e| error!(index, class = %spec.factory, error = %e, "Component build failed"))?;
        }

        info!(registrations = site.len(), "Component site built");
        Ok(site)
    }

    fn load_component(&self, site: &ComponentSite, index: usize, spec: &ComponentSpec) -> Result<()> {
        let factory = self.resolve_factory(spec)?;

        let instance = factory.construct(site, &spec.args)?;

        for binding in &spec.entries {
            factory.bind(site, &binding.interface, instance.clone(), binding.effective_name())?;
        }

        debug!(
            index,
            class = %spec.factory,
            bindings = spec.entries.len(),
            "Loaded component"
        );
        Ok(())
    }

    /// Validate a spec against the factory table before anything is constructed
    fn resolve_factory(&self, spec: &ComponentSpec) -> Result<&ComponentFactory> {
        spec.validate()?;

        let factory = self.factories.get(&spec.factory).ok_or_else(|| {
            let available: Vec<&str> = self.factories.keys().map(String::as_str).collect();
            Error::build(format!(
                "Unknown component class '{}'. Available classes: {:?}",
                spec.factory, available
            ))
        })?;

        if let Some(binding) = spec
            .entries
            .iter()
            .find(|binding| !factory.provides(&binding.interface))
        {
            return Err(Error::build(format!(
                "class '{}' does not provide interface '{}'. Provided: {:?}",
                spec.factory,
                binding.interface,
                factory.interfaces().collect::<Vec<_>>()
            )));
        }

        Ok(factory)
    }
}
