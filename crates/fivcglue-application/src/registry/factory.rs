//! Component Factories
//!
//! A factory is the startup-time replacement for loading a class by name:
//! a symbolic name, a typed constructor, and the interfaces the constructed
//! value may be bound under. The builder looks factories up by the `class`
//! field of a component spec.
//!
//! ## Pattern
//!
//! ```text
//! ComponentSpec.class → ComponentFactory → constructor(&site, &args) → Arc<T>
//!                                  ↓
//! ComponentSpec.entries → provides["CacheProvider"] → Arc<dyn CacheProvider> → site
//! ```

use crate::registry::site::ComponentSite;
use fivcglue_domain::error::{Error, Result};
use fivcglue_domain::value_objects::ComponentArgs;
use std::any::{Any, type_name};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased constructed component, shared by all of its bindings
pub(crate) type SharedComponent = Arc<dyn Any + Send + Sync>;

type ConstructFn = dyn Fn(&ComponentSite, &ComponentArgs) -> Result<SharedComponent> + Send + Sync;
type BindFn = dyn Fn(&ComponentSite, SharedComponent, Option<&str>) -> Result<()> + Send + Sync;

/// Registry entry for a constructible component
///
/// # Example
///
/// ```ignore
/// let factory = ComponentFactory::builder("caches.null", |_site, _args| Ok(NullCacheProvider::new()))
///     .description("No-op cache")
///     .provides::<dyn CacheProvider>(CACHE_INTERFACE, |cache| cache)
///     .build();
/// ```
pub struct ComponentFactory {
    name: String,
    description: String,
    construct: Box<ConstructFn>,
    bindings: BTreeMap<String, Box<BindFn>>,
}

impl ComponentFactory {
    /// Start a factory for components of type `T`
    ///
    /// The constructor receives the site under construction and the spec's
    /// arguments.
    pub fn builder<T, F>(name: impl Into<String>, constructor: F) -> ComponentFactoryBuilder<T>
    where
        T: Send + Sync + 'static,
        F: Fn(&ComponentSite, &ComponentArgs) -> Result<T> + Send + Sync + 'static,
    {
        ComponentFactoryBuilder {
            name: name.into(),
            description: String::new(),
            construct: Box::new(
                move |site: &ComponentSite, args: &ComponentArgs| -> Result<SharedComponent> {
                    let component: SharedComponent = Arc::new(constructor(site, args)?);
                    Ok(component)
                },
            ),
            bindings: BTreeMap::new(),
            component: PhantomData,
        }
    }

    /// Symbolic factory name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Symbolic interface names this factory's components can be bound under
    pub fn interfaces(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Check whether components from this factory can be bound under `interface`
    pub fn provides(&self, interface: &str) -> bool {
        self.bindings.contains_key(interface)
    }

    pub(crate) fn construct(
        &self,
        site: &ComponentSite,
        args: &ComponentArgs,
    ) -> Result<SharedComponent> {
        (self.construct)(site, args)
    }

    pub(crate) fn bind(
        &self,
        site: &ComponentSite,
        interface: &str,
        instance: SharedComponent,
        name: Option<&str>,
    ) -> Result<()> {
        let bind = self.bindings.get(interface).ok_or_else(|| {
            Error::build(format!(
                "class '{}' does not provide interface '{}'",
                self.name, interface
            ))
        })?;
        bind(site, instance, name)
    }
}

impl fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentFactory")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("interfaces", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Typed builder for [`ComponentFactory`]
pub struct ComponentFactoryBuilder<T> {
    name: String,
    description: String,
    construct: Box<ConstructFn>,
    bindings: BTreeMap<String, Box<BindFn>>,
    component: PhantomData<fn() -> T>,
}

impl<T> ComponentFactoryBuilder<T>
where
    T: Send + Sync + 'static,
{
    /// Set the human-readable description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare that components of type `T` can be bound under interface `I`
    ///
    /// `cast` performs the coercion from the concrete type to the interface,
    /// which is usually just `|component| component`.
    pub fn provides<I>(mut self, interface: impl Into<String>, cast: fn(Arc<T>) -> Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let bind = move |site: &ComponentSite,
                         instance: SharedComponent,
                         name: Option<&str>|
              -> Result<()> {
            let component = instance.downcast::<T>().map_err(|_| {
                Error::internal(format!("constructed component is not a {}", type_name::<T>()))
            })?;
            site.register_component::<I>(cast(component), name);
            Ok(())
        };
        self.bindings.insert(interface.into(), Box::new(bind));
        self
    }

    /// Finish the factory
    pub fn build(self) -> ComponentFactory {
        ComponentFactory {
            name: self.name,
            description: self.description,
            construct: self.construct,
            bindings: self.bindings,
        }
    }
}
