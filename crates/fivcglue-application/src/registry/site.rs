//! Component Site
//!
//! The registry table: interface identity → registrations in insertion order.
//!
//! ## Resolution rules
//!
//! | Call | Result |
//! |------|--------|
//! | `get_component::<I>(Some(name))` | newest registration of `I` with exactly that name |
//! | `get_component::<I>(None)` | newest registration of `I`, whatever its name |
//! | `query_component` | same as `get_component`, `None` instead of an error |
//! | `query_components::<I>()` | every registration of `I`, oldest first, shadowed ones included |
//!
//! Interface identity is the `TypeId` of `I`, so `dyn CacheProvider` and
//! `dyn LockProvider` never collide even when registered under the same name.

use fivcglue_domain::error::{Error, Result};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tracing::debug;

/// One stored binding. `instance` always holds an `Arc<I>` for the
/// interface the entry is filed under.
struct Registration {
    name: Option<String>,
    order: u64,
    instance: Box<dyn Any + Send + Sync>,
}

struct InterfaceEntry {
    interface: &'static str,
    registrations: Vec<Registration>,
}

#[derive(Default)]
struct RegistryTable {
    interfaces: HashMap<TypeId, InterfaceEntry>,
    next_order: u64,
}

/// Snapshot of a single registration, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInfo {
    /// Type name of the interface
    pub interface: &'static str,
    /// Registration name, if any
    pub name: Option<String>,
    /// Position in the site-wide registration order
    pub order: u64,
}

/// Registry binding interface contracts to component instances
///
/// Cloning a site is cheap and yields a handle to the same table. Separate
/// calls to [`ComponentSite::new`] produce isolated sites.
///
/// A component that needs lookups after construction should keep a
/// [`WeakComponentSite`] from [`downgrade`](Self::downgrade). A strong clone
/// stored inside a component registered in the same site is a reference
/// cycle and keeps the whole table alive.
///
/// The table sits behind a reader-writer lock: lookups from many threads
/// proceed concurrently, registrations take the write side briefly.
#[derive(Clone, Default)]
pub struct ComponentSite {
    table: Arc<RwLock<RegistryTable>>,
}

impl ComponentSite {
    /// Create an empty, isolated site
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-owning handle to this site
    pub fn downgrade(&self) -> WeakComponentSite {
        WeakComponentSite {
            table: Arc::downgrade(&self.table),
        }
    }

    // Every mutation is a single push, so a poisoned table is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, RegistryTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a component under interface `I`
    ///
    /// The caller coerces its concrete instance into `Arc<I>`, which is
    /// where conformance to the interface is checked. Registering the same
    /// (interface, name) pair again shadows the earlier entry for lookups
    /// but keeps it in [`query_components`](Self::query_components).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let cache: Arc<dyn CacheProvider> = Arc::new(NullCacheProvider::new());
    /// site.register_component(cache, Some("null"));
    /// ```
    pub fn register_component<I>(&self, instance: Arc<I>, name: Option<&str>)
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let interface = type_name::<I>();
        let mut table = self.write();
        let order = table.next_order;
        table.next_order += 1;

        table
            .interfaces
            .entry(TypeId::of::<I>())
            .or_insert_with(|| InterfaceEntry {
                interface,
                registrations: Vec::new(),
            })
            .registrations
            .push(Registration {
                name: name.map(str::to_string),
                order,
                instance: Box::new(instance),
            });

        debug!(interface, name = name.unwrap_or(""), order, "Registered component");
    }

    /// Resolve a required component
    ///
    /// # Errors
    /// `ComponentNotFound` when nothing is registered for `I` (with `name`,
    /// if given).
    pub fn get_component<I>(&self, name: Option<&str>) -> Result<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.query_component::<I>(name)
            .ok_or_else(|| Error::component_not_found(type_name::<I>(), name))
    }

    /// Resolve an optional component
    pub fn query_component<I>(&self, name: Option<&str>) -> Option<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let table = self.read();
        let entry = table.interfaces.get(&TypeId::of::<I>())?;

        entry
            .registrations
            .iter()
            .rev()
            .find(|registration| match name {
                Some(name) => registration.name.as_deref() == Some(name),
                None => true,
            })
            .and_then(|registration| registration.instance.downcast_ref::<Arc<I>>())
            .cloned()
    }

    /// All components registered for `I`, oldest first
    pub fn query_components<I>(&self) -> Vec<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let table = self.read();
        table
            .interfaces
            .get(&TypeId::of::<I>())
            .map(|entry| {
                entry
                    .registrations
                    .iter()
                    .filter_map(|registration| registration.instance.downcast_ref::<Arc<I>>())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check whether a lookup for `I` (and `name`) would succeed
    pub fn contains_component<I>(&self, name: Option<&str>) -> bool
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.query_component::<I>(name).is_some()
    }

    /// Total number of registrations across all interfaces
    pub fn len(&self) -> usize {
        self.read()
            .interfaces
            .values()
            .map(|entry| entry.registrations.len())
            .sum()
    }

    /// True if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every registration in site-wide registration order
    pub fn registrations(&self) -> Vec<RegistrationInfo> {
        let table = self.read();
        let mut infos: Vec<RegistrationInfo> = table
            .interfaces
            .values()
            .flat_map(|entry| {
                entry
                    .registrations
                    .iter()
                    .map(|registration| RegistrationInfo {
                        interface: entry.interface,
                        name: registration.name.clone(),
                        order: registration.order,
                    })
            })
            .collect();
        infos.sort_by_key(|info| info.order);
        infos
    }
}

/// Non-owning handle to a [`ComponentSite`]
#[derive(Clone, Default)]
pub struct WeakComponentSite {
    table: Weak<RwLock<RegistryTable>>,
}

impl WeakComponentSite {
    /// The site, if any strong handle to it is still alive
    pub fn upgrade(&self) -> Option<ComponentSite> {
        self.table.upgrade().map(|table| ComponentSite { table })
    }
}

impl fmt::Debug for WeakComponentSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakComponentSite")
            .field("alive", &(self.table.strong_count() > 0))
            .finish()
    }
}

impl fmt::Debug for ComponentSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.read();
        f.debug_struct("ComponentSite")
            .field("interfaces", &table.interfaces.len())
            .field("registrations", &table.next_order)
            .finish()
    }
}
