//! Component Registry
//!
//! [`ComponentSite`] binds interface contracts to component instances.
//! [`ComponentSiteBuilder`] constructs a populated site from declarative
//! [`ComponentSpec`](fivcglue_domain::value_objects::ComponentSpec) lists,
//! using a table of named [`ComponentFactory`] entries.
//!
//! ## Usage
//!
//! ### Registering directly
//!
//! ```ignore
//! use fivcglue_application::ComponentSite;
//! use fivcglue_domain::ports::CacheProvider;
//!
//! let site = ComponentSite::new();
//! let cache: Arc<dyn CacheProvider> = Arc::new(MemoryCacheProvider::new());
//! site.register_component(cache, Some("memory"));
//!
//! let cache = site.get_component::<dyn CacheProvider>(Some("memory"))?;
//! ```
//!
//! ### Building from specs
//!
//! ```ignore
//! let mut builder = ComponentSiteBuilder::new();
//! builder.register_factory(
//!     ComponentFactory::builder("caches.memory", |site, args| MemoryCacheProvider::from_args(site, args))
//!         .provides::<dyn CacheProvider>(CACHE_INTERFACE, |cache| cache)
//!         .build(),
//! );
//! let site = builder.build(&config.components)?;
//! ```

pub mod builder;
pub mod factory;
pub mod site;

pub use builder::ComponentSiteBuilder;
pub use factory::{ComponentFactory, ComponentFactoryBuilder};
pub use site::{ComponentSite, RegistrationInfo, WeakComponentSite};
