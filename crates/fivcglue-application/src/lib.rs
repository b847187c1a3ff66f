//! # fivcglue Application Layer
//!
//! The component registry and the declarative bootstrap that fills it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Component Bootstrap                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  1. Startup code:   builder.register_factory(...)            │
//! │                            ↓                                 │
//! │  2. Config yields:  [ComponentSpec, ComponentSpec, ...]      │
//! │                            ↓                                 │
//! │  3. Builder runs:   factory(&site, &args) in spec order      │
//! │                            ↓                                 │
//! │  4. Site stores:    (interface, name) → Arc<dyn Interface>   │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod registry;

pub use registry::{
    ComponentFactory, ComponentFactoryBuilder, ComponentSite, ComponentSiteBuilder,
    RegistrationInfo, WeakComponentSite,
};
