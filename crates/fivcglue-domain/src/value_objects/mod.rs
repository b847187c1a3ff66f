//! Domain Value Objects
//!
//! Immutable value objects describing components declaratively.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ComponentSpec`] | One component to construct: factory, arguments, bindings |
//! | [`ComponentBinding`] | An (interface, name) slot the component is registered under |
//! | [`ComponentArgs`] | Keyword arguments handed to the factory |

/// Declarative component specs
pub mod component;

pub use component::{ComponentArgs, ComponentBinding, ComponentSpec};
