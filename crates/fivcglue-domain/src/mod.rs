//! # fivcglue Domain Layer
//!
//! Core contracts of the component registry. Nothing in this crate knows how
//! components are stored or constructed; it only defines what they look like.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | Interface contracts components are registered under |
//! | [`value_objects`] | Declarative component specs consumed by the builder |
//! | [`constants`] | Symbolic interface names shared across layers |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
