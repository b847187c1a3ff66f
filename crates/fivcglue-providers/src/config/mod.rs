//! Configuration Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`FileConfigProvider`] | JSON, YAML or TOML file of named sessions |

pub mod file;

pub use file::{FileConfigProvider, FileConfigSession};
