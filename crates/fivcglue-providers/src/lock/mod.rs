//! Lock Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`LocalLockProvider`] | In-process named locks with expiration |

pub mod local;

pub use local::LocalLockProvider;
