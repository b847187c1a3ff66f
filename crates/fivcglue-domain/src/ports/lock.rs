//! Lock Provider Port
//!
//! Defines the contract for named mutual exclusion. Every acquisition
//! carries an expiration so a crashed holder cannot block others forever.

use crate::error::Result;
use std::time::Duration;

/// Lock guard token returned when a lock is acquired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockGuard {
    /// Lock key
    pub key: String,
    /// Unique token for this lock acquisition
    pub token: String,
}

/// Lock provider interface
pub trait LockProvider: Send + Sync + std::fmt::Debug {
    /// Acquire a lock
    ///
    /// # Arguments
    /// * `key` - Lock name
    /// * `expire` - How long the acquisition stays valid
    /// * `blocking` - Wait for the lock instead of failing fast
    ///
    /// # Returns
    /// The guard on success, None if the lock is held and `blocking` is false
    fn acquire_lock(&self, key: &str, expire: Duration, blocking: bool)
    -> Result<Option<LockGuard>>;

    /// Release a lock
    ///
    /// # Returns
    /// False if the guard no longer owns the lock (expired or taken over)
    fn release_lock(&self, guard: LockGuard) -> Result<bool>;
}
