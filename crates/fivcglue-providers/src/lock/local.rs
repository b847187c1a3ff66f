//! In-process lock provider
//!
//! Named locks shared by every holder of the same provider instance. A lock
//! acquired with an expiration counts as free once that expiration passes,
//! even if it was never released.

use crate::constants::{LOCAL_LOCK_CLASS, PROVIDER_LOG_TOPIC};
use fivcglue_application::{ComponentFactory, ComponentSite};
use fivcglue_domain::constants::LOCK_INTERFACE;
use fivcglue_domain::error::{Error, Result};
use fivcglue_domain::ports::{LockGuard, LockProvider, LoggerProvider};
use fivcglue_domain::value_objects::ComponentArgs;
use std::collections::HashMap;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// `expires_at` is `None` when the requested expiration does not fit in an
/// `Instant`; such a lock is held until released.
#[derive(Debug)]
struct HeldLock {
    token: String,
    expires_at: Option<Instant>,
}

impl HeldLock {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// In-process lock provider
#[derive(Debug, Default)]
pub struct LocalLockProvider {
    locks: Mutex<HashMap<String, HeldLock>>,
    released: Condvar,
}

impl LocalLockProvider {
    /// Create a provider with no locks held
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from component arguments; takes no arguments
    pub fn from_args(site: &ComponentSite, _args: &ComponentArgs) -> Result<Self> {
        if let Some(loggers) = site.query_component::<dyn LoggerProvider>(None) {
            loggers
                .get_logger(PROVIDER_LOG_TOPIC)
                .info("local lock provider created");
        }
        Ok(Self::new())
    }

    fn table(&self) -> Result<MutexGuard<'_, HashMap<String, HeldLock>>> {
        self.locks
            .lock()
            .map_err(|_| Error::lock("lock table poisoned"))
    }

    /// Check whether `key` is currently held
    pub fn is_locked(&self, key: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .table()?
            .get(key)
            .is_some_and(|held| held.is_live(now)))
    }

    /// Number of entries in the lock table, expired ones included
    pub fn tracked_keys(&self) -> Result<usize> {
        Ok(self.table()?.len())
    }
}

impl LockProvider for LocalLockProvider {
    fn acquire_lock(
        &self,
        key: &str,
        expire: Duration,
        blocking: bool,
    ) -> Result<Option<LockGuard>> {
        let mut locks = self.table()?;

        loop {
            let now = Instant::now();
            locks.retain(|_, held| held.is_live(now));

            let holder_expires_at = match locks.get(key) {
                None => {
                    let token = Uuid::new_v4().to_string();
                    locks.insert(
                        key.to_string(),
                        HeldLock {
                            token: token.clone(),
                            expires_at: now.checked_add(expire),
                        },
                    );
                    debug!(key, "Lock acquired");
                    return Ok(Some(LockGuard {
                        key: key.to_string(),
                        token,
                    }));
                }
                Some(_) if !blocking => return Ok(None),
                Some(held) => held.expires_at,
            };

            // Woken by a release, or by the holder's expiration passing.
            locks = match holder_expires_at {
                Some(at) => {
                    self.released
                        .wait_timeout(locks, at - now)
                        .map_err(|_| Error::lock("lock table poisoned"))?
                        .0
                }
                None => self
                    .released
                    .wait(locks)
                    .map_err(|_| Error::lock("lock table poisoned"))?,
            };
        }
    }

    fn release_lock(&self, guard: LockGuard) -> Result<bool> {
        let mut locks = self.table()?;
        let now = Instant::now();

        let owned = locks
            .get(&guard.key)
            .is_some_and(|held| held.token == guard.token && held.is_live(now));

        if owned {
            locks.remove(&guard.key);
            self.released.notify_all();
            debug!(key = %guard.key, "Lock released");
        }
        Ok(owned)
    }
}

/// Factory for `mutexes.local`
pub fn factory() -> ComponentFactory {
    ComponentFactory::builder(LOCAL_LOCK_CLASS, LocalLockProvider::from_args)
        .description("In-process named locks with expiration")
        .provides::<dyn LockProvider>(LOCK_INTERFACE, |locks| locks)
        .build()
}
