//! Scoped environment overrides for configuration tests.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Applies environment variable overrides for its lifetime, restoring the
/// previous values on drop. Holds a global lock so tests mutating the
/// environment cannot interleave.
pub struct EnvVarGuard {
    saved: HashMap<OsString, Option<OsString>>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets (or, for a `None` value, unsets) each variable in `changes`.
    pub fn set_many(changes: &[(OsString, Option<OsString>)]) -> Self {
        let lock = env_lock();
        let mut saved = HashMap::with_capacity(changes.len());

        for (key, value) in changes {
            saved.entry(key.clone()).or_insert_with(|| env::var_os(key));
            unsafe {
                // SAFETY: ENV_MUTEX serializes environment mutation across tests.
                match value {
                    Some(replacement) => env::set_var(key, replacement),
                    None => env::remove_var(key),
                }
            }
        }

        Self { saved, _lock: lock }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain() {
            unsafe {
                // SAFETY: ENV_MUTEX serializes environment mutation across tests.
                match original {
                    Some(value) => env::set_var(&key, &value),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}
