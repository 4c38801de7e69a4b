//! Scoped mutation of process environment variables.
//!
//! `std::env::set_var` and `remove_var` are `unsafe` in Rust 2024 because they
//! mutate process-global state. [`ScopedEnvVar`] holds a process-wide lock for
//! its whole lifetime, so only one test touches the environment at a time, and
//! restores the previous value on drop.

use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Guard that owns the environment lock and one overridden variable.
#[derive(Debug)]
pub struct ScopedEnvVar {
    name: &'static str,
    prev: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnvVar {
    /// Set `name` to `value` until the guard drops.
    #[must_use]
    pub fn set(name: &'static str, value: &str) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let prev = std::env::var_os(name);
        // SAFETY: `ENV_LOCK` is held for the guard's lifetime.
        unsafe { std::env::set_var(name, value) };
        Self {
            name,
            prev,
            _lock: lock,
        }
    }

    /// Remove `name` until the guard drops.
    #[must_use]
    pub fn unset(name: &'static str) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let prev = std::env::var_os(name);
        // SAFETY: `ENV_LOCK` is held for the guard's lifetime.
        unsafe { std::env::remove_var(name) };
        Self {
            name,
            prev,
            _lock: lock,
        }
    }
}

impl Drop for ScopedEnvVar {
    fn drop(&mut self) {
        // SAFETY: the lock field is still held while the value is restored.
        unsafe {
            match self.prev.take() {
                Some(value) => std::env::set_var(self.name, value),
                None => std::env::remove_var(self.name),
            }
        }
    }
}
