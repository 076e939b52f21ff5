//! Process environment helpers for integration tests.
//!
//! Every test uses its own variable names, so guards from parallel tests
//! never touch the same key.

use std::ffi::{OsStr, OsString};

/// Restores (or unsets) the original value of `key` when dropped.
pub struct EnvGuard {
    key: String,
    prev: Option<OsString>,
}

impl EnvGuard {
    /// Sets `key` to `val`, remembering the previous value.
    pub fn set(key: &str, val: impl AsRef<OsStr>) -> Self {
        let guard = Self::capture(key);
        guard.put(val);
        guard
    }

    /// Unsets `key`, remembering the previous value.
    pub fn unset(key: &str) -> Self {
        let guard = Self::capture(key);
        guard.clear();
        guard
    }

    pub fn put(&self, val: impl AsRef<OsStr>) {
        unsafe { std::env::set_var(&self.key, val.as_ref()) }
    }

    pub fn clear(&self) {
        unsafe { std::env::remove_var(&self.key) }
    }

    fn capture(key: &str) -> Self {
        Self {
            key: key.to_string(),
            prev: std::env::var_os(key),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            if let Some(ref v) = self.prev {
                std::env::set_var(&self.key, v);
            } else {
                std::env::remove_var(&self.key);
            }
        }
    }
}
