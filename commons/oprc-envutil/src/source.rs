use std::collections::HashMap;
use std::sync::Arc;

/// Resolves an environment variable name to its raw value.
///
/// Implementations return the value exactly as stored, empty strings
/// included. Treating empty as unset is left to [`crate::EnvAccessor`] so
/// that every source behaves the same way.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        // Non-Unicode values still count as present.
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// In-memory environment, mainly for tests and for injecting fixed values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable variant of [`MapEnv::set`].
    pub fn with(mut self, key: &str, val: &str) -> Self {
        self.set(key, val);
        self
    }

    pub fn set(&mut self, key: &str, val: &str) {
        self.vars.insert(key.to_string(), val.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Arc<E> {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
