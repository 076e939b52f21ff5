use tracing::trace;

use crate::error::EnvError;
use crate::parse::{parse_bool, parse_int};
use crate::source::{ReadEnv, SystemEnv};

/// Typed, default-or-fail access to environment variables.
///
/// Unset and empty variables are treated the same: `get_*` fall back to
/// the default, `require_*` fail with [`EnvError::MissingVariable`]. Every
/// call goes back to the source; nothing is cached.
#[derive(Debug, Default, Clone)]
pub struct EnvAccessor<E = SystemEnv> {
    source: E,
}

impl EnvAccessor<SystemEnv> {
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<E: ReadEnv> EnvAccessor<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut E {
        &mut self.source
    }

    /// Value of `key` if set and non-empty.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.source.var(key).filter(|v| !v.is_empty())
    }

    pub fn get_string(&self, key: &str, def: &str) -> String {
        match self.lookup(key) {
            Some(val) => val,
            None => {
                trace!(key, "unset or empty, using default");
                def.to_string()
            }
        }
    }

    pub fn require_string(&self, key: &str) -> Result<String, EnvError> {
        self.lookup(key)
            .ok_or_else(|| EnvError::MissingVariable(key.to_string()))
    }

    /// Alias of [`EnvAccessor::require_string`].
    #[inline]
    pub fn require(&self, key: &str) -> Result<String, EnvError> {
        self.require_string(key)
    }

    pub fn get_int(&self, key: &str, def: i64) -> Result<i64, EnvError> {
        match self.lookup(key) {
            Some(val) => parse_int(key, &val),
            None => {
                trace!(key, "unset or empty, using default");
                Ok(def)
            }
        }
    }

    pub fn require_int(&self, key: &str) -> Result<i64, EnvError> {
        parse_int(key, &self.require_string(key)?)
    }

    pub fn get_bool(&self, key: &str, def: bool) -> Result<bool, EnvError> {
        match self.lookup(key) {
            Some(val) => parse_bool(key, &val),
            None => {
                trace!(key, "unset or empty, using default");
                Ok(def)
            }
        }
    }

    pub fn require_bool(&self, key: &str) -> Result<bool, EnvError> {
        parse_bool(key, &self.require_string(key)?)
    }
}
