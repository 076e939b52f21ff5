//! Typed access to environment variables.
//!
//! Each getter comes in two flavours:
//!
//! | Type | With default | Required |
//! |------|--------------|----------|
//! | string | [`get_string`] | [`require_string`] / [`require`] |
//! | integer (`i64`) | [`get_int`] | [`require_int`] |
//! | boolean | [`get_bool`] | [`require_bool`] |
//!
//! A variable set to the empty string counts as unset. Booleans accept
//! exactly `true`, `1`, `false` and `0`.
//!
//! The free functions read the process environment. Use [`EnvAccessor`]
//! with a [`MapEnv`] (or any [`ReadEnv`]) to read from somewhere else:
//!
//! ```
//! use oprc_envutil::{EnvAccessor, MapEnv};
//!
//! let env = EnvAccessor::new(MapEnv::new().with("HTTP_PORT", "9000"));
//! assert_eq!(env.get_int("HTTP_PORT", 8080).unwrap(), 9000);
//! assert!(env.require_bool("DEBUG").unwrap_err().is_missing());
//! ```

mod accessor;
mod error;
mod parse;
mod source;

pub use accessor::EnvAccessor;
pub use error::{EnvError, ValueKind};
pub use parse::{parse_bool, parse_int};
pub use source::{MapEnv, ReadEnv, SystemEnv};

pub fn get_string(key: &str, def: &str) -> String {
    EnvAccessor::system().get_string(key, def)
}

pub fn require_string(key: &str) -> Result<String, EnvError> {
    EnvAccessor::system().require_string(key)
}

/// Alias of [`require_string`].
pub fn require(key: &str) -> Result<String, EnvError> {
    EnvAccessor::system().require(key)
}

pub fn get_int(key: &str, def: i64) -> Result<i64, EnvError> {
    EnvAccessor::system().get_int(key, def)
}

pub fn require_int(key: &str) -> Result<i64, EnvError> {
    EnvAccessor::system().require_int(key)
}

pub fn get_bool(key: &str, def: bool) -> Result<bool, EnvError> {
    EnvAccessor::system().get_bool(key, def)
}

pub fn require_bool(key: &str) -> Result<bool, EnvError> {
    EnvAccessor::system().require_bool(key)
}
