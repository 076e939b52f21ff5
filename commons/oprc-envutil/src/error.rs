use std::fmt;

/// Type a raw value was expected to parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => f.write_str("integer"),
            ValueKind::Boolean => f.write_str("boolean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// Required variable is unset or set to the empty string.
    #[error("environment variable {0} must be set")]
    MissingVariable(String),
    /// Variable is present but its value does not parse as `expected`.
    #[error(
        "error parsing value for {key}: {value:?} is not a valid {expected}"
    )]
    ParseError {
        key: String,
        value: String,
        expected: ValueKind,
    },
}

impl EnvError {
    pub fn key(&self) -> &str {
        match self {
            EnvError::MissingVariable(key) => key,
            EnvError::ParseError { key, .. } => key,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, EnvError::MissingVariable(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, EnvError::ParseError { .. })
    }
}
