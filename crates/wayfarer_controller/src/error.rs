//! Crate-level error types.

use std::fmt;

/// Errors produced while configuring the controller.
///
/// Per-frame systems never return these: a missing collaborator degrades to
/// a no-op for that frame and is reported through the logger instead.
#[derive(Debug)]
pub enum ControllerError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// TOML parsing/serialization failure.
    ConfigParse(String),
    /// Config parsed but holds values the controller cannot run with.
    InvalidConfig(String),
    /// Action name not present in the action registry.
    UnresolvedAction(String),
    /// Key binding name that does not map to a known key.
    UnknownKey(String),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::UnresolvedAction(name) => {
                write!(f, "input action '{name}' is not registered")
            }
            Self::UnknownKey(name) => write!(f, "unknown key binding '{name}'"),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControllerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
