//! Error types
//!
//! Only setup can fail. Once a round is running, the simulation works on
//! in-memory state and has no error paths.

use std::fmt;

/// A collaborator could not acquire its per-round resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Renderer resources (font, textures) failed to load
    Renderer(String),
    /// Audio resources failed to load
    Audio(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renderer(msg) => write!(f, "renderer setup failed: {msg}"),
            Self::Audio(msg) => write!(f, "audio setup failed: {msg}"),
        }
    }
}

impl std::error::Error for SetupError {}

/// A round could not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    Setup(SetupError),
    InvalidConfig(&'static str),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(err) => write!(f, "round setup failed: {err}"),
            Self::InvalidConfig(msg) => write!(f, "invalid round config: {msg}"),
        }
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Setup(err) => Some(err),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<SetupError> for RoundError {
    fn from(err: SetupError) -> Self {
        Self::Setup(err)
    }
}

/// Settings could not be loaded
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings: {err}"),
            Self::Parse(err) => write!(f, "malformed settings: {err}"),
            Self::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_round_error_display_and_source() {
        let err: RoundError = SetupError::Renderer("font missing".into()).into();
        assert_eq!(
            err.to_string(),
            "round setup failed: renderer setup failed: font missing"
        );
        assert!(err.source().is_some());
        assert!(RoundError::InvalidConfig("x").source().is_none());
    }

    #[test]
    fn test_config_error_from_parse() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(parse);
        assert!(err.to_string().starts_with("malformed settings"));
    }
}
