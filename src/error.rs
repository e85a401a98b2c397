use std::fmt;

/// Custom error type for meshctl operations
#[derive(Debug)]
pub enum MeshctlError {
    /// Failed to read, parse, serialize or write the config file
    Config(String),
    /// Token with the given name is not in the config
    TokenNotFound(String),
    /// Token with the given name already exists
    TokenExists(String),
    /// Context with the given name is not in the config
    ContextNotFound(String),
    /// No context could be resolved from flag, env var or config
    ContextUnresolved(String),
    /// Underlying I/O error
    Io(std::io::Error),
    /// JSON/YAML encoding error
    Serialization(String),
}

impl fmt::Display for MeshctlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshctlError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MeshctlError::TokenNotFound(name) => write!(f, "Token {} could not be found.", name),
            MeshctlError::TokenExists(name) => write!(f, "Token {} already exists.", name),
            MeshctlError::ContextNotFound(msg) => write!(f, "{}", msg),
            MeshctlError::ContextUnresolved(msg) => write!(f, "{}", msg),
            MeshctlError::Io(e) => write!(f, "I/O error: {}", e),
            MeshctlError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for MeshctlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshctlError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MeshctlError {
    fn from(err: std::io::Error) -> Self {
        MeshctlError::Io(err)
    }
}

impl From<serde_json::Error> for MeshctlError {
    fn from(err: serde_json::Error) -> Self {
        MeshctlError::Serialization(err.to_string())
    }
}

impl From<serde_yml::Error> for MeshctlError {
    fn from(err: serde_yml::Error) -> Self {
        MeshctlError::Serialization(err.to_string())
    }
}

/// Error raised by a command handler, carrying a human-readable prefix
/// in front of the underlying cause
#[derive(Debug)]
pub struct CommandError {
    context: String,
    source: MeshctlError,
}

impl CommandError {
    pub fn new(context: impl Into<String>, source: MeshctlError) -> Self {
        Self {
            context: context.into(),
            source,
        }
    }

    /// The wrapped error
    pub fn inner(&self) -> &MeshctlError {
        &self.source
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Result type alias for meshctl operations
pub type Result<T> = std::result::Result<T, MeshctlError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_token_not_found_display() {
        let err = MeshctlError::TokenNotFound("foo".to_string());
        assert_eq!(err.to_string(), "Token foo could not be found.");
    }

    #[test]
    fn test_token_exists_display() {
        let err = MeshctlError::TokenExists("foo".to_string());
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_config_error_display() {
        let err = MeshctlError::Config("Failed to parse".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshctlError>();
        assert_send_sync::<CommandError>();
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MeshctlError = io_err.into();
        assert!(matches!(err, MeshctlError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yml::from_str::<Vec<String>>("{ not: [a list").unwrap_err();
        let err: MeshctlError = yaml_err.into();
        match err {
            MeshctlError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected MeshctlError::Serialization"),
        }
    }

    #[test]
    fn test_command_error_prefixes_context() {
        let err = CommandError::new(
            "Could not delete token \"foo\" from config",
            MeshctlError::TokenNotFound("foo".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Could not delete token \"foo\" from config: Token foo could not be found."
        );
        assert!(matches!(err.inner(), MeshctlError::TokenNotFound(_)));
        assert!(err.source().is_some());
    }
}
