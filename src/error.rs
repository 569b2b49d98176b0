use thiserror::Error;

/// Unified error type for auto-semver operations
#[derive(Error, Debug)]
pub enum AutoSemverError {
    #[error("Error getting tags from remote: {0}")]
    TagFetch(String),

    #[error("Malformed tag '{tag}': {reason}")]
    MalformedTag { tag: String, reason: String },

    #[error("Invalid increment target '{0}': expected 'minor' or 'patch'")]
    InvalidIncrementTarget(String),

    #[error("No semantic-version tags to choose from")]
    EmptyTagList,

    #[error("Cannot increment {component} of {version}: value out of range")]
    VersionOverflow { version: String, component: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in auto-semver
pub type Result<T> = std::result::Result<T, AutoSemverError>;

impl AutoSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoSemverError::Config(msg.into())
    }

    /// Create a tag fetch error with context
    pub fn tag_fetch(msg: impl Into<String>) -> Self {
        AutoSemverError::TagFetch(msg.into())
    }

    /// Create a malformed tag error for `tag`
    pub fn malformed(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        AutoSemverError::MalformedTag {
            tag: tag.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_fetch_display_keeps_legacy_prefix() {
        let err = AutoSemverError::tag_fetch("fatal: repository not found");
        assert_eq!(
            err.to_string(),
            "Error getting tags from remote: fatal: repository not found"
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = AutoSemverError::malformed("not-a-version", "does not match");
        let msg = err.to_string();
        assert!(msg.starts_with("Malformed tag"));
        assert!(msg.contains("not-a-version"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "git not found");
        let err: AutoSemverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (AutoSemverError::config("x"), "Configuration error"),
            (AutoSemverError::tag_fetch("x"), "Error getting tags"),
            (AutoSemverError::malformed("x", "y"), "Malformed tag"),
            (
                AutoSemverError::InvalidIncrementTarget("major".to_string()),
                "Invalid increment target",
            ),
            (AutoSemverError::EmptyTagList, "No semantic-version tags"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
