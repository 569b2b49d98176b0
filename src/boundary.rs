use std::fmt;

/// Non-fatal issues found while reading a remote's tags.
/// These are reported to the user on stderr and never change stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag was skipped because it is not a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Highest tag carried a prerelease that was treated as its release core
    PrereleaseDropped { tag: String, core: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::PrereleaseDropped { tag, core } => {
                write!(
                    f,
                    "Highest tag '{}' is a prerelease; incrementing from {}",
                    tag, core
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_tag_display() {
        let warning = BoundaryWarning::UnparsableTag {
            tag: "release-123".to_string(),
            reason: "not a semantic version".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("release-123"));
        assert!(msg.contains("not a semantic version"));
    }

    #[test]
    fn test_prerelease_dropped_display() {
        let warning = BoundaryWarning::PrereleaseDropped {
            tag: "2.0.0-alpha.1".to_string(),
            core: "2.0.0".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Highest tag '2.0.0-alpha.1' is a prerelease; incrementing from 2.0.0"
        );
    }
}
