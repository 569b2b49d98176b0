use crate::error::{AutoSemverError, Result};
use crate::git::TagSource;
use std::cell::RefCell;

const FAKE_HASH: &str = "0000000000000000000000000000000000000000";

/// Mock tag source for testing without spawning git
pub struct MockTagSource {
    output: std::result::Result<String, String>,
    requested: RefCell<Vec<String>>,
}

impl MockTagSource {
    /// Return `raw` verbatim from every fetch
    pub fn with_output(raw: impl Into<String>) -> Self {
        MockTagSource {
            output: Ok(raw.into()),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Format `tags` the way `git ls-remote --tags` prints them
    pub fn with_tags(tags: &[&str]) -> Self {
        let raw: String = tags
            .iter()
            .map(|tag| format!("{}\trefs/tags/{}\n", FAKE_HASH, tag))
            .collect();
        Self::with_output(raw)
    }

    /// Fail every fetch as if git wrote `stderr`
    pub fn failing(stderr: impl Into<String>) -> Self {
        MockTagSource {
            output: Err(stderr.into()),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Remotes passed to `fetch_tags`, in call order
    pub fn requested_remotes(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl TagSource for MockTagSource {
    fn fetch_tags(&self, remote: &str) -> Result<String> {
        self.requested.borrow_mut().push(remote.to_string());
        self.output
            .clone()
            .map_err(AutoSemverError::tag_fetch)
    }
}
