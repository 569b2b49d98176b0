//! Tag source abstraction layer
//!
//! This module provides a trait-based abstraction over listing the tags of
//! a remote, so the version logic can be exercised without a network or a
//! `git` binary.
//!
//! # Overview
//!
//! The primary abstraction is the [TagSource] trait. The concrete
//! implementations include:
//!
//! - [remote::GitCli]: spawns `git ls-remote` and returns its output
//! - [mock::MockTagSource]: returns canned output for testing
//!
//! # Usage
//!
//! ```rust
//! # use auto_semver::git::{MockTagSource, TagSource};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = MockTagSource::with_tags(&["1.2.3", "1.3.0"]);
//! let raw = source.fetch_tags("origin")?;
//! assert_eq!(raw.lines().count(), 2);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod remote;

pub use mock::MockTagSource;
pub use remote::GitCli;

use crate::error::Result;

/// Source of raw tag listings
///
/// ## Output contract
///
/// `fetch_tags` returns newline-delimited text, one tag per line. The tag
/// name is the last whitespace-delimited field of the line, conventionally
/// written as `refs/tags/<name>` after a commit hash. An empty string means
/// the remote has no tags; that is not an error.
///
/// ## Error Handling
///
/// Any failure reported by the underlying tool maps to
/// [crate::error::AutoSemverError::TagFetch]. There are no retries.
pub trait TagSource {
    /// List the tags of `remote`
    ///
    /// An empty `remote` defers to the tool's own default remote.
    fn fetch_tags(&self, remote: &str) -> Result<String>;
}
