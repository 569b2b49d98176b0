//! Main workflow orchestration logic
//!
//! Runs fetch, parse, select and increment in order. Kept separate from
//! `main.rs` so the whole pipeline can be driven by a [TagSource] mock
//! without clap or a real remote.

use crate::boundary::BoundaryWarning;
use crate::config::RunConfig;
use crate::domain::{highest, parse_tags, SemverRecord};
use crate::error::Result;
use crate::git::TagSource;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The remote has no tags; nothing to increment
    NoTags,
    /// The next version was computed
    Next {
        /// Highest tag found on the remote
        previous: SemverRecord,
        /// Bare release produced by the increment
        next: SemverRecord,
        /// Non-fatal notices collected along the way
        warnings: Vec<BoundaryWarning>,
    },
}

/// Main auto-semver workflow
///
/// 1. Fetch the remote's tag listing
/// 2. Parse every line as a semantic version
/// 3. Select the highest `major.minor.patch`
/// 4. Increment the configured component
///
/// # Arguments
///
/// * `source` - Where tags come from
/// * `config` - Resolved remote, increment target and parse mode
///
/// # Returns
///
/// `RunOutcome::NoTags` when the listing is empty, otherwise the next version.
/// Fetch failures and malformed tags (in strict mode) are returned as errors.
pub fn run_auto_semver<S: TagSource + ?Sized>(
    source: &S,
    config: &RunConfig,
) -> Result<RunOutcome> {
    let raw = source.fetch_tags(&config.remote)?;
    if raw.trim().is_empty() {
        return Ok(RunOutcome::NoTags);
    }

    let parsed = parse_tags(&raw, config.parse_mode)?;
    let mut warnings = parsed.skipped;

    let previous = highest(&parsed.records)?.clone();
    log::debug!("highest tag is {}", previous);

    if previous.prerelease.is_some() {
        warnings.push(BoundaryWarning::PrereleaseDropped {
            tag: previous.raw.clone(),
            core: previous.core().to_string(),
        });
    }

    let next = previous.increment(config.highest_value)?;
    Ok(RunOutcome::Next {
        previous,
        next,
        warnings,
    })
}
