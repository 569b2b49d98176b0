//! Turning `git ls-remote` output into version records and picking the highest.

use crate::boundary::BoundaryWarning;
use crate::domain::version::SemverRecord;
use crate::error::{AutoSemverError, Result};
use serde::{Deserialize, Serialize};

const TAG_REF_PREFIX: &str = "refs/tags/";

/// How lines that are not semantic versions are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagParseMode {
    /// The first malformed tag aborts the whole run
    #[default]
    Strict,
    /// Malformed tags are dropped and reported as warnings
    SkipMalformed,
}

/// Result of parsing a remote's tag listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedTags {
    /// Records in the order the remote listed them
    pub records: Vec<SemverRecord>,
    /// Lines dropped under [`TagParseMode::SkipMalformed`]
    pub skipped: Vec<BoundaryWarning>,
}

/// Extract the tag name from one listing line.
///
/// The tag is the last whitespace-delimited field, with any `refs/tags/`
/// prefix removed. Returns `None` for blank lines.
pub fn tag_name_from_line(line: &str) -> Option<&str> {
    let field = line.split_whitespace().last()?;
    Some(field.strip_prefix(TAG_REF_PREFIX).unwrap_or(field))
}

/// Parse every line of `raw_text` into a [`SemverRecord`].
///
/// Duplicates are kept as separate records.
pub fn parse_tags(raw_text: &str, mode: TagParseMode) -> Result<ParsedTags> {
    let mut parsed = ParsedTags::default();

    for tag in raw_text.lines().filter_map(tag_name_from_line) {
        match SemverRecord::parse(tag) {
            Ok(record) => parsed.records.push(record),
            Err(AutoSemverError::MalformedTag { tag, reason })
                if mode == TagParseMode::SkipMalformed =>
            {
                log::warn!("skipping tag '{}': {}", tag, reason);
                parsed
                    .skipped
                    .push(BoundaryWarning::UnparsableTag { tag, reason });
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!(
        "parsed {} tag(s), skipped {}",
        parsed.records.len(),
        parsed.skipped.len()
    );
    Ok(parsed)
}

/// Return the record with the greatest `major.minor.patch`.
///
/// A single left-to-right pass; a record only replaces the current leader
/// when strictly greater, so the first of several equal versions wins.
/// Prerelease and build metadata are ignored, which means `2.0.0-alpha`
/// and `2.0.0` compare equal.
pub fn highest(records: &[SemverRecord]) -> Result<&SemverRecord> {
    let (first, rest) = records.split_first().ok_or(AutoSemverError::EmptyTagList)?;

    let leader = rest.iter().fold(first, |leader, candidate| {
        if candidate.precedence_key() > leader.precedence_key() {
            candidate
        } else {
            leader
        }
    });
    Ok(leader)
}
