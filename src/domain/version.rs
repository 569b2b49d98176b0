use crate::domain::bump::IncrementTarget;
use crate::error::{AutoSemverError, Result};
use regex::Regex;
use semver::{BuildMetadata, Prerelease};
use std::fmt;
use std::sync::OnceLock;

/// Full semver 2.0.0 grammar, anchored at both ends.
const SEMVER_GRAMMAR: &str = concat!(
    r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(SEMVER_GRAMMAR).expect("semver grammar compiles"))
}

/// One tag parsed as a semantic version.
///
/// `raw` keeps the matched text exactly as it appeared on the remote. The
/// prerelease and build metadata are retained but never consulted when
/// ordering records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverRecord {
    pub raw: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<Prerelease>,
    pub build: Option<BuildMetadata>,
}

impl SemverRecord {
    /// Create a bare release record (no prerelease or build metadata)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemverRecord {
            raw: format!("{}.{}.{}", major, minor, patch),
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Parse a tag name such as `1.2.3-rc.1+build.5`.
    ///
    /// The whole string must match the grammar; a `v` prefix or any
    /// surrounding text is rejected.
    pub fn parse(tag: &str) -> Result<Self> {
        let caps = grammar()
            .captures(tag)
            .ok_or_else(|| AutoSemverError::malformed(tag, "not a semantic version"))?;

        let number = |name: &str| -> Result<u64> {
            caps[name].parse::<u64>().map_err(|_| {
                AutoSemverError::malformed(tag, format!("{} component is out of range", name))
            })
        };

        let prerelease = caps
            .name("prerelease")
            .map(|m| Prerelease::new(m.as_str()))
            .transpose()
            .map_err(|e| AutoSemverError::malformed(tag, e.to_string()))?;
        let build = caps
            .name("buildmetadata")
            .map(|m| BuildMetadata::new(m.as_str()))
            .transpose()
            .map_err(|e| AutoSemverError::malformed(tag, e.to_string()))?;

        Ok(SemverRecord {
            raw: caps[0].to_string(),
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            prerelease,
            build,
        })
    }

    /// The `(major, minor, patch)` triple used for ordering
    pub fn precedence_key(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Dot-separated prerelease identifiers, empty when there is none
    pub fn prerelease_identifiers(&self) -> Vec<&str> {
        self.prerelease
            .as_ref()
            .map(|pre| pre.as_str().split('.').collect())
            .unwrap_or_default()
    }

    /// Core version without prerelease or build metadata
    pub fn core(&self) -> semver::Version {
        semver::Version::new(self.major, self.minor, self.patch)
    }

    /// Bump `target` by one and return the next bare release.
    ///
    /// Bumping minor resets patch. Prerelease and build metadata of `self`
    /// are never carried into the result.
    pub fn increment(&self, target: IncrementTarget) -> Result<Self> {
        let overflow = || AutoSemverError::VersionOverflow {
            version: self.raw.clone(),
            component: target.to_string(),
        };

        let next = match target {
            IncrementTarget::Minor => {
                let minor = self.minor.checked_add(1).ok_or_else(overflow)?;
                SemverRecord::new(self.major, minor, 0)
            }
            IncrementTarget::Patch => {
                let patch = self.patch.checked_add(1).ok_or_else(overflow)?;
                SemverRecord::new(self.major, self.minor, patch)
            }
        };
        Ok(next)
    }
}

impl fmt::Display for SemverRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
