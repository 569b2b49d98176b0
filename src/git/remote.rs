use crate::error::{AutoSemverError, Result};
use std::ffi::OsString;
use std::process::Command;

/// Lists remote tags by running `git ls-remote`.
///
/// The remote is handed to git as its own argument, never through a shell.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    /// Use `git` from `PATH`
    pub fn new() -> Self {
        GitCli {
            program: OsString::from("git"),
        }
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<OsString>) -> Self {
        GitCli {
            program: program.into(),
        }
    }

    fn command(&self, remote: &str) -> Command {
        let mut command = Command::new(&self.program);
        // --refs drops the peeled `^{}` entries of annotated tags
        command.args(["ls-remote", "--tags", "--refs", "-q"]);
        if !remote.is_empty() {
            command.arg(remote);
        }
        command
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl super::TagSource for GitCli {
    fn fetch_tags(&self, remote: &str) -> Result<String> {
        log::debug!(
            "listing tags of remote '{}'",
            if remote.is_empty() { "<default>" } else { remote }
        );

        let output = self.command(remote).output().map_err(|e| {
            AutoSemverError::tag_fetch(format!(
                "failed to run {}: {}",
                self.program.to_string_lossy(),
                e
            ))
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.trim().is_empty() {
            let detail = match stderr.trim() {
                "" => format!("git exited with {}", output.status),
                text => text.to_string(),
            };
            return Err(AutoSemverError::tag_fetch(detail));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| AutoSemverError::tag_fetch("tag listing is not valid UTF-8"))?;
        log::debug!("remote returned {} tag line(s)", stdout.lines().count());
        Ok(stdout)
    }
}
