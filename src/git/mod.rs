//! Git mirror plumbing.
//!
//! Wraps the `git` binary to mirror-clone a repository, repoint its
//! `origin` remote and mirror-push every ref to the new location.
//! Remote URLs carry tokens, so all git output passes through an
//! [`OutputMasker`] before it is logged or returned in an error.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{MirrorError, Result};
use crate::secrets::OutputMasker;

/// A bare mirror clone on local disk.
#[derive(Debug)]
pub struct MirrorRepo {
    path: PathBuf,
    masker: OutputMasker,
}

impl MirrorRepo {
    /// `git clone --mirror <url> <dest>`.
    ///
    /// `dest` must be missing or empty.
    pub fn clone_from(url: &str, dest: &Path, masker: &OutputMasker) -> Result<Self> {
        let dest_str = dest.to_string_lossy();
        run_git(
            masker,
            "clone --mirror",
            &["clone", "--mirror", "--quiet", url, &dest_str],
            None,
        )?;

        Ok(Self {
            path: dest.to_path_buf(),
            masker: masker.clone(),
        })
    }

    /// Open an existing repository without cloning.
    pub fn open(path: impl Into<PathBuf>, masker: &OutputMasker) -> Self {
        Self {
            path: path.into(),
            masker: masker.clone(),
        }
    }

    /// Location of the repository on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the configured remotes.
    pub fn remotes(&self) -> Result<Vec<String>> {
        let stdout = self.git("remote", &["remote"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    /// Remove a remote by name.
    pub fn remove_remote(&self, name: &str) -> Result<()> {
        self.git("remote remove", &["remote", "remove", name])?;
        Ok(())
    }

    /// Add a remote.
    pub fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.git("remote add", &["remote", "add", name, url])?;
        Ok(())
    }

    /// Point `origin` at `url`, replacing whatever it pointed at before.
    pub fn set_origin(&self, url: &str) -> Result<()> {
        if self.remotes()?.iter().any(|r| r == "origin") {
            self.remove_remote("origin")?;
        }
        self.add_remote("origin", url)
    }

    /// `git push --mirror <remote>`: every ref, force-updated, deletions included.
    pub fn push_mirror(&self, remote: &str) -> Result<()> {
        self.git("push --mirror", &["push", "--mirror", "--quiet", remote])?;
        Ok(())
    }

    fn git(&self, label: &str, args: &[&str]) -> Result<String> {
        run_git(&self.masker, label, args, Some(&self.path))
    }
}

/// Run git non-interactively and return stdout.
///
/// `label` names the operation in errors; arguments are never echoed since
/// they may contain credentials.
fn run_git(
    masker: &OutputMasker,
    label: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<String> {
    debug!("Running git {}", label);

    let mut cmd = Command::new("git");
    cmd.args(args).env("GIT_TERMINAL_PROMPT", "0");
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            text => masker.mask(text),
        };
        return Err(MirrorError::GitCommand {
            command: label.to_string(),
            message,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
