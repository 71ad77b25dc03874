//! The three services a backup run talks to.
//!
//! The runner only sees these traits, so tests can drive it with
//! in-memory fakes while the binary plugs in the real HTTP clients and git.

use std::path::Path;

use reqwest::Url;
use tracing::debug;

use crate::error::Result;
use crate::git::MirrorRepo;
use crate::gitlab::{GitLabClient, GitLabGroup, GitLabProject};
use crate::gogs::{CreateRepoOption, GogsClient};
use crate::secrets::{redact_url, OutputMasker};

/// Where projects come from.
pub trait ProjectSource {
    /// Resolve the group by id or path.
    fn group(&self, id: &str) -> Result<GitLabGroup>;

    /// Every project of the group, subgroups included.
    fn list_projects(&self, group: &str, include_archived: bool) -> Result<Vec<GitLabProject>>;

    /// Full record of one project.
    fn project(&self, id: u64) -> Result<GitLabProject>;

    /// Authenticated URL to clone the project from.
    fn clone_url(&self, project: &GitLabProject) -> Result<Url>;
}

/// Where repositories are mirrored to.
pub trait MirrorTarget {
    fn repo_exists(&self, name: &str) -> Result<bool>;

    fn create_repo(&self, option: &CreateRepoOption) -> Result<()>;

    /// Authenticated URL to push the mirror to.
    fn push_url(&self, name: &str) -> Result<Url>;
}

/// Moves refs between the two sides.
pub trait RepoTransport {
    /// Mirror-clone `source` into `dest`.
    fn clone_mirror(&self, source: &Url, dest: &Path) -> Result<()>;

    /// Repoint the clone at `dest` to `target` and mirror-push.
    fn push_mirror(&self, repo: &Path, target: &Url) -> Result<()>;
}

impl ProjectSource for GitLabClient {
    fn group(&self, id: &str) -> Result<GitLabGroup> {
        GitLabClient::group(self, id)
    }

    fn list_projects(&self, group: &str, include_archived: bool) -> Result<Vec<GitLabProject>> {
        self.group_projects(group, include_archived)
    }

    fn project(&self, id: u64) -> Result<GitLabProject> {
        GitLabClient::project(self, id)
    }

    fn clone_url(&self, project: &GitLabProject) -> Result<Url> {
        self.authenticated_clone_url(project)
    }
}

impl MirrorTarget for GogsClient {
    fn repo_exists(&self, name: &str) -> Result<bool> {
        GogsClient::repo_exists(self, name)
    }

    fn create_repo(&self, option: &CreateRepoOption) -> Result<()> {
        GogsClient::create_repo(self, option).map(|_| ())
    }

    fn push_url(&self, name: &str) -> Result<Url> {
        self.clone_url(name)
    }
}

/// [`RepoTransport`] backed by the `git` binary.
#[derive(Debug, Clone, Default)]
pub struct GitTransport {
    masker: OutputMasker,
}

impl GitTransport {
    pub fn new(masker: OutputMasker) -> Self {
        Self { masker }
    }
}

impl RepoTransport for GitTransport {
    fn clone_mirror(&self, source: &Url, dest: &Path) -> Result<()> {
        debug!("git clone --mirror {}", redact_url(source));
        MirrorRepo::clone_from(source.as_str(), dest, &self.masker).map(|_| ())
    }

    fn push_mirror(&self, repo: &Path, target: &Url) -> Result<()> {
        debug!("git push --mirror {}", redact_url(target));
        let repo = MirrorRepo::open(repo, &self.masker);
        repo.set_origin(target.as_str())?;
        repo.push_mirror("origin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(args: &[&str], cwd: &Path) {
        let output = Command::new("git").args(args).current_dir(cwd).output().unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    #[test]
    fn git_transport_mirrors_between_file_urls() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source.git");
        let target = temp.path().join("target.git");
        let work = temp.path().join("work");
        git(&["init", "--bare", "--initial-branch=main", source.to_str().unwrap()], temp.path());
        git(&["init", "--bare", "--initial-branch=main", target.to_str().unwrap()], temp.path());
        git(&["clone", source.to_str().unwrap(), work.to_str().unwrap()], temp.path());
        git(&["config", "user.name", "Test"], &work);
        git(&["config", "user.email", "test@test.com"], &work);
        std::fs::write(work.join("file.txt"), "content").unwrap();
        git(&["add", "."], &work);
        git(&["commit", "-m", "Initial commit"], &work);
        git(&["push", "origin", "HEAD:main"], &work);

        let transport = GitTransport::default();
        let clone = temp.path().join("mirror.git");
        transport
            .clone_mirror(&Url::from_file_path(&source).unwrap(), &clone)
            .unwrap();
        transport
            .push_mirror(&clone, &Url::from_file_path(&target).unwrap())
            .unwrap();

        let output = Command::new("git")
            .args(["rev-parse", "refs/heads/main"])
            .current_dir(&target)
            .output()
            .unwrap();
        assert!(output.status.success());
    }
}
