//! Project selection.

use crate::gitlab::GitLabProject;

/// Which projects of the group take part in a run.
///
/// Names in `only` and `skip` match a project's `path_with_namespace`,
/// its `path` or its display `name`.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub only: Vec<String>,
    pub skip: Vec<String>,
    pub include_archived: bool,
}

impl ProjectFilter {
    /// Whether `project` should be backed up.
    pub fn matches(&self, project: &GitLabProject) -> bool {
        if project.archived && !self.include_archived {
            return false;
        }
        if !self.only.is_empty() && !self.only.iter().any(|n| Self::names(project, n)) {
            return false;
        }
        !self.skip.iter().any(|n| Self::names(project, n))
    }

    fn names(project: &GitLabProject, name: &str) -> bool {
        project.path_with_namespace == name || project.path == name || project.name == name
    }
}
