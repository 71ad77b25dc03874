//! GitLab side of the mirror: REST v4 client and resource types.

pub mod client;
pub mod types;

pub use client::GitLabClient;
pub use types::{GitLabGroup, GitLabProject, GitLabUser};
