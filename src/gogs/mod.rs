//! Gogs side of the mirror: REST v1 client and resource types.

pub mod client;
pub mod types;

pub use client::GogsClient;
pub use types::{CreateRepoOption, GogsRepository, RepoOwner};
