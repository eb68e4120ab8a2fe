use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Repository};

/// Push events have no `action` key at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PushEvent {
    pub r#ref: String,
    pub repository: Repository,
    pub sender: GitHubUser,
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
}
