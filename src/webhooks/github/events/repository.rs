use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepositoryEvent {
    pub action: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
}
