use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Issue, Repository};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssuesEvent {
    pub action: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
    pub issue: Issue,
    pub assignee: Option<GitHubUser>,
}
