use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, PullRequest, Repository};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestEvent {
    pub action: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
    pub pull_request: PullRequest,
    pub assignee: Option<GitHubUser>,
    /// Set on `review_requested` and `review_request_removed` when a user was targeted
    pub requested_reviewer: Option<GitHubUser>,
}
