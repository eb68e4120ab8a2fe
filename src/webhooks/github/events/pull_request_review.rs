use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, PullRequest, Repository};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestReviewEvent {
    pub action: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
    pub pull_request: PullRequest,
    pub review: Review,
}

/// `state` is one of `approved`, `changes_requested` or `commented`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub state: String,
    pub user: GitHubUser,
}
