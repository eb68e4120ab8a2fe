use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, PullRequest, Repository};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestReviewCommentEvent {
    pub action: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
    pub pull_request: PullRequest,
    pub comment: ReviewComment,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewComment {
    pub body: String,
    /// Unset for comments on the whole pull request
    pub path: Option<String>,
}
