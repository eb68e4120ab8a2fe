use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Organization, Repository, Team};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamEvent {
    pub action: Option<String>,
    pub team: Team,
    pub organization: Organization,
    // only set on `added_to_repository` and `removed_from_repository`
    pub repository: Option<Repository>,
    pub sender: GitHubUser,
}
