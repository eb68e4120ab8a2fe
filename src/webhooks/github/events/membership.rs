use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Organization, Team};

/// A user was added to or removed from a team.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MembershipEvent {
    pub action: Option<String>,
    /// Always `team` for now
    pub scope: Option<String>,
    pub member: GitHubUser,
    pub team: Team,
    pub organization: Option<Organization>,
    pub sender: GitHubUser,
}
