use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Organization};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationEvent {
    pub action: Option<String>,
    pub organization: Organization,
    pub sender: GitHubUser,
    /// Missing on `deleted` and `renamed`
    pub membership: Option<OrganizationMembership>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationMembership {
    pub role: String,
    pub user: GitHubUser,
}
