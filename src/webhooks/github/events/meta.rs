use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Organization, Repository};

/// Sent when the webhook itself is deleted, `action` is only ever `deleted`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetaEvent {
    pub action: Option<String>,
    pub hook_id: u64,
    pub hook: Hook,
    pub repository: Option<Repository>,
    pub organization: Option<Organization>,
    pub sender: Option<GitHubUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hook {
    pub id: u64,
    pub r#type: String,
    pub active: bool,
}
