use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Repository};

/// Sent once when a webhook is created, carries no action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PingEvent {
    pub zen: String,
    pub hook_id: Option<u64>,
    pub repository: Option<Repository>,
    pub sender: Option<GitHubUser>,
}
