use serde::Deserialize;
use url::Url;

use crate::webhooks::github::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleaseEvent {
    pub action: Option<String>,
    pub release: Release,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
    pub html_url: Url,
    pub draft: bool,
    pub prerelease: bool,
}
