use serde::Deserialize;
use url::Url;

mod issues;
mod membership;
mod meta;
mod organization;
mod ping;
mod pull_request;
mod pull_request_review;
mod pull_request_review_comment;
mod push;
mod release;
mod repository;
mod team;

pub use issues::*;
pub use membership::*;
pub use meta::*;
pub use organization::*;
pub use ping::*;
pub use pull_request::*;
pub use pull_request_review::*;
pub use pull_request_review_comment::*;
pub use push::*;
pub use release::*;
pub use repository::*;
pub use team::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: Url,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub html_url: Url,
    pub title: String,
    pub milestone: Option<Milestone>,
    // an issue can be a PR, in this case the object contains a `pull_request` key with urls to the
    // PR
    pub pull_request: Option<PullRequestLinks>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub html_url: Url,
    pub title: String,
    pub user: GitHubUser,
    #[serde(default)]
    pub requested_reviewers: Vec<GitHubUser>,
    pub base: PrRef,
    pub head: PrRef,
    pub merged: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrRef {
    pub r#ref: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestLinks {
    pub html_url: Url,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub name: String,
    pub id: u64,
    pub description: Option<String>,
    pub privacy: Option<String>,
    pub html_url: Url,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    pub login: String,
    pub id: u64,
}

/// Payload fixtures shared by the tests of the whole crate.
///
/// GitHub payloads carry a lot of keys, and serde ignores the ones a given event type doesn't know
/// about, so a single superset payload can be deserialized as any event type.
#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub(crate) fn payload(action: Option<&str>) -> Value {
        let user = json!({ "login": "prololo", "id": 42 });
        let pull_request = json!({
            "number": 7,
            "html_url": "https://github.com/prologin/site/pull/7",
            "user": user,
            "title": "Fix the login form",
            "requested_reviewers": [],
            "base": { "ref": "main" },
            "head": { "ref": "fix-login" },
            "merged": false,
        });

        let mut payload = json!({
            "sender": user,
            "member": user,
            "repository": {
                "name": "site",
                "full_name": "prologin/site",
                "html_url": "https://github.com/prologin/site",
            },
            "organization": { "login": "prologin", "id": 1 },
            "team": {
                "name": "roots",
                "id": 3,
                "description": null,
                "privacy": "closed",
                "html_url": "https://github.com/orgs/prologin/teams/roots",
            },
            "hook_id": 1337,
            "hook": { "id": 1337, "type": "Organization", "active": true },
            "zen": "Keep it logically awesome.",
            "issue": {
                "number": 12,
                "html_url": "https://github.com/prologin/site/issues/12",
                "title": "Login form is broken",
                "milestone": null,
            },
            "pull_request": pull_request,
            "review": {
                "state": "approved",
                "user": user,
            },
            "comment": {
                "body": "nit: typo",
                "path": "src/login.rs",
            },
            "release": {
                "tag_name": "v1.0.0",
                "name": "First release",
                "html_url": "https://github.com/prologin/site/releases/tag/v1.0.0",
                "draft": false,
                "prerelease": false,
            },
            "ref": "refs/heads/main",
            "commits": [{
                "id": "def",
                "message": "Fix the login form\n\nIt was broken.",
            }],
        });

        if let Some(action) = action {
            payload["action"] = json!(action);
        }

        payload
    }
}
