use std::{fmt, str::FromStr};

use anyhow::{anyhow, Context};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::trace;

pub mod events;
use events::*;

pub mod filter;

/// Every event type this crate knows how to deserialize, named like the values of the
/// `X-GitHub-Event` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GitHubEventType {
    Issues,
    Membership,
    Meta,
    Organization,
    Ping,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Push,
    Release,
    Repository,
    Team,
}

impl GitHubEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issues => "issues",
            Self::Membership => "membership",
            Self::Meta => "meta",
            Self::Organization => "organization",
            Self::Ping => "ping",
            Self::PullRequest => "pull_request",
            Self::PullRequestReview => "pull_request_review",
            Self::PullRequestReviewComment => "pull_request_review_comment",
            Self::Push => "push",
            Self::Release => "release",
            Self::Repository => "repository",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for GitHubEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GitHubEventType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(|_| anyhow!("unknown GitHub event type `{}`", s))
    }
}

/// A typed GitHub webhook event.
#[derive(Debug, Clone, PartialEq)]
pub enum GitHubEvent {
    Issues(IssuesEvent),
    Membership(MembershipEvent),
    Meta(MetaEvent),
    Organization(OrganizationEvent),
    Ping(PingEvent),
    PullRequest(PullRequestEvent),
    PullRequestReview(PullRequestReviewEvent),
    PullRequestReviewComment(PullRequestReviewCommentEvent),
    Push(PushEvent),
    Release(ReleaseEvent),
    Repository(RepositoryEvent),
    Team(TeamEvent),
    /// An event type we have no model for, the payload isn't kept.
    Unknown { kind: String },
}

impl GitHubEvent {
    /// Builds a typed event from the value of the `X-GitHub-Event` header and the JSON body of
    /// the delivery.
    ///
    /// Unknown event types are not an error, they are returned as [`GitHubEvent::Unknown`] without
    /// looking at the payload.
    pub fn from_json(kind: &str, payload: &str) -> anyhow::Result<Self> {
        let event_type = match kind.parse::<GitHubEventType>() {
            Ok(event_type) => event_type,
            Err(_) => {
                trace!("no model for event type `{}`, keeping it opaque", kind);
                return Ok(Self::Unknown {
                    kind: kind.to_owned(),
                });
            }
        };

        let event = match event_type {
            GitHubEventType::Issues => Self::Issues(parse(event_type, payload)?),
            GitHubEventType::Membership => Self::Membership(parse(event_type, payload)?),
            GitHubEventType::Meta => Self::Meta(parse(event_type, payload)?),
            GitHubEventType::Organization => Self::Organization(parse(event_type, payload)?),
            GitHubEventType::Ping => Self::Ping(parse(event_type, payload)?),
            GitHubEventType::PullRequest => Self::PullRequest(parse(event_type, payload)?),
            GitHubEventType::PullRequestReview => {
                Self::PullRequestReview(parse(event_type, payload)?)
            }
            GitHubEventType::PullRequestReviewComment => {
                Self::PullRequestReviewComment(parse(event_type, payload)?)
            }
            GitHubEventType::Push => Self::Push(parse(event_type, payload)?),
            GitHubEventType::Release => Self::Release(parse(event_type, payload)?),
            GitHubEventType::Repository => Self::Repository(parse(event_type, payload)?),
            GitHubEventType::Team => Self::Team(parse(event_type, payload)?),
        };

        Ok(event)
    }

    /// The type of this event, `None` for [`GitHubEvent::Unknown`].
    pub fn event_type(&self) -> Option<GitHubEventType> {
        let event_type = match self {
            Self::Issues(_) => GitHubEventType::Issues,
            Self::Membership(_) => GitHubEventType::Membership,
            Self::Meta(_) => GitHubEventType::Meta,
            Self::Organization(_) => GitHubEventType::Organization,
            Self::Ping(_) => GitHubEventType::Ping,
            Self::PullRequest(_) => GitHubEventType::PullRequest,
            Self::PullRequestReview(_) => GitHubEventType::PullRequestReview,
            Self::PullRequestReviewComment(_) => GitHubEventType::PullRequestReviewComment,
            Self::Push(_) => GitHubEventType::Push,
            Self::Release(_) => GitHubEventType::Release,
            Self::Repository(_) => GitHubEventType::Repository,
            Self::Team(_) => GitHubEventType::Team,
            Self::Unknown { .. } => return None,
        };

        Some(event_type)
    }

    /// The `action` key of the payload, if this event type has one and it was set.
    pub fn action(&self) -> Option<&str> {
        let action = match self {
            Self::Issues(e) => &e.action,
            Self::Membership(e) => &e.action,
            Self::Meta(e) => &e.action,
            Self::Organization(e) => &e.action,
            Self::PullRequest(e) => &e.action,
            Self::PullRequestReview(e) => &e.action,
            Self::PullRequestReviewComment(e) => &e.action,
            Self::Release(e) => &e.action,
            Self::Repository(e) => &e.action,
            Self::Team(e) => &e.action,
            Self::Ping(_) | Self::Push(_) | Self::Unknown { .. } => return None,
        };

        action.as_deref()
    }
}

fn parse<T: DeserializeOwned>(event_type: GitHubEventType, payload: &str) -> anyhow::Result<T> {
    serde_json::from_str(payload)
        .with_context(|| format!("couldn't parse payload of `{}` event", event_type))
}
