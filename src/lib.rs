//! Filtering of GitHub webhook events: decides which typed events are worth handling and which
//! should be dropped before reaching any handler.

pub mod config;
pub mod webhooks;

pub use config::FilterConfig;
pub use webhooks::github::{
    filter::{AdmissionRule, EventFilter, RuleTable, SchemaVersion},
    GitHubEvent, GitHubEventType,
};
