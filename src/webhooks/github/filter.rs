//! Decides which GitHub events are worth handling.
//!
//! Each event type maps to an [`AdmissionRule`] in a [`RuleTable`]. Event types missing from the
//! table are dropped, and so are events whose type needs an action but whose payload doesn't carry
//! one.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::webhooks::github::{GitHubEvent, GitHubEventType};

/// What an event must look like to be let through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionRule {
    /// Let every event of this type through, used for types without an action.
    Always,
    /// The action must be exactly this one.
    Exactly(String),
    /// The action must be one of these.
    OneOf(BTreeSet<String>),
}

impl AdmissionRule {
    fn one_of(actions: &[&str]) -> Self {
        Self::OneOf(actions.iter().map(|a| a.to_string()).collect())
    }

    /// Empty actions are treated like missing ones.
    pub fn admits(&self, action: Option<&str>) -> bool {
        match (self, action.filter(|a| !a.is_empty())) {
            (Self::Always, _) => true,
            (Self::Exactly(expected), Some(action)) => expected == action,
            (Self::OneOf(actions), Some(action)) => actions.contains(action),
            (Self::Exactly(_), None) | (Self::OneOf(_), None) => false,
        }
    }

    fn validate(&self, event_type: GitHubEventType) -> anyhow::Result<()> {
        match self {
            Self::Always => {}
            Self::Exactly(action) => ensure!(
                !action.is_empty(),
                "rule for `{}` expects an empty action, which can never match",
                event_type
            ),
            Self::OneOf(actions) => {
                ensure!(
                    !actions.is_empty(),
                    "rule for `{}` has no action, use `disabled` to drop this event type",
                    event_type
                );
                ensure!(
                    !actions.contains(""),
                    "rule for `{}` lists an empty action, which can never match",
                    event_type
                );
            }
        }

        Ok(())
    }
}

/// Revisions of the built-in rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// First revision: no rules for `pull_request_review_comment`, `push` and `release`, and
    /// repositories changing visibility are ignored.
    V1,
    /// Current revision, a superset of [`SchemaVersion::V1`].
    V2,
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::V2
    }
}

/// Maps event types to the rule their events must satisfy.
///
/// A table can't be modified once built: build a new one from a [`crate::config::FilterConfig`]
/// to change the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: BTreeMap<GitHubEventType, AdmissionRule>,
}

impl RuleTable {
    /// The built-in table for the given revision.
    pub fn for_schema(version: SchemaVersion) -> Self {
        use GitHubEventType::*;

        let mut rules = BTreeMap::new();

        rules.insert(Membership, AdmissionRule::one_of(&["added", "removed"]));
        // the webhook was deleted, there is no other action
        rules.insert(Meta, AdmissionRule::Exactly("deleted".to_string()));
        rules.insert(
            Organization,
            AdmissionRule::one_of(&[
                "deleted",
                "renamed",
                "member_added",
                "member_invited",
                "member_removed",
            ]),
        );
        rules.insert(
            PullRequest,
            AdmissionRule::one_of(&[
                "closed",
                "opened",
                "reopened",
                "review_request_removed",
                "review_requested",
                "synchronize",
            ]),
        );
        rules.insert(
            PullRequestReview,
            AdmissionRule::Exactly("submitted".to_string()),
        );
        rules.insert(Team, AdmissionRule::one_of(&["created", "deleted", "edited"]));

        let mut repository_actions = vec![
            "created",
            "deleted",
            "archived",
            "unarchived",
            "renamed",
            "transferred",
        ];

        if version == SchemaVersion::V2 {
            repository_actions.extend(["privatized", "publicized"]);

            rules.insert(
                PullRequestReviewComment,
                AdmissionRule::one_of(&["created", "deleted", "edited"]),
            );
            rules.insert(Push, AdmissionRule::Always);
            rules.insert(Release, AdmissionRule::one_of(&["deleted", "released"]));
        }

        rules.insert(Repository, AdmissionRule::one_of(&repository_actions));

        Self { rules }
    }

    /// Builds a table from arbitrary rules, rejecting rules that could never admit anything.
    pub fn from_rules(rules: BTreeMap<GitHubEventType, AdmissionRule>) -> anyhow::Result<Self> {
        for (event_type, rule) in &rules {
            rule.validate(*event_type)?;
        }

        Ok(Self { rules })
    }

    /// Starts from `self` and replaces or removes the rules of some event types.
    pub fn with_overrides(
        &self,
        overrides: &BTreeMap<GitHubEventType, AdmissionRule>,
        disabled: &BTreeSet<GitHubEventType>,
    ) -> anyhow::Result<Self> {
        let mut rules = self.rules.clone();

        for (event_type, rule) in overrides {
            if disabled.contains(event_type) {
                bail!(
                    "`{}` is both disabled and given a rule, pick one",
                    event_type
                );
            }
            rules.insert(*event_type, rule.clone());
        }

        for event_type in disabled {
            rules.remove(event_type);
        }

        Self::from_rules(rules)
    }

    pub fn get(&self, event_type: GitHubEventType) -> Option<&AdmissionRule> {
        self.rules.get(&event_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GitHubEventType, &AdmissionRule)> {
        self.rules.iter().map(|(event_type, rule)| (*event_type, rule))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::for_schema(SchemaVersion::default())
    }
}

/// Lets through the events matching a [`RuleTable`], and drops the others.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    table: RuleTable,
}

impl EventFilter {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Whether `event` should be handled.
    ///
    /// Dropping an event is not an error: unknown event types and missing actions simply aren't
    /// admitted.
    pub fn admits(&self, event: &GitHubEvent) -> bool {
        let event_type = match event.event_type() {
            Some(event_type) => event_type,
            None => {
                trace!("dropping event of unknown type");
                return false;
            }
        };

        let rule = match self.table.get(event_type) {
            Some(rule) => rule,
            None => {
                trace!("no rule for `{}` events, dropping", event_type);
                return false;
            }
        };

        let admitted = rule.admits(event.action());
        debug!(
            "`{}` event with action {:?} {}",
            event_type,
            event.action(),
            if admitted { "admitted" } else { "dropped" }
        );

        admitted
    }

    /// Returns the event untouched if it should be handled, `None` otherwise.
    pub fn classify(&self, event: GitHubEvent) -> Option<GitHubEvent> {
        if self.admits(&event) {
            Some(event)
        } else {
            None
        }
    }
}
