use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::webhooks::github::{
    filter::{AdmissionRule, RuleTable, SchemaVersion},
    GitHubEventType,
};

/// Rules deciding which events are let through, usually read from a YAML file:
///
/// ```yaml
/// schema: v1
/// rules:
///   issues:
///     one_of: [opened, closed]
///   meta:
///     exactly: deleted
/// disabled:
///   - team
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Revision of the built-in rules to start from, defaults to the latest one
    #[serde(default)]
    pub schema: SchemaVersion,
    /// Rules replacing the built-in ones for these event types
    #[serde(default)]
    pub rules: BTreeMap<GitHubEventType, AdmissionRule>,
    /// Event types that should always be dropped
    #[serde(default)]
    pub disabled: BTreeSet<GitHubEventType>,
}

impl FilterConfig {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file =
            File::open(path).with_context(|| format!("couldn't open {}", path.display()))?;

        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("couldn't parse config file {}", path.display()))
    }

    /// An empty document, or one holding only comments, means the built-in rules.
    pub fn from_reader<R: Read>(mut reader: R) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let is_blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if is_blank {
            debug!("config file is empty, using built-in rules");
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// The table obtained by applying this configuration to the built-in rules.
    pub fn rule_table(&self) -> anyhow::Result<RuleTable> {
        RuleTable::for_schema(self.schema)
            .with_overrides(&self.rules, &self.disabled)
            .context("invalid rules in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_latest_rules() {
        let config = FilterConfig::from_reader("{}".as_bytes()).unwrap();

        assert_eq!(config.schema, SchemaVersion::V2);
        assert_eq!(config.rule_table().unwrap(), RuleTable::default());
    }

    #[test]
    fn blank_config_uses_latest_rules() {
        for yaml in ["", "\n  \n", "# nothing to see here\n\n   # still nothing\n"] {
            let config = FilterConfig::from_reader(yaml.as_bytes()).unwrap();

            assert_eq!(config.schema, SchemaVersion::V2);
            assert!(config.rules.is_empty());
            assert!(config.disabled.is_empty());
            assert_eq!(config.rule_table().unwrap(), RuleTable::default());
        }
    }

    #[test]
    fn comments_around_settings_are_fine() {
        let yaml = "# legacy rules\nschema: v1 # for the old bot\n";
        let config = FilterConfig::from_reader(yaml.as_bytes()).unwrap();

        assert_eq!(config.schema, SchemaVersion::V1);
    }

    #[test]
    fn full_config() {
        let yaml = r#"
schema: v1
rules:
  issues:
    one_of: [opened, closed]
  meta:
    exactly: deleted
  push: always
disabled:
  - team
"#;
        let config = FilterConfig::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(config.schema, SchemaVersion::V1);

        let table = config.rule_table().unwrap();
        assert_eq!(
            table.get(GitHubEventType::Issues),
            Some(&AdmissionRule::OneOf(
                ["closed", "opened"].iter().map(|a| a.to_string()).collect()
            ))
        );
        assert_eq!(
            table.get(GitHubEventType::Meta),
            Some(&AdmissionRule::Exactly("deleted".to_string()))
        );
        assert_eq!(table.get(GitHubEventType::Push), Some(&AdmissionRule::Always));
        assert_eq!(table.get(GitHubEventType::Team), None);
        // not in v1, and not added back
        assert_eq!(table.get(GitHubEventType::Release), None);
    }

    #[test]
    fn unknown_event_type_is_an_error() {
        let yaml = "disabled: [check_run]";
        assert!(FilterConfig::from_reader(yaml.as_bytes()).is_err());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let yaml = "schema: v2\nrule: {}";
        assert!(FilterConfig::from_reader(yaml.as_bytes()).is_err());
    }

    #[test]
    fn invalid_rules_are_reported() {
        let yaml = "rules:\n  team:\n    one_of: []";
        let config = FilterConfig::from_reader(yaml.as_bytes()).unwrap();

        let err = config.rule_table().unwrap_err();
        assert_eq!(err.to_string(), "invalid rules in config");
        assert!(format!("{:#}", err).contains("`team`"));
    }

    #[test]
    fn missing_file() {
        let err = FilterConfig::from_path(Path::new("/nonexistent/ghevent.yaml")).unwrap_err();
        assert!(err.to_string().contains("couldn't open"));
    }
}
