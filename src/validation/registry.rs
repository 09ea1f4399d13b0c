//! Validator Registry
//!
//! Simple in-memory set of named validators, run in registration order.

use std::borrow::Cow;
use std::collections::HashSet;

use super::engine::{ChangeValidator, ValidationReport};
use super::rules::BUILTIN_VALIDATORS;
use crate::change::Change;
use crate::config::Config;

/// Named change validators plus which of them are switched off
#[derive(Debug, Clone)]
pub struct ValidatorRegistry {
    validators: Vec<(String, ChangeValidator)>,
    disabled: HashSet<String>,
    adapter: Option<String>,
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
            disabled: HashSet::new(),
            adapter: None,
        }
    }

    /// Registry holding every built-in rule
    pub fn with_builtin_validators() -> Self {
        let mut registry = Self::new();
        for (name, validator) in BUILTIN_VALIDATORS {
            registry.register(name, *validator);
        }
        registry
    }

    /// Registry holding the built-in rules, filtered by `config`
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::with_builtin_validators();
        registry.apply_config(config);
        registry
    }

    /// Add a validator; a validator with the same name is replaced in place
    pub fn register(&mut self, name: &str, validator: ChangeValidator) {
        match self.validators.iter_mut().find(|(n, _)| n.as_str() == name) {
            Some(entry) => entry.1 = validator,
            None => self.validators.push((name.to_string(), validator)),
        }
    }

    pub fn get(&self, name: &str) -> Option<ChangeValidator> {
        self.validators
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, validator)| *validator)
    }

    /// Names of all registered validators, in run order
    pub fn names(&self) -> Vec<&str> {
        self.validators.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Switch a validator off, returns false if it is not registered
    pub fn disable(&mut self, name: &str) -> bool {
        if self.get(name).is_some() {
            self.disabled.insert(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name).is_some() && !self.disabled.contains(name)
    }

    /// Only validate changes to elements of `adapter`; `None` validates everything
    pub fn set_adapter(&mut self, adapter: Option<String>) {
        self.adapter = adapter;
    }

    pub fn adapter(&self) -> Option<&str> {
        self.adapter.as_deref()
    }

    /// Scope the registry to the configured adapter and disable the validators it names
    pub fn apply_config(&mut self, config: &Config) {
        self.set_adapter(Some(config.adapter.clone()));

        let registered: Vec<String> = self.names().into_iter().map(str::to_string).collect();
        for name in registered {
            if config.is_disabled(&name) {
                self.disabled.insert(name);
            }
        }

        for name in &config.disabled_validators {
            if self.get(name).is_none() {
                log::warn!("Ignoring unknown validator '{}' in configuration", name);
            }
        }
    }

    /// Changes belonging to the configured adapter
    fn scoped_changes<'a>(&self, changes: &'a [Change]) -> Cow<'a, [Change]> {
        let Some(adapter) = self.adapter.as_deref() else {
            return Cow::Borrowed(changes);
        };

        let belongs = |change: &Change| change.data().elem_id.adapter() == adapter;
        if changes.iter().all(belongs) {
            return Cow::Borrowed(changes);
        }

        let scoped: Vec<Change> = changes.iter().filter(|&c| belongs(c)).cloned().collect();
        log::debug!(
            "Skipping {} change(s) outside adapter '{}'",
            changes.len() - scoped.len(),
            adapter
        );
        Cow::Owned(scoped)
    }

    /// Run every enabled validator over `changes`
    pub fn validate(&self, changes: &[Change]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let scoped = self.scoped_changes(changes);
        let changes: &[Change] = &scoped;

        for (name, validator) in &self.validators {
            if self.disabled.contains(name) {
                log::debug!("Skipping disabled validator '{}'", name);
                continue;
            }

            let errors = validator(changes);
            log::debug!(
                "Validator '{}' reported {} error(s) for {} change(s)",
                name,
                errors.len(),
                changes.len()
            );
            report.extend(errors);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::InstanceElement;
    use crate::validation::engine::{ChangeError, Severity};
    use serde_json::Map;

    fn always_warn(changes: &[Change]) -> Vec<ChangeError> {
        changes
            .iter()
            .map(|c| {
                ChangeError::warning(
                    c.data().elem_id.clone(),
                    "warn".to_string(),
                    "always warns".to_string(),
                )
            })
            .collect()
    }

    fn never_fires(_: &[Change]) -> Vec<ChangeError> {
        Vec::new()
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ValidatorRegistry::with_builtin_validators();
        assert_eq!(registry.names(), vec!["default_support_address"]);
        assert!(registry.is_enabled("default_support_address"));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = ValidatorRegistry::new();
        registry.register("a", never_fires);
        registry.register("b", never_fires);
        registry.register("a", always_warn);

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert!(registry.get("a").is_some());
        assert!(registry.get("c").is_none());
    }

    #[test]
    fn test_disable() {
        let mut registry = ValidatorRegistry::new();
        registry.register("a", always_warn);

        let changes = vec![Change::addition(InstanceElement::with_name(
            "zendesk",
            "support_address",
            "inst",
            Map::new(),
        ))];
        assert_eq!(registry.validate(&changes).count(Severity::Warning), 1);

        assert!(!registry.disable("missing"));
        assert!(registry.disable("a"));
        assert!(!registry.is_enabled("a"));
        assert!(registry.validate(&changes).is_empty());
    }

    #[test]
    fn test_unknown_config_names_are_ignored() {
        let config = Config {
            disabled_validators: vec!["no_such_rule".to_string()],
            ..Config::default()
        };
        let registry = ValidatorRegistry::from_config(&config);
        assert!(registry.is_enabled("default_support_address"));
    }

    #[test]
    fn test_config_scopes_changes_to_adapter() {
        let mut registry = ValidatorRegistry::new();
        registry.register("a", always_warn);
        assert_eq!(registry.adapter(), None);

        registry.apply_config(&Config {
            adapter: "salesforce".to_string(),
            ..Config::default()
        });
        assert_eq!(registry.adapter(), Some("salesforce"));

        let changes = vec![
            Change::addition(InstanceElement::with_name(
                "zendesk",
                "support_address",
                "inst",
                Map::new(),
            )),
            Change::addition(InstanceElement::with_name(
                "salesforce",
                "Account",
                "acme",
                Map::new(),
            )),
        ];
        let errors = registry.validate(&changes).into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].elem_id.adapter(), "salesforce");

        registry.set_adapter(None);
        assert_eq!(registry.validate(&changes).errors.len(), 2);
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatorRegistry>();
    }
}
