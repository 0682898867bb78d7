use std::fmt;

use super::config::DebugConfig;
use super::edge_case::EdgeCase;
use super::error::ValidationError;
use super::labels::FieldLabels;
use super::rule::Rule;
use super::session::DebugSession;
use super::values::ValueStore;

/// Builder for constructing a [`RuleBook`].
///
/// # Example
///
/// ```
/// use rulestep::{RuleBookBuilder, Rule, field, show, hide};
///
/// let book = RuleBookBuilder::new()
///     .rule(Rule::new("adult", "Adults see consent").when(field("age").greater_than("18")).then(show("consent")))
///     .rule(Rule::new("minor", "Minors need a guardian").when(field("age").less_than("18")).then(show("guardian")))
///     .label("consent", "Parental consent")
///     .build()
///     .unwrap();
/// assert_eq!(book.index_of("minor"), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct RuleBookBuilder {
    rules: Vec<Rule>,
    labels: FieldLabels,
}

impl RuleBookBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Order of calls is evaluation order.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Register a human-readable label for a field id.
    #[must_use]
    pub fn label(mut self, field_id: &str, label: &str) -> Self {
        self.labels.insert(field_id, label);
        self
    }

    /// Validate the rules and freeze them into a `RuleBook`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on empty or duplicate rule ids.
    pub fn build(self) -> Result<RuleBook, ValidationError> {
        crate::validate::validate(self.rules, self.labels)
    }
}

/// A validated, immutable rule list plus the field labels used to describe
/// it. Thread-safe and designed to live behind `Arc`.
#[derive(Debug, Clone)]
pub struct RuleBook {
    pub(crate) rules: Vec<Rule>,
    pub(crate) labels: FieldLabels,
}

impl RuleBook {
    /// Run one debug pass. See [`run_debug_session`](crate::run_debug_session).
    ///
    /// Conflict descriptions use the registered field labels.
    pub fn debug(&self, values: &ValueStore, config: &DebugConfig) -> DebugSession {
        crate::session::run_with_labels(&self.rules, values, config, &self.labels)
    }

    /// Boundary-value inputs for this rule book's conditions.
    /// See [`generate_edge_cases`](crate::generate_edge_cases).
    #[must_use]
    pub fn edge_cases(&self) -> Vec<EdgeCase> {
        crate::edge_case::generate_with_labels(&self.rules, &self.labels)
    }

    /// Parse the rule DSL and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`RulestepError`](crate::RulestepError) on parse or validation failure.
    pub fn from_dsl(input: &str) -> Result<Self, crate::RulestepError> {
        let parsed = crate::parse::parse(input)?;
        let book = crate::validate::validate(parsed.rules, parsed.labels)?;
        Ok(book)
    }

    /// Read a DSL file and validate the rules it contains.
    ///
    /// # Errors
    ///
    /// Returns [`RulestepError`](crate::RulestepError) on I/O, parse, or validation failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::RulestepError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn labels(&self) -> &FieldLabels {
        &self.labels
    }

    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Array index of the rule with the given id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.id == id)
    }

    /// Index of the first enabled rule at or after `from`.
    #[must_use]
    pub fn next_enabled(&self, from: usize) -> Option<usize> {
        self.rules
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, r)| r.enabled)
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|r| r.enabled).count()
    }
}

impl fmt::Display for RuleBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleBook({} rules, {} enabled, {} labels)",
            self.rules.len(),
            self.enabled_count(),
            self.labels.len(),
        )
    }
}
