use super::action::Action;
use super::condition::Condition;

/// A named, independently enable/disable-able unit pairing conditions with actions.
///
/// Conditions are combined with an implicit AND; actions apply in order when
/// every condition passes. Position in the rule list defines evaluation order.
///
/// # Example
///
/// ```
/// use rulestep::{Rule, field, show};
///
/// let rule = Rule::new("r1", "Show consent for adults")
///     .when(field("age").greater_than("18"))
///     .then(show("consent"));
/// assert!(rule.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
    /// Informational only; evaluation never consults it.
    pub trigger_field: Option<String>,
}

impl Rule {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            conditions: Vec::new(),
            actions: Vec::new(),
            trigger_field: None,
        }
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn then(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[must_use]
    pub fn triggered_by(mut self, field_id: impl Into<String>) -> Self {
        self.trigger_field = Some(field_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field, hide, show};

    #[test]
    fn builder_collects_conditions_and_actions() {
        let rule = Rule::new("r1", "Toggle")
            .when(field("a").equals("1"))
            .when(field("b").is_not_empty())
            .then(show("x"))
            .then(hide("y"))
            .triggered_by("a");

        assert_eq!(rule.conditions.len(), 2);
        assert_eq!(rule.actions.len(), 2);
        assert_eq!(rule.trigger_field.as_deref(), Some("a"));
        assert!(rule.enabled);
    }

    #[test]
    fn disabled_flag() {
        let rule = Rule::new("r1", "Off").disabled();
        assert!(!rule.enabled);
    }
}
