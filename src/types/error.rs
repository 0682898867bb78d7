use thiserror::Error;

/// Rejected rule lists, returned by [`RuleBookBuilder::build()`](crate::RuleBookBuilder::build).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate rule id '{id}' at index {index}")]
    DuplicateRule { id: String, index: usize },

    #[error("rule at index {index} has an empty id")]
    EmptyRuleId { index: usize },
}

/// A fault raised while applying one action. Caught per rule and recorded
/// as the rule's error message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unsupported action '{kind}' on target '{target}'")]
    UnsupportedAction { kind: String, target: String },

    #[error("'{kind}' action has no target field")]
    MissingTarget { kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_rule_message() {
        let err = ValidationError::DuplicateRule {
            id: "r1".into(),
            index: 3,
        };
        assert_eq!(err.to_string(), "duplicate rule id 'r1' at index 3");
    }

    #[test]
    fn empty_rule_id_message() {
        let err = ValidationError::EmptyRuleId { index: 0 };
        assert_eq!(err.to_string(), "rule at index 0 has an empty id");
    }

    #[test]
    fn unsupported_action_message() {
        let err = ActionError::UnsupportedAction {
            kind: "focus".into(),
            target: "email".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported action 'focus' on target 'email'"
        );
    }

    #[test]
    fn missing_target_message() {
        let err = ActionError::MissingTarget {
            kind: "show".into(),
        };
        assert_eq!(err.to_string(), "'show' action has no target field");
    }
}
