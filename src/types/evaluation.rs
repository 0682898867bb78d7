use std::fmt;

use super::action::Action;
use super::condition::ConditionResult;

/// Where a rule ended up in a debug pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RuleStatus {
    /// Display-only; the engine never produces it.
    Pending,
    Fired,
    Skipped,
    /// The pass halted before this rule was evaluated.
    Breakpoint,
    Error,
}

impl RuleStatus {
    /// Whether the rule was actually run (as opposed to paused on or pending).
    #[must_use]
    pub fn was_evaluated(self) -> bool {
        matches!(self, RuleStatus::Fired | RuleStatus::Skipped | RuleStatus::Error)
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleStatus::Pending => "pending",
            RuleStatus::Fired => "fired",
            RuleStatus::Skipped => "skipped",
            RuleStatus::Breakpoint => "breakpoint",
            RuleStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// The record of one enabled rule reached during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct RuleEvaluation {
    pub rule_id: String,
    pub rule_name: String,
    /// Position of the rule in the input rule list.
    pub index: usize,
    pub status: RuleStatus,
    pub conditions_met: bool,
    pub condition_results: Vec<ConditionResult>,
    pub executed_actions: Vec<Action>,
    pub error: Option<String>,
}

impl RuleEvaluation {
    pub(crate) fn new(rule_id: &str, rule_name: &str, index: usize, status: RuleStatus) -> Self {
        Self {
            rule_id: rule_id.to_owned(),
            rule_name: rule_name.to_owned(),
            index,
            status,
            conditions_met: false,
            condition_results: Vec::new(),
            executed_actions: Vec::new(),
            error: None,
        }
    }
}

impl fmt::Display for RuleEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule_name, self.status)?;
        if let Some(err) = &self.error {
            write!(f, " ({err})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluated_statuses() {
        assert!(RuleStatus::Fired.was_evaluated());
        assert!(RuleStatus::Skipped.was_evaluated());
        assert!(RuleStatus::Error.was_evaluated());
        assert!(!RuleStatus::Breakpoint.was_evaluated());
        assert!(!RuleStatus::Pending.was_evaluated());
    }

    #[test]
    fn display_includes_error() {
        let mut eval = RuleEvaluation::new("r1", "Broken", 0, RuleStatus::Error);
        eval.error = Some("unsupported action 'focus'".into());
        assert_eq!(eval.to_string(), "Broken: error (unsupported action 'focus')");

        let eval = RuleEvaluation::new("r2", "Fine", 1, RuleStatus::Fired);
        assert_eq!(eval.to_string(), "Fine: fired");
    }
}
