//! A stepping debugger for declarative form rules.
//!
//! Given an ordered rule list and a set of hypothetical field values, the
//! engine produces a replayable evaluation trace, the resulting field state,
//! conflicting rule pairs, a coverage figure, and boundary-value inputs that
//! are likely to flip individual conditions. Every call is pure: pausing,
//! stepping and resuming are fresh calls with an adjusted [`DebugConfig`].

mod action;
mod condition;
mod conflict;
mod edge_case;
mod error;
pub mod parse;
mod session;
mod stepper;
mod types;
mod validate;

pub use action::apply_action;
pub use condition::{evaluate_condition, ConditionOutcome};
pub use conflict::detect_conflicts;
pub use edge_case::generate_edge_cases;
pub use error::RulestepError;
pub use session::{evaluate_rule, run_debug_session};
pub use stepper::Stepper;
pub use types::{
    disable, enable, field, hide, navigate, require, set_value, show, Action, ActionError,
    ActionKind, Condition, ConditionResult, ConflictKind, Coverage, DebugConfig, DebugSession,
    EdgeCase, FieldCondition, FieldLabels, FieldSnapshot, FieldValue, Operator, Rule, RuleBook,
    RuleBookBuilder, RuleConflict, RuleEvaluation, RuleStatus, ValidationError, ValueStore,
};
