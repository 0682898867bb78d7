mod action;
mod condition;
mod config;
mod conflict;
mod coverage;
mod edge_case;
mod error;
mod evaluation;
mod labels;
mod rule;
mod rulebook;
mod session;
mod snapshot;
mod values;

pub use action::{
    disable, enable, hide, navigate, require, set_value, show, Action, ActionKind,
};
pub use condition::{field, Condition, ConditionResult, FieldCondition, Operator};
pub use config::DebugConfig;
pub use conflict::{ConflictKind, RuleConflict};
pub use coverage::Coverage;
pub use edge_case::EdgeCase;
pub use error::{ActionError, ValidationError};
pub use evaluation::{RuleEvaluation, RuleStatus};
pub use labels::FieldLabels;
pub use rule::Rule;
pub use rulebook::{RuleBook, RuleBookBuilder};
pub use session::DebugSession;
pub use snapshot::FieldSnapshot;
pub use values::{FieldValue, ValueStore};
