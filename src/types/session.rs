use std::fmt;

use super::conflict::RuleConflict;
use super::coverage::Coverage;
use super::evaluation::RuleEvaluation;
use super::snapshot::FieldSnapshot;

/// Everything one call to [`run_debug_session`](crate::run_debug_session)
/// produces: evaluation records, the resulting field state, the path taken,
/// detected conflicts, coverage, and where the pass paused (if it did).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct DebugSession {
    evaluations: Vec<RuleEvaluation>,
    snapshot: FieldSnapshot,
    trace: Vec<String>,
    conflicts: Vec<RuleConflict>,
    coverage: Coverage,
    paused_at_index: Option<usize>,
}

impl DebugSession {
    pub(crate) fn new(
        evaluations: Vec<RuleEvaluation>,
        snapshot: FieldSnapshot,
        conflicts: Vec<RuleConflict>,
        paused_at_index: Option<usize>,
    ) -> Self {
        let trace = evaluations.iter().map(|e| e.rule_name.clone()).collect();
        let coverage = Coverage::from_evaluations(&evaluations);
        Self {
            evaluations,
            snapshot,
            trace,
            conflicts,
            coverage,
            paused_at_index,
        }
    }

    /// Evaluation records in the order the rules were reached.
    #[must_use]
    pub fn evaluations(&self) -> &[RuleEvaluation] {
        &self.evaluations
    }

    /// Field state after every rule executed up to the end or the pause point.
    #[must_use]
    pub fn snapshot(&self) -> &FieldSnapshot {
        &self.snapshot
    }

    /// Rule names of every evaluation produced by this call.
    #[must_use]
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    #[must_use]
    pub fn conflicts(&self) -> &[RuleConflict] {
        &self.conflicts
    }

    #[must_use]
    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// Index of the rule the pass halted on, `None` if it ran to completion.
    #[must_use]
    pub fn paused_at_index(&self) -> Option<usize> {
        self.paused_at_index
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at_index.is_some()
    }

    /// One `"<rule name>: <status>"` line per evaluation, for a trace panel.
    #[must_use]
    pub fn trace_lines(&self) -> Vec<String> {
        self.evaluations.iter().map(ToString::to_string).collect()
    }

    pub fn into_evaluations(self) -> Vec<RuleEvaluation> {
        self.evaluations
    }
}

impl fmt::Display for DebugSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path: [{}]", self.trace.join(" -> "))?;
        write!(f, ", coverage: {}", self.coverage)?;
        write!(f, ", conflicts: {}", self.conflicts.len())?;
        match self.paused_at_index {
            Some(idx) => write!(f, ", paused at {idx}"),
            None => write!(f, ", completed"),
        }
    }
}
