use std::collections::BTreeSet;

use crate::conflict::detect_conflicts;
use crate::{
    Coverage, DebugConfig, DebugSession, FieldSnapshot, RuleBook, RuleConflict, RuleEvaluation,
    RuleStatus, ValueStore,
};

/// Run / step / continue controls over a [`RuleBook`].
///
/// The engine itself is stateless; a `Stepper` keeps what a debugger UI
/// keeps between clicks (breakpoints, test values, the evaluations gathered
/// so far) and turns every control into a fresh
/// [`RuleBook::debug`] call with an adjusted start, stop, and suppressed
/// breakpoint.
///
/// # Example
///
/// ```
/// use rulestep::{RuleBookBuilder, Rule, RuleStatus, Stepper, ValueStore, show};
///
/// let book = RuleBookBuilder::new()
///     .rule(Rule::new("r1", "First").then(show("a")))
///     .rule(Rule::new("r2", "Second").then(show("b")))
///     .rule(Rule::new("r3", "Third").then(show("c")))
///     .build()
///     .unwrap();
///
/// let mut stepper = Stepper::new(&book, ValueStore::new());
/// stepper.toggle_breakpoint("r2");
///
/// assert_eq!(stepper.run().paused_at_index(), Some(1));
/// assert_eq!(stepper.step().paused_at_index(), Some(2));
/// assert!(stepper.resume().paused_at_index().is_none());
/// assert!(stepper.evaluations().iter().all(|e| e.status == RuleStatus::Fired));
/// ```
#[derive(Debug, Clone)]
pub struct Stepper<'a> {
    book: &'a RuleBook,
    values: ValueStore,
    breakpoints: BTreeSet<String>,
    evaluations: Vec<RuleEvaluation>,
    last: Option<DebugSession>,
}

impl<'a> Stepper<'a> {
    #[must_use]
    pub fn new(book: &'a RuleBook, values: ValueStore) -> Self {
        Self {
            book,
            values,
            breakpoints: BTreeSet::new(),
            evaluations: Vec::new(),
            last: None,
        }
    }

    /// Start over from the first rule, stopping at the first breakpoint.
    pub fn run(&mut self) -> &DebugSession {
        self.reset();
        let config = self.config();
        tracing::debug!("stepper: run");
        self.absorb(config)
    }

    /// Evaluate the rule under the cursor and pause before the next enabled
    /// rule. Starts a new pass if none is in progress.
    pub fn step(&mut self) -> &DebugSession {
        let cursor = match self.last.as_ref() {
            Some(session) => session.paused_at_index(),
            None => self.book.next_enabled(0),
        };
        let Some(index) = cursor else {
            return self.run();
        };
        if self.last.is_none() {
            self.evaluations.clear();
        }
        let config = self.resume_config(index).stop_at(index + 1);
        tracing::debug!(index, "stepper: step");
        self.absorb(config)
    }

    /// Continue from the pause point to the next breakpoint or the end.
    /// Starts a new pass if none is paused.
    pub fn resume(&mut self) -> &DebugSession {
        let Some(index) = self.paused_at() else {
            return self.run();
        };
        let config = self.resume_config(index);
        tracing::debug!(index, "stepper: resume");
        self.absorb(config)
    }

    /// Forget the current pass. Breakpoints and values are kept.
    pub fn reset(&mut self) {
        self.evaluations.clear();
        self.last = None;
    }

    /// Flip the breakpoint on a rule id; returns whether it is now set.
    pub fn toggle_breakpoint(&mut self, rule_id: &str) -> bool {
        if self.breakpoints.remove(rule_id) {
            false
        } else {
            self.breakpoints.insert(rule_id.to_owned());
            true
        }
    }

    /// Replace the test values. The current pass no longer applies and is reset.
    pub fn set_values(&mut self, values: ValueStore) {
        self.values = values;
        self.reset();
    }

    #[must_use]
    pub fn breakpoints(&self) -> &BTreeSet<String> {
        &self.breakpoints
    }

    #[must_use]
    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    /// Every evaluation of the current pass across all calls so far.
    #[must_use]
    pub fn evaluations(&self) -> &[RuleEvaluation] {
        &self.evaluations
    }

    #[must_use]
    pub fn last_session(&self) -> Option<&DebugSession> {
        self.last.as_ref()
    }

    #[must_use]
    pub fn paused_at(&self) -> Option<usize> {
        self.last.as_ref().and_then(DebugSession::paused_at_index)
    }

    /// Whether the current pass has run to the end of the rule list.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.last.as_ref().is_some_and(|s| !s.is_paused())
    }

    /// Field state at the pause point (or the end).
    #[must_use]
    pub fn snapshot(&self) -> Option<&FieldSnapshot> {
        self.last.as_ref().map(DebugSession::snapshot)
    }

    /// Coverage over the whole pass so far.
    #[must_use]
    pub fn coverage(&self) -> Coverage {
        Coverage::from_evaluations(&self.evaluations)
    }

    /// Conflicts over the whole pass so far, including pairs split across calls.
    #[must_use]
    pub fn conflicts(&self) -> Vec<RuleConflict> {
        detect_conflicts(&self.evaluations, self.book.labels())
    }

    fn config(&self) -> DebugConfig {
        DebugConfig::new().breakpoints(self.breakpoints.iter().cloned())
    }

    fn resume_config(&self, index: usize) -> DebugConfig {
        let config = self.config().start_at(index);
        match self.book.rules().get(index) {
            Some(rule) => config.suppress(&rule.id),
            None => config,
        }
    }

    fn absorb(&mut self, config: DebugConfig) -> &DebugSession {
        let session = self.book.debug(&self.values, &config);
        if self
            .evaluations
            .last()
            .is_some_and(|e| e.status == RuleStatus::Breakpoint)
        {
            self.evaluations.pop();
        }
        self.evaluations.extend(session.evaluations().iter().cloned());
        self.last.insert(session)
    }
}
