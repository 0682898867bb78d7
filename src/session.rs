use std::collections::BTreeSet;

use crate::action::apply_action;
use crate::condition::evaluate_condition;
use crate::conflict::detect_conflicts;
use crate::{
    DebugConfig, DebugSession, FieldLabels, FieldSnapshot, Rule, RuleEvaluation, RuleStatus,
    ValueStore,
};

/// Evaluate one enabled rule against the running snapshot.
///
/// Conditions are checked in order and stop at the first failure. When all
/// pass, actions are applied to a working copy that is only committed if
/// every action succeeds; an action fault leaves `snapshot` as it was.
pub fn evaluate_rule(
    rule: &Rule,
    index: usize,
    snapshot: &mut FieldSnapshot,
    values: &ValueStore,
) -> RuleEvaluation {
    let mut eval = RuleEvaluation::new(&rule.id, &rule.name, index, RuleStatus::Skipped);

    let mut met = true;
    for condition in &rule.conditions {
        let outcome = evaluate_condition(condition, snapshot, values);
        let passed = outcome.result.passed;
        eval.condition_results.push(outcome.result);
        if let Some(anomaly) = outcome.anomaly {
            tracing::warn!(rule_id = %rule.id, index, %anomaly, "condition anomaly");
            eval.error = Some(anomaly);
        }
        if !passed {
            met = false;
            break;
        }
    }
    eval.conditions_met = met;

    if !met {
        tracing::debug!(rule_id = %rule.id, index, status = "skipped", "rule evaluated");
        return eval;
    }

    let mut working = snapshot.clone();
    for action in &rule.actions {
        if let Err(err) = apply_action(action, &mut working) {
            tracing::warn!(rule_id = %rule.id, index, error = %err, "action fault");
            eval.status = RuleStatus::Error;
            eval.error = Some(err.to_string());
            eval.executed_actions.clear();
            return eval;
        }
        eval.executed_actions.push(action.clone());
    }
    *snapshot = working;

    eval.status = RuleStatus::Fired;
    tracing::debug!(
        rule_id = %rule.id,
        index,
        status = "fired",
        actions = eval.executed_actions.len(),
        "rule evaluated"
    );
    eval
}

/// Run one debug pass over `rules` with the given test values.
///
/// Rules before `config.start_index` are replayed without being recorded,
/// so resuming a paused session sees every `set-value` made earlier in the
/// pass. From the start index on, each enabled rule either produces a
/// normal evaluation or, if a breakpoint (or the stop index) applies,
/// a `breakpoint` record that halts the pass before the rule runs.
///
/// A start index past the end of the list yields an empty, completed session.
///
/// # Example
///
/// ```
/// use rulestep::{run_debug_session, field, show, DebugConfig, Rule, RuleStatus, ValueStore};
///
/// let rules = vec![
///     Rule::new("r1", "Adults see consent")
///         .when(field("age").greater_than("18"))
///         .then(show("consent")),
/// ];
/// let values = ValueStore::new().set("age", "20");
///
/// let session = run_debug_session(&rules, &values, &DebugConfig::new());
/// assert_eq!(session.evaluations()[0].status, RuleStatus::Fired);
/// assert_eq!(session.snapshot().is_visible("consent"), Some(true));
/// assert_eq!(session.coverage().percentage, 100);
/// ```
pub fn run_debug_session(rules: &[Rule], values: &ValueStore, config: &DebugConfig) -> DebugSession {
    run_with_labels(rules, values, config, &FieldLabels::default())
}

pub(crate) fn run_with_labels(
    rules: &[Rule],
    values: &ValueStore,
    config: &DebugConfig,
    labels: &FieldLabels,
) -> DebugSession {
    tracing::debug!(
        rules = rules.len(),
        start_index = config.start_index,
        breakpoints = config.breakpoints.len(),
        "debug session started"
    );

    let mut snapshot = FieldSnapshot::new();
    let start = config.start_index.min(rules.len());

    // Replayed rules are not recorded, but the ones that fired still take
    // part in conflict detection against the rules recorded below.
    let mut replayed = Vec::new();
    for (index, rule) in rules[..start].iter().enumerate() {
        if !rule.enabled {
            continue;
        }
        let eval = evaluate_rule(rule, index, &mut snapshot, values);
        if eval.status == RuleStatus::Fired {
            replayed.push(eval);
        }
    }

    let mut evaluations = Vec::new();
    let mut paused_at = None;

    for (index, rule) in rules.iter().enumerate().skip(start) {
        if !rule.enabled {
            continue;
        }
        if config.should_pause(&rule.id, index) {
            tracing::debug!(rule_id = %rule.id, index, "paused at breakpoint");
            evaluations.push(RuleEvaluation::new(
                &rule.id,
                &rule.name,
                index,
                RuleStatus::Breakpoint,
            ));
            paused_at = Some(index);
            break;
        }
        evaluations.push(evaluate_rule(rule, index, &mut snapshot, values));
    }

    let conflicts = if replayed.is_empty() {
        detect_conflicts(&evaluations, labels)
    } else {
        // Pairs entirely inside the replayed prefix belong to an earlier call.
        let recorded: BTreeSet<&str> = evaluations.iter().map(|e| e.rule_id.as_str()).collect();
        replayed.extend(evaluations.iter().cloned());
        detect_conflicts(&replayed, labels)
            .into_iter()
            .filter(|c| recorded.contains(c.rule_b.as_str()))
            .collect()
    };
    let session = DebugSession::new(evaluations, snapshot, conflicts, paused_at);
    tracing::debug!(
        evaluated = session.evaluations().len(),
        conflicts = session.conflicts().len(),
        paused = session.is_paused(),
        "debug session finished"
    );
    session
}
