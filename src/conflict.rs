use std::collections::BTreeSet;

use crate::{ActionKind, ConflictKind, FieldLabels, RuleConflict, RuleEvaluation, RuleStatus};

/// One opposable write: (target, axis, value written).
type Effect<'a> = (&'a str, ConflictKind, bool);

fn effects(eval: &RuleEvaluation) -> BTreeSet<Effect<'_>> {
    eval.executed_actions
        .iter()
        .filter_map(|action| {
            let target = action.target_id.as_str();
            match action.kind {
                ActionKind::Show => Some((target, ConflictKind::Visibility, true)),
                ActionKind::Hide => Some((target, ConflictKind::Visibility, false)),
                ActionKind::Enable => Some((target, ConflictKind::Enabled, true)),
                ActionKind::Disable => Some((target, ConflictKind::Enabled, false)),
                _ => None,
            }
        })
        .collect()
}

fn verb(kind: ConflictKind, value: bool) -> &'static str {
    match (kind, value) {
        (ConflictKind::Visibility, true) => "shows",
        (ConflictKind::Visibility, false) => "hides",
        (ConflictKind::Enabled, true) => "enables",
        (ConflictKind::Enabled, false) => "disables",
    }
}

/// Find pairs of fired rules that write opposing show/hide or
/// enable/disable effects to the same target.
///
/// Only `fired` evaluations take part. Each (rule A, rule B, target, axis)
/// is reported once, with A the rule evaluated first. `require` and
/// `set-value` never conflict.
#[must_use]
pub fn detect_conflicts(evaluations: &[RuleEvaluation], labels: &FieldLabels) -> Vec<RuleConflict> {
    let fired: Vec<(&RuleEvaluation, BTreeSet<Effect<'_>>)> = evaluations
        .iter()
        .filter(|e| e.status == RuleStatus::Fired)
        .map(|e| (e, effects(e)))
        .collect();

    let mut conflicts = Vec::new();
    let mut reported = BTreeSet::new();

    for (i, (a, a_effects)) in fired.iter().enumerate() {
        for (b, b_effects) in &fired[i + 1..] {
            if a.rule_id == b.rule_id {
                continue;
            }
            for &(target, kind, value) in a_effects {
                if !b_effects.contains(&(target, kind, !value)) {
                    continue;
                }
                if !reported.insert((a.rule_id.as_str(), b.rule_id.as_str(), target, kind)) {
                    continue;
                }
                let label = labels.label(target);
                tracing::debug!(
                    rule_a = %a.rule_id,
                    rule_b = %b.rule_id,
                    field = target,
                    %kind,
                    "conflict detected"
                );
                conflicts.push(RuleConflict {
                    target_id: target.to_owned(),
                    kind,
                    description: format!(
                        "rule \"{}\" {} {label} but rule \"{}\" {} it",
                        a.rule_name,
                        verb(kind, value),
                        b.rule_name,
                        verb(kind, !value),
                    ),
                    rule_a: a.rule_id.clone(),
                    rule_b: b.rule_id.clone(),
                });
            }
        }
    }

    conflicts
}
