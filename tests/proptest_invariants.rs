
use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use rulestep::{
    generate_edge_cases, run_debug_session, ConflictKind, DebugSession, DebugConfig,
    RuleEvaluation, RuleStatus,
};
use strategies::{arb_rules, arb_rules_with_breakpoints, arb_values};

type ConflictKey = (String, String, String, ConflictKind);

fn conflict_keys(session: &DebugSession) -> Vec<ConflictKey> {
    session
        .conflicts()
        .iter()
        .map(|c| (c.rule_a.clone(), c.rule_b.clone(), c.target_id.clone(), c.kind))
        .collect()
}

// ---------------------------------------------------------------------------
// Invariant 1: Step equivalence
//
// Running to completion in one call produces the same evaluations as
// stepping one rule at a time with an advancing start index.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn step_equivalence(rules in arb_rules(), values in arb_values()) {
        let full = run_debug_session(&rules, &values, &DebugConfig::new());

        let mut stepped: Vec<RuleEvaluation> = Vec::new();
        for i in 0..rules.len() {
            let config = DebugConfig::new().start_at(i).stop_at(i + 1);
            let session = run_debug_session(&rules, &values, &config);
            stepped.extend(
                session
                    .evaluations()
                    .iter()
                    .filter(|e| e.status != RuleStatus::Breakpoint)
                    .cloned(),
            );
        }

        prop_assert_eq!(full.evaluations(), stepped.as_slice());
    }

    #[test]
    fn resume_chain_matches_full_run(
        (rules, breakpoints) in arb_rules_with_breakpoints(),
        values in arb_values(),
    ) {
        let full = run_debug_session(&rules, &values, &DebugConfig::new());

        let mut merged: Vec<RuleEvaluation> = Vec::new();
        let mut conflicts: Vec<ConflictKey> = Vec::new();
        let mut config = DebugConfig::new().breakpoints(breakpoints.iter().cloned());
        let mut last = run_debug_session(&rules, &values, &config);
        let mut calls = 1;
        loop {
            conflicts.extend(conflict_keys(&last));
            if merged.last().is_some_and(|e| e.status == RuleStatus::Breakpoint) {
                merged.pop();
            }
            merged.extend(last.evaluations().iter().cloned());
            let Some(paused) = last.paused_at_index() else { break };
            config = DebugConfig::new()
                .breakpoints(breakpoints.iter().cloned())
                .start_at(paused)
                .suppress(&rules[paused].id);
            last = run_debug_session(&rules, &values, &config);
            calls += 1;
            prop_assert!(calls <= rules.len() + 1, "resume loop did not terminate");
        }

        prop_assert_eq!(full.evaluations(), merged.as_slice());
        prop_assert_eq!(full.snapshot(), last.snapshot());

        // Every conflict of the unpaused run is reported by exactly one call.
        let unique: BTreeSet<ConflictKey> = conflicts.iter().cloned().collect();
        prop_assert_eq!(unique.len(), conflicts.len());
        let expected: BTreeSet<ConflictKey> = conflict_keys(&full).into_iter().collect();
        prop_assert_eq!(unique, expected);
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Coverage bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn coverage_bounds(
        (rules, breakpoints) in arb_rules_with_breakpoints(),
        values in arb_values(),
    ) {
        let config = DebugConfig::new().breakpoints(breakpoints);
        let cov = run_debug_session(&rules, &values, &config).coverage();
        prop_assert!(cov.fired <= cov.total);
        prop_assert!(cov.percentage <= 100);
        if cov.total == 0 {
            prop_assert_eq!(cov.percentage, 0);
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Determinism
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn determinism(
        (rules, breakpoints) in arb_rules_with_breakpoints(),
        values in arb_values(),
    ) {
        let config = DebugConfig::new().breakpoints(breakpoints);
        let first = run_debug_session(&rules, &values, &config);
        for _ in 0..3 {
            let again = run_debug_session(&rules, &values, &config);
            prop_assert_eq!(&first, &again, "determinism violated on repeated run");
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Structure of a pass
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn zero_condition_rules_fire(rules in arb_rules(), values in arb_values()) {
        let session = run_debug_session(&rules, &values, &DebugConfig::new());
        for eval in session.evaluations() {
            if rules[eval.index].conditions.is_empty() {
                prop_assert_eq!(eval.status, RuleStatus::Fired);
            }
        }
    }

    #[test]
    fn one_record_per_enabled_rule(rules in arb_rules(), values in arb_values()) {
        let session = run_debug_session(&rules, &values, &DebugConfig::new());
        let expected: Vec<usize> = rules
            .iter()
            .enumerate()
            .filter(|(_, r)| r.enabled)
            .map(|(i, _)| i)
            .collect();
        let got: Vec<usize> = session.evaluations().iter().map(|e| e.index).collect();
        prop_assert_eq!(expected, got);
        prop_assert_eq!(session.trace().len(), session.evaluations().len());
        prop_assert!(session.paused_at_index().is_none());
    }

    #[test]
    fn pauses_at_first_breakpoint(
        (rules, breakpoints) in arb_rules_with_breakpoints(),
        values in arb_values(),
    ) {
        let config = DebugConfig::new().breakpoints(breakpoints.iter().cloned());
        let session = run_debug_session(&rules, &values, &config);

        let bps: HashSet<&str> = breakpoints.iter().map(String::as_str).collect();
        let expected = rules
            .iter()
            .position(|r| r.enabled && bps.contains(r.id.as_str()));
        prop_assert_eq!(session.paused_at_index(), expected);

        if let Some(p) = expected {
            let last = session.evaluations().last().unwrap();
            prop_assert_eq!(last.status, RuleStatus::Breakpoint);
            prop_assert_eq!(last.index, p);
            prop_assert!(last.condition_results.is_empty());

            // The paused snapshot is exactly the state after the rules before p.
            let prefix = run_debug_session(&rules[..p], &values, &DebugConfig::new());
            prop_assert_eq!(session.snapshot(), prefix.snapshot());
        }
    }

    #[test]
    fn skipped_rules_execute_nothing(rules in arb_rules(), values in arb_values()) {
        let session = run_debug_session(&rules, &values, &DebugConfig::new());
        for eval in session.evaluations() {
            match eval.status {
                RuleStatus::Fired => {
                    prop_assert!(eval.conditions_met);
                    prop_assert_eq!(eval.executed_actions.len(), rules[eval.index].actions.len());
                }
                RuleStatus::Skipped => {
                    prop_assert!(!eval.conditions_met);
                    prop_assert!(eval.executed_actions.is_empty());
                    prop_assert!(eval.condition_results.last().is_some_and(|c| !c.passed));
                }
                _ => {}
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 5: Conflicts
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn conflicts_reported_once_between_fired_rules(
        rules in arb_rules(),
        values in arb_values(),
    ) {
        let session = run_debug_session(&rules, &values, &DebugConfig::new());
        let fired: HashSet<&str> = session
            .evaluations()
            .iter()
            .filter(|e| e.status == RuleStatus::Fired)
            .map(|e| e.rule_id.as_str())
            .collect();

        let mut seen = HashSet::new();
        for c in session.conflicts() {
            prop_assert!(fired.contains(c.rule_a.as_str()));
            prop_assert!(fired.contains(c.rule_b.as_str()));
            prop_assert_ne!(&c.rule_a, &c.rule_b);
            prop_assert!(seen.insert((c.rule_a.clone(), c.rule_b.clone(), c.target_id.clone(), c.kind)));
            prop_assert!(!seen.contains(&(c.rule_b.clone(), c.rule_a.clone(), c.target_id.clone(), c.kind)));
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 6: Edge cases
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn edge_cases_unique_and_idempotent(rules in arb_rules()) {
        let cases = generate_edge_cases(&rules);
        prop_assert_eq!(&cases, &generate_edge_cases(&rules));

        let signatures: HashSet<_> = rules
            .iter()
            .flat_map(|r| &r.conditions)
            .map(|c| {
                let value = if c.operator.is_unary() { None } else { c.value.clone() };
                (c.field_id.clone(), c.operator.clone(), value)
            })
            .collect();
        prop_assert_eq!(cases.len(), signatures.len());

        let labels: HashSet<&str> = cases.iter().map(|c| c.label.as_str()).collect();
        prop_assert_eq!(labels.len(), cases.len());

        for case in &cases {
            prop_assert_eq!(case.values.len(), 1);
            let (_, primary) = case.values.iter().next().unwrap();
            prop_assert_eq!(Some(primary), case.probes.first());
        }
    }
}
