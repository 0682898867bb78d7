#![cfg(feature = "serde")]

use rulestep::{
    field, hide, run_debug_session, show, Action, ActionKind, DebugConfig, DebugSession, Operator,
    Rule, RuleStatus, ValueStore,
};
use serde_json::json;

fn rules() -> Vec<Rule> {
    vec![
        Rule::new("r1", "Adults see consent")
            .when(field("age").greater_than("18"))
            .then(show("consent")),
        Rule::new("r2", "Hide consent").then(hide("consent")),
    ]
}

#[test]
fn rules_load_from_json() {
    let raw = json!([
        {
            "id": "r1",
            "name": "Adults see consent",
            "enabled": true,
            "conditions": [{ "field_id": "age", "operator": "greater-than", "value": "18" }],
            "actions": [{ "kind": "show", "target_id": "consent", "value": null }],
            "trigger_field": null
        },
        {
            "id": "r2",
            "name": "Hide consent",
            "enabled": true,
            "conditions": [],
            "actions": [{ "kind": "hide", "target_id": "consent", "value": null }],
            "trigger_field": null
        }
    ]);
    let loaded: Vec<Rule> = serde_json::from_value(raw).unwrap();
    assert_eq!(loaded, rules());
}

#[test]
fn unknown_kinds_survive_loading() {
    let raw = json!({
        "id": "r",
        "name": "r",
        "enabled": true,
        "conditions": [{ "field_id": "x", "operator": "matches", "value": "a" }],
        "actions": [{ "kind": "teleport", "target_id": "y", "value": null }],
        "trigger_field": null
    });
    let rule: Rule = serde_json::from_value(raw).unwrap();
    assert_eq!(rule.conditions[0].operator, Operator::Unknown("matches".into()));
    assert_eq!(rule.actions[0], Action::new(ActionKind::Unknown("teleport".into()), "y"));

    let session = run_debug_session(&[rule], &ValueStore::new(), &DebugConfig::new());
    assert_eq!(session.evaluations()[0].status, RuleStatus::Skipped);
}

#[test]
fn values_and_config_are_plain_json() {
    let values: ValueStore = serde_json::from_value(json!({ "age": "20" })).unwrap();
    assert_eq!(values.get("age"), Some("20"));

    let config: DebugConfig = serde_json::from_value(json!({ "breakpoints": ["r2"] })).unwrap();
    assert_eq!(config, DebugConfig::new().breakpoint("r2"));
}

#[test]
fn session_serializes_with_kebab_statuses() {
    let values = ValueStore::new().set("age", "20");
    let session = run_debug_session(&rules(), &values, &DebugConfig::new().breakpoint("r2"));
    let out = serde_json::to_value(&session).unwrap();

    assert_eq!(out["evaluations"][0]["status"], "fired");
    assert_eq!(out["evaluations"][1]["status"], "breakpoint");
    assert_eq!(out["paused_at_index"], 1);
    assert_eq!(out["snapshot"]["visibility"]["consent"], true);

    let back: DebugSession = serde_json::from_value(out).unwrap();
    assert_eq!(back, session);
}
