use rulestep::{
    ConflictKind, DebugConfig, Operator, RuleBook, RuleStatus, RulestepError, Stepper,
    ValidationError, ValueStore,
};

const SIGNUP: &str = r#"
# Signup form
label consent "Parental consent"
label state "State / province"

rule minor "Minors need consent" on age:
    when age < 18
    then show consent, require consent

rule adult "Adults skip consent" on age:
    when age >= 18
    then hide consent
"#;

#[test]
fn dsl_parse_and_debug() {
    let dsl = r#"
label consent "Parental consent"

rule minor "Minors need consent" on age:
    when age < 18
    then show consent, require consent

rule us "US needs a state":
    when country == "US"
    then show state, require state
"#;

    let book = RuleBook::from_dsl(dsl).unwrap();
    assert_eq!(book.rules().len(), 2);
    assert_eq!(book.labels().label("consent"), "Parental consent");
    assert_eq!(book.rule("minor").and_then(|r| r.trigger_field.as_deref()), Some("age"));

    let values = ValueStore::new().set("age", "12").set("country", "CA");
    let session = book.debug(&values, &DebugConfig::new());

    assert_eq!(session.evaluations()[0].status, RuleStatus::Fired);
    assert_eq!(session.evaluations()[1].status, RuleStatus::Skipped);
    assert_eq!(session.snapshot().is_visible("consent"), Some(true));
    assert_eq!(session.snapshot().is_required("consent"), Some(true));
    assert_eq!(session.trace(), ["Minors need consent", "US needs a state"]);
    assert_eq!(session.coverage().percentage, 50);
}

#[test]
fn unsupported_comparison_is_a_parse_error() {
    // Only strict comparisons are part of the language.
    let err = RuleBook::from_dsl(SIGNUP).unwrap_err();
    assert!(matches!(err, RulestepError::Parse(_)), "got {err:?}");
}

#[test]
fn dsl_conflict_uses_labels() {
    let dsl = r#"
label consent "Parental consent"

rule a "Always show":
    then show consent

rule b "Always hide":
    then hide consent
"#;
    let book = RuleBook::from_dsl(dsl).unwrap();
    let session = book.debug(&ValueStore::new(), &DebugConfig::new());
    assert_eq!(session.conflicts().len(), 1);
    assert_eq!(session.conflicts()[0].kind, ConflictKind::Visibility);
    assert_eq!(
        session.conflicts()[0].description,
        "rule \"Always show\" shows Parental consent but rule \"Always hide\" hides it"
    );
}

#[test]
fn dsl_disabled_rules_are_not_evaluated() {
    let dsl = r#"
rule on_rule:
    then show a

rule off_rule disabled:
    then show b
"#;
    let book = RuleBook::from_dsl(dsl).unwrap();
    assert_eq!(book.enabled_count(), 1);
    let session = book.debug(&ValueStore::new(), &DebugConfig::new());
    assert_eq!(session.evaluations().len(), 1);
    assert_eq!(session.snapshot().is_visible("b"), None);
}

#[test]
fn dsl_stepper_walks_rules() {
    let dsl = r#"
rule one:
    then set-value plan "pro"

rule two:
    when plan equals "pro"
    then show billing

rule three:
    when plan is-not-empty
    then enable billing
"#;
    let book = RuleBook::from_dsl(dsl).unwrap();
    let mut stepper = Stepper::new(&book, ValueStore::new());
    stepper.toggle_breakpoint("three");

    assert_eq!(stepper.run().paused_at_index(), Some(2));
    assert_eq!(stepper.snapshot().and_then(|s| s.is_visible("billing")), Some(true));
    assert_eq!(stepper.snapshot().and_then(|s| s.is_enabled("billing")), None);

    assert!(stepper.resume().paused_at_index().is_none());
    assert_eq!(stepper.coverage().fired, 3);
    assert_eq!(stepper.snapshot().and_then(|s| s.is_enabled("billing")), Some(true));
}

#[test]
fn dsl_edge_cases_use_labels() {
    let dsl = r#"
label age "Applicant age"

rule adult:
    when age > 18
    then show consent
"#;
    let book = RuleBook::from_dsl(dsl).unwrap();
    let cases = book.edge_cases();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].probes, vec!["18", "17", "19"]);
    assert!(cases[0].description.contains("Applicant age"));
    assert_eq!(book.rules()[0].conditions[0].operator, Operator::GreaterThan);
}

#[test]
fn dsl_duplicate_ids_fail_validation() {
    let dsl = r#"
rule a:
    then show x

rule a:
    then hide x
"#;
    let err = RuleBook::from_dsl(dsl).unwrap_err();
    assert!(matches!(
        err,
        RulestepError::Validation(ValidationError::DuplicateRule { index: 1, .. })
    ));
    assert_eq!(err.to_string(), "duplicate rule id 'a' at index 1");
}

#[test]
fn dsl_syntax_error_has_message() {
    let err = RuleBook::from_dsl("rule r:\n    when x equals\n    then show y").unwrap_err();
    match err {
        RulestepError::Parse(e) => assert!(!e.message().is_empty()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn from_file_missing_is_io_error() {
    let err = RuleBook::from_file("/nonexistent/rules.form").unwrap_err();
    assert!(matches!(err, RulestepError::Io(_)));
}

#[test]
fn from_file_reads_rules() {
    let path = std::env::temp_dir().join(format!("rulestep-{}.form", std::process::id()));
    std::fs::write(&path, "rule r:\n    then show x\n").unwrap();
    let book = RuleBook::from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(book.unwrap().rules().len(), 1);
}
