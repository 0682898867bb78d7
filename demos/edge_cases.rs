use rulestep::{field, show, DebugConfig, Rule, RuleBookBuilder, ValueStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let book = RuleBookBuilder::new()
        .rule(
            Rule::new("adult", "Adults see consent")
                .when(field("age").greater_than("18"))
                .then(show("consent")),
        )
        .rule(
            Rule::new("email", "Work email shows company")
                .when(field("email").contains("@corp.example"))
                .then(show("company")),
        )
        .label("age", "Applicant age")
        .build()
        .expect("failed to build rule book");

    let base = ValueStore::new().set("age", "30").set("email", "me@home.example");

    // Try every suggested input and show which rules flip.
    for case in book.edge_cases() {
        println!("{}: {}", case.label, case.description);
        for probe in &case.probes {
            let mut values = case.to_value_store(&base);
            for field_id in case.values.keys() {
                values.insert(field_id, probe.as_str());
            }
            let session = book.debug(&values, &DebugConfig::new());
            println!("  {probe:?} -> {}", session.trace_lines().join(", "));
        }
    }
}
