use rulestep::{field, hide, require, show, DebugConfig, Rule, RuleBookBuilder, ValueStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Define rules
    let book = RuleBookBuilder::new()
        .rule(
            Rule::new("minor", "Minors need consent")
                .when(field("age").less_than("18"))
                .then(show("consent"))
                .then(require("consent")),
        )
        .rule(
            Rule::new("no_email", "Hide newsletter without email")
                .when(field("email").is_empty())
                .then(hide("newsletter")),
        )
        .rule(
            Rule::new("promo", "Always offer the newsletter")
                .then(show("newsletter")),
        )
        .label("consent", "Parental consent")
        .label("newsletter", "Newsletter opt-in")
        .build()
        .expect("failed to build rule book");

    println!("{book}");

    // Debug against a hypothetical input
    let values = ValueStore::new().set("age", 15_i64).set("email", "");
    let session = book.debug(&values, &DebugConfig::new());

    println!("{session}");
    for line in session.trace_lines() {
        println!("  {line}");
    }
    for conflict in session.conflicts() {
        println!("  ! {}", conflict.description);
    }
    println!("snapshot: {:?}", session.snapshot());
}
