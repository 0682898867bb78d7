use std::sync::Arc;
use std::thread;

use rulestep::{field, hide, show, DebugConfig, Rule, RuleBookBuilder, ValueStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let book = Arc::new(
        RuleBookBuilder::new()
            .rule(
                Rule::new("minor", "Minors need consent")
                    .when(field("age").less_than("18"))
                    .then(show("consent")),
            )
            .rule(
                Rule::new("adult", "Adults skip consent")
                    .when(field("age").greater_than("17"))
                    .then(hide("consent")),
            )
            .build()
            .expect("failed to build rule book"),
    );

    let handles: Vec<_> = (0..8_i64)
        .map(|i| {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                let age = 10 + i * 3;
                let values = ValueStore::new().set("age", age);
                let session = book.debug(&values, &DebugConfig::new());
                (age, session.coverage(), session.snapshot().is_visible("consent"))
            })
        })
        .collect();

    for handle in handles {
        let (age, coverage, consent) = handle.join().expect("worker panicked");
        println!("age {age:>2}: coverage {coverage}, consent visible: {consent:?}");
    }
}
