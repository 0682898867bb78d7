use rulestep::{
    field, set_value, show, Rule, RuleBookBuilder, RuleStatus, Stepper, ValueStore,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let book = RuleBookBuilder::new()
        .rule(Rule::new("default_country", "Default country").then(set_value("country", "US")))
        .rule(
            Rule::new("us_state", "US needs a state")
                .when(field("country").equals("US"))
                .then(show("state")),
        )
        .rule(
            Rule::new("ca_province", "Canada needs a province")
                .when(field("country").equals("CA"))
                .then(show("province")),
        )
        .build()
        .expect("failed to build rule book");

    let mut stepper = Stepper::new(&book, ValueStore::new().set("country", "CA"));
    stepper.toggle_breakpoint("us_state");

    // Run to the breakpoint.
    let session = stepper.run();
    println!("run:    {session}");

    // Step over the paused rule, one at a time, printing the field state.
    while !stepper.is_finished() {
        let session = stepper.step();
        println!("step:   {session}");
        if let Some(snapshot) = stepper.snapshot() {
            println!("        visibility = {:?}", snapshot.visibility);
        }
    }

    let fired = stepper
        .evaluations()
        .iter()
        .filter(|e| e.status == RuleStatus::Fired)
        .count();
    println!("done:   {fired} fired, coverage {}", stepper.coverage());
}
