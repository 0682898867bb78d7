use rulestep::{DebugConfig, RuleBook, ValueStore};

const RULES: &str = r#"
# Signup form
label consent "Parental consent"
label billing "Billing address"

rule minor "Minors need consent" on age:
    when age < 18
    then show consent, require consent

rule pro "Pro plan shows billing" on plan:
    when plan == "pro"
    then show billing, require billing

rule free "Free plan hides billing" on plan:
    when plan != "pro"
    then hide billing

rule review "Review step" disabled:
    then navigate review
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let book = RuleBook::from_dsl(RULES).expect("failed to parse rules");
    println!("{book}");

    for plan in ["pro", "free"] {
        let values = ValueStore::new().set("age", "16").set("plan", plan);
        let session = book.debug(&values, &DebugConfig::new());
        println!("plan={plan}: {session}");
        for line in session.trace_lines() {
            println!("  {line}");
        }
    }
}
