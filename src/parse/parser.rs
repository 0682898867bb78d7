use crate::{FieldLabels, Rule};

/// The result of parsing rule DSL input.
#[derive(Debug)]
pub struct ParsedRules {
    pub rules: Vec<Rule>,
    pub labels: FieldLabels,
}
