use std::collections::HashSet;

use crate::{FieldLabels, Rule, RuleBook, ValidationError};

pub(crate) fn validate(rules: Vec<Rule>, labels: FieldLabels) -> Result<RuleBook, ValidationError> {
    check_ids(&rules)?;
    Ok(RuleBook { rules, labels })
}

fn check_ids(rules: &[Rule]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (index, rule) in rules.iter().enumerate() {
        if rule.id.is_empty() {
            return Err(ValidationError::EmptyRuleId { index });
        }
        if !seen.insert(rule.id.as_str()) {
            return Err(ValidationError::DuplicateRule {
                id: rule.id.clone(),
                index,
            });
        }
    }
    Ok(())
}
