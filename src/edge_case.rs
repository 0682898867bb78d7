use std::collections::{BTreeMap, BTreeSet};

use crate::condition::parse_number;
use crate::{Condition, EdgeCase, FieldLabels, Operator, Rule};

const NON_EMPTY_PROBE: &str = "sample";

/// Synthesize boundary-value inputs from the conditions of `rules`.
///
/// Produces at most one [`EdgeCase`] per distinct `(field, operator, value)`
/// signature, in the order signatures first appear. Purely structural: no
/// rule is executed, and the same rules always give the same cases.
///
/// # Example
///
/// ```
/// use rulestep::{generate_edge_cases, field, show, Rule};
///
/// let rules = vec![Rule::new("r1", "Adults").when(field("age").greater_than("18")).then(show("x"))];
/// let cases = generate_edge_cases(&rules);
/// assert_eq!(cases.len(), 1);
/// assert_eq!(cases[0].probes, vec!["18", "17", "19"]);
/// ```
#[must_use]
pub fn generate_edge_cases(rules: &[Rule]) -> Vec<EdgeCase> {
    generate_with_labels(rules, &FieldLabels::default())
}

pub(crate) fn generate_with_labels(rules: &[Rule], labels: &FieldLabels) -> Vec<EdgeCase> {
    let mut seen = BTreeSet::new();
    let mut cases = Vec::new();

    for condition in rules.iter().flat_map(|r| &r.conditions) {
        // Unary operators ignore their value, so it is not part of the signature.
        let value = if condition.operator.is_unary() {
            None
        } else {
            condition.value.as_deref()
        };
        let signature = (condition.field_id.as_str(), &condition.operator, value);
        if !seen.insert(signature) {
            continue;
        }
        if let Some(case) = edge_case_for(condition, labels) {
            cases.push(case);
        }
    }

    tracing::debug!(rules = rules.len(), cases = cases.len(), "edge cases generated");
    cases
}

fn edge_case_for(condition: &Condition, labels: &FieldLabels) -> Option<EdgeCase> {
    let field = condition.field_id.as_str();
    let name = labels.label(field);
    let literal = condition.value.as_deref().unwrap_or("");

    let (probes, description) = match &condition.operator {
        Operator::Equals | Operator::NotEquals => {
            let other = different_from(literal);
            let description = format!(
                "Sets {name} to \"{literal}\" so the comparison matches exactly; \"{other}\" flips it."
            );
            (vec![literal.to_owned(), other], description)
        }
        Operator::Contains | Operator::NotContains => {
            let description = format!(
                "Sets {name} to \"{literal}\" so it contains the probe; an empty value does not."
            );
            (vec![literal.to_owned(), String::new()], description)
        }
        Operator::IsEmpty | Operator::IsNotEmpty => {
            let description = format!(
                "Leaves {name} empty; \"{NON_EMPTY_PROBE}\" makes it non-empty."
            );
            (vec![String::new(), NON_EMPTY_PROBE.to_owned()], description)
        }
        Operator::GreaterThan | Operator::LessThan => match neighbours(literal) {
            Some(around) => {
                let description = match around.as_slice() {
                    [] => format!("Sets {name} to the boundary {literal}."),
                    [one] => format!("Sets {name} to the boundary {literal}; {one} sits beside it."),
                    [below, above, ..] => format!(
                        "Sets {name} to the boundary {literal}; {below} and {above} sit on either side."
                    ),
                };
                let mut probes = vec![literal.to_owned()];
                probes.extend(around);
                (probes, description)
            }
            None => {
                let description = format!(
                    "Boundary \"{literal}\" for {name} is not a number; the comparison can never pass."
                );
                (vec![literal.to_owned(), String::new()], description)
            }
        },
        Operator::Unknown(_) => return None,
    };

    let primary = probes.first().cloned().unwrap_or_default();
    Some(EdgeCase {
        label: condition.to_string(),
        description,
        values: BTreeMap::from([(field.to_owned(), primary)]),
        probes,
    })
}

/// A value that is clearly not equal to `literal`.
fn different_from(literal: &str) -> String {
    if literal.is_empty() {
        return NON_EMPTY_PROBE.to_owned();
    }
    neighbours(literal)
        .and_then(|around| around.last().cloned())
        .unwrap_or_else(|| format!("{literal}-other"))
}

/// `literal - 1` and `literal + 1`, printed at the literal's precision.
///
/// Integers use checked arithmetic; decimals keep as many fraction digits
/// as the literal has. A neighbour that overflows or lands on the literal's
/// own value is left out. `None` when the literal is not a number.
fn neighbours(literal: &str) -> Option<Vec<String>> {
    let trimmed = literal.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        let around = [n.checked_sub(1), n.checked_add(1)];
        return Some(around.into_iter().flatten().map(|v| v.to_string()).collect());
    }

    let n = parse_number(trimmed)?;
    let places = fraction_digits(trimmed);
    let around = [n - 1.0, n + 1.0]
        .into_iter()
        .map(|v| format!("{v:.places$}"))
        .filter(|v| parse_number(v) != Some(n))
        .collect();
    Some(around)
}

/// Digits after the decimal point, ignoring any exponent.
fn fraction_digits(number: &str) -> usize {
    let mantissa = number.split(['e', 'E']).next().unwrap_or(number);
    mantissa
        .split_once('.')
        .map_or(0, |(_, frac)| frac.chars().filter(char::is_ascii_digit).count())
}
