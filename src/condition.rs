use crate::{Condition, ConditionResult, FieldSnapshot, Operator, ValueStore};

/// A condition result plus any anomaly worth surfacing on the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutcome {
    pub result: ConditionResult,
    /// Set for conditions that fail closed, e.g. an unknown operator.
    pub anomaly: Option<String>,
}

/// Read a field's current value: values written by earlier `set-value`
/// actions in the pass take precedence over the caller's input. Unset
/// fields read as `""`.
pub(crate) fn current_value<'a>(
    field_id: &str,
    snapshot: &'a FieldSnapshot,
    values: &'a ValueStore,
) -> &'a str {
    snapshot
        .value(field_id)
        .or_else(|| values.get(field_id))
        .unwrap_or("")
}

/// Evaluate one condition against the live field values of a pass.
///
/// Never fails: unparseable numbers make the comparison `false`, and an
/// unknown operator fails closed with an anomaly message.
#[must_use]
pub fn evaluate_condition(
    condition: &Condition,
    snapshot: &FieldSnapshot,
    values: &ValueStore,
) -> ConditionOutcome {
    let actual = current_value(&condition.field_id, snapshot, values);
    let expected = condition.value.as_deref().unwrap_or("");

    let mut anomaly = None;
    let passed = match &condition.operator {
        Operator::Equals => actual == expected,
        Operator::NotEquals => actual != expected,
        Operator::Contains => actual.contains(expected),
        Operator::NotContains => !actual.contains(expected),
        Operator::GreaterThan => compare_numeric(actual, expected).is_some_and(|(a, b)| a > b),
        Operator::LessThan => compare_numeric(actual, expected).is_some_and(|(a, b)| a < b),
        Operator::IsEmpty => actual.is_empty(),
        Operator::IsNotEmpty => !actual.is_empty(),
        Operator::Unknown(name) => {
            anomaly = Some(format!(
                "unknown operator '{name}' on field '{}'",
                condition.field_id
            ));
            false
        }
    };

    tracing::trace!(
        field = %condition.field_id,
        operator = %condition.operator,
        actual,
        passed,
        "condition evaluated"
    );

    ConditionOutcome {
        result: ConditionResult {
            condition: condition.clone(),
            passed,
            actual_value: actual.to_owned(),
        },
        anomaly,
    }
}

pub(crate) fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn compare_numeric(actual: &str, expected: &str) -> Option<(f64, f64)> {
    Some((parse_number(actual)?, parse_number(expected)?))
}
