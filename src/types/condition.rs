use std::fmt;
use std::str::FromStr;

/// Comparison operators a condition can apply to a field's current value.
///
/// Textual forms are the kebab-case names used by form authoring tools
/// (`"greater-than"`, `"is-not-empty"`, ...). Names the engine does not
/// recognise are kept verbatim in [`Operator::Unknown`] so that they can be
/// reported at evaluation time instead of being rejected on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
    Unknown(String),
}

impl Operator {
    /// Whether the operator ignores the condition's comparison value.
    #[must_use]
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not-equals",
            Operator::Contains => "contains",
            Operator::NotContains => "not-contains",
            Operator::GreaterThan => "greater-than",
            Operator::LessThan => "less-than",
            Operator::IsEmpty => "is-empty",
            Operator::IsNotEmpty => "is-not-empty",
            Operator::Unknown(name) => name,
        }
    }
}

impl FromStr for Operator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "equals" => Operator::Equals,
            "not-equals" => Operator::NotEquals,
            "contains" => Operator::Contains,
            "not-contains" => Operator::NotContains,
            "greater-than" => Operator::GreaterThan,
            "less-than" => Operator::LessThan,
            "is-empty" => Operator::IsEmpty,
            "is-not-empty" => Operator::IsNotEmpty,
            other => Operator::Unknown(other.to_owned()),
        })
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_owned()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comparison against one field's current value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub field_id: String,
    pub operator: Operator,
    /// Comparison literal. `None` for unary operators.
    pub value: Option<String>,
}

impl Condition {
    pub fn new(field_id: impl Into<String>, operator: Operator, value: Option<String>) -> Self {
        Self {
            field_id: field_id.into(),
            operator,
            value,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) if !self.operator.is_unary() => {
                write!(f, "{} {} \"{v}\"", self.field_id, self.operator)
            }
            _ => write!(f, "{} {}", self.field_id, self.operator),
        }
    }
}

/// Create a condition builder for the given field id.
///
/// ```
/// use rulestep::field;
///
/// let adult = field("age").greater_than("18");
/// assert_eq!(adult.to_string(), "age greater-than \"18\"");
/// ```
#[must_use]
pub fn field(id: &str) -> FieldCondition {
    FieldCondition { id: id.to_owned() }
}

/// Intermediate builder for conditions.
/// Created by [`field()`]; requires an operator method to produce a [`Condition`].
#[derive(Debug, Clone)]
pub struct FieldCondition {
    id: String,
}

impl FieldCondition {
    fn binary(self, operator: Operator, value: impl Into<String>) -> Condition {
        Condition {
            field_id: self.id,
            operator,
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn equals(self, value: impl Into<String>) -> Condition {
        self.binary(Operator::Equals, value)
    }

    #[must_use]
    pub fn not_equals(self, value: impl Into<String>) -> Condition {
        self.binary(Operator::NotEquals, value)
    }

    #[must_use]
    pub fn contains(self, value: impl Into<String>) -> Condition {
        self.binary(Operator::Contains, value)
    }

    #[must_use]
    pub fn not_contains(self, value: impl Into<String>) -> Condition {
        self.binary(Operator::NotContains, value)
    }

    #[must_use]
    pub fn greater_than(self, value: impl Into<String>) -> Condition {
        self.binary(Operator::GreaterThan, value)
    }

    #[must_use]
    pub fn less_than(self, value: impl Into<String>) -> Condition {
        self.binary(Operator::LessThan, value)
    }

    #[must_use]
    pub fn is_empty(self) -> Condition {
        Condition {
            field_id: self.id,
            operator: Operator::IsEmpty,
            value: None,
        }
    }

    #[must_use]
    pub fn is_not_empty(self) -> Condition {
        Condition {
            field_id: self.id,
            operator: Operator::IsNotEmpty,
            value: None,
        }
    }
}

/// Outcome of evaluating one [`Condition`], kept for the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionResult {
    pub condition: Condition,
    pub passed: bool,
    /// The raw value read at evaluation time, `""` when the field was unset.
    pub actual_value: String,
}
