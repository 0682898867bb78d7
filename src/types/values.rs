use std::collections::BTreeMap;
use std::fmt;

/// A typed test value at the API boundary.
///
/// Form inputs are strings; richer values are normalised to their string
/// form on insertion so that conditions keep string-compare semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// The string a native form input would hold for this value.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(v) => write!(f, "\"{v}\""),
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Hypothetical field values driving one debug run, keyed by field id.
///
/// Supplied by the caller and never mutated by the engine. Reading an
/// unknown field id yields `None`; the condition evaluator treats that as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValueStore {
    values: BTreeMap<String, String>,
}

impl ValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value, consuming and returning the store.
    #[must_use]
    pub fn set(mut self, field_id: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(field_id, value);
        self
    }

    pub fn insert(&mut self, field_id: &str, value: impl Into<FieldValue>) {
        self.values
            .insert(field_id.to_owned(), value.into().into_text());
    }

    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }

    /// A copy of this store with every entry of `other` written over it.
    #[must_use]
    pub fn overlay(&self, other: &BTreeMap<String, String>) -> Self {
        let mut values = self.values.clone();
        values.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ValueStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into().into_text()))
            .collect();
        Self { values }
    }
}
