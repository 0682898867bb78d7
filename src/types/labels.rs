use std::collections::BTreeMap;

/// Human-readable labels for field ids, taken from the form schema.
///
/// Only used to render descriptions; evaluation itself works on ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldLabels {
    labels: BTreeMap<String, String>,
}

impl FieldLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field_id: &str, label: &str) {
        self.labels.insert(field_id.to_owned(), label.to_owned());
    }

    /// The label for `field_id`, or the id itself when none is registered.
    #[must_use]
    pub fn label<'a>(&'a self, field_id: &'a str) -> &'a str {
        self.labels.get(field_id).map_or(field_id, String::as_str)
    }

    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.labels.get(field_id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldLabels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
