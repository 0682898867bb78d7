use std::collections::BTreeMap;

/// Accumulated field state produced by a pass over the rule list.
///
/// Starts empty; an absent entry means "default / unset". Entries are
/// written in rule order as actions fire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSnapshot {
    pub field_values: BTreeMap<String, String>,
    pub visibility: BTreeMap<String, bool>,
    pub required_state: BTreeMap<String, bool>,
    pub enabled_state: BTreeMap<String, bool>,
}

impl FieldSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_values.is_empty()
            && self.visibility.is_empty()
            && self.required_state.is_empty()
            && self.enabled_state.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self, field_id: &str) -> Option<bool> {
        self.visibility.get(field_id).copied()
    }

    #[must_use]
    pub fn is_required(&self, field_id: &str) -> Option<bool> {
        self.required_state.get(field_id).copied()
    }

    #[must_use]
    pub fn is_enabled(&self, field_id: &str) -> Option<bool> {
        self.enabled_state.get(field_id).copied()
    }

    #[must_use]
    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.field_values.get(field_id).map(String::as_str)
    }
}
