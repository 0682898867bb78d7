use std::collections::BTreeMap;

use super::values::ValueStore;

/// A synthesized test input designed to flip one condition's outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeCase {
    pub label: String,
    pub description: String,
    /// Field id to synthesized value, ready to load as a value store.
    pub values: BTreeMap<String, String>,
    /// Every value proposed for the condition, the one in `values` first.
    pub probes: Vec<String>,
}

impl EdgeCase {
    /// Overlay this case onto `base`, leaving unrelated fields untouched.
    #[must_use]
    pub fn to_value_store(&self, base: &ValueStore) -> ValueStore {
        base.overlay(&self.values)
    }
}
