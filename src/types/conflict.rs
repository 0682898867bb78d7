use std::fmt;

/// Which piece of field state two rules disagree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConflictKind {
    /// One rule shows the target, another hides it.
    Visibility,
    /// One rule enables the target, another disables it.
    Enabled,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::Visibility => f.write_str("visibility"),
            ConflictKind::Enabled => f.write_str("enabled"),
        }
    }
}

/// Two fired rules writing opposing effects to the same target in one pass.
///
/// `rule_a` is always the rule evaluated first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleConflict {
    pub target_id: String,
    pub kind: ConflictKind,
    pub description: String,
    pub rule_a: String,
    pub rule_b: String,
}

impl fmt::Display for RuleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} conflict on '{}' between '{}' and '{}': {}",
            self.kind, self.target_id, self.rule_a, self.rule_b, self.description
        )
    }
}
