use std::fmt;
use std::str::FromStr;

/// The kind of state mutation an [`Action`] performs when its rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ActionKind {
    Show,
    Hide,
    Enable,
    Disable,
    /// Marks the target required. There is no matching "un-require" action.
    Require,
    SetValue,
    /// Page routing. Recorded for audit, no effect on the field snapshot.
    Navigate,
    Unknown(String),
}

impl ActionKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Show => "show",
            ActionKind::Hide => "hide",
            ActionKind::Enable => "enable",
            ActionKind::Disable => "disable",
            ActionKind::Require => "require",
            ActionKind::SetValue => "set-value",
            ActionKind::Navigate => "navigate",
            ActionKind::Unknown(name) => name,
        }
    }
}

impl FromStr for ActionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "show" => ActionKind::Show,
            "hide" => ActionKind::Hide,
            "enable" => ActionKind::Enable,
            "disable" => ActionKind::Disable,
            "require" => ActionKind::Require,
            "set-value" => ActionKind::SetValue,
            "navigate" => ActionKind::Navigate,
            other => ActionKind::Unknown(other.to_owned()),
        })
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single state mutation applied to a target field when a rule fires.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,
    pub target_id: String,
    /// Payload for `set-value` and `navigate`.
    pub value: Option<String>,
}

impl Action {
    pub fn new(kind: ActionKind, target_id: impl Into<String>) -> Self {
        Self {
            kind,
            target_id: target_id.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{} {} \"{v}\"", self.kind, self.target_id),
            None => write!(f, "{} {}", self.kind, self.target_id),
        }
    }
}

#[must_use]
pub fn show(target: &str) -> Action {
    Action::new(ActionKind::Show, target)
}

#[must_use]
pub fn hide(target: &str) -> Action {
    Action::new(ActionKind::Hide, target)
}

#[must_use]
pub fn enable(target: &str) -> Action {
    Action::new(ActionKind::Enable, target)
}

#[must_use]
pub fn disable(target: &str) -> Action {
    Action::new(ActionKind::Disable, target)
}

#[must_use]
pub fn require(target: &str) -> Action {
    Action::new(ActionKind::Require, target)
}

#[must_use]
pub fn set_value(target: &str, value: impl Into<String>) -> Action {
    Action::new(ActionKind::SetValue, target).with_value(value)
}

#[must_use]
pub fn navigate(target: &str) -> Action {
    Action::new(ActionKind::Navigate, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for name in ["show", "hide", "enable", "disable", "require", "set-value", "navigate"] {
            let kind: ActionKind = name.parse().unwrap();
            assert!(!matches!(kind, ActionKind::Unknown(_)), "{name}");
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn unrecognised_kind_is_kept() {
        let kind: ActionKind = "focus".parse().unwrap();
        assert_eq!(kind, ActionKind::Unknown("focus".into()));
    }

    #[test]
    fn helpers() {
        assert_eq!(show("x"), Action::new(ActionKind::Show, "x"));
        let sv = set_value("country", "US");
        assert_eq!(sv.kind, ActionKind::SetValue);
        assert_eq!(sv.value.as_deref(), Some("US"));
        assert_eq!(navigate("summary").value, None);
    }

    #[test]
    fn display() {
        assert_eq!(hide("consent").to_string(), "hide consent");
        assert_eq!(set_value("a", "1").to_string(), "set-value a \"1\"");
    }
}
