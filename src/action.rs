use crate::{Action, ActionError, ActionKind, FieldSnapshot};

/// Apply one action to the running snapshot.
///
/// `navigate` has no snapshot effect. `require` only ever writes `true`.
///
/// # Errors
///
/// Returns [`ActionError`] for action kinds the engine cannot apply or for
/// an action without a target. The snapshot is left untouched in that case.
pub fn apply_action(action: &Action, snapshot: &mut FieldSnapshot) -> Result<(), ActionError> {
    if let ActionKind::Unknown(kind) = &action.kind {
        return Err(ActionError::UnsupportedAction {
            kind: kind.clone(),
            target: action.target_id.clone(),
        });
    }
    if action.target_id.is_empty() {
        return Err(ActionError::MissingTarget {
            kind: action.kind.to_string(),
        });
    }

    let target = action.target_id.clone();
    match action.kind {
        ActionKind::Show => {
            snapshot.visibility.insert(target, true);
        }
        ActionKind::Hide => {
            snapshot.visibility.insert(target, false);
        }
        ActionKind::Enable => {
            snapshot.enabled_state.insert(target, true);
        }
        ActionKind::Disable => {
            snapshot.enabled_state.insert(target, false);
        }
        ActionKind::Require => {
            snapshot.required_state.insert(target, true);
        }
        ActionKind::SetValue => {
            let value = action.value.clone().unwrap_or_default();
            snapshot.field_values.insert(target, value);
        }
        ActionKind::Navigate | ActionKind::Unknown(_) => {}
    }
    Ok(())
}
