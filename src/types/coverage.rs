use std::fmt;

use super::evaluation::{RuleEvaluation, RuleStatus};

/// Fraction of evaluated rules that fired for a given input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    pub fired: usize,
    pub total: usize,
    /// `round(fired / total * 100)`, `0` when `total == 0`.
    pub percentage: u8,
}

impl Coverage {
    /// Compute coverage over an evaluation list.
    ///
    /// Only rules that actually ran count towards `total`; a `breakpoint`
    /// record has not been evaluated yet and is left out.
    pub fn from_evaluations(evaluations: &[RuleEvaluation]) -> Self {
        let total = evaluations
            .iter()
            .filter(|e| e.status.was_evaluated())
            .count();
        let fired = evaluations
            .iter()
            .filter(|e| e.status == RuleStatus::Fired)
            .count();
        Self::from_counts(fired, total)
    }

    /// `fired` is clamped to `total`.
    #[must_use]
    pub fn from_counts(fired: usize, total: usize) -> Self {
        let fired = fired.min(total);
        let percentage = if total == 0 {
            0
        } else {
            // fired <= total, so the quotient stays in 0..=100
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            {
                (fired as f64 / total as f64 * 100.0).round() as u8
            }
        };
        Self {
            fired,
            total,
            percentage,
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.fired, self.total, self.percentage)
    }
}
