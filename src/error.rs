use thiserror::Error;

use crate::parse::ParseError;
use crate::ValidationError;

/// Unified error type covering parsing, validation, and I/O.
///
/// Returned by convenience constructors like [`RuleBook::from_dsl()`](crate::RuleBook::from_dsl)
/// and [`RuleBook::from_file()`](crate::RuleBook::from_file).
#[derive(Debug, Error)]
pub enum RulestepError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
