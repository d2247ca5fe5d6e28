//! Error type for the fallible comparison predicates
//!
//! Almost every predicate in this crate is total: malformed input yields
//! `false`. The ordering family is the exception: asking whether NaN is
//! greater than something has no answer, so those predicates return
//! `Result<bool, PredicateError>` and never silently coerce.

use std::fmt;

/// The ways a comparison predicate can reject its arguments.
///
/// # Examples
///
/// ```rust
/// use kindof::error::PredicateError;
/// use kindof::number::is_gt;
/// use kindof::value::Value;
///
/// let err = is_gt(&Value::from(f64::NAN), &Value::from(1.0)).unwrap_err();
/// assert_eq!(err, PredicateError::InvalidNumber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateError {
    /// A required numeric operand was the actual NaN value.
    InvalidNumber,
    /// The candidates argument of a max/min test was not array-like.
    NotArrayLike,
    /// A range-test operand was not number-tagged.
    NotNumeric,
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateError::InvalidNumber => write!(f, "NaN is not a valid value"),
            PredicateError::NotArrayLike => write!(f, "second argument must be array-like"),
            PredicateError::NotNumeric => write!(f, "all arguments must be numbers"),
        }
    }
}

impl std::error::Error for PredicateError {}
