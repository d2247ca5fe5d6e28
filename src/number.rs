//! Numeric predicates
//!
//! Classification predicates (`is_number`, `is_integer`, `is_even`, ...) are
//! total: a non-number input simply fails the test. The ordering family
//! (`is_ge`, `is_gt`, `is_le`, `is_lt`, `is_within`, `is_max`, `is_min`)
//! instead returns `Result`, rejecting NaN operands with
//! [`PredicateError::InvalidNumber`].
//!
//! Infinity gets deliberate asymmetric treatment, matching the reference
//! semantics this crate preserves:
//!
//! - an infinite value satisfies *both* [`is_even`] and [`is_odd`];
//! - [`is_divisible_by`] is true whenever either operand is infinite;
//! - the strict orderings return `Ok(false)` when either operand is
//!   infinite: infinity is excluded from orderable comparison;
//! - [`is_within`] returns `Ok(true)` when any operand is infinite: range
//!   containment is vacuously satisfied.

use crate::collection::is_array_like;
use crate::error::PredicateError;
use crate::value::{TypeTag, Value};

/// True iff the value is the actual NaN number.
///
/// A strict self-inequality test on the number payload only: no other kind
/// of value is ever NaN here, unlike loose ambient NaN checks that coerce
/// their input first.
///
/// # Example
///
/// ```rust
/// use kindof::number::is_actual_nan;
/// use kindof::value::Value;
///
/// assert!(is_actual_nan(&Value::from(f64::NAN)));
/// assert!(!is_actual_nan(&Value::from("not a number")));
/// assert!(!is_actual_nan(&Value::Undefined));
/// ```
pub fn is_actual_nan(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_nan())
}

/// True iff the value is positive or negative infinity.
pub fn is_infinite(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_infinite())
}

/// True iff the value is number-tagged. NaN and the infinities are numbers.
pub fn is_number(value: &Value) -> bool {
    value.tag() == TypeTag::Number
}

/// True iff the value is a number with no fractional remainder.
///
/// Infinity is not an integer (its remainder modulo 1 is NaN), and neither
/// is NaN.
///
/// # Example
///
/// ```rust
/// use kindof::number::is_integer;
/// use kindof::value::Value;
///
/// assert!(is_integer(&Value::from(4.0)));
/// assert!(!is_integer(&Value::from(4.5)));
/// assert!(!is_integer(&Value::from(f64::INFINITY)));
/// ```
pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_nan() && n % 1.0 == 0.0)
}

/// True iff the value is a finite number with a fractional remainder.
pub fn is_decimal(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite() && n % 1.0 != 0.0)
}

/// True iff the value is an even number, or infinite.
///
/// Infinity satisfies either parity query; see the module docs.
pub fn is_even(value: &Value) -> bool {
    is_infinite(value) || matches!(value, Value::Number(n) if !n.is_nan() && n % 2.0 == 0.0)
}

/// True iff the value is a number with a non-zero remainder modulo 2, or
/// infinite.
///
/// Note this is remainder-based, so `is_odd` holds for 3.5 as well as 3.
pub fn is_odd(value: &Value) -> bool {
    is_infinite(value) || matches!(value, Value::Number(n) if !n.is_nan() && n % 2.0 != 0.0)
}

/// True iff `value` is divisible by `n`.
///
/// Either operand being infinite short-circuits to true. Otherwise both must
/// be real (non-NaN) numbers, the divisor non-zero, and the remainder zero.
///
/// # Example
///
/// ```rust
/// use kindof::number::is_divisible_by;
/// use kindof::value::Value;
///
/// assert!(is_divisible_by(&Value::from(10.0), &Value::from(5.0)));
/// assert!(!is_divisible_by(&Value::from(10.0), &Value::from(0.0)));
/// assert!(is_divisible_by(&Value::from(f64::INFINITY), &Value::from(5.0)));
/// ```
pub fn is_divisible_by(value: &Value, n: &Value) -> bool {
    if is_infinite(value) || is_infinite(n) {
        return true;
    }
    match (value, n) {
        (Value::Number(v), Value::Number(d)) => {
            !v.is_nan() && !d.is_nan() && *d != 0.0 && v % d == 0.0
        }
        _ => false,
    }
}

/// True iff the value is not a usable number: not number-tagged, or not
/// self-equal.
///
/// Broader than [`is_actual_nan`]: a string is `is_nan` but never
/// `is_actual_nan`.
pub fn is_nan(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_nan(),
        _ => true,
    }
}

fn reject_actual_nan(operands: &[&Value]) -> Result<(), PredicateError> {
    if operands.iter().copied().any(is_actual_nan) {
        return Err(PredicateError::InvalidNumber);
    }
    Ok(())
}

/// True iff `value >= other`, with infinity excluded from the ordering.
///
/// Non-number operands coerce numerically through [`Value::to_number`];
/// there is no lexicographic comparison, so `"10"` compares as the number
/// 10 and outranks `"9"`. A string that does not parse coerces to NaN and
/// fails every ordering without erroring (only the actual NaN number
/// errors).
///
/// # Errors
///
/// [`PredicateError::InvalidNumber`] when either operand is the actual NaN.
///
/// # Example
///
/// ```rust
/// use kindof::number::is_ge;
/// use kindof::value::Value;
///
/// assert_eq!(is_ge(&Value::from("10"), &Value::from("9")), Ok(true));
/// assert_eq!(is_ge(&Value::from("pear"), &Value::from("apple")), Ok(false));
/// ```
pub fn is_ge(value: &Value, other: &Value) -> Result<bool, PredicateError> {
    reject_actual_nan(&[value, other])?;
    Ok(!is_infinite(value) && !is_infinite(other) && value.to_number() >= other.to_number())
}

/// True iff `value > other`, with infinity excluded from the ordering.
///
/// Non-number operands coerce numerically; see [`is_ge`].
///
/// # Errors
///
/// [`PredicateError::InvalidNumber`] when either operand is the actual NaN.
pub fn is_gt(value: &Value, other: &Value) -> Result<bool, PredicateError> {
    reject_actual_nan(&[value, other])?;
    Ok(!is_infinite(value) && !is_infinite(other) && value.to_number() > other.to_number())
}

/// True iff `value <= other`, with infinity excluded from the ordering.
///
/// Non-number operands coerce numerically; see [`is_ge`].
///
/// # Errors
///
/// [`PredicateError::InvalidNumber`] when either operand is the actual NaN.
pub fn is_le(value: &Value, other: &Value) -> Result<bool, PredicateError> {
    reject_actual_nan(&[value, other])?;
    Ok(!is_infinite(value) && !is_infinite(other) && value.to_number() <= other.to_number())
}

/// True iff `value < other`, with infinity excluded from the ordering.
///
/// Non-number operands coerce numerically; see [`is_ge`].
///
/// # Errors
///
/// [`PredicateError::InvalidNumber`] when either operand is the actual NaN.
pub fn is_lt(value: &Value, other: &Value) -> Result<bool, PredicateError> {
    reject_actual_nan(&[value, other])?;
    Ok(!is_infinite(value) && !is_infinite(other) && value.to_number() < other.to_number())
}

/// True iff `value` lies within `[start, finish]`, inclusive.
///
/// Any infinite operand makes containment vacuously true.
///
/// # Errors
///
/// [`PredicateError::InvalidNumber`] when any operand is the actual NaN;
/// [`PredicateError::NotNumeric`] when any operand is not number-tagged.
///
/// # Example
///
/// ```rust
/// use kindof::number::is_within;
/// use kindof::value::Value;
///
/// assert_eq!(
///     is_within(&Value::from(5.0), &Value::from(1.0), &Value::from(10.0)),
///     Ok(true)
/// );
/// assert!(is_within(&Value::from(f64::NAN), &Value::from(1.0), &Value::from(10.0)).is_err());
/// ```
pub fn is_within(value: &Value, start: &Value, finish: &Value) -> Result<bool, PredicateError> {
    reject_actual_nan(&[value, start, finish])?;
    if !is_number(value) || !is_number(start) || !is_number(finish) {
        return Err(PredicateError::NotNumeric);
    }
    if is_infinite(value) || is_infinite(start) || is_infinite(finish) {
        return Ok(true);
    }
    let v = value.to_number();
    Ok(v >= start.to_number() && v <= finish.to_number())
}

/// True iff `value` is at least every candidate.
///
/// Candidates are visited from the last index down to the first; the first
/// candidate strictly greater than `value` settles the answer. An empty
/// candidate collection is vacuously true.
///
/// # Errors
///
/// [`PredicateError::InvalidNumber`] when `value` is the actual NaN;
/// [`PredicateError::NotArrayLike`] when `candidates` is not array-like.
///
/// # Example
///
/// ```rust
/// use kindof::number::is_max;
/// use kindof::value::Value;
///
/// let candidates = Value::array([Value::from(1), Value::from(2), Value::from(3)]);
/// assert_eq!(is_max(&Value::from(5), &candidates), Ok(true));
/// assert_eq!(is_max(&Value::from(2), &candidates), Ok(false));
/// assert_eq!(is_max(&Value::from(5), &Value::array([])), Ok(true));
/// ```
pub fn is_max(value: &Value, candidates: &Value) -> Result<bool, PredicateError> {
    scan_candidates(value, candidates, |v, candidate| v < candidate)
}

/// True iff `value` is at most every candidate.
///
/// Same visiting order, error conditions, and vacuous-truth behavior as
/// [`is_max`].
pub fn is_min(value: &Value, candidates: &Value) -> Result<bool, PredicateError> {
    scan_candidates(value, candidates, |v, candidate| v > candidate)
}

/// Synonym for [`is_max`].
pub use self::is_max as is_maximum;
/// Synonym for [`is_min`].
pub use self::is_min as is_minimum;

fn scan_candidates(
    value: &Value,
    candidates: &Value,
    violates: impl Fn(f64, f64) -> bool,
) -> Result<bool, PredicateError> {
    if is_actual_nan(value) {
        return Err(PredicateError::InvalidNumber);
    }
    if !is_array_like(candidates) {
        return Err(PredicateError::NotArrayLike);
    }
    let len = candidates.length_own_property().unwrap_or(0.0) as usize;
    let v = value.to_number();
    let mut index = len;
    while index > 0 {
        index -= 1;
        if violates(v, candidates.element_at(index).to_number()) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_nan_never_coerces() {
        assert!(is_actual_nan(&Value::from(f64::NAN)));
        assert!(!is_actual_nan(&Value::from("NaN")));
        assert!(!is_actual_nan(&Value::Undefined));
        assert!(!is_actual_nan(&Value::Null));
    }

    #[test]
    fn infinity_detection() {
        assert!(is_infinite(&Value::from(f64::INFINITY)));
        assert!(is_infinite(&Value::from(f64::NEG_INFINITY)));
        assert!(!is_infinite(&Value::from(1e308)));
        assert!(!is_infinite(&Value::from("Infinity")));
    }

    #[test]
    fn number_classification() {
        assert!(is_number(&Value::from(0.0)));
        assert!(is_number(&Value::from(f64::NAN)));
        assert!(!is_number(&Value::from("1")));
        assert!(!is_number(&Value::BigInt(1)));
    }

    #[test]
    fn integers_and_decimals_partition_finite_numbers() {
        assert!(is_integer(&Value::from(4.0)));
        assert!(is_integer(&Value::from(-0.0)));
        assert!(!is_integer(&Value::from(4.5)));
        assert!(!is_integer(&Value::from(f64::INFINITY)));
        assert!(!is_integer(&Value::from(f64::NAN)));

        assert!(is_decimal(&Value::from(4.5)));
        assert!(!is_decimal(&Value::from(4.0)));
        assert!(!is_decimal(&Value::from(f64::INFINITY)));
        assert!(!is_decimal(&Value::from(f64::NAN)));
        assert!(!is_decimal(&Value::from("4.5")));
    }

    #[test]
    fn parity() {
        assert!(is_even(&Value::from(4.0)));
        assert!(!is_odd(&Value::from(4.0)));
        assert!(is_odd(&Value::from(3.0)));
        // Remainder-based oddness holds for non-integers too.
        assert!(is_odd(&Value::from(3.5)));
        // Infinity satisfies both parity queries.
        assert!(is_even(&Value::from(f64::INFINITY)));
        assert!(is_odd(&Value::from(f64::INFINITY)));
        assert!(!is_even(&Value::from(f64::NAN)));
        assert!(!is_odd(&Value::from(f64::NAN)));
        assert!(!is_even(&Value::from("4")));
    }

    #[test]
    fn divisibility() {
        assert!(is_divisible_by(&Value::from(10.0), &Value::from(5.0)));
        assert!(!is_divisible_by(&Value::from(10.0), &Value::from(3.0)));
        assert!(!is_divisible_by(&Value::from(10.0), &Value::from(0.0)));
        assert!(is_divisible_by(&Value::from(f64::INFINITY), &Value::from(5.0)));
        assert!(is_divisible_by(&Value::from(10.0), &Value::from(f64::NEG_INFINITY)));
        assert!(!is_divisible_by(&Value::from(f64::NAN), &Value::from(5.0)));
        assert!(!is_divisible_by(&Value::from("10"), &Value::from(5.0)));
    }

    #[test]
    fn loose_nan() {
        assert!(is_nan(&Value::from(f64::NAN)));
        assert!(is_nan(&Value::from("abc")));
        assert!(is_nan(&Value::Undefined));
        assert!(is_nan(&Value::object::<&str, _>([])));
        assert!(!is_nan(&Value::from(0.0)));
    }

    #[test]
    fn orderings_reject_nan() {
        let nan = Value::from(f64::NAN);
        let one = Value::from(1.0);
        assert_eq!(is_ge(&nan, &one), Err(PredicateError::InvalidNumber));
        assert_eq!(is_gt(&one, &nan), Err(PredicateError::InvalidNumber));
        assert_eq!(is_le(&nan, &nan), Err(PredicateError::InvalidNumber));
        assert_eq!(is_lt(&nan, &one), Err(PredicateError::InvalidNumber));
    }

    #[test]
    fn orderings_exclude_infinity() {
        let inf = Value::from(f64::INFINITY);
        let one = Value::from(1.0);
        assert_eq!(is_ge(&inf, &one), Ok(false));
        assert_eq!(is_gt(&inf, &one), Ok(false));
        assert_eq!(is_le(&one, &inf), Ok(false));
        assert_eq!(is_lt(&one, &inf), Ok(false));
    }

    #[test]
    fn orderings_compare_real_numbers() {
        assert_eq!(is_ge(&Value::from(2.0), &Value::from(2.0)), Ok(true));
        assert_eq!(is_gt(&Value::from(3.0), &Value::from(2.0)), Ok(true));
        assert_eq!(is_le(&Value::from(2.0), &Value::from(2.0)), Ok(true));
        assert_eq!(is_lt(&Value::from(1.0), &Value::from(2.0)), Ok(true));
        assert_eq!(is_gt(&Value::from(1.0), &Value::from(2.0)), Ok(false));
    }

    #[test]
    fn orderings_coerce_numerically_never_lexicographically() {
        // Numeric strings compare by their parsed value.
        assert_eq!(is_ge(&Value::from("10"), &Value::from("9")), Ok(true));
        assert_eq!(is_lt(&Value::from("9"), &Value::from("10")), Ok(true));
        assert_eq!(is_gt(&Value::from("2"), &Value::from(10.0)), Ok(false));
        // Unparsable strings coerce to NaN and fail without erroring.
        assert_eq!(is_ge(&Value::from("pear"), &Value::from("apple")), Ok(false));
        assert_eq!(is_le(&Value::from("pear"), &Value::from("apple")), Ok(false));
        // Null coerces to zero, undefined to NaN.
        assert_eq!(is_le(&Value::Null, &Value::from(0.0)), Ok(true));
        assert_eq!(is_ge(&Value::Undefined, &Value::from(0.0)), Ok(false));
    }

    #[test]
    fn within_range() {
        let n = |x: f64| Value::from(x);
        assert_eq!(is_within(&n(5.0), &n(1.0), &n(10.0)), Ok(true));
        assert_eq!(is_within(&n(1.0), &n(1.0), &n(10.0)), Ok(true));
        assert_eq!(is_within(&n(11.0), &n(1.0), &n(10.0)), Ok(false));
        // Any infinite operand makes containment vacuous.
        assert_eq!(is_within(&n(f64::INFINITY), &n(1.0), &n(10.0)), Ok(true));
        assert_eq!(is_within(&n(50.0), &n(f64::NEG_INFINITY), &n(10.0)), Ok(true));
        assert_eq!(
            is_within(&n(f64::NAN), &n(1.0), &n(10.0)),
            Err(PredicateError::InvalidNumber)
        );
        assert_eq!(
            is_within(&Value::from("5"), &n(1.0), &n(10.0)),
            Err(PredicateError::NotNumeric)
        );
    }

    #[test]
    fn max_and_min() {
        let candidates = Value::array([Value::from(1), Value::from(2), Value::from(3)]);
        assert_eq!(is_max(&Value::from(5), &candidates), Ok(true));
        assert_eq!(is_max(&Value::from(3), &candidates), Ok(true));
        assert_eq!(is_max(&Value::from(2), &candidates), Ok(false));
        assert_eq!(is_min(&Value::from(1), &candidates), Ok(true));
        assert_eq!(is_min(&Value::from(2), &candidates), Ok(false));
    }

    #[test]
    fn max_and_min_vacuous_and_errors() {
        assert_eq!(is_max(&Value::from(5), &Value::array([])), Ok(true));
        assert_eq!(is_min(&Value::from(5), &Value::array([])), Ok(true));
        assert_eq!(
            is_max(&Value::from(f64::NAN), &Value::array([Value::from(1)])),
            Err(PredicateError::InvalidNumber)
        );
        assert_eq!(
            is_min(&Value::from(5), &Value::from(7.0)),
            Err(PredicateError::NotArrayLike)
        );
    }

    #[test]
    fn max_accepts_array_like_candidates() {
        // A plain object with a valid own length is a legitimate candidate
        // collection.
        let arraylike = Value::object([
            ("0", Value::from(4)),
            ("1", Value::from(9)),
            ("length", Value::from(2)),
        ]);
        assert_eq!(is_max(&Value::from(9), &arraylike), Ok(true));
        assert_eq!(is_max(&Value::from(8), &arraylike), Ok(false));
    }
}
