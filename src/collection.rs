//! Array, array-like, and arguments predicates
//!
//! Array-likeness is purely structural: any truthy, non-boolean value that
//! owns a finite, non-negative, number-tagged `length` qualifies, regardless
//! of actual array-ness. Strings, functions, and plain objects with a valid
//! `length` all count.

use crate::value::{TypeTag, Value};

/// True iff the value is an array.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// True iff the value is array-like: truthy, not boolean-tagged, and owning
/// a finite, non-negative, number-tagged `length`.
///
/// # Example
///
/// ```rust
/// use kindof::collection::is_array_like;
/// use kindof::value::Value;
///
/// assert!(is_array_like(&Value::array([])));
/// assert!(is_array_like(&Value::object([("length", Value::from(2))])));
/// assert!(!is_array_like(&Value::object([("length", Value::from(-1))])));
/// assert!(!is_array_like(&Value::from(true)));
/// ```
pub fn is_array_like(value: &Value) -> bool {
    if !value.truthy() || matches!(value, Value::Bool(_)) {
        return false;
    }
    match value.length_own_property() {
        Some(len) => len.is_finite() && len >= 0.0,
        None => false,
    }
}

/// True iff the value is an arguments object.
///
/// Accepts the modern form (the `Arguments` tag) and the legacy form: an
/// array-like, object-tagged value that is not an array and carries a
/// function-valued `callee` property.
pub fn is_arguments(value: &Value) -> bool {
    if value.tag() == TypeTag::Arguments {
        return true;
    }
    !is_array(value)
        && is_array_like(value)
        && value.tag() == TypeTag::Object
        && matches!(value.own_property("callee"), Some(Value::Function(_)))
}

/// Synonym for [`is_arguments`].
pub use self::is_arguments as is_args;

/// True iff the value is an array with zero elements.
pub fn is_empty_array(value: &Value) -> bool {
    is_array(value) && value.length_own_property() == Some(0.0)
}

/// True iff the value is an arguments object with length zero.
pub fn is_empty_arguments(value: &Value) -> bool {
    is_arguments(value) && value.length_own_property() == Some(0.0)
}
