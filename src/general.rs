//! General and composite predicates
//!
//! Everything here is total: malformed input yields `false`, never an error.
//!
//! The deep-equality walk in [`is_equal`] recurses without a cycle guard;
//! a self-referential structure would recurse forever. Values built through
//! this crate's constructors are acyclic, so the limitation only matters for
//! hand-assembled graphs.

use std::rc::Rc;

use crate::collection::is_array;
use crate::value::{FunctionValue, TypeTag, Value};

/// True iff the value's `typeof`-style kind equals `name`.
///
/// # Example
///
/// ```rust
/// use kindof::general::is_type;
/// use kindof::value::Value;
///
/// assert!(is_type(&Value::from(1.0), "number"));
/// assert!(is_type(&Value::Null, "object"));
/// assert!(!is_type(&Value::Null, "null"));
/// ```
pub fn is_type(value: &Value, name: &str) -> bool {
    value.type_of() == name
}

/// Synonym for [`is_type`].
pub use self::is_type as is_a;

/// True iff the value is not undefined.
pub fn is_defined(value: &Value) -> bool {
    !matches!(value, Value::Undefined)
}

/// True iff the value is undefined.
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// True iff the value is null.
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// True iff the value is boolean-tagged.
pub fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// True iff the value is the boolean `true`.
pub fn is_true(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// True iff the value is the boolean `false`.
pub fn is_false(value: &Value) -> bool {
    matches!(value, Value::Bool(false))
}

/// True iff the value is date-tagged. Invalid dates still count.
pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// True iff the value is a date with a real (non-NaN) timestamp.
pub fn is_valid_date(value: &Value) -> bool {
    matches!(value, Value::Date(d) if !d.timestamp.is_nan())
}

/// True iff the value is an error object.
pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_))
}

/// True iff the value is a regular expression.
pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp(_))
}

/// True iff the value is object-tagged: a keyed object, not an array,
/// date, or other reference kind.
pub fn is_object(value: &Value) -> bool {
    value.tag() == TypeTag::Object
}

/// True iff the value is a function of any flavor: ordinary, generator, or
/// async.
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// True iff the value is a symbol.
///
/// The variant payload is the extraction guard: no property-spoofed object
/// can inhabit it. [`crate::host::Host::is_symbol`] adds capability gating.
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// True iff the value is a big integer. See [`is_symbol`] on spoofing and
/// capability gating.
pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// True iff the value is empty for its kind: zero length for arrays,
/// arguments, and strings; zero own enumerable keys for objects; falsiness
/// for everything else.
///
/// # Example
///
/// ```rust
/// use kindof::general::is_empty;
/// use kindof::value::Value;
///
/// assert!(is_empty(&Value::array([])));
/// assert!(is_empty(&Value::object::<&str, _>([])));
/// assert!(is_empty(&Value::from(0.0)));
/// assert!(!is_empty(&Value::from(1.0)));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Arguments(args) => args.elements.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Object(o) => o.properties.is_empty(),
        _ => !value.truthy(),
    }
}

/// Deep structural equality.
///
/// Strict equality short-circuits; otherwise the tags must match. Objects
/// compare their own enumerable key sets and recursively their values,
/// arrays compare length and elements from the last index down, functions
/// compare prototype identity, dates compare timestamps. Every other tag is
/// never deep-equal unless caught by the strict check.
///
/// Recursion carries no cycle guard; see the module docs.
///
/// # Example
///
/// ```rust
/// use kindof::general::is_equal;
/// use kindof::value::Value;
///
/// let a = Value::object([("x", Value::array([Value::from(1)]))]);
/// let b = Value::object([("x", Value::array([Value::from(1)]))]);
/// assert!(is_equal(&a, &b));
/// ```
pub fn is_equal(value: &Value, other: &Value) -> bool {
    if value.strict_eq(other) {
        return true;
    }
    if value.tag() != other.tag() {
        return false;
    }
    match (value, other) {
        (Value::Object(a), Value::Object(b)) => {
            for (key, left) in &a.properties {
                match b.properties.get(key) {
                    Some(right) if is_equal(left, right) => {}
                    _ => return false,
                }
            }
            b.properties.keys().all(|key| a.properties.contains_key(key))
        }
        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return false;
            }
            (0..a.len()).rev().all(|index| is_equal(&a[index], &b[index]))
        }
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(&a.prototype, &b.prototype),
        (Value::Date(a), Value::Date(b)) => a.timestamp == b.timestamp,
        _ => false,
    }
}

/// True iff the value is a hash: a plain object built by the base
/// constructor, carrying neither a truthy `nodeType` nor a truthy
/// `setInterval` property (which would mark a DOM- or window-like host
/// object).
pub fn is_hash(value: &Value) -> bool {
    match value {
        Value::Object(o) => {
            o.constructor.is_none()
                && !o.properties.get("nodeType").is_some_and(Value::truthy)
                && !o.properties.get("setInterval").is_some_and(Value::truthy)
        }
        _ => false,
    }
}

/// True iff the value is primitive: every falsy value is, and among truthy
/// values only those whose `typeof` is neither `"object"` nor `"function"`.
pub fn is_primitive(value: &Value) -> bool {
    if !value.truthy() {
        return true;
    }
    if is_object(value) || is_function(value) || is_array(value) {
        return false;
    }
    !matches!(value.type_of(), "object" | "function")
}

/// True iff `host` provides a native implementation of the named
/// capability: the property's kind is `"object"` and truthy, or its kind is
/// none of boolean/number/string/undefined.
///
/// # Example
///
/// ```rust
/// use kindof::general::is_hosted;
/// use kindof::value::Value;
///
/// let host = Value::object([
///     ("fetch", Value::function("fetch")),
///     ("version", Value::from("1.2")),
/// ]);
/// assert!(is_hosted("fetch", &host));
/// assert!(!is_hosted("version", &host));
/// assert!(!is_hosted("missing", &host));
/// ```
pub fn is_hosted(name: &str, host: &Value) -> bool {
    let property = host.own_property(name).unwrap_or(Value::Undefined);
    match property.type_of() {
        "object" => property.truthy(),
        "boolean" | "number" | "string" | "undefined" => false,
        _ => true,
    }
}

/// The instance relation of this value model: an object is an instance of
/// the constructor that built it.
///
/// The model carries no prototype chains, so the relation does not extend
/// to superclasses.
pub fn is_instance(value: &Value, constructor: &Rc<FunctionValue>) -> bool {
    match value {
        Value::Object(o) => o
            .constructor
            .as_ref()
            .is_some_and(|c| Rc::ptr_eq(c, constructor)),
        _ => false,
    }
}
