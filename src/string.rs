//! String predicates
//!
//! Kind classification plus the two fixed-format encodings the reference
//! recognizes. Both encoding checks accept the empty string, which the
//! anchored patterns themselves do not match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

static BASE64_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9+/]{4})*([A-Za-z0-9+/]{4}|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)$")
        .expect("base64 pattern is valid")
});

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Fa-f0-9]+$").expect("hex pattern is valid"));

/// True iff the value is string-tagged.
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// True iff the value is an empty or well-formed base64 string: groups of
/// four base64-alphabet characters with optional one or two trailing `=`
/// padding characters.
///
/// # Example
///
/// ```rust
/// use kindof::string::is_base64;
/// use kindof::value::Value;
///
/// assert!(is_base64(&Value::from("YQ==")));
/// assert!(is_base64(&Value::from("")));
/// assert!(!is_base64(&Value::from("not base64!")));
/// ```
pub fn is_base64(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty() || BASE64_RE.is_match(s),
        _ => false,
    }
}

/// True iff the value is an empty or hex-encoded string: one or more hex
/// digits, either case.
pub fn is_hex(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty() || HEX_RE.is_match(s),
        _ => false,
    }
}
