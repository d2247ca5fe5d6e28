//! Prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use kindof::prelude::*;
//!
//! assert!(is_integer(&Value::from(4.0)));
//! assert!(is_hash(&Value::object([("k", Value::from(1))])));
//! ```

pub use crate::collection::{
    is_arguments, is_array, is_array_like, is_empty_arguments, is_empty_array,
};
pub use crate::combinators::{Predicate, PredicateExt};
pub use crate::error::PredicateError;
pub use crate::general::{
    is_bigint, is_bool, is_date, is_defined, is_empty, is_equal, is_error, is_false, is_function,
    is_hash, is_hosted, is_instance, is_null, is_object, is_primitive, is_regexp, is_symbol,
    is_true, is_type, is_undefined, is_valid_date,
};
pub use crate::host::Host;
pub use crate::number::{
    is_actual_nan, is_decimal, is_divisible_by, is_even, is_ge, is_gt, is_infinite, is_integer,
    is_le, is_lt, is_max, is_min, is_nan, is_number, is_odd, is_within,
};
pub use crate::string::{is_base64, is_hex, is_string};
pub use crate::value::{TypeTag, Value};
