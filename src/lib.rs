//! # kindof
//!
//! Runtime kind-classification predicates for dynamic values.
//!
//! Every predicate is a pure function answering "is this value of kind X?"
//! over an explicit dynamic [`Value`](value::Value): primitives (boolean,
//! number, string, symbol, big integer), structural shapes (array,
//! array-like, plain object, arguments), and semantic refinements (integer,
//! decimal, parity, divisibility, range membership, emptiness, deep
//! equality, base64/hex encoding).
//!
//! The predicates are organized in four clusters sharing two leaf
//! primitives, the type-tag resolver ([`value::Value::tag`]) and the strict
//! NaN detector ([`number::is_actual_nan`]):
//!
//! - [`number`]: numeric classification and the fallible ordering family;
//! - [`collection`]: array / array-like / arguments shapes;
//! - [`string`]: string kinds and fixed-format encodings;
//! - [`general`]: composite predicates, including deep equality, emptiness,
//!   plain hashes, primitiveness, and hosted capabilities.
//!
//! Environment-dependent checks (symbol/bigint availability, DOM elements,
//! one legacy function-classification shim) live on [`host::Host`], which
//! resolves capabilities once and degrades to `false` when one is absent.
//!
//! ## Quick example
//!
//! ```rust
//! use kindof::prelude::*;
//!
//! assert!(is_even(&Value::from(4.0)));
//! // Infinity satisfies either parity query.
//! assert!(is_even(&Value::from(f64::INFINITY)));
//! assert!(is_odd(&Value::from(f64::INFINITY)));
//!
//! // Orderings reject NaN instead of guessing.
//! assert!(is_gt(&Value::from(f64::NAN), &Value::from(1.0)).is_err());
//!
//! // Deep structural equality.
//! let a = Value::object([("xs", Value::array([Value::from(1), Value::from(2)]))]);
//! let b = Value::object([("xs", Value::array([Value::from(1), Value::from(2)]))]);
//! assert!(is_equal(&a, &b));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "proptest")]
pub mod arbitrary;
pub mod collection;
pub mod combinators;
pub mod error;
pub mod general;
pub mod host;
pub mod number;
pub mod prelude;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod string;
pub mod value;

// Re-exports
pub use error::PredicateError;
pub use host::Host;
pub use value::{TypeTag, Value};
