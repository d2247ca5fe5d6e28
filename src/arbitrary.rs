//! Proptest strategies for dynamic values (feature-gated)
//!
//! Enables property-based testing over the whole value domain: the
//! strategies generate acyclic value trees covering every kind, including
//! NaN, the infinities, invalid dates, and empty containers.
//!
//! # Example
//!
//! ```rust,ignore
//! use kindof::arbitrary::arb_value;
//! use kindof::general::is_equal;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn equality_is_reflexive(v in arb_value()) {
//!         prop_assert!(is_equal(&v, &v.clone()));
//!     }
//! }
//! ```

use proptest::prelude::*;

use crate::value::Value;

/// Strategy over leaf (non-container) values.
pub fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        arb_number(),
        "[a-zA-Z0-9 ]{0,8}".prop_map(|s| Value::string(s)),
        any::<i64>().prop_map(|n| Value::BigInt(n as i128)),
        prop::option::of("[a-z]{0,4}").prop_map(|d| Value::symbol(d.as_deref())),
        arb_reference_leaf(),
    ]
}

fn arb_reference_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_timestamp().prop_map(Value::date),
        "[a-z+*]{1,4}".prop_map(|s| Value::regexp(s)),
        "[a-z ]{0,8}".prop_map(|s| Value::error(s)),
        "[a-z]{1,6}".prop_map(|s| Value::function(s)),
    ]
}

fn arb_timestamp() -> impl Strategy<Value = f64> {
    prop_oneof![
        -8_640_000_000_000_000.0..8_640_000_000_000_000.0f64,
        Just(f64::NAN),
    ]
}

fn arb_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<f64>().prop_map(Value::Number),
        Just(Value::Number(f64::NAN)),
        Just(Value::Number(f64::INFINITY)),
        Just(Value::Number(f64::NEG_INFINITY)),
        Just(Value::Number(0.0)),
    ]
}

/// Strategy over arbitrary acyclic value trees.
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|xs| Value::array(xs)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|xs| Value::arguments(xs)),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|pairs| Value::object(pairs)),
        ]
    })
}
