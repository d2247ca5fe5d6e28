//! Logical combinators over value predicates
//!
//! The flat predicates in this crate are plain functions from `&Value` to
//! `bool`, which makes them directly composable: any such function is a
//! [`Predicate`], and [`PredicateExt`] chains them with `and`, `or`, and
//! `not`, each returning a concrete zero-cost type.
//!
//! # Example
//!
//! ```rust
//! use kindof::combinators::{Predicate, PredicateExt};
//! use kindof::number::{is_even, is_integer};
//! use kindof::value::Value;
//!
//! let even_integer = is_integer.and(is_even);
//! assert!(even_integer.check(&Value::from(4.0)));
//! assert!(!even_integer.check(&Value::from(3.0)));
//! // Infinity is even but not an integer.
//! assert!(!even_integer.check(&Value::from(f64::INFINITY)));
//! ```

use crate::value::Value;

/// A composable predicate over dynamic values.
pub trait Predicate {
    /// Check whether the value satisfies this predicate.
    fn check(&self, value: &Value) -> bool;
}

// Blanket impl: every `fn(&Value) -> bool` and closure is a predicate.
impl<F> Predicate for F
where
    F: Fn(&Value) -> bool,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// Extension trait chaining predicates with logical operators.
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must hold.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator: both predicates must hold.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator: either predicate must hold.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator: inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !self.0.check(value)
    }
}
