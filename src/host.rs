//! Host-environment capability model
//!
//! Some predicates only make sense relative to a host environment: whether
//! the symbol or big-integer primitive exists at all, whether there is a DOM
//! element type, and one narrow compatibility shim for a host global whose
//! `typeof` historically misreported. [`Host`] resolves those capabilities
//! once at construction; a predicate whose capability is absent degrades to
//! `false`, never to an error.

use std::rc::Rc;

use crate::general;
use crate::value::{FunctionValue, Value};

/// A host environment's capabilities, resolved once at construction.
///
/// # Example
///
/// ```rust
/// use kindof::host::Host;
/// use kindof::value::Value;
///
/// let sym = Value::symbol(Some("k"));
/// assert!(Host::full().is_symbol(&sym));
/// assert!(!Host::bare().is_symbol(&sym));
/// ```
#[derive(Debug, Clone)]
pub struct Host {
    symbols: bool,
    bigints: bool,
    element_class: Option<Rc<FunctionValue>>,
    alert: Option<Value>,
}

impl Default for Host {
    fn default() -> Self {
        Host::full()
    }
}

impl Host {
    /// A host exposing every primitive kind, with no DOM.
    pub fn full() -> Self {
        Host {
            symbols: true,
            bigints: true,
            element_class: None,
            alert: None,
        }
    }

    /// A host exposing nothing optional.
    pub fn bare() -> Self {
        Host {
            symbols: false,
            bigints: false,
            element_class: None,
            alert: None,
        }
    }

    /// Register the host's element type, enabling [`Host::is_element`].
    pub fn with_element_class(mut self, class: Rc<FunctionValue>) -> Self {
        self.element_class = Some(class);
        self
    }

    /// Register the host's alert-like global for the function-classification
    /// shim.
    pub fn with_alert(mut self, alert: Value) -> Self {
        self.alert = Some(alert);
        self
    }

    /// True iff this host has the symbol primitive and the value is a
    /// symbol.
    pub fn is_symbol(&self, value: &Value) -> bool {
        self.symbols && general::is_symbol(value)
    }

    /// True iff this host has the big-integer primitive and the value is a
    /// big integer.
    pub fn is_bigint(&self, value: &Value) -> bool {
        self.bigints && general::is_bigint(value)
    }

    /// True iff the value is a defined instance of this host's element type
    /// with a `nodeType` of 1. Always false on a host without an element
    /// type.
    pub fn is_element(&self, value: &Value) -> bool {
        let Some(class) = &self.element_class else {
            return false;
        };
        general::is_defined(value)
            && general::is_instance(value, class)
            && value
                .own_property("nodeType")
                .is_some_and(|n| n.strict_eq(&Value::Number(1.0)))
    }

    /// Function classification with the legacy alert shim: the registered
    /// alert reference always classifies as a function, whatever its tag.
    ///
    /// The shim is a narrow compatibility workaround for hosts whose alert
    /// global misreported its `typeof`; it is not a general mechanism for
    /// forcing classifications.
    pub fn is_function(&self, value: &Value) -> bool {
        if self.alert.as_ref().is_some_and(|a| a.strict_eq(value)) {
            return true;
        }
        general::is_function(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_gating() {
        let sym = Value::symbol(None);
        let big = Value::BigInt(9);
        assert!(Host::full().is_symbol(&sym));
        assert!(Host::full().is_bigint(&big));
        assert!(!Host::bare().is_symbol(&sym));
        assert!(!Host::bare().is_bigint(&big));
        // Gating never turns a non-member into a member.
        assert!(!Host::full().is_symbol(&big));
        assert!(!Host::full().is_bigint(&sym));
    }

    #[test]
    fn default_is_full() {
        assert!(Host::default().is_symbol(&Value::symbol(None)));
    }

    #[test]
    fn elements() {
        let element_class = FunctionValue::new("HTMLElement");
        let host = Host::full().with_element_class(Rc::clone(&element_class));

        let div = Value::instance_of(&element_class, [("nodeType", Value::from(1))]);
        assert!(host.is_element(&div));

        // Wrong nodeType, wrong class, or no element type at all.
        let text = Value::instance_of(&element_class, [("nodeType", Value::from(3))]);
        assert!(!host.is_element(&text));
        let plain = Value::object([("nodeType", Value::from(1))]);
        assert!(!host.is_element(&plain));
        assert!(!Host::full().is_element(&div));
        assert!(!host.is_element(&Value::Undefined));
    }

    #[test]
    fn alert_shim() {
        let alert = Value::object([("native", Value::from(true))]);
        let host = Host::full().with_alert(alert.clone());

        // The registered reference classifies as a function despite its tag.
        assert!(host.is_function(&alert));
        // Only that exact reference does.
        assert!(!host.is_function(&Value::object([("native", Value::from(true))])));
        // Ordinary functions still classify.
        assert!(host.is_function(&Value::function("f")));
        assert!(Host::bare().is_function(&Value::function("f")));
        assert!(!Host::bare().is_function(&alert));
    }
}
