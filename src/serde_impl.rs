//! Serde support for dynamic values (feature-gated)
//!
//! Serialization follows the familiar JSON projection of a dynamic value:
//! undefined, null, symbols, and functions all serialize as null; arrays
//! and arguments as sequences; objects as maps of their own properties;
//! dates as their millisecond timestamp; regular expressions as their
//! source; errors as their message.
//!
//! Deserialization is deliberately absent: a serialized value has lost the
//! identities and kinds (symbol vs null, array vs arguments) a faithful
//! round-trip would need.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) | Value::Function(_) => {
                serializer.serialize_unit()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::BigInt(n) => serializer.serialize_i128(*n),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Arguments(args) => {
                let mut seq = serializer.serialize_seq(Some(args.elements.len()))?;
                for item in &args.elements {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(o) => {
                let mut map = serializer.serialize_map(Some(o.properties.len()))?;
                for (key, value) in &o.properties {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Date(d) => serializer.serialize_f64(d.timestamp),
            Value::RegExp(r) => serializer.serialize_str(&r.source),
            Value::Error(e) => serializer.serialize_str(&e.message),
        }
    }
}
