//! Dynamic value model and type-tag resolution
//!
//! Every predicate in this crate classifies a [`Value`]: an explicit dynamic
//! value carrying its own runtime kind, the way a dynamically-typed host
//! represents data. Reference kinds (arrays, objects, functions, dates, ...)
//! are shared behind `Rc`, so cloning a `Value` clones a handle, not the
//! underlying data. Two clones of the same array are *identical* in the
//! [`Value::strict_eq`] sense, while two separately built arrays are not.
//!
//! The type tag is recomputed on every [`Value::tag`] call from the enum
//! discriminant alone. Property contents can never influence it, which is
//! what makes the resolver immune to spoofed classifications.
//!
//! # Example
//!
//! ```rust
//! use kindof::value::{TypeTag, Value};
//!
//! let v = Value::array([Value::from(1), Value::from(2)]);
//! assert_eq!(v.tag(), TypeTag::Array);
//! assert_eq!(v.tag().as_str(), "Array");
//! assert_eq!(v.type_of(), "object");
//! ```

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Canonical intrinsic classification of a [`Value`].
///
/// The vocabulary matches the classic `Object.prototype.toString` class
/// names: `tag.as_str()` yields `"Array"`, `"Object"`, `"Number"`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// The undefined value.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Boolean,
    /// A double-precision float, including NaN and the infinities.
    Number,
    /// A string.
    String,
    /// A unique symbol.
    Symbol,
    /// An arbitrary-precision integer.
    BigInt,
    /// An array of values.
    Array,
    /// A keyed object.
    Object,
    /// An arguments object.
    Arguments,
    /// An ordinary function.
    Function,
    /// A generator function.
    GeneratorFunction,
    /// An async function.
    AsyncFunction,
    /// A date, held as a millisecond timestamp.
    Date,
    /// A regular expression.
    RegExp,
    /// An error object.
    Error,
}

impl TypeTag {
    /// The tag as its canonical class-name string.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "Undefined",
            TypeTag::Null => "Null",
            TypeTag::Boolean => "Boolean",
            TypeTag::Number => "Number",
            TypeTag::String => "String",
            TypeTag::Symbol => "Symbol",
            TypeTag::BigInt => "BigInt",
            TypeTag::Array => "Array",
            TypeTag::Object => "Object",
            TypeTag::Arguments => "Arguments",
            TypeTag::Function => "Function",
            TypeTag::GeneratorFunction => "GeneratorFunction",
            TypeTag::AsyncFunction => "AsyncFunction",
            TypeTag::Date => "Date",
            TypeTag::RegExp => "RegExp",
            TypeTag::Error => "Error",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function flavor, reflected in the type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnFlavor {
    /// An ordinary function.
    Normal,
    /// A generator function.
    Generator,
    /// An async function.
    Async,
}

/// A function value.
///
/// Functions carry no executable body in this model; what matters for
/// classification and equality is their flavor, their declared parameter
/// count (the own `length` property), and the identity of their `prototype`
/// object. Two function handles are deep-equal exactly when their prototypes
/// are the same allocation.
#[derive(Debug)]
pub struct FunctionValue {
    /// Function name, if any.
    pub name: Option<String>,
    /// Ordinary, generator, or async.
    pub flavor: FnFlavor,
    /// Declared parameter count, exposed as the own `length` property.
    pub arity: usize,
    /// The prototype object; its identity carries function equality and the
    /// instance relation.
    pub prototype: Rc<ObjectValue>,
}

impl FunctionValue {
    /// Build an ordinary zero-argument function with a fresh prototype.
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Self::with_flavor(name, FnFlavor::Normal)
    }

    /// Build a zero-argument function of the given flavor with a fresh
    /// prototype.
    pub fn with_flavor(name: impl Into<String>, flavor: FnFlavor) -> Rc<Self> {
        Rc::new(FunctionValue {
            name: Some(name.into()),
            flavor,
            arity: 0,
            prototype: Rc::new(ObjectValue::default()),
        })
    }
}

/// A keyed object: insertion-ordered own enumerable properties plus the
/// constructor that produced it.
///
/// A `constructor` of `None` means the plain base-object constructor, an
/// object literal. Anything else marks a class instance, which
/// [`crate::general::is_hash`] rejects.
#[derive(Debug, Default)]
pub struct ObjectValue {
    /// Own enumerable properties, in insertion order.
    pub properties: IndexMap<String, Value>,
    /// The constructor this object was built from; `None` for plain objects.
    pub constructor: Option<Rc<FunctionValue>>,
}

/// An arguments object: positional elements plus the optional `callee`.
#[derive(Debug)]
pub struct ArgumentsValue {
    /// The captured positional arguments.
    pub elements: Vec<Value>,
    /// The called function, when the environment exposes it.
    pub callee: Option<Rc<FunctionValue>>,
}

/// A symbol. Symbols are compared by identity, never by description.
#[derive(Debug)]
pub struct SymbolValue {
    /// Optional human-readable description.
    pub description: Option<String>,
}

/// A date, held as a millisecond timestamp. A NaN timestamp is an invalid
/// date.
#[derive(Debug)]
pub struct DateValue {
    /// Milliseconds since the epoch; NaN when invalid.
    pub timestamp: f64,
}

/// A regular expression value. Only its source participates in this crate;
/// the pattern is never compiled or executed.
#[derive(Debug)]
pub struct RegExpValue {
    /// The pattern source text.
    pub source: String,
}

/// An error value.
#[derive(Debug)]
pub struct ErrorValue {
    /// The error message.
    pub message: String,
}

/// A dynamic value: the input domain of every predicate in this crate.
#[derive(Debug, Clone)]
pub enum Value {
    /// The undefined value.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, including NaN and the infinities.
    Number(f64),
    /// A string.
    String(Rc<str>),
    /// A symbol.
    Symbol(Rc<SymbolValue>),
    /// An arbitrary-precision integer.
    BigInt(i128),
    /// An array.
    Array(Rc<Vec<Value>>),
    /// A keyed object.
    Object(Rc<ObjectValue>),
    /// An arguments object.
    Arguments(Rc<ArgumentsValue>),
    /// A function.
    Function(Rc<FunctionValue>),
    /// A date.
    Date(Rc<DateValue>),
    /// A regular expression.
    RegExp(Rc<RegExpValue>),
    /// An error object.
    Error(Rc<ErrorValue>),
}

impl Value {
    /// Build a string value.
    pub fn string(s: impl AsRef<str>) -> Value {
        Value::String(Rc::from(s.as_ref()))
    }

    /// Build an array from its elements.
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Value {
        Value::Array(Rc::new(elements.into_iter().collect()))
    }

    /// Build an arguments object (without a `callee`).
    pub fn arguments(elements: impl IntoIterator<Item = Value>) -> Value {
        Value::Arguments(Rc::new(ArgumentsValue {
            elements: elements.into_iter().collect(),
            callee: None,
        }))
    }

    /// Build a plain object from key/value pairs, preserving insertion order.
    pub fn object<K, I>(pairs: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Rc::new(ObjectValue {
            properties: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            constructor: None,
        }))
    }

    /// Build an object constructed by `constructor` from key/value pairs.
    pub fn instance_of<K, I>(constructor: &Rc<FunctionValue>, pairs: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Rc::new(ObjectValue {
            properties: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            constructor: Some(Rc::clone(constructor)),
        }))
    }

    /// Build a symbol with an optional description.
    pub fn symbol(description: Option<&str>) -> Value {
        Value::Symbol(Rc::new(SymbolValue {
            description: description.map(str::to_owned),
        }))
    }

    /// Build a date from a millisecond timestamp. NaN makes an invalid date.
    pub fn date(timestamp: f64) -> Value {
        Value::Date(Rc::new(DateValue { timestamp }))
    }

    /// Build a regular expression value from its source text.
    pub fn regexp(source: impl Into<String>) -> Value {
        Value::RegExp(Rc::new(RegExpValue {
            source: source.into(),
        }))
    }

    /// Build an error value.
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(Rc::new(ErrorValue {
            message: message.into(),
        }))
    }

    /// Build an ordinary named function with a fresh prototype.
    pub fn function(name: impl Into<String>) -> Value {
        Value::Function(FunctionValue::new(name))
    }

    /// Resolve the value's intrinsic type tag.
    ///
    /// Derived from the enum discriminant alone, so no property content or
    /// constructor substitution can alter it.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Symbol(_) => TypeTag::Symbol,
            Value::BigInt(_) => TypeTag::BigInt,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
            Value::Arguments(_) => TypeTag::Arguments,
            Value::Function(f) => match f.flavor {
                FnFlavor::Normal => TypeTag::Function,
                FnFlavor::Generator => TypeTag::GeneratorFunction,
                FnFlavor::Async => TypeTag::AsyncFunction,
            },
            Value::Date(_) => TypeTag::Date,
            Value::RegExp(_) => TypeTag::RegExp,
            Value::Error(_) => TypeTag::Error,
        }
    }

    /// The value's `typeof`-style kind string.
    ///
    /// Note the classic quirk: null reports `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Function(_) => "function",
            Value::Array(_)
            | Value::Object(_)
            | Value::Arguments(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Error(_) => "object",
        }
    }

    /// Truthiness: false for undefined, null, `false`, zero, NaN, the empty
    /// string, and the zero big integer; true for everything else, including
    /// every reference kind.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::BigInt(n) => *n != 0,
            Value::Symbol(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Arguments(_)
            | Value::Function(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Error(_) => true,
        }
    }

    /// Strict (`===`-style) equality: primitives by value, reference kinds
    /// by handle identity. NaN is not strictly equal to itself.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Arguments(a), Value::Arguments(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The value's own `length` property, when it has one that is
    /// number-tagged.
    ///
    /// Arrays and arguments report their element count, strings their char
    /// count, functions their arity. An object reports its own `"length"`
    /// key only when that key holds a number. Everything else has no own
    /// `length` at all.
    pub fn length_own_property(&self) -> Option<f64> {
        match self {
            Value::Array(items) => Some(items.len() as f64),
            Value::Arguments(args) => Some(args.elements.len() as f64),
            Value::String(s) => Some(s.chars().count() as f64),
            Value::Function(f) => Some(f.arity as f64),
            Value::Object(o) => match o.properties.get("length") {
                Some(Value::Number(n)) => Some(*n),
                _ => None,
            },
            _ => None,
        }
    }

    /// Look up an own property by name. Used by the hosted-capability and
    /// arguments predicates; only properties this model actually stores are
    /// visible.
    pub fn own_property(&self, name: &str) -> Option<Value> {
        match self {
            Value::Object(o) => o.properties.get(name).cloned(),
            Value::Arguments(args) if name == "callee" => {
                args.callee.clone().map(Value::Function)
            }
            _ if name == "length" => self.length_own_property().map(Value::Number),
            _ => None,
        }
    }

    /// Indexed element access for array-like iteration. Anything without a
    /// notion of elements yields undefined, as a missing index does.
    pub fn element_at(&self, index: usize) -> Value {
        match self {
            Value::Array(items) => items.get(index).cloned().unwrap_or(Value::Undefined),
            Value::Arguments(args) => {
                args.elements.get(index).cloned().unwrap_or(Value::Undefined)
            }
            Value::String(s) => match s.chars().nth(index) {
                Some(c) => Value::string(c.to_string()),
                None => Value::Undefined,
            },
            Value::Object(o) => o
                .properties
                .get(index.to_string().as_str())
                .cloned()
                .unwrap_or(Value::Undefined),
            _ => Value::Undefined,
        }
    }

    /// Loose numeric coercion, used by the ordering predicates: undefined
    /// coerces to NaN, null to 0, booleans to 0/1, strings parse (the empty
    /// string is 0), dates expose their timestamp, and every other reference
    /// kind is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::BigInt(n) => *n as f64,
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed {
                    "" => 0.0,
                    "Infinity" | "+Infinity" => f64::INFINITY,
                    "-Infinity" => f64::NEG_INFINITY,
                    _ => trimmed.parse::<f64>().unwrap_or(f64::NAN),
                }
            }
            Value::Date(d) => d.timestamp,
            Value::Symbol(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Arguments(_)
            | Value::Function(_)
            | Value::RegExp(_)
            | Value::Error(_) => f64::NAN,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::string(s)
    }
}
