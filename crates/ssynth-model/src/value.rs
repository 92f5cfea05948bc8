//! Typed parameter values.
//!
//! A [`ParamValue`] is anything a transformation constructor can accept:
//! primitives, ordered sequences, tuples, nested mappings, other
//! transformations, and references to zero-argument instances.

use std::collections::BTreeMap;
use std::fmt;

use crate::instance::Instance;
use crate::transformers::Transformer;

/// A number that keeps integers exact.
///
/// Integer bounds such as `lower=0` must read back as `0`, never `0.0`,
/// so integers and floats are carried separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A constructor argument or a live attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(Numeric),
    Text(String),
    /// Variable-length ordered sequence.
    List(Vec<ParamValue>),
    /// Fixed-arity ordered sequence. Kept distinct from [`ParamValue::List`].
    Tuple(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
    Transformer(Box<Transformer>),
    Instance(Instance),
}

impl ParamValue {
    /// Short name of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(Numeric::Int(_)) => "integer",
            Self::Number(Numeric::Float(_)) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Map(_) => "mapping",
            Self::Transformer(_) => "transformer",
            Self::Instance(_) => "instance",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_numeric(&self) -> Option<Numeric> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[ParamValue]> {
        match self {
            Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Numeric> for ParamValue {
    fn from(value: Numeric) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(Numeric::Int(value))
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(Numeric::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(Numeric::Float(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Transformer> for ParamValue {
    fn from(value: Transformer) -> Self {
        Self::Transformer(Box::new(value))
    }
}

impl From<Instance> for ParamValue {
    fn from(value: Instance) -> Self {
        Self::Instance(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
