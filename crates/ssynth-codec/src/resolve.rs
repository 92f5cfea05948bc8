//! Tag resolution pass.
//!
//! Converts a parsed JSON tree into a [`Node`] tree, bottom-up: children
//! are resolved first, then each object is checked for the tuple marker,
//! and every tagged string is replaced by the catalogue entry or instance
//! it names. A name the catalogue does not know aborts the pass.

use indexmap::IndexMap;
use serde_json::{Number, Value};
use ssynth_model::{Catalogue, Instance, KindEntry, Numeric};
use tracing::trace;

use crate::error::{CodecError, Result};
use crate::tags::{self, TaggedRef};
use crate::tuple;

/// A parsed value with references resolved.
#[derive(Debug)]
pub(crate) enum Node<'c> {
    Null,
    Bool(bool),
    Number(Numeric),
    Text(String),
    List(Vec<Node<'c>>),
    Tuple(Vec<Node<'c>>),
    Map(IndexMap<String, Node<'c>>),
    Type(&'c KindEntry),
    Instance(Instance),
}

impl Node<'_> {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "array",
            Self::Tuple(_) => "tuple",
            Self::Map(_) => "object",
            Self::Type(_) => "type reference",
            Self::Instance(_) => "instance reference",
        }
    }

    /// Value as shown in mismatch messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Text(text) => format!("'{text}'"),
            Self::Number(number) => number.to_string(),
            Self::Type(entry) => format!("type reference '{}'", entry.name()),
            other => other.type_name().to_string(),
        }
    }
}

pub(crate) fn resolve(catalogue: &Catalogue, value: Value) -> Result<Node<'_>> {
    let node = match value {
        Value::Null => Node::Null,
        Value::Bool(flag) => Node::Bool(flag),
        Value::Number(number) => Node::Number(numeric(&number)),
        Value::String(text) => resolve_text(catalogue, text)?,
        Value::Array(items) => Node::List(
            items
                .into_iter()
                .map(|item| resolve(catalogue, item))
                .collect::<Result<_>>()?,
        ),
        Value::Object(object) => {
            let fields = object
                .into_iter()
                .map(|(key, value)| Ok((key, resolve(catalogue, value)?)))
                .collect::<Result<IndexMap<_, _>>>()?;
            tuple::unwrap(fields)
        }
    };
    Ok(node)
}

fn resolve_text(catalogue: &Catalogue, text: String) -> Result<Node<'_>> {
    match tags::classify(&text) {
        Some(TaggedRef::Type(name)) => {
            let entry = catalogue
                .resolve_kind(name)
                .map_err(|source| CodecError::Resolution {
                    reference: text.clone(),
                    source,
                })?;
            trace!(kind = name, "resolved type reference");
            Ok(Node::Type(entry))
        }
        Some(TaggedRef::Instance(name)) => {
            let instance =
                catalogue
                    .resolve_instance(name)
                    .map_err(|source| CodecError::Resolution {
                        reference: text.clone(),
                        source,
                    })?;
            trace!(instance = name, "resolved instance reference");
            Ok(Node::Instance(instance))
        }
        None => Ok(Node::Text(text)),
    }
}

/// Integers stay exact; everything else is a float.
fn numeric(number: &Number) -> Numeric {
    match number.as_i64() {
        Some(value) => Numeric::Int(value),
        None => Numeric::Float(number.as_f64().unwrap_or(f64::NAN)),
    }
}
