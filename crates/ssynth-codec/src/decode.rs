//! Wire text to constraints.
//!
//! A decode call runs parse, tag resolution, envelope validation and
//! reconstruction in that order. The first failure ends the call.

use indexmap::IndexMap;
use serde_json::Value;
use ssynth_model::{Arguments, Constraints, ParamValue, Transform, Transformer};
use tracing::{debug, warn};

use crate::codec::Codec;
use crate::error::{CodecError, Result, SchemaError};
use crate::resolve::{Node, resolve};
use crate::tags::{CONSTRAINTS_KEY, MODULE_KEY, PARAMS_KEY, TYPE_KEY, VERSION_KEY};

impl Codec<'_> {
    /// Parse an envelope and rebuild every column's transformation.
    pub fn decode(&self, text: &str) -> Result<Constraints> {
        let value: Value = serde_json::from_str(text)?;
        self.decode_value(value)
    }

    /// Same as [`Codec::decode`], starting from an already-parsed tree.
    pub fn decode_value(&self, value: Value) -> Result<Constraints> {
        let root = resolve(self.catalogue, value)?;
        let columns = self.validate_envelope(root)?;
        debug!(columns = columns.len(), "reconstructing constraints");
        reconstruct_columns(columns)
    }

    /// Parse a bare constraints mapping, without an envelope.
    ///
    /// Unlike [`Codec::decode`], no module or version check is made.
    pub fn read_constraints(&self, text: &str) -> Result<Constraints> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(CodecError::InputType {
                found: json_type_name(&value),
            });
        }
        match resolve(self.catalogue, value)? {
            Node::Map(columns) => reconstruct_columns(columns),
            other => Err(CodecError::InputType {
                found: other.type_name(),
            }),
        }
    }

    fn validate_envelope<'c>(&self, root: Node<'c>) -> Result<IndexMap<String, Node<'c>>> {
        let mut envelope = match root {
            Node::Map(envelope) => envelope,
            other => {
                return Err(SchemaError::NotAnObject {
                    found: other.type_name(),
                }
                .into());
            }
        };

        let expected_module = self.options.module.as_str();
        match envelope.shift_remove(MODULE_KEY) {
            Some(Node::Text(module)) if module == expected_module => {}
            Some(other) => {
                warn!(expected = expected_module, found = %other.describe(), "module mismatch");
                return Err(SchemaError::ModuleMismatch {
                    expected: expected_module.to_string(),
                    found: other.describe(),
                }
                .into());
            }
            None => return Err(SchemaError::MissingKey { key: MODULE_KEY }.into()),
        }

        let expected_version = self.options.library_version.as_str();
        match envelope.shift_remove(VERSION_KEY) {
            Some(Node::Text(version)) if version == expected_version => {}
            Some(other) => {
                warn!(expected = expected_version, found = %other.describe(), "version mismatch");
                return Err(SchemaError::VersionMismatch {
                    expected: expected_version.to_string(),
                    found: other.describe(),
                }
                .into());
            }
            None => return Err(SchemaError::MissingKey { key: VERSION_KEY }.into()),
        }

        match envelope.shift_remove(CONSTRAINTS_KEY) {
            Some(Node::Map(columns)) => Ok(columns),
            Some(other) => Err(SchemaError::ConstraintsNotObject {
                found: other.type_name(),
            }
            .into()),
            None => Err(SchemaError::MissingKey {
                key: CONSTRAINTS_KEY,
            }
            .into()),
        }
    }
}

fn reconstruct_columns(columns: IndexMap<String, Node<'_>>) -> Result<Constraints> {
    columns
        .into_iter()
        .map(|(column, node)| {
            let transformer = reconstruct_descriptor(&column, node)?;
            debug!(column = %column, kind = transformer.kind_name(), "reconstructed column");
            Ok((column, transformer))
        })
        .collect()
}

/// Build the transformation a `{"type", "params"}` object describes.
///
/// A mapping of params is passed as named arguments; anything else is
/// passed as the single positional argument.
fn reconstruct_descriptor(column: &str, node: Node<'_>) -> Result<Transformer> {
    let mut fields = match node {
        Node::Map(fields) => fields,
        other => {
            return Err(CodecError::malformed(
                column,
                format!("expected a descriptor object, found {}", other.type_name()),
            ));
        }
    };

    let entry = match fields.shift_remove(TYPE_KEY) {
        Some(Node::Type(entry)) => entry,
        Some(other) => {
            return Err(CodecError::malformed(
                column,
                format!("'type' must be a type reference, found {}", other.describe()),
            ));
        }
        None => return Err(CodecError::malformed(column, "missing 'type'")),
    };
    let params = fields.shift_remove(PARAMS_KEY).ok_or_else(|| {
        CodecError::malformed(column, format!("missing 'params' for {}", entry.name()))
    })?;
    if let Some(key) = fields.keys().next() {
        return Err(CodecError::malformed(
            column,
            format!("unexpected key '{key}' in {} descriptor", entry.name()),
        ));
    }

    let args = match params {
        Node::Map(named) => Arguments::Named(
            named
                .into_iter()
                .map(|(name, value)| Ok((name, to_param(column, value)?)))
                .collect::<Result<_>>()?,
        ),
        other => Arguments::Positional(to_param(column, other)?),
    };

    entry
        .construct(args)
        .map_err(|source| CodecError::Construction {
            column: column.to_string(),
            kind: entry.name().to_string(),
            source,
        })
}

fn to_param(column: &str, node: Node<'_>) -> Result<ParamValue> {
    let value = match node {
        Node::Null => ParamValue::Null,
        Node::Bool(flag) => ParamValue::Bool(flag),
        Node::Number(number) => ParamValue::Number(number),
        Node::Text(text) => ParamValue::Text(text),
        Node::List(items) => ParamValue::List(to_params(column, items)?),
        Node::Tuple(items) => ParamValue::Tuple(to_params(column, items)?),
        Node::Map(fields) if matches!(fields.get(TYPE_KEY), Some(Node::Type(_))) => {
            reconstruct_descriptor(column, Node::Map(fields))?.into()
        }
        Node::Map(fields) => ParamValue::Map(
            fields
                .into_iter()
                .map(|(key, value)| Ok((key, to_param(column, value)?)))
                .collect::<Result<_>>()?,
        ),
        Node::Type(entry) => {
            return Err(CodecError::malformed(
                column,
                format!("type reference '{}' outside a descriptor", entry.name()),
            ));
        }
        Node::Instance(instance) => ParamValue::Instance(instance),
    };
    Ok(value)
}

fn to_params(column: &str, items: Vec<Node<'_>>) -> Result<Vec<ParamValue>> {
    items
        .into_iter()
        .map(|item| to_param(column, item))
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
