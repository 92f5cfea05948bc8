//! Constraints to wire text.

use serde_json::{Map, Number, Value};
use ssynth_model::{Constraints, Numeric, ParamValue, Transform, Transformer};
use tracing::debug;

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::tags::{CONSTRAINTS_KEY, MODULE_KEY, PARAMS_KEY, TYPE_KEY, TaggedRef, VERSION_KEY};
use crate::tuple;

impl Codec<'_> {
    /// Serialize `constraints` into an envelope stamped with this codec's
    /// module and library version.
    pub fn encode(&self, constraints: &Constraints) -> Result<String> {
        let envelope = self.encode_to_value(constraints)?;
        let text = if self.options.pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };
        Ok(text)
    }

    /// Same as [`Codec::encode`], stopping at the JSON tree.
    pub fn encode_to_value(&self, constraints: &Constraints) -> Result<Value> {
        let options = &self.options;
        debug!(
            columns = constraints.len(),
            version = %options.library_version,
            "encoding constraints"
        );

        let mut columns = Map::with_capacity(constraints.len());
        for (column, transformer) in constraints {
            debug!(column = %column, kind = transformer.kind_name(), "encoding column");
            columns.insert(column.clone(), encode_descriptor(column, transformer)?);
        }

        let mut envelope = Map::with_capacity(3);
        envelope.insert(MODULE_KEY.to_string(), Value::String(options.module.clone()));
        envelope.insert(
            VERSION_KEY.to_string(),
            Value::String(options.library_version.clone()),
        );
        envelope.insert(CONSTRAINTS_KEY.to_string(), Value::Object(columns));
        Ok(Value::Object(envelope))
    }
}

/// `{"type": <tagged kind>, "params": ...}` for one transformation.
fn encode_descriptor(column: &str, transformer: &Transformer) -> Result<Value> {
    let params = match transformer {
        Transformer::Chain(chain) => Value::Array(
            chain
                .transformers()
                .iter()
                .map(|member| encode_descriptor(column, member))
                .collect::<Result<_>>()?,
        ),
        Transformer::Anonymization(anonymization) => {
            Value::String(anonymization.fake().to_string())
        }
        other => Value::Object(filtered_params(column, other)?),
    };

    let mut descriptor = Map::with_capacity(2);
    descriptor.insert(
        TYPE_KEY.to_string(),
        Value::String(TaggedRef::Type(transformer.kind_name()).to_wire()),
    );
    descriptor.insert(PARAMS_KEY.to_string(), params);
    Ok(Value::Object(descriptor))
}

/// Attributes of `transformer` that its constructor also accepts.
///
/// Fitted state is not in the schema, so it never reaches the wire.
fn filtered_params(column: &str, transformer: &Transformer) -> Result<Map<String, Value>> {
    let schema = transformer.schema();
    let mut params = Map::new();
    for (name, value) in transformer.attributes() {
        if schema.iter().any(|spec| spec.name == name) {
            params.insert(name.to_string(), encode_value(column, name, &value)?);
        }
    }
    Ok(params)
}

fn encode_value(column: &str, parameter: &str, value: &ParamValue) -> Result<Value> {
    let encoded = match value {
        ParamValue::Null => Value::Null,
        ParamValue::Bool(flag) => Value::Bool(*flag),
        ParamValue::Number(Numeric::Int(number)) => Value::from(*number),
        ParamValue::Number(Numeric::Float(number)) => Number::from_f64(*number)
            .map(Value::Number)
            .ok_or_else(|| CodecError::NonFinite {
                column: column.to_string(),
                parameter: parameter.to_string(),
            })?,
        ParamValue::Text(text) => Value::String(text.clone()),
        ParamValue::List(items) => Value::Array(encode_items(column, parameter, items)?),
        ParamValue::Tuple(items) => tuple::wrap(encode_items(column, parameter, items)?),
        ParamValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| Ok((key.clone(), encode_value(column, parameter, item)?)))
                .collect::<Result<_>>()?,
        ),
        ParamValue::Transformer(transformer) => encode_descriptor(column, transformer)?,
        ParamValue::Instance(instance) => {
            Value::String(TaggedRef::Instance(instance.name()).to_wire())
        }
    };
    Ok(encoded)
}

fn encode_items(column: &str, parameter: &str, items: &[ParamValue]) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|item| encode_value(column, parameter, item))
        .collect()
}
