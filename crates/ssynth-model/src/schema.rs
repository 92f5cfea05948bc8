//! Declared constructor schemas.
//!
//! Every transformation kind lists the parameters its constructor accepts
//! as a static slice of [`ParamSpec`]. The schema drives both sides of the
//! wire format: the encoder keeps only attributes named in the schema, and
//! [`bind`] checks decoded arguments against it before a constructor runs.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::ConstructError;
use crate::instance::Instance;
use crate::transformers::Transformer;
use crate::value::{Numeric, ParamValue};

/// Semantic type of a constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamType {
    Bool,
    /// Integers only.
    Integer,
    /// Integers or floats.
    Number,
    Text,
    Instance,
    /// An ordered list of transformations.
    Transformers,
    /// Any value, including tuples and nested mappings.
    Any,
}

impl ParamType {
    pub fn accepts(self, value: &ParamValue) -> bool {
        match self {
            Self::Bool => matches!(value, ParamValue::Bool(_)),
            Self::Integer => matches!(value, ParamValue::Number(Numeric::Int(_))),
            Self::Number => matches!(value, ParamValue::Number(_)),
            Self::Text => matches!(value, ParamValue::Text(_)),
            Self::Instance => matches!(value, ParamValue::Instance(_)),
            Self::Transformers => match value {
                ParamValue::List(items) => items
                    .iter()
                    .all(|item| matches!(item, ParamValue::Transformer(_))),
                _ => false,
            },
            Self::Any => true,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Text => "text",
            Self::Instance => "instance",
            Self::Transformers => "list of transformers",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

/// One constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ParamType,
    /// Whether `null` is accepted in addition to `ty`.
    pub nullable: bool,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            required: false,
        }
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn accepts(&self, value: &ParamValue) -> bool {
        (self.nullable && value.is_null()) || self.ty.accepts(value)
    }

    /// Human-readable type, e.g. `number?` for a nullable number.
    pub fn type_label(&self) -> String {
        if self.nullable {
            format!("{}?", self.ty)
        } else {
            self.ty.to_string()
        }
    }
}

/// Arguments handed to a constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum Arguments {
    /// Keyword arguments.
    Named(BTreeMap<String, ParamValue>),
    /// A single value bound to the first declared parameter.
    Positional(ParamValue),
}

impl Arguments {
    pub fn none() -> Self {
        Self::Named(BTreeMap::new())
    }

    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    pub fn positional(value: impl Into<ParamValue>) -> Self {
        Self::Positional(value.into())
    }
}

/// Validate `args` against `schema`.
///
/// Rejects names the schema does not declare, values of the wrong type,
/// and absent required parameters. Optional parameters that were not
/// supplied are left out, and the constructor applies its own default.
pub fn bind(
    kind: &str,
    schema: &'static [ParamSpec],
    args: Arguments,
) -> Result<BoundArgs, ConstructError> {
    let mut supplied = match args {
        Arguments::Named(map) => map,
        Arguments::Positional(value) => {
            let first = schema
                .first()
                .ok_or_else(|| ConstructError::UnexpectedPositional {
                    kind: kind.to_string(),
                })?;
            BTreeMap::from([(first.name.to_string(), value)])
        }
    };

    if let Some(name) = supplied
        .keys()
        .find(|name| !schema.iter().any(|spec| spec.name == name.as_str()))
    {
        return Err(ConstructError::UnexpectedArgument {
            kind: kind.to_string(),
            name: name.clone(),
        });
    }

    let mut values = BTreeMap::new();
    for spec in schema {
        match supplied.remove(spec.name) {
            Some(value) if spec.accepts(&value) => {
                values.insert(spec.name, value);
            }
            Some(value) => {
                return Err(ConstructError::WrongType {
                    kind: kind.to_string(),
                    name: spec.name.to_string(),
                    expected: spec.type_label(),
                    found: value.type_name(),
                });
            }
            None if spec.required => {
                return Err(ConstructError::MissingArgument {
                    kind: kind.to_string(),
                    name: spec.name.to_string(),
                });
            }
            None => {}
        }
    }
    Ok(BoundArgs { values })
}

/// Arguments that passed [`bind`]. Accessors fall back to the caller's
/// default when a parameter was omitted or explicitly `null`.
#[derive(Debug, Default)]
pub struct BoundArgs {
    values: BTreeMap<&'static str, ParamValue>,
}

impl BoundArgs {
    pub fn take(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn bool_or(&mut self, name: &str, default: bool) -> bool {
        match self.take(name) {
            Some(ParamValue::Bool(value)) => value,
            _ => default,
        }
    }

    pub fn number(&mut self, name: &str) -> Option<Numeric> {
        self.take(name).and_then(|value| value.as_numeric())
    }

    pub fn number_or(&mut self, name: &str, default: Numeric) -> Numeric {
        self.number(name).unwrap_or(default)
    }

    pub fn integer_or(&mut self, name: &str, default: i64) -> i64 {
        self.number(name)
            .and_then(Numeric::as_i64)
            .unwrap_or(default)
    }

    pub fn text(&mut self, name: &str) -> Option<String> {
        match self.take(name) {
            Some(ParamValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn instance(&mut self, name: &str) -> Option<Instance> {
        match self.take(name) {
            Some(ParamValue::Instance(value)) => Some(value),
            _ => None,
        }
    }

    pub fn transformers(&mut self, name: &str) -> Vec<Transformer> {
        match self.take(name) {
            Some(ParamValue::List(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    ParamValue::Transformer(transformer) => Some(*transformer),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Remaining values keyed by parameter name.
    pub fn into_values(self) -> BTreeMap<String, ParamValue> {
        self.values
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[ParamSpec] = &[
        ParamSpec::optional("lower", ParamType::Number).nullable(),
        ParamSpec::optional("bins", ParamType::Integer),
        ParamSpec::required("label", ParamType::Text),
    ];

    #[test]
    fn bind_accepts_declared_arguments() {
        let args = Arguments::named([
            ("lower", ParamValue::from(0)),
            ("label", ParamValue::from("x")),
        ]);
        let mut bound = bind("Demo", SCHEMA, args).unwrap();
        assert_eq!(bound.number("lower"), Some(Numeric::Int(0)));
        assert_eq!(bound.integer_or("bins", 10), 10);
        assert_eq!(bound.text("label").as_deref(), Some("x"));
    }

    #[test]
    fn bind_rejects_unknown_name() {
        let args = Arguments::named([("label", "x"), ("colour", "red")]);
        let err = bind("Demo", SCHEMA, args).unwrap_err();
        assert_eq!(
            err,
            ConstructError::UnexpectedArgument {
                kind: "Demo".to_string(),
                name: "colour".to_string(),
            }
        );
    }

    #[test]
    fn bind_rejects_missing_required() {
        let err = bind("Demo", SCHEMA, Arguments::none()).unwrap_err();
        assert!(matches!(err, ConstructError::MissingArgument { ref name, .. } if name == "label"));
    }

    #[test]
    fn integer_parameter_rejects_float() {
        let args = Arguments::named([
            ("bins", ParamValue::from(2.5)),
            ("label", ParamValue::from("x")),
        ]);
        let err = bind("Demo", SCHEMA, args).unwrap_err();
        assert_eq!(err.to_string(), "Demo() argument 'bins' expects integer, found float");
    }

    #[test]
    fn null_only_where_nullable() {
        let ok = Arguments::named([("lower", ParamValue::Null), ("label", "x".into())]);
        assert!(bind("Demo", SCHEMA, ok).is_ok());

        let bad = Arguments::named([("bins", ParamValue::Null), ("label", "x".into())]);
        assert!(bind("Demo", SCHEMA, bad).is_err());
    }

    #[test]
    fn positional_binds_first_parameter() {
        let err = bind("Demo", SCHEMA, Arguments::positional(3)).unwrap_err();
        // First parameter is `lower`, so `label` is still missing.
        assert!(matches!(err, ConstructError::MissingArgument { .. }));

        let err = bind("Empty", &[], Arguments::positional(3)).unwrap_err();
        assert_eq!(err.to_string(), "Empty() takes no positional argument");
    }
}
