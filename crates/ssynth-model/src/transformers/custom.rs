use std::collections::BTreeMap;

use crate::schema::{BoundArgs, ParamSpec};
use crate::transformers::Transform;
use crate::value::ParamValue;

/// Instance of a kind registered at runtime.
///
/// Holds its validated constructor arguments by name; there is no other
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomTransformer {
    kind: &'static str,
    schema: &'static [ParamSpec],
    params: BTreeMap<String, ParamValue>,
}

impl CustomTransformer {
    pub(crate) fn from_args(
        kind: &'static str,
        schema: &'static [ParamSpec],
        args: BoundArgs,
    ) -> Self {
        Self {
            kind,
            schema,
            params: args.into_values(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }
}

impl Transform for CustomTransformer {
    fn kind_name(&self) -> &str {
        self.kind
    }

    fn schema(&self) -> &'static [ParamSpec] {
        self.schema
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        // Declaration order, so the wire output does not depend on map order.
        self.schema
            .iter()
            .filter_map(|spec| {
                self.params
                    .get(spec.name)
                    .map(|value| (spec.name, value.clone()))
            })
            .collect()
    }
}
