use crate::kind::TransformerKind;
use crate::schema::{BoundArgs, ParamSpec, ParamType};
use crate::transformers::{Transform, Transformer};
use crate::value::ParamValue;

/// Applies its members to one column in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainTransformer {
    transformers: Vec<Transformer>,
}

impl ChainTransformer {
    pub const SCHEMA: &'static [ParamSpec] =
        &[ParamSpec::required("transformers", ParamType::Transformers)];

    pub fn new<I, T>(transformers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Transformer>,
    {
        Self {
            transformers: transformers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn transformers(&self) -> &[Transformer] {
        &self.transformers
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        Self {
            transformers: args.transformers("transformers"),
        }
    }
}

impl Transform for ChainTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::Chain.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        vec![
            (
                "transformers",
                ParamValue::List(
                    self.transformers
                        .iter()
                        .cloned()
                        .map(ParamValue::from)
                        .collect(),
                ),
            ),
            ("fit_complete", self.fit_complete().into()),
        ]
    }

    fn fit_complete(&self) -> bool {
        self.transformers.iter().all(Transform::fit_complete)
    }
}
