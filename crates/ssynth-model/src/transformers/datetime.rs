use crate::kind::TransformerKind;
use crate::schema::{BoundArgs, ParamSpec, ParamType};
use crate::transformers::Transform;
use crate::value::ParamValue;

pub const DEFAULT_EPOCH: &str = "1970-01-01";

/// Converts dates to a numeric offset from `epoch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeTransformer {
    epoch: String,
}

impl Default for DateTimeTransformer {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH.to_string(),
        }
    }
}

impl DateTimeTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[ParamSpec::optional("epoch", ParamType::Text)];

    pub fn new(epoch: impl Into<String>) -> Self {
        Self {
            epoch: epoch.into(),
        }
    }

    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        args.text("epoch").map(Self::new).unwrap_or_default()
    }
}

impl Transform for DateTimeTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::DateTime.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        vec![("epoch", self.epoch.as_str().into())]
    }
}

/// Removes the column from the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropTransformer;

impl DropTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[];
}

impl Transform for DropTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::Drop.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        Vec::new()
    }
}
