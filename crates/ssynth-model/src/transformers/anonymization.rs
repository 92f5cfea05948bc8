use crate::kind::TransformerKind;
use crate::schema::{BoundArgs, ParamSpec, ParamType};
use crate::transformers::Transform;
use crate::value::ParamValue;

/// Replaces every value of a column with output from a named fake-data
/// provider (`"email"`, `"name"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymizationTransformer {
    fake: String,
    generated: u64,
}

impl AnonymizationTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[ParamSpec::required("fake", ParamType::Text)];

    pub fn new(fake: impl Into<String>) -> Self {
        Self {
            fake: fake.into(),
            generated: 0,
        }
    }

    /// Name of the fake-data provider.
    pub fn fake(&self) -> &str {
        &self.fake
    }

    /// Number of values produced so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Runtime state only; not a constructor parameter.
    pub fn record_generated(&mut self, count: u64) {
        self.generated += count;
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        Self::new(args.text("fake").unwrap_or_default())
    }
}

impl Transform for AnonymizationTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::Anonymization.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        vec![
            ("fake", self.fake.as_str().into()),
            ("generated", ParamValue::from(self.generated as i64)),
        ]
    }
}
