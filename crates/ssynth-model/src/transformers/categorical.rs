//! Categorical column transformations.

use crate::kind::TransformerKind;
use crate::schema::{BoundArgs, ParamSpec, ParamType};
use crate::transformers::Transform;
use crate::value::ParamValue;

/// Maps each distinct category to an integer label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTransformer {
    nullable: bool,
    categories: Option<Vec<String>>,
}

impl Default for LabelTransformer {
    fn default() -> Self {
        Self {
            nullable: true,
            categories: None,
        }
    }
}

impl LabelTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[ParamSpec::optional("nullable", ParamType::Bool)];

    pub fn new(nullable: bool) -> Self {
        Self {
            nullable,
            categories: None,
        }
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Learn the distinct categories, in first-seen order.
    pub fn fit<S: AsRef<str>>(&mut self, values: &[S]) {
        let mut categories: Vec<String> = Vec::new();
        for value in values {
            let value = value.as_ref();
            if !categories.iter().any(|known| known == value) {
                categories.push(value.to_string());
            }
        }
        self.categories = Some(categories);
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        Self::new(args.bool_or("nullable", true))
    }
}

impl Transform for LabelTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::Label.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        let categories = self.categories.as_ref().map(|categories| {
            ParamValue::List(categories.iter().map(|c| c.as_str().into()).collect())
        });
        vec![
            ("nullable", self.nullable.into()),
            ("fit_complete", self.categories.is_some().into()),
            ("categories", categories.into()),
        ]
    }

    fn fit_complete(&self) -> bool {
        self.categories.is_some()
    }
}

/// One-hot encodes integer labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneHotEncoder;

impl OneHotEncoder {
    pub const SCHEMA: &'static [ParamSpec] = &[];
}

impl Transform for OneHotEncoder {
    fn kind_name(&self) -> &str {
        TransformerKind::OneHot.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        Vec::new()
    }
}
