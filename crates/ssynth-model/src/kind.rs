//! The closed set of built-in transformation kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConstructError, LookupError};
use crate::schema::{Arguments, ParamSpec, bind};
use crate::transformers::{
    AnonymizationTransformer, BinTransformer, ChainTransformer, ClampTransformer,
    DateTimeTransformer, DropTransformer, LabelTransformer, LogTransformer, MinMaxTransformer,
    OneHotEncoder, StandardScaler, Transformer,
};

/// Built-in transformation kind.
///
/// The wire name of each kind is returned by [`TransformerKind::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransformerKind {
    #[serde(rename = "AnonymizationTransformer")]
    Anonymization,
    #[serde(rename = "BinTransformer")]
    Bin,
    #[serde(rename = "ChainTransformer")]
    Chain,
    #[serde(rename = "ClampTransformer")]
    Clamp,
    #[serde(rename = "DateTimeTransformer")]
    DateTime,
    #[serde(rename = "DropTransformer")]
    Drop,
    #[serde(rename = "LabelTransformer")]
    Label,
    #[serde(rename = "LogTransformer")]
    Log,
    #[serde(rename = "MinMaxTransformer")]
    MinMax,
    #[serde(rename = "OneHotEncoder")]
    OneHot,
    StandardScaler,
}

impl TransformerKind {
    pub const ALL: [Self; 11] = [
        Self::Anonymization,
        Self::Bin,
        Self::Chain,
        Self::Clamp,
        Self::DateTime,
        Self::Drop,
        Self::Label,
        Self::Log,
        Self::MinMax,
        Self::OneHot,
        Self::StandardScaler,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Anonymization => "AnonymizationTransformer",
            Self::Bin => "BinTransformer",
            Self::Chain => "ChainTransformer",
            Self::Clamp => "ClampTransformer",
            Self::DateTime => "DateTimeTransformer",
            Self::Drop => "DropTransformer",
            Self::Label => "LabelTransformer",
            Self::Log => "LogTransformer",
            Self::MinMax => "MinMaxTransformer",
            Self::OneHot => "OneHotEncoder",
            Self::StandardScaler => "StandardScaler",
        }
    }

    pub fn schema(self) -> &'static [ParamSpec] {
        match self {
            Self::Anonymization => AnonymizationTransformer::SCHEMA,
            Self::Bin => BinTransformer::SCHEMA,
            Self::Chain => ChainTransformer::SCHEMA,
            Self::Clamp => ClampTransformer::SCHEMA,
            Self::DateTime => DateTimeTransformer::SCHEMA,
            Self::Drop => DropTransformer::SCHEMA,
            Self::Label => LabelTransformer::SCHEMA,
            Self::Log => LogTransformer::SCHEMA,
            Self::MinMax => MinMaxTransformer::SCHEMA,
            Self::OneHot => OneHotEncoder::SCHEMA,
            Self::StandardScaler => StandardScaler::SCHEMA,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Anonymization => "Replace values with fake data",
            Self::Bin => "Discretize a numeric column into bins",
            Self::Chain => "Apply transformations in sequence",
            Self::Clamp => "Clip values to bounds",
            Self::DateTime => "Convert dates to offsets from an epoch",
            Self::Drop => "Remove the column",
            Self::Label => "Map categories to integer labels",
            Self::Log => "Natural log transform",
            Self::MinMax => "Scale to [-1, 1] or [0, 1]",
            Self::OneHot => "One-hot encode integer labels",
            Self::StandardScaler => "Scale to zero mean, unit variance",
        }
    }

    /// Run this kind's constructor.
    pub fn construct(self, args: Arguments) -> Result<Transformer, ConstructError> {
        let mut bound = bind(self.name(), self.schema(), args)?;
        let transformer = match self {
            Self::Anonymization => AnonymizationTransformer::from_args(&mut bound).into(),
            Self::Bin => BinTransformer::from_args(&mut bound).into(),
            Self::Chain => ChainTransformer::from_args(&mut bound).into(),
            Self::Clamp => ClampTransformer::from_args(&mut bound).into(),
            Self::DateTime => DateTimeTransformer::from_args(&mut bound).into(),
            Self::Drop => DropTransformer.into(),
            Self::Label => LabelTransformer::from_args(&mut bound).into(),
            Self::Log => LogTransformer.into(),
            Self::MinMax => MinMaxTransformer::from_args(&mut bound).into(),
            Self::OneHot => OneHotEncoder.into(),
            Self::StandardScaler => StandardScaler::from_args(&mut bound).into(),
        };
        Ok(transformer)
    }
}

impl fmt::Display for TransformerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformerKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| LookupError::UnknownKind(s.to_string()))
    }
}
