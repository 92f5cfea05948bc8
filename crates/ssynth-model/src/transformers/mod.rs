//! Live transformation objects.
//!
//! Each built-in kind is its own type holding its constructor parameters
//! plus whatever state it derives at fit time. [`Transformer`] is the
//! tagged union over all of them, and [`Transform`] is the reflection
//! surface the codec works through.

mod anonymization;
mod categorical;
mod chain;
mod custom;
mod datetime;
mod numeric;

pub use anonymization::AnonymizationTransformer;
pub use categorical::{LabelTransformer, OneHotEncoder};
pub use chain::ChainTransformer;
pub use custom::CustomTransformer;
pub use datetime::{DateTimeTransformer, DropTransformer};
pub use numeric::{
    BinTransformer, ClampTransformer, FittedMoments, FittedRange, LogTransformer,
    MinMaxTransformer, StandardScaler,
};

use crate::kind::TransformerKind;
use crate::schema::ParamSpec;
use crate::value::ParamValue;

/// Introspection shared by all transformations.
pub trait Transform {
    /// Name the kind is registered under.
    fn kind_name(&self) -> &str;

    /// Parameters the kind's constructor accepts.
    fn schema(&self) -> &'static [ParamSpec];

    /// Every attribute the live object carries, constructor inputs and
    /// fitted state alike.
    fn attributes(&self) -> Vec<(&str, ParamValue)>;

    /// Whether derived state is ready. Stateless kinds are always ready.
    fn fit_complete(&self) -> bool {
        true
    }
}

/// Any transformation the catalogue can build.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformer {
    Anonymization(AnonymizationTransformer),
    Bin(BinTransformer),
    Chain(ChainTransformer),
    Clamp(ClampTransformer),
    DateTime(DateTimeTransformer),
    Drop(DropTransformer),
    Label(LabelTransformer),
    Log(LogTransformer),
    MinMax(MinMaxTransformer),
    OneHot(OneHotEncoder),
    StandardScaler(StandardScaler),
    /// A kind registered at runtime with its own schema.
    Custom(CustomTransformer),
}

impl Transformer {
    /// Built-in kind, or `None` for a registered custom kind.
    pub fn kind(&self) -> Option<TransformerKind> {
        let kind = match self {
            Self::Anonymization(_) => TransformerKind::Anonymization,
            Self::Bin(_) => TransformerKind::Bin,
            Self::Chain(_) => TransformerKind::Chain,
            Self::Clamp(_) => TransformerKind::Clamp,
            Self::DateTime(_) => TransformerKind::DateTime,
            Self::Drop(_) => TransformerKind::Drop,
            Self::Label(_) => TransformerKind::Label,
            Self::Log(_) => TransformerKind::Log,
            Self::MinMax(_) => TransformerKind::MinMax,
            Self::OneHot(_) => TransformerKind::OneHot,
            Self::StandardScaler(_) => TransformerKind::StandardScaler,
            Self::Custom(_) => return None,
        };
        Some(kind)
    }

    fn as_transform(&self) -> &dyn Transform {
        match self {
            Self::Anonymization(inner) => inner,
            Self::Bin(inner) => inner,
            Self::Chain(inner) => inner,
            Self::Clamp(inner) => inner,
            Self::DateTime(inner) => inner,
            Self::Drop(inner) => inner,
            Self::Label(inner) => inner,
            Self::Log(inner) => inner,
            Self::MinMax(inner) => inner,
            Self::OneHot(inner) => inner,
            Self::StandardScaler(inner) => inner,
            Self::Custom(inner) => inner,
        }
    }
}

impl Transform for Transformer {
    fn kind_name(&self) -> &str {
        self.as_transform().kind_name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        self.as_transform().schema()
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        self.as_transform().attributes()
    }

    fn fit_complete(&self) -> bool {
        self.as_transform().fit_complete()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Transformer {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant! {
    Anonymization => AnonymizationTransformer,
    Bin => BinTransformer,
    Chain => ChainTransformer,
    Clamp => ClampTransformer,
    DateTime => DateTimeTransformer,
    Drop => DropTransformer,
    Label => LabelTransformer,
    Log => LogTransformer,
    MinMax => MinMaxTransformer,
    OneHot => OneHotEncoder,
    StandardScaler => StandardScaler,
    Custom => CustomTransformer,
}
