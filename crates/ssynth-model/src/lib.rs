//! Transformation catalogue for synthesizer pipelines.
//!
//! This crate defines what a pipeline is made of:
//!
//! - **transformers**: one type per transformation kind, and the
//!   [`Transformer`] union over them
//! - **schema**: the parameters each kind's constructor accepts
//! - **value**: typed parameter values, keeping tuples distinct from lists
//! - **registry**: name-keyed lookup of kinds and zero-argument instances
//!
//! Serialization lives in `ssynth-codec`; this crate only describes and
//! constructs.

pub mod error;
pub mod instance;
pub mod kind;
pub mod registry;
pub mod schema;
pub mod transformers;
pub mod value;

use indexmap::IndexMap;

pub use error::{ConstructError, LookupError};
pub use instance::{Instance, Odometer};
pub use kind::TransformerKind;
pub use registry::{Catalogue, KindEntry, default_catalogue};
pub use schema::{Arguments, BoundArgs, ParamSpec, ParamType, bind};
pub use transformers::{
    AnonymizationTransformer, BinTransformer, ChainTransformer, ClampTransformer,
    CustomTransformer, DateTimeTransformer, DropTransformer, FittedMoments, FittedRange,
    LabelTransformer, LogTransformer, MinMaxTransformer, OneHotEncoder, StandardScaler, Transform,
    Transformer,
};
pub use value::{Numeric, ParamValue};

/// Identifier of this transformation library on the wire.
pub const MODULE_NAME: &str = "smartnoise-synth";

/// Version of this transformation library.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column name to transformation, in insertion order.
///
/// Columns are written in this order and decoded in wire order.
pub type Constraints = IndexMap<String, Transformer>;
