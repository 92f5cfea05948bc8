//! Wire format for synthesizer pipeline constraints.
//!
//! Turns a column-to-transformation mapping into versioned, type-tagged
//! JSON text and back:
//!
//! ```text
//! {"module": "smartnoise-synth", "version": "<exact version>",
//!  "constraints": {"<column>": {"type": "_ssynth_type:<Kind>", "params": ...}}}
//! ```
//!
//! - **tags**: reserved prefixes marking references to kinds and instances
//! - **tuple**: marker objects that keep tuples distinct from lists
//! - **encode** / **decode**: the two directions, on [`Codec`]
//!
//! Decoding fails closed: a wrong module or version, an unknown name, or
//! a constructor rejecting its arguments aborts the whole call.
//!
//! # Example
//!
//! ```
//! use ssynth_codec::Codec;
//! use ssynth_model::{AnonymizationTransformer, Constraints};
//!
//! let mut constraints = Constraints::new();
//! constraints.insert("id".into(), AnonymizationTransformer::new("email").into());
//!
//! let codec = Codec::new();
//! let wire = codec.encode(&constraints).unwrap();
//! let decoded = codec.decode(&wire).unwrap();
//! assert_eq!(decoded, constraints);
//! ```

mod codec;
mod decode;
mod encode;
pub mod error;
pub mod options;
mod resolve;
pub mod tags;
pub mod tuple;

pub use codec::Codec;
pub use error::{CodecError, Result, SchemaError};
pub use options::CodecOptions;

use ssynth_model::Constraints;

/// Encode with the built-in catalogue and default options.
pub fn encode(constraints: &Constraints) -> Result<String> {
    Codec::new().encode(constraints)
}

/// Decode with the built-in catalogue and default options.
pub fn decode(text: &str) -> Result<Constraints> {
    Codec::new().decode(text)
}
