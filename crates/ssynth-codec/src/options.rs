//! Configuration for a codec.

use ssynth_model::{LIBRARY_VERSION, MODULE_NAME};

/// Options fixed for the lifetime of a [`Codec`](crate::Codec).
///
/// The version is captured once, so every call made through one codec
/// compares against the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Module identifier written to, and required in, every envelope.
    pub module: String,

    /// Exact library version written to, and required in, every envelope.
    pub library_version: String,

    /// Emit indented JSON instead of a single line.
    pub pretty: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            module: MODULE_NAME.to_string(),
            library_version: LIBRARY_VERSION.to_string(),
            pretty: false,
        }
    }
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_library_version(mut self, version: impl Into<String>) -> Self {
        self.library_version = version.into();
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
