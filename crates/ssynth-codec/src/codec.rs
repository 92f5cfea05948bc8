use ssynth_model::{Catalogue, default_catalogue};

use crate::options::CodecOptions;

/// Encoder and decoder bound to one catalogue and one options snapshot.
///
/// Calls take `&self` and share no mutable state, so a codec can be used
/// from many threads at once.
#[derive(Debug, Clone)]
pub struct Codec<'c> {
    pub(crate) catalogue: &'c Catalogue,
    pub(crate) options: CodecOptions,
}

impl Codec<'static> {
    /// Codec over the built-in catalogue with default options.
    pub fn new() -> Self {
        Self::with_options(CodecOptions::default())
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self::with_catalogue(default_catalogue(), options)
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Codec<'c> {
    /// Codec over a caller-built catalogue, e.g. one with custom kinds.
    pub fn with_catalogue(catalogue: &'c Catalogue, options: CodecOptions) -> Self {
        Self { catalogue, options }
    }

    pub fn catalogue(&self) -> &'c Catalogue {
        self.catalogue
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }
}
