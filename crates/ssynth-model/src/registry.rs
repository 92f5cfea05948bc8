//! Name-keyed catalogue of transformation kinds and instances.
//!
//! The catalogue is the only place a name on the wire is turned back into
//! something constructible. It is built once at startup and shared
//! read-only; [`default_catalogue()`] caches the built-in one in a
//! [`OnceLock`].
//!
//! # Example
//!
//! ```
//! use ssynth_model::{Arguments, default_catalogue};
//!
//! let entry = default_catalogue().resolve_kind("LabelTransformer").unwrap();
//! let label = entry.construct(Arguments::named([("nullable", false)])).unwrap();
//! assert_eq!(label.kind().unwrap().name(), "LabelTransformer");
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{ConstructError, LookupError};
use crate::instance::{Instance, Odometer};
use crate::kind::TransformerKind;
use crate::schema::{Arguments, ParamSpec, bind};
use crate::transformers::{CustomTransformer, Transformer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builder {
    Builtin(TransformerKind),
    Custom,
}

/// A constructible transformation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindEntry {
    name: &'static str,
    schema: &'static [ParamSpec],
    description: &'static str,
    builder: Builder,
}

impl KindEntry {
    fn builtin(kind: TransformerKind) -> Self {
        Self {
            name: kind.name(),
            schema: kind.schema(),
            description: kind.description(),
            builder: Builder::Builtin(kind),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn schema(&self) -> &'static [ParamSpec] {
        self.schema
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.builder, Builder::Builtin(_))
    }

    /// Build a live transformation from `args`.
    pub fn construct(&self, args: Arguments) -> Result<Transformer, ConstructError> {
        match self.builder {
            Builder::Builtin(kind) => kind.construct(args),
            Builder::Custom => {
                let bound = bind(self.name, self.schema, args)?;
                Ok(CustomTransformer::from_args(self.name, self.schema, bound).into())
            }
        }
    }
}

/// Registry of transformation kinds and zero-argument instances.
#[derive(Debug, Clone)]
pub struct Catalogue {
    kinds: BTreeMap<&'static str, KindEntry>,
    instances: BTreeMap<&'static str, fn() -> Instance>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalogue {
    /// A catalogue with nothing registered.
    pub fn empty() -> Self {
        Self {
            kinds: BTreeMap::new(),
            instances: BTreeMap::new(),
        }
    }

    /// Every built-in kind plus the built-in instances.
    pub fn builtin() -> Self {
        let mut catalogue = Self::empty();
        for kind in TransformerKind::ALL {
            catalogue
                .kinds
                .insert(kind.name(), KindEntry::builtin(kind));
        }
        catalogue.register_instance("Odometer", || Instance::Odometer(Odometer::new()));
        catalogue
    }

    /// Register a kind with an explicit schema.
    ///
    /// An existing kind with the same name is replaced.
    pub fn register(
        &mut self,
        name: &'static str,
        schema: &'static [ParamSpec],
        description: &'static str,
    ) -> &mut Self {
        self.kinds.insert(
            name,
            KindEntry {
                name,
                schema,
                description,
                builder: Builder::Custom,
            },
        );
        self
    }

    pub fn register_instance(&mut self, name: &'static str, make: fn() -> Instance) -> &mut Self {
        self.instances.insert(name, make);
        self
    }

    pub fn resolve_kind(&self, name: &str) -> Result<&KindEntry, LookupError> {
        self.kinds
            .get(name)
            .ok_or_else(|| LookupError::UnknownKind(name.to_string()))
    }

    /// Construct the named instance with no arguments.
    pub fn resolve_instance(&self, name: &str) -> Result<Instance, LookupError> {
        self.instances
            .get(name)
            .map(|make| make())
            .ok_or_else(|| LookupError::UnknownInstance(name.to_string()))
    }

    pub fn schema(&self, name: &str) -> Option<&'static [ParamSpec]> {
        self.kinds.get(name).map(KindEntry::schema)
    }

    pub fn kind_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    pub fn instance_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.instances.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &KindEntry> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// The built-in catalogue, built on first use.
pub fn default_catalogue() -> &'static Catalogue {
    static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();
    CATALOGUE.get_or_init(Catalogue::builtin)
}
