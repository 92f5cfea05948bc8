//! Reserved strings of the wire format.
//!
//! A string value that starts with [`TYPE_TAG`] or [`INSTANCE_TAG`] is a
//! reference to resolve, not data. This is a closed-world rule: a genuine
//! parameter string that happens to start with a tag is read as a
//! reference.

/// Prefix of a reference to a transformation kind.
pub const TYPE_TAG: &str = "_ssynth_type:";

/// Prefix of a reference to a zero-argument instance.
pub const INSTANCE_TAG: &str = "_ssynth_instance:";

pub const MODULE_KEY: &str = "module";
pub const VERSION_KEY: &str = "version";
pub const CONSTRAINTS_KEY: &str = "constraints";

pub const TYPE_KEY: &str = "type";
pub const PARAMS_KEY: &str = "params";

/// A tagged string, split into its tag and the name it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaggedRef<'a> {
    Type(&'a str),
    Instance(&'a str),
}

impl TaggedRef<'_> {
    /// The tagged string as it appears on the wire.
    pub fn to_wire(self) -> String {
        match self {
            Self::Type(name) => format!("{TYPE_TAG}{name}"),
            Self::Instance(name) => format!("{INSTANCE_TAG}{name}"),
        }
    }
}

/// Split `value` into a reference, or `None` when it is plain data.
pub fn classify(value: &str) -> Option<TaggedRef<'_>> {
    if let Some(name) = value.strip_prefix(TYPE_TAG) {
        Some(TaggedRef::Type(name))
    } else {
        value.strip_prefix(INSTANCE_TAG).map(TaggedRef::Instance)
    }
}
