use thiserror::Error;

/// A name that the catalogue does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no transformation kind named '{0}' is registered")]
    UnknownKind(String),
    #[error("no instance named '{0}' is registered")]
    UnknownInstance(String),
}

/// A constructor rejected the arguments it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("{kind}() got an unexpected argument '{name}'")]
    UnexpectedArgument { kind: String, name: String },

    #[error("{kind}() is missing required argument '{name}'")]
    MissingArgument { kind: String, name: String },

    #[error("{kind}() argument '{name}' expects {expected}, found {found}")]
    WrongType {
        kind: String,
        name: String,
        expected: String,
        found: &'static str,
    },

    #[error("{kind}() takes no positional argument")]
    UnexpectedPositional { kind: String },
}
