//! Common result and error types for circuit elaboration.

/// The standard result type for building, laying out, and flattening circuits.
pub type GateResult<T> = Result<T, GateError>;

/// Everything that can go wrong while elaborating a circuit.
///
/// Every variant is fatal to the export that raised it: nothing retries, and
/// no artifact is written once one of these has been returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GateError {
    /// `connect` was called with two bundles whose types differ.
    #[error("connecting two bundles of different types: {from} and {to}")]
    TypeMismatch {
        /// Type of the source bundle.
        from: String,
        /// Type of the destination bundle.
        to: String,
    },

    /// The root circuit declares inputs or outputs.
    #[error("main circuit must have no {side} (has type {ty})")]
    InvalidMainSignature {
        /// Either `"inputs"` or `"outputs"`.
        side: &'static str,
        /// The offending type.
        ty: String,
    },

    /// A layout direction token outside `ltr`, `rtl`, `ttb`, `btt`.
    #[error("invalid flow direction '{0}'")]
    InvalidDirection(String),

    /// The flattener reached a gate it cannot serialize.
    #[error("malformed gate: {0}")]
    MalformedGate(String),

    /// The main builder tried to create a second root circuit.
    #[error("main circuit can only create 1 circuit")]
    MainAlreadyDefined,

    /// The main builder returned without creating the root circuit.
    #[error("main builder did not create a circuit")]
    MissingMainCircuit,

    /// A primitive gate was requested directly in the root slot.
    #[error("gates must be created inside a circuit")]
    OutsideCircuit,

    /// A gate was used as a parent but it is a primitive.
    #[error("gate {0} is a primitive and cannot contain gates")]
    NotACircuit(u32),

    /// A gate id that was not allocated by this context.
    #[error("unknown gate {0}")]
    UnknownGate(u32),

    /// Indexing a bundle by a field it does not have.
    #[error("bundle of type {ty} has no field {field}")]
    NoSuchField {
        /// The type of the indexed bundle.
        ty: String,
        /// The requested name or index.
        field: String,
    },

    /// A snake layout with zero gates per row.
    #[error("snake row length must be at least 1")]
    InvalidRowLength,

    /// An invariant was violated; this is a bug, not a user error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GateError {
    /// Creates a [`GateError::MalformedGate`] with the given message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedGate(message.into())
    }

    /// Creates a [`GateError::Internal`] with the given message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
