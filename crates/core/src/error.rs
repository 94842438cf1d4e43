use thiserror::Error;

/// Errors raised while validating records or replaying the schema chain.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    /// Enumerated field holds a code outside the set in effect.
    #[error("invalid code '{code}' for {entity}.{field}")]
    InvalidCode { entity: &'static str, field: &'static str, code: String },

    #[error("{entity}.{field} is {len} characters long (max {max})")]
    TooLong { entity: &'static str, field: &'static str, max: usize, len: usize },

    #[error("{entity}.{field} is required")]
    Required { entity: &'static str, field: &'static str },

    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("unknown field: {entity}.{field}")]
    UnknownField { entity: String, field: String },

    /// Operation contradicts the schema it is applied to (duplicate entity, field, relation).
    #[error("schema conflict: {0}")]
    SchemaConflict(String),

    /// Migration chain is not a single linear history.
    #[error("broken migration chain: {0}")]
    BrokenChain(String),
}
