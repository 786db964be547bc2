//! Error types for sqlforge.

use thiserror::Error;

use crate::ast::{DbType, FunctionKind, TopKind};
use crate::dialect::{Dialect, SchemaOperation, SchemaType};

#[derive(Debug, Error)]
pub enum SqlForgeError {
    /// A literal or parameter uses a data type the target engine cannot store.
    #[error("Data type {db_type} is not supported by {dialect}")]
    UnsupportedType { db_type: DbType, dialect: Dialect },

    /// The requested top/limit strategy does not exist on the target engine.
    #[error("Top strategy {kind} is not supported by {dialect}")]
    UnsupportedTop { kind: TopKind, dialect: Dialect },

    /// The (schema type, operation) pair is excluded by the dialect properties.
    #[error("{dialect} does not support {operation} for {schema_type}")]
    UnsupportedSchemaOperation {
        schema_type: SchemaType,
        operation: SchemaOperation,
        dialect: Dialect,
    },

    /// The function kind has no rendering on the target engine.
    #[error("Function {kind} is not supported by {dialect}")]
    UnsupportedFunction { kind: FunctionKind, dialect: Dialect },

    /// Two distinct parameters share a name on a named-placeholder engine.
    #[error("Duplicate parameter name '{name}' for {dialect}")]
    DuplicateParameter { name: String, dialect: Dialect },

    /// The statement tree is structurally incomplete or contradictory.
    /// Raised before any text is emitted.
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),
}

impl SqlForgeError {
    /// Create a structural validation error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidStatement(message.into())
    }

    /// Create an unsupported schema operation error.
    pub fn unsupported_op(
        schema_type: SchemaType,
        operation: SchemaOperation,
        dialect: Dialect,
    ) -> Self {
        Self::UnsupportedSchemaOperation {
            schema_type,
            operation,
            dialect,
        }
    }
}

/// Result type alias for sqlforge operations.
pub type SqlForgeResult<T> = Result<T, SqlForgeError>;
