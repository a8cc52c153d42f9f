//! Error types for the climb store.
//!
//! This module defines all error types used throughout the store, following
//! a hierarchy that separates filter validation errors, reference-data
//! errors, and backend failures. The frame and mirror errors of
//! `crimp-board` fold into the same top-level type.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crimp_board::pattern::PatternError;
use crimp_board::{FrameError, MirrorError};

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filter validation errors
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Frame string decoding errors
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// Mirror resolution errors
    #[error(transparent)]
    Mirror(#[from] MirrorError),

    /// Reference-data lookup errors
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors raised while validating raw filter parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A required parameter was absent.
    #[error("missing required parameter: {parameter}")]
    MissingParameter { parameter: String },

    /// A parameter was present but could not be coerced to its type.
    #[error("invalid value '{value}' for parameter {parameter}")]
    InvalidValue { parameter: String, value: String },

    /// The sort key is not one of the supported columns.
    #[error("unknown sort key: {key}")]
    UnknownSortKey { key: String },
}

/// Errors raised when a reference lookup names an unknown entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// No layout exists with the given id.
    #[error("layout not found: {layout_id}")]
    LayoutNotFound { layout_id: i64 },

    /// No panel size exists with the given id for the layout's product.
    #[error("size not found: {size_id}")]
    SizeNotFound { size_id: i64 },

    /// No climb exists with the given uuid.
    #[error("climb not found: {uuid}")]
    ClimbNotFound { uuid: String },
}

/// Errors originating from the SQLite backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Opening the database or building the pool failed.
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    /// No connection became available within the pool timeout.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// A query failed to prepare or execute.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Schema bootstrap failed.
    #[error("schema initialization failed: {message}")]
    SchemaError { message: String },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// Implement conversions from common error types

impl From<PatternError> for StoreError {
    fn from(err: PatternError) -> Self {
        match err {
            PatternError::Frame(err) => StoreError::Frame(err),
            PatternError::Mirror(err) => StoreError::Mirror(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Backend(BackendError::QueryError {
            message: err.to_string(),
        })
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(_err: r2d2::Error) -> Self {
        StoreError::Backend(BackendError::PoolExhausted)
    }
}
