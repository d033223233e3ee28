//! Read-only access to a stateful source environment.

use record::{Array, RecordError, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    #[error("source has no attribute `{0}`")]
    Missing(String),
    #[error("attribute `{0}` is not an object")]
    NotAnObject(String),
    #[error("attribute `{0}` is an object, not a value")]
    NotAValue(String),
    #[error("attribute `{0}` is not an array and cannot be indexed")]
    NotIndexable(String),
    #[error("index {index} out of range for attribute `{path}` of length {len}")]
    IndexOutOfRange { path: String, index: usize, len: usize },
    #[error("attribute `{path}` is malformed")]
    Malformed {
        path: String,
        #[source]
        source: RecordError,
    },
}

/// Borrowed view of one attribute of a source environment.
///
/// Arrays are exposed as the source's own row-major buffer. The adapter copies
/// them before they reach a [`record::Record`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrRef<'a> {
    Int(i64),
    Float(f64),
    Bool(bool),
    Array { data: &'a [f64], shape: &'a [usize] },
}

impl AttrRef<'_> {
    /// Copies the attribute into an owned [`Value`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Malformed`] if an array's shape does not cover its
    /// data.
    pub fn to_value(&self, path: &str) -> Result<Value, AccessError> {
        Ok(match *self {
            AttrRef::Int(v) => Value::Int(v),
            AttrRef::Float(v) => Value::Float(v),
            AttrRef::Bool(v) => Value::Bool(v),
            AttrRef::Array { data, shape } => Value::Array(
                Array::new(data, shape)
                    .map_err(|source| AccessError::Malformed { path: path.to_string(), source })?,
            ),
        })
    }
}

/// A simulator object whose attributes can be read by name.
///
/// Paths are dotted: `env.player_x` reads `player_x` from the object held in
/// the `env` attribute. Implementations must not mutate themselves while
/// answering.
pub trait SourceEnv {
    /// Reads the attribute at `path`.
    ///
    /// # Errors
    ///
    /// Whatever the source reports for a path it cannot resolve, typically
    /// [`AccessError::Missing`] or [`AccessError::NotAnObject`].
    fn attr(&self, path: &str) -> Result<AttrRef<'_>, AccessError>;
}

impl<T: SourceEnv + ?Sized> SourceEnv for &T {
    fn attr(&self, path: &str) -> Result<AttrRef<'_>, AccessError> {
        (**self).attr(path)
    }
}

impl<T: SourceEnv + ?Sized> SourceEnv for Box<T> {
    fn attr(&self, path: &str) -> Result<AttrRef<'_>, AccessError> {
        (**self).attr(path)
    }
}
