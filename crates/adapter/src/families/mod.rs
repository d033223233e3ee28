//! Per-family field tables.
//!
//! Every supported environment owns one static table of [`Field`]s. A field
//! names the record key and where its value comes from on the source object.
//! Translation walks the table in order; nothing is conditional on the
//! source's contents, so the key set depends on the identifier alone.

pub mod arcade_grid;
pub mod classic_control;
pub mod tabular_chain;

use crate::source::{AccessError, AttrRef, SourceEnv};
use record::Value;

pub use arcade_grid::ArcadeGrid;
pub use classic_control::ClassicControl;
pub use tabular_chain::TabularChain;

/// Where a record field reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The whole attribute at this path.
    Attr(&'static str),
    /// One element of an array attribute.
    Element(&'static str, usize),
    /// The integer zero. Used for counters that restart on reset.
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub source: Source,
}

impl Field {
    pub(crate) const fn attr(name: &'static str, path: &'static str) -> Self {
        Self { name, source: Source::Attr(path) }
    }

    pub(crate) const fn element(name: &'static str, path: &'static str, index: usize) -> Self {
        Self { name, source: Source::Element(path, index) }
    }

    pub(crate) const fn zero(name: &'static str) -> Self {
        Self { name, source: Source::Zero }
    }

    /// Reads this field's value from `env`.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`AccessError`] unchanged, and reports
    /// [`AccessError::NotIndexable`] or [`AccessError::IndexOutOfRange`] for
    /// element reads that do not land in an array.
    pub fn read<E: SourceEnv + ?Sized>(&self, env: &E) -> Result<Value, AccessError> {
        match self.source {
            Source::Zero => Ok(Value::Int(0)),
            Source::Attr(path) => env.attr(path)?.to_value(path),
            Source::Element(path, index) => match env.attr(path)? {
                AttrRef::Array { data, .. } => data.get(index).copied().map(Value::Float).ok_or_else(
                    || AccessError::IndexOutOfRange { path: path.to_string(), index, len: data.len() },
                ),
                _ => Err(AccessError::NotIndexable(path.to_string())),
            },
        }
    }
}

pub(crate) const TIME: Field = Field::zero("time");
pub(crate) const TERMINAL: Field = Field::zero("terminal");
