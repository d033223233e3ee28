#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # State Adapter
//!
//! Copies the state of a stateful simulator object into a [`Record`] that a
//! functional `step` can consume. Run it once per environment reset.
//!
//! ## Dispatch
//!
//! The identifier string parses into an [`EnvId`], which names both the
//! family (classic control, bsuite, `MinAtar`) and the specific environment.
//! Each environment owns a static table of [`Field`]s in [`families`]; the
//! adapter walks that table and reads each field from the [`SourceEnv`].
//!
//! ## Copying
//!
//! Scalars are copied by value. Arrays are copied into a fresh
//! [`record::Array`], so later mutation of the simulator does not reach a
//! record that was already handed out.
//!
//! ```rust,ignore
//! let record = adapter::translate(&env, "Pendulum-v0")?;
//! assert!(record.get("time").unwrap().is_zero());
//! ```

pub mod env_id;
pub mod error;
pub mod families;
pub mod source;

pub use env_id::{EnvId, Family};
pub use error::TranslateError;
pub use families::{ArcadeGrid, ClassicControl, Field, Source, TabularChain};
pub use record::{Array, Record, Value};
pub use source::{AccessError, AttrRef, SourceEnv};

use tracing::{debug, warn};

/// Translates `env` into a record using the table for `env_name`.
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedEnv`] before touching `env` if
/// `env_name` is not a supported identifier. Attribute failures from `env`
/// come back as [`TranslateError::Access`].
pub fn translate<E: SourceEnv + ?Sized>(env: &E, env_name: &str) -> Result<Record, TranslateError> {
    let id: EnvId = env_name.parse()?;
    Ok(translate_env(env, id)?)
}

/// Translates `env` into a record using the table for `id`.
///
/// # Errors
///
/// Propagates the first [`AccessError`] raised while reading a field.
pub fn translate_env<E: SourceEnv + ?Sized>(env: &E, id: EnvId) -> Result<Record, AccessError> {
    let fields = id.fields();
    if fields.is_empty() {
        warn!(env = %id, "no field mapping for environment, returning empty record");
    }

    let mut record = Record::new();
    for field in fields {
        record.insert(field.name, field.read(env)?);
    }

    debug!(env = %id, fields = record.len(), "translated source state");
    Ok(record)
}

/// Record keys produced for `id`, in table order.
#[must_use]
pub fn field_names(id: EnvId) -> Vec<&'static str> {
    id.fields().iter().map(|f| f.name).collect()
}
