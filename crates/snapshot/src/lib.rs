#![deny(clippy::all, clippy::pedantic)]
//! # Source Snapshots
//!
//! A [`Snapshot`] is a JSON dump of a simulator object's attributes that can
//! stand in for the live object as a [`SourceEnv`]:
//!
//! ```json
//! { "env": "Freeway-MinAtar",
//!   "attrs": { "env": { "pos": 9, "cars": [[0, 1, 0, 3]], "move_timer": 3,
//!                       "terminate_timer": 2500 } } }
//! ```
//!
//! Nested objects are addressed with dotted paths, nested numeric arrays
//! become row-major buffers with an inferred shape, and booleans inside
//! arrays are stored as `0.0`/`1.0`.
//!
//! Integers must be exact after loading: scalars must fit in `i64`, and
//! integers inside arrays must lie within `±2^53`. Anything else is rejected
//! with the attribute path instead of being rounded.

use adapter::{AccessError, AttrRef, EnvId, SourceEnv};
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::{Number, Value as Json};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Largest integer magnitude an `f64` array element holds exactly.
const MAX_EXACT_INT: u64 = 1 << 53;

#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    Int(i64),
    Float(f64),
    Bool(bool),
    Array { data: Vec<f64>, shape: Vec<usize> },
    Object(BTreeMap<String, Attr>),
}

impl Attr {
    /// One-dimensional array attribute.
    #[must_use]
    pub fn vector(data: &[f64]) -> Self {
        Attr::Array { data: data.to_vec(), shape: vec![data.len()] }
    }
}

#[derive(Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    env: Option<String>,
    #[serde(default)]
    attrs: serde_json::Map<String, Json>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    env: Option<EnvId>,
    attrs: BTreeMap<String, Attr>,
}

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse as a snapshot.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        json.parse::<Self>()
            .with_context(|| format!("failed to parse snapshot {}", path.display()))
    }

    /// Environment this snapshot was taken from, if recorded.
    #[must_use]
    pub fn env(&self) -> Option<EnvId> {
        self.env
    }

    #[must_use]
    pub fn with_env(mut self, env: EnvId) -> Self {
        self.env = Some(env);
        self
    }

    /// Builder form of [`Snapshot::set`].
    #[must_use]
    pub fn with(mut self, path: &str, attr: Attr) -> Self {
        self.set(path, attr);
        self
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Attr> {
        let mut segments = path.split('.');
        let mut current = self.attrs.get(segments.next()?)?;
        for segment in segments {
            match current {
                Attr::Object(children) => current = children.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Stores `attr` at `path`, creating intermediate objects and replacing
    /// any non-object found on the way.
    pub fn set(&mut self, path: &str, attr: Attr) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(leaf) = segments.pop() else { return };
        let mut map = &mut self.attrs;
        for segment in segments {
            let slot = map
                .entry(segment.to_string())
                .or_insert_with(|| Attr::Object(BTreeMap::new()));
            if !matches!(slot, Attr::Object(_)) {
                *slot = Attr::Object(BTreeMap::new());
            }
            let Attr::Object(children) = slot else { return };
            map = children;
        }
        map.insert(leaf.to_string(), attr);
    }

    /// Mutable view of an array attribute's buffer.
    pub fn array_mut(&mut self, path: &str) -> Option<&mut [f64]> {
        let mut segments = path.split('.');
        let mut current = self.attrs.get_mut(segments.next()?)?;
        for segment in segments {
            match current {
                Attr::Object(children) => current = children.get_mut(segment)?,
                _ => return None,
            }
        }
        match current {
            Attr::Array { data, .. } => Some(data.as_mut_slice()),
            _ => None,
        }
    }
}

impl FromStr for Snapshot {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        let env = file
            .env
            .map(|name| name.parse::<EnvId>())
            .transpose()?;
        let attrs = object_from_json(&file.attrs, "")?;
        Ok(Self { env, attrs })
    }
}

impl SourceEnv for Snapshot {
    fn attr(&self, path: &str) -> Result<AttrRef<'_>, AccessError> {
        let mut walked = 0;
        let mut current: Option<&Attr> = None;
        for segment in path.split('.') {
            let children = match current {
                None => &self.attrs,
                Some(Attr::Object(children)) => children,
                Some(_) => return Err(AccessError::NotAnObject(path[..walked - 1].to_string())),
            };
            current = Some(
                children
                    .get(segment)
                    .ok_or_else(|| AccessError::Missing(path.to_string()))?,
            );
            walked += segment.len() + 1;
        }

        match current {
            Some(Attr::Int(v)) => Ok(AttrRef::Int(*v)),
            Some(Attr::Float(v)) => Ok(AttrRef::Float(*v)),
            Some(Attr::Bool(v)) => Ok(AttrRef::Bool(*v)),
            Some(Attr::Array { data, shape }) => Ok(AttrRef::Array { data, shape }),
            Some(Attr::Object(_)) => Err(AccessError::NotAValue(path.to_string())),
            None => Err(AccessError::Missing(path.to_string())),
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn object_from_json(
    map: &serde_json::Map<String, Json>,
    prefix: &str,
) -> Result<BTreeMap<String, Attr>> {
    map.iter()
        .map(|(key, value)| {
            let path = join(prefix, key);
            attr_from_json(value, &path).map(|attr| (key.clone(), attr))
        })
        .collect()
}

fn attr_from_json(value: &Json, path: &str) -> Result<Attr> {
    match value {
        Json::Bool(v) => Ok(Attr::Bool(*v)),
        Json::Number(n) => scalar_from_number(n, path),
        Json::Array(items) => array_from_json(items, path),
        Json::Object(map) => Ok(Attr::Object(object_from_json(map, path)?)),
        Json::Null => bail!("attribute `{path}` is null"),
        Json::String(_) => bail!("attribute `{path}` is a string, expected a number, boolean, array or object"),
    }
}

fn scalar_from_number(n: &Number, path: &str) -> Result<Attr> {
    if let Some(v) = n.as_i64() {
        return Ok(Attr::Int(v));
    }
    if n.is_u64() {
        bail!("attribute `{path}` is an integer outside the signed 64-bit range");
    }
    let v = n
        .as_f64()
        .ok_or_else(|| anyhow!("attribute `{path}` is not a finite number"))?;
    Ok(Attr::Float(v))
}

fn element_from_number(n: &Number, path: &str) -> Result<f64> {
    let exact = n
        .as_i64()
        .map_or(!n.is_u64(), |v| v.unsigned_abs() <= MAX_EXACT_INT);
    if !exact {
        bail!("attribute `{path}` holds an integer an array element cannot store exactly");
    }
    n.as_f64()
        .ok_or_else(|| anyhow!("attribute `{path}` holds a non-finite number"))
}

fn array_from_json(items: &[Json], path: &str) -> Result<Attr> {
    let mut shape = vec![items.len()];
    let mut probe = items.first();
    while let Some(Json::Array(inner)) = probe {
        shape.push(inner.len());
        probe = inner.first();
    }

    let mut data = Vec::with_capacity(shape.iter().product());
    flatten(items, &shape, path, &mut data)?;
    Ok(Attr::Array { data, shape })
}

fn flatten(items: &[Json], shape: &[usize], path: &str, out: &mut Vec<f64>) -> Result<()> {
    if items.len() != shape[0] {
        bail!("attribute `{path}` is a ragged array");
    }
    for item in items {
        match item {
            Json::Array(inner) if shape.len() > 1 => flatten(inner, &shape[1..], path, out)?,
            Json::Number(n) if shape.len() == 1 => out.push(element_from_number(n, path)?),
            Json::Bool(b) if shape.len() == 1 => out.push(if *b { 1.0 } else { 0.0 }),
            Json::Array(_) | Json::Number(_) | Json::Bool(_) => {
                bail!("attribute `{path}` is a ragged array");
            }
            _ => bail!("attribute `{path}` holds a non-numeric element"),
        }
    }
    Ok(())
}
