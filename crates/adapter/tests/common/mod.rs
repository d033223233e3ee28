use adapter::{AccessError, AttrRef, SourceEnv};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Attr {
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<f64>, Vec<usize>),
}

/// Source object backed by a flat map of dotted paths.
#[derive(Debug, Default)]
pub struct MapEnv {
    pub attrs: HashMap<String, Attr>,
}

impl MapEnv {
    pub fn with(mut self, path: &str, attr: Attr) -> Self {
        self.attrs.insert(path.to_string(), attr);
        self
    }

    pub fn with_vec(self, path: &str, data: &[f64]) -> Self {
        self.with(path, Attr::Array(data.to_vec(), vec![data.len()]))
    }

    pub fn array_mut(&mut self, path: &str) -> &mut Vec<f64> {
        match self.attrs.get_mut(path) {
            Some(Attr::Array(data, _)) => data,
            other => panic!("{path} is not an array: {other:?}"),
        }
    }
}

impl SourceEnv for MapEnv {
    fn attr(&self, path: &str) -> Result<AttrRef<'_>, AccessError> {
        match self.attrs.get(path) {
            Some(Attr::Int(v)) => Ok(AttrRef::Int(*v)),
            Some(Attr::Float(v)) => Ok(AttrRef::Float(*v)),
            Some(Attr::Bool(v)) => Ok(AttrRef::Bool(*v)),
            Some(Attr::Array(data, shape)) => Ok(AttrRef::Array { data, shape }),
            None => Err(AccessError::Missing(path.to_string())),
        }
    }
}

/// A just-reset simulator: `state` is a zero vector, every other attribute
/// reads as integer zero.
pub struct ZeroEnv {
    state: Vec<f64>,
    shape: Vec<usize>,
}

impl ZeroEnv {
    pub fn new() -> Self {
        Self { state: vec![0.0; 4], shape: vec![4] }
    }
}

impl SourceEnv for ZeroEnv {
    fn attr(&self, path: &str) -> Result<AttrRef<'_>, AccessError> {
        if path == "state" {
            Ok(AttrRef::Array { data: &self.state, shape: &self.shape })
        } else {
            Ok(AttrRef::Int(0))
        }
    }
}
