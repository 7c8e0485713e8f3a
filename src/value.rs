//! Host-facing value encodings.
//!
//! The host hands the editor its value in one of three shapes: a flat list
//! of Y values (implicit series), a list of `[x, y]` pairs (explicit
//! series), or an index-to-pair mapping that patches individual points. All
//! three also arrive as JSON text; parsing is strict and reports failure
//! through a `Result` so the caller can keep the previous value.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::geom::Point;

/// Error raised when a textual value payload cannot be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not one of the accepted JSON shapes.
    #[error("unparseable series payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A series value supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueInput {
    /// Y values only; X is derived from the index.
    Implicit(Vec<f64>),
    /// Explicit `[x, y]` pairs.
    Explicit(Vec<(f64, f64)>),
    /// Sparse update: new pairs for the given indices, others untouched.
    Partial(BTreeMap<usize, (f64, f64)>),
}

// Hand-rolled untagged deserialization: the derived `#[serde(untagged)]`
// impl buffers map keys as strings and cannot recover the `usize` keys of
// the partial form, so the partial variant is read with string keys and
// converted here.
impl<'de> Deserialize<'de> for ValueInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Implicit(Vec<f64>),
            Explicit(Vec<(f64, f64)>),
            Partial(BTreeMap<String, (f64, f64)>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Implicit(values) => Ok(Self::Implicit(values)),
            Raw::Explicit(pairs) => Ok(Self::Explicit(pairs)),
            Raw::Partial(updates) => updates
                .into_iter()
                .map(|(key, pair)| {
                    key.parse::<usize>().map(|index| (index, pair)).map_err(|_| {
                        serde::de::Error::custom(format!("invalid point index key: {key:?}"))
                    })
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Partial),
        }
    }
}

impl ValueInput {
    /// Parse a textual value payload.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl From<Vec<f64>> for ValueInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Implicit(values)
    }
}

impl From<Vec<Point>> for ValueInput {
    fn from(points: Vec<Point>) -> Self {
        Self::Explicit(points.into_iter().map(|point| (point.x, point.y)).collect())
    }
}
