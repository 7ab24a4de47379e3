//! Filter values, the [`FilterSpec`] mapping, and its query-string encoding.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escapes every byte except ASCII alphanumerics and `-`, `.`, `_`, `~`.
/// The upstream parser expects even `[` and `]` to arrive escaped.
const STRICT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A single filter value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{}", value),
            // Whole floats keep their fractional part ("100.0", not "100"),
            // matching the wire format the API receives for amount filters.
            Scalar::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{:.1}", value)
            }
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}
impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}
impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}
impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// A filter entry: either a single value or a repeated (`key[]`) list.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    One(Scalar),
    Many(Vec<Scalar>),
}

/// Normalized request filters, keyed by upstream parameter name.
///
/// Built fresh per call and never mutated after being handed to the encoder.
/// Insertion order is the emission order of [`FilterSpec::to_query_string`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSpec {
    entries: Vec<(String, FilterValue)>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a single-valued filter.
    pub fn insert(&mut self, key: &str, value: impl Into<Scalar>) {
        self.entries
            .push((key.to_string(), FilterValue::One(value.into())));
    }

    /// Inserts a repeated (`key[]`) filter, preserving element order.
    pub fn insert_list(&mut self, key: &str, values: Vec<Scalar>) {
        self.entries
            .push((key.to_string(), FilterValue::Many(values)));
    }

    pub fn entries(&self) -> &[(String, FilterValue)] {
        &self.entries
    }

    /// Encodes the filters as the inner CFNEWS query string.
    ///
    /// List values expand to one `key[]=value` segment per element, in input
    /// order; no sorting or deduplication. Every key and value is strictly
    /// percent-encoded. An empty spec encodes to an empty string, in which
    /// case the caller must omit the wrapping `q` parameter entirely.
    pub fn to_query_string(&self) -> String {
        let mut segments = Vec::new();
        for (key, value) in &self.entries {
            match value {
                FilterValue::One(scalar) => segments.push(segment(key, scalar)),
                FilterValue::Many(scalars) => {
                    let key = format!("{}[]", key);
                    for scalar in scalars {
                        segments.push(segment(&key, scalar));
                    }
                }
            }
        }
        segments.join("&")
    }
}

fn segment(key: &str, value: &Scalar) -> String {
    format!(
        "{}={}",
        utf8_percent_encode(key, STRICT),
        utf8_percent_encode(&value.to_string(), STRICT)
    )
}
