//! Scalar parameter values attached to validation rules.

use serde::{Deserialize, Serialize};

/// A scalar rule parameter as found in a definition file.
///
/// The wire format is an untyped key→value mapping, so the value is modelled
/// as a tagged union rather than inspected at runtime. Variant order matters
/// for untagged deserialization: booleans and numbers must be tried before
/// falling back to strings.
///
/// # Example
///
/// ```rust
/// use fluentgen::models::ParamValue;
///
/// let v: ParamValue = serde_json::from_str("18").unwrap();
/// assert_eq!(v, ParamValue::Number(18.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean parameter (e.g. `{"value": true}`)
    Bool(bool),
    /// Numeric parameter; integers and decimals share one representation
    Number(f64),
    /// String parameter
    Str(String),
}

impl ParamValue {
    /// Return the string content if this is a string parameter.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Return the numeric content if this is a numeric parameter.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}
