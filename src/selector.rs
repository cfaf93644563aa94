//! # Selector Entries
//!
//! A selector is one pick choice inside a cluster: the value used internally,
//! the token that identifies it as a string, and the title shown to the user.

use serde::{Serialize, Serializer};
use std::fmt;

/// The internally used datum of a selector.
///
/// Configuration files only ever produce `Text`. `Integer` lets library
/// callers register numeric values, whose token is their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorValue {
    Text(String),
    Integer(i64),
}

impl SelectorValue {
    /// The token form of this value.
    pub fn to_token(&self) -> String {
        self.to_string()
    }

    /// Returns the text if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SelectorValue::Text(text) => Some(text),
            SelectorValue::Integer(_) => None,
        }
    }
}

impl fmt::Display for SelectorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorValue::Text(text) => f.write_str(text),
            SelectorValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for SelectorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SelectorValue::Text(text) => serializer.serialize_str(text),
            SelectorValue::Integer(n) => serializer.serialize_i64(*n),
        }
    }
}

impl From<&str> for SelectorValue {
    fn from(value: &str) -> Self {
        SelectorValue::Text(value.to_string())
    }
}

impl From<String> for SelectorValue {
    fn from(value: String) -> Self {
        SelectorValue::Text(value)
    }
}

impl From<i64> for SelectorValue {
    fn from(value: i64) -> Self {
        SelectorValue::Integer(value)
    }
}

/// An immutable (value, label) pair with its derived token and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    value: SelectorValue,
    token: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Selector {
    /// Build a selector. The title is the label when one is given, otherwise
    /// the token.
    pub fn new(value: impl Into<SelectorValue>, label: Option<String>) -> Self {
        let value = value.into();
        let token = value.to_token();
        let title = label.clone().unwrap_or_else(|| token.clone());
        Self {
            value,
            token,
            title,
            label,
        }
    }

    pub fn value(&self) -> &SelectorValue {
        &self.value
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The label as declared, before falling back to the token.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Selector(token={:?}, value={:?}, title={:?})",
            self.token,
            self.value.to_string(),
            self.title
        )
    }
}
