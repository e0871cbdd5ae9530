//! Vertex identities.
//!
//! A vertex is nothing but its label: equality, ordering and hashing are all
//! derived from the label, and a label never changes once constructed.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The label identifying a vertex, either an integer or a name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// An integer label.
    Int(i64),
    /// A textual label.
    Name(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(n) => write!(f, "{n}"),
            Label::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Int(n)
    }
}

impl From<i32> for Label {
    fn from(n: i32) -> Self {
        Label::Int(i64::from(n))
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Name(s.to_owned())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Name(s)
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}

/// An immutable, label-identified graph vertex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex {
    label: Label,
}

impl Vertex {
    /// Creates a vertex with the given label.
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the label of this vertex.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

macro_rules! vertex_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Vertex {
                fn from(label: $t) -> Self {
                    Vertex::new(label)
                }
            }
        )*
    };
}

vertex_from!(Label, i64, i32, &str, String);
