//! Edge types - relationships between extracted types
//!
//! Two edge kinds are derived from the extracted records:
//! - `Inheritance`: derived type → base type
//! - `Composition`: owner type → embedded type
//!
//! Edges are never stored on a `TypeRecord`; the resolver recomputes them
//! from the current record set.

use serde::{Deserialize, Serialize};

/// Relationship kinds rendered in class diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Type lists another type as a base
    Inheritance,
    /// Type holds an attribute whose type is another extracted type
    Composition,
}

impl EdgeKind {
    /// Get the string representation of the edge kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Inheritance => "inheritance",
            EdgeKind::Composition => "composition",
        }
    }

    /// Get all edge kinds, in rendering order
    pub fn all() -> &'static [EdgeKind] {
        &[EdgeKind::Inheritance, EdgeKind::Composition]
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed relationship between two type names.
///
/// For inheritance `from` is the derived type and `to` the base; for
/// composition `from` is the owner and `to` the embedded type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub kind: EdgeKind,
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(kind: EdgeKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn inheritance(derived: impl Into<String>, base: impl Into<String>) -> Self {
        Self::new(EdgeKind::Inheritance, derived, base)
    }

    pub fn composition(owner: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(EdgeKind::Composition, owner, target)
    }
}
