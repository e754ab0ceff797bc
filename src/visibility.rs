//! Member visibility derived from Python's leading-underscore convention

use serde::{Deserialize, Serialize};

/// Visibility of an attribute or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// No leading underscore
    Public,
    /// Single leading underscore, or a dunder name such as `__init__`
    Protected,
    /// Two leading underscores without two trailing ones (name-mangled)
    Private,
}

impl Visibility {
    /// Derive visibility from a member name
    pub fn of(name: &str) -> Self {
        if name.starts_with("__") && !name.ends_with("__") {
            Visibility::Private
        } else if name.starts_with('_') {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    /// PlantUML marker for this visibility
    pub fn marker(&self) -> &'static str {
        match self {
            Visibility::Public => "+",
            Visibility::Protected => "#",
            Visibility::Private => "-",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}
