//! Source text provider
//!
//! Loads an input file whole and applies macro substitutions before the
//! text reaches an extractor.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A literal token replaced by a value throughout the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    pub token: String,
    pub value: String,
}

impl Macro {
    pub fn new(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            value: value.into(),
        }
    }

    /// Parse a `TOKEN=VALUE` definition; the value may be empty
    pub fn parse_definition(definition: &str) -> Option<Self> {
        let (token, value) = definition.split_once('=')?;
        if token.is_empty() {
            return None;
        }
        Some(Self::new(token, value))
    }
}

/// Contents of one input file after macro substitution.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub path: PathBuf,
    pub content: String,
}

impl SourceText {
    /// Read `path` as UTF-8 and apply `macros` in order
    pub fn load(path: &Path, macros: &[Macro]) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content: substitute(content, macros),
        })
    }
}

/// Replace every occurrence of each macro token, one macro after another
pub fn substitute(mut content: String, macros: &[Macro]) -> String {
    for m in macros.iter().filter(|m| !m.token.is_empty()) {
        if content.contains(&m.token) {
            content = content.replace(&m.token, &m.value);
        }
    }
    content
}
