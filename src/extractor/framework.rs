//! Core extractor framework
//!
//! Input kinds form a closed set, so the extractor is a tagged variant
//! rather than a trait object: the builder matches on it exhaustively at
//! its single call site.

use super::python::ObjectModelExtractor;
use super::sql::SchemaExtractor;
use crate::hook::DebugHook;
use crate::record::TypeRecord;
use crate::table::Table;
use crate::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// The kind of source text an input file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Relational schema definitions (table DDL)
    Schema,
    /// Python module source
    ObjectModel,
}

impl InputKind {
    /// Get the kind name (for display)
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Schema => "schema",
            InputKind::ObjectModel => "object model",
        }
    }

    /// Get file extensions this kind is detected from
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            InputKind::Schema => &["sql"],
            InputKind::ObjectModel => &["py", "pyi"],
        }
    }

    /// Get all input kinds
    pub fn all() -> &'static [InputKind] {
        &[InputKind::Schema, InputKind::ObjectModel]
    }

    /// Match an extension (without the dot), case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.file_extensions().contains(&ext.as_str()))
    }

    /// Detect the kind of a file from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| {
            let suffix = if ext.is_empty() {
                String::new()
            } else {
                format!(".{}", ext)
            };
            Error::UnsupportedInputKind(suffix)
        })
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Facts produced by one extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Schema(Vec<Table>),
    /// Empty when the module failed to parse or declared no classes
    ObjectModel(Vec<TypeRecord>),
}

impl Extraction {
    pub fn kind(&self) -> InputKind {
        match self {
            Extraction::Schema(_) => InputKind::Schema,
            Extraction::ObjectModel(_) => InputKind::ObjectModel,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Extraction::Schema(tables) => tables.is_empty(),
            Extraction::ObjectModel(records) => records.is_empty(),
        }
    }
}

/// One freshly-initialised extractor for a single extraction call.
pub enum Extractor {
    Schema(SchemaExtractor),
    ObjectModel(ObjectModelExtractor),
}

impl Extractor {
    /// Create the extractor matching `kind`
    pub fn for_kind(kind: InputKind, hook: Arc<dyn DebugHook>) -> Result<Self> {
        Ok(match kind {
            InputKind::Schema => Extractor::Schema(SchemaExtractor::new(hook)),
            InputKind::ObjectModel => Extractor::ObjectModel(ObjectModelExtractor::new(hook)?),
        })
    }

    /// Run extraction; `true` iff at least one structure was found
    pub fn interpret(&mut self, text: &str) -> bool {
        match self {
            Extractor::Schema(extractor) => extractor.interpret(text),
            Extractor::ObjectModel(extractor) => extractor.interpret(text),
        }
    }

    /// Hand over the extracted facts
    pub fn into_extraction(self) -> Extraction {
        match self {
            Extractor::Schema(extractor) => Extraction::Schema(extractor.into_tables()),
            Extractor::ObjectModel(extractor) => Extraction::ObjectModel(extractor.into_records()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook;

    #[test]
    fn test_kind_detection() {
        assert_eq!(InputKind::from_path(Path::new("db/schema.sql")).unwrap(), InputKind::Schema);
        assert_eq!(InputKind::from_path(Path::new("SCHEMA.SQL")).unwrap(), InputKind::Schema);
        assert_eq!(InputKind::from_path(Path::new("pkg/models.py")).unwrap(), InputKind::ObjectModel);
        assert_eq!(InputKind::from_path(Path::new("pkg/models.pyi")).unwrap(), InputKind::ObjectModel);
    }

    #[test]
    fn test_unsupported_kind() {
        let err = InputKind::from_path(Path::new("notes.md")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInputKind(ref s) if s == ".md"));
        assert_eq!(err.to_string(), "Unknown extension: [.md]");

        let err = InputKind::from_path(Path::new("Makefile")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInputKind(ref s) if s.is_empty()));
    }

    #[test]
    fn test_extractor_dispatch() {
        let mut extractor = Extractor::for_kind(InputKind::Schema, hook::noop()).unwrap();
        assert!(extractor.interpret("CREATE TABLE t (id INT);"));
        let extraction = extractor.into_extraction();
        assert_eq!(extraction.kind(), InputKind::Schema);
        assert!(!extraction.is_empty());

        let mut extractor = Extractor::for_kind(InputKind::ObjectModel, hook::noop()).unwrap();
        assert!(!extractor.interpret("x = 1\n"));
        assert!(extractor.into_extraction().is_empty());
    }
}
