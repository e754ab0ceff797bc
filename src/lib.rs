//! # umlsketch - diagrams from source structure
//!
//! Extracts structure from two kinds of source text and renders it as
//! PlantUML:
//! - SQL table definitions become entities with their columns
//! - Python modules become classes with attributes, methods, inheritance
//!   and composition edges
//!
//! ```
//! use umlsketch::{InputKind, UmlBuilder};
//!
//! let uml = UmlBuilder::new(InputKind::Schema)
//!     .build("CREATE TABLE users (id INTEGER, name TEXT);")
//!     .unwrap();
//! assert!(uml.starts_with("@startuml"));
//! ```

pub mod table;
pub mod record;
pub mod visibility;
pub mod edge;
pub mod hook;
pub mod extractor;
pub mod linker;
pub mod render;
pub mod builder;
pub mod source;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use builder::UmlBuilder;
pub use edge::{Edge, EdgeKind};
pub use extractor::{Extraction, InputKind};
pub use hook::{DebugHook, NoopHook, TracingHook};
pub use record::{Attribute, Method, MethodKind, Parameter, TypeRecord};
pub use render::OutputFormat;
pub use table::{ColumnSpec, Table};
pub use visibility::Visibility;

use std::path::PathBuf;

/// Result type alias for umlsketch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for umlsketch operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Table is not found.")]
    NoStructureFound,

    #[error("Unknown extension: [{0}]")]
    UnsupportedInputKind(String),

    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Unknown output format: {0}")]
    InvalidFormat(String),

    #[error("Parser error: {0}")]
    Parser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
