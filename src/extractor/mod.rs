//! Extractors
//!
//! Two front ends turn source text into structural facts:
//! - [`SchemaExtractor`] matches table DDL with a relaxed pattern grammar
//! - [`ObjectModelExtractor`] walks a Python syntax tree built by tree-sitter
//!
//! [`Extractor`] is the closed variant over both, selected by [`InputKind`].

pub mod framework;
pub mod python;
pub mod sql;
pub mod unparse;

pub use framework::{Extraction, Extractor, InputKind};
pub use python::ObjectModelExtractor;
pub use sql::SchemaExtractor;
