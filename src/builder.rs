//! Builder facade
//!
//! Drives one build: pick the extractor for the input kind, interpret the
//! source text, resolve relationships, render. Each call to [`UmlBuilder::build`]
//! uses a fresh extractor, so builds never share state.

use crate::extractor::{Extraction, Extractor, InputKind};
use crate::hook::{self, DebugHook};
use crate::linker::RelationshipResolver;
use crate::render::{json, OutputFormat, PlantUmlRenderer};
use crate::{Error, Result};
use std::path::Path;
use std::sync::Arc;

pub struct UmlBuilder {
    kind: InputKind,
    format: OutputFormat,
    hook: Arc<dyn DebugHook>,
}

impl UmlBuilder {
    /// Create a builder for `kind`, rendering PlantUML with no debug hook
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            format: OutputFormat::default(),
            hook: hook::noop(),
        }
    }

    /// Create a builder for the input kind of `path`
    pub fn for_path(path: &Path) -> Result<Self> {
        Ok(Self::new(InputKind::from_path(path)?))
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_hook(mut self, hook: Arc<dyn DebugHook>) -> Self {
        self.hook = hook;
        self
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Extract facts from `source`.
    ///
    /// A schema input without any table is an error. An object-model input
    /// that fails to parse or declares no class yields an empty extraction.
    pub fn extract(&self, source: &str) -> Result<Extraction> {
        let mut extractor = Extractor::for_kind(self.kind, self.hook.clone())?;
        let found = extractor.interpret(source);
        self.hook.debug(
            "UmlBuilder.extract",
            &[("kind", &self.kind), ("found", &found), ("bytes", &source.len())],
        );

        match (self.kind, found) {
            (InputKind::Schema, false) => Err(Error::NoStructureFound),
            _ => Ok(extractor.into_extraction()),
        }
    }

    /// Render extracted facts in the configured format
    pub fn render(&self, extraction: &Extraction) -> Result<String> {
        let renderer = PlantUmlRenderer::new(self.hook.clone());
        match extraction {
            Extraction::Schema(tables) => match self.format {
                OutputFormat::PlantUml => Ok(renderer.render_schema(tables)),
                OutputFormat::Json => json::render_schema(tables),
            },
            Extraction::ObjectModel(records) => {
                let edges = RelationshipResolver::new(records, self.hook.clone()).resolve();
                match self.format {
                    OutputFormat::PlantUml => Ok(renderer.render_classes(records, &edges)),
                    OutputFormat::Json => json::render_classes(records, &edges),
                }
            }
        }
    }

    /// Extract, resolve and render in one step
    pub fn build(&self, source: &str) -> Result<String> {
        let extraction = self.extract(source)?;
        let rendered = self.render(&extraction)?;
        self.hook.debug(
            "UmlBuilder.build",
            &[("format", &self.format), ("rendered", &rendered.len()), ("status", &"done")],
        );
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::tests::RecordingHook;
    use crate::render::PLACEHOLDER;

    #[test]
    fn test_schema_build() {
        let builder = UmlBuilder::new(InputKind::Schema);
        let rendered = builder
            .build("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT);")
            .unwrap();
        assert!(rendered.contains("entity users {\n\t+ id: INTEGER PRIMARY KEY\n\t+ name: TEXT\n}"));
    }

    #[test]
    fn test_schema_without_tables_is_error() {
        let err = UmlBuilder::new(InputKind::Schema).build("-- empty\n").unwrap_err();
        assert!(matches!(err, Error::NoStructureFound));
        assert_eq!(err.to_string(), "Table is not found.");
    }

    #[test]
    fn test_object_model_build() {
        let source = "class B:\n    pass\n\nclass A(B):\n    child: B\n";
        let rendered = UmlBuilder::new(InputKind::ObjectModel).build(source).unwrap();
        assert!(rendered.ends_with("B <|-- A\nA *-- B\n@enduml"));
    }

    #[test]
    fn test_syntax_error_renders_placeholder() {
        let rendered = UmlBuilder::new(InputKind::ObjectModel)
            .build("class A(:\n")
            .unwrap();
        assert_eq!(rendered, PLACEHOLDER);
    }

    #[test]
    fn test_json_format() {
        let rendered = UmlBuilder::new(InputKind::ObjectModel)
            .with_format(OutputFormat::Json)
            .build("class A:\n    x: int = 0\n")
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["types"][0]["attributes"][0]["declared_type"], "int");
    }

    #[test]
    fn test_for_path_rejects_unknown_kind() {
        assert!(matches!(
            UmlBuilder::for_path(Path::new("diagram.txt")),
            Err(Error::UnsupportedInputKind(_))
        ));
        assert_eq!(
            UmlBuilder::for_path(Path::new("m.py")).unwrap().kind(),
            InputKind::ObjectModel
        );
    }

    #[test]
    fn test_hook_sees_every_stage() {
        let recorder = Arc::new(RecordingHook::default());
        UmlBuilder::new(InputKind::Schema)
            .with_hook(recorder.clone())
            .build("CREATE TABLE t (a INT);")
            .unwrap();

        let events = recorder.events.lock().unwrap();
        let stages: Vec<_> = events
            .iter()
            .map(|e| e.split_whitespace().next().unwrap_or_default())
            .collect();
        assert_eq!(
            stages,
            vec![
                "SchemaExtractor.interpret",
                "UmlBuilder.extract",
                "PlantUmlRenderer.render_schema",
                "UmlBuilder.build",
            ]
        );
    }
}
