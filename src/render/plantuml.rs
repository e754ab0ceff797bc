//! PlantUML renderer
//!
//! Serializes extracted facts into diagram markup. Output depends only on
//! the order of its inputs, so identical inputs give byte-identical text.

use crate::edge::{Edge, EdgeKind};
use crate::hook::DebugHook;
use crate::record::TypeRecord;
use crate::table::Table;
use std::sync::Arc;

pub const START: &str = "@startuml";
pub const END: &str = "@enduml";
pub const LINETYPE: &str = "skinparam linetype ortho";
pub const PRAGMA: &str = "!pragma teoz true";

/// Document emitted when a module yields no classes
pub const PLACEHOLDER: &str = "@startuml\n' No classes found.\n@enduml";

pub struct PlantUmlRenderer {
    hook: Arc<dyn DebugHook>,
}

impl PlantUmlRenderer {
    pub fn new(hook: Arc<dyn DebugHook>) -> Self {
        Self { hook }
    }

    /// One `entity` block per table, columns in source order
    pub fn render_schema(&self, tables: &[Table]) -> String {
        let mut uml: Vec<String> = vec![format!("{}\n", START), LINETYPE.into(), PRAGMA.into()];

        for table in tables {
            uml.push(format!("\nentity {} {{", table.name));
            for column in &table.columns {
                uml.push(format!("\t+ {}: {}", column.name, column.spec));
            }
            uml.push("}".into());
        }
        uml.push(END.into());

        self.hook.debug("PlantUmlRenderer.render_schema", &[("entities", &tables.len())]);
        uml.join("\n")
    }

    /// One `class` block per record, then inheritance edges, then composition edges
    pub fn render_classes(&self, records: &[TypeRecord], edges: &[Edge]) -> String {
        if records.is_empty() {
            self.hook.debug("PlantUmlRenderer.render_classes", &[("placeholder", &true)]);
            return PLACEHOLDER.to_string();
        }

        let mut uml: Vec<String> = vec![START.into(), LINETYPE.into(), PRAGMA.into()];

        for record in records {
            uml.push(format!("class {} {{", record.name));
            for attribute in &record.attributes {
                let mut line = format!("  {} {}", attribute.visibility(), attribute.name);
                if !attribute.declared_type.is_empty() {
                    line.push_str(&format!(": {}", attribute.declared_type));
                }
                uml.push(line);
            }
            for method in &record.methods {
                let mut line = format!("  {} {}", method.visibility(), method.signature());
                if let Some(stereotype) = method.kind.stereotype() {
                    line.push(' ');
                    line.push_str(stereotype);
                }
                uml.push(line);
            }
            uml.push("}".into());
        }

        for kind in EdgeKind::all() {
            uml.extend(edges.iter().filter(|e| e.kind == *kind).map(edge_line));
        }
        uml.push(END.into());

        self.hook.debug(
            "PlantUmlRenderer.render_classes",
            &[("classes", &records.len()), ("edges", &edges.len())],
        );
        uml.join("\n")
    }
}

fn edge_line(edge: &Edge) -> String {
    match edge.kind {
        EdgeKind::Inheritance => format!("{} <|-- {}", edge.to, edge.from),
        EdgeKind::Composition => format!("{} *-- {}", edge.from, edge.to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook;
    use crate::record::{Attribute, Method, MethodKind, Parameter};
    use crate::table::ColumnSpec;

    fn renderer() -> PlantUmlRenderer {
        PlantUmlRenderer::new(hook::noop())
    }

    #[test]
    fn test_schema_document() {
        let mut users = Table::new("users");
        users.upsert_column(ColumnSpec::new("id", "INTEGER PRIMARY KEY"));
        users.upsert_column(ColumnSpec::new("name", "TEXT"));
        let audit = Table::new("audit.log");

        let expected = "@startuml\n\nskinparam linetype ortho\n!pragma teoz true\n\n\
entity users {\n\t+ id: INTEGER PRIMARY KEY\n\t+ name: TEXT\n}\n\n\
entity audit.log {\n}\n@enduml";
        assert_eq!(renderer().render_schema(&[users, audit]), expected);
    }

    #[test]
    fn test_class_document() {
        let mut a = TypeRecord::new("A");
        a.bases = vec!["B".into()];
        a.add_attribute(Attribute::new("child", "B"));
        a.add_attribute(Attribute::new("_cache", ""));
        a.add_attribute(Attribute::new("__token", "str"));
        a.methods.push(Method {
            name: "__init__".into(),
            parameters: vec![Parameter::new("child", "B")],
            return_type: "None".into(),
            kind: MethodKind::Instance,
        });
        a.methods.push(Method {
            name: "create".into(),
            parameters: vec![],
            return_type: "A".into(),
            kind: MethodKind::ClassMethod,
        });
        a.methods.push(Method {
            name: "helper".into(),
            parameters: vec![Parameter::new("x", "")],
            return_type: String::new(),
            kind: MethodKind::StaticMethod,
        });
        let b = TypeRecord::new("B");

        let edges = vec![Edge::composition("A", "B"), Edge::inheritance("A", "B")];
        let expected = "\
@startuml
skinparam linetype ortho
!pragma teoz true
class A {
  + child: B
  # _cache
  - __token: str
  # __init__(child: B): None
  + create(): A «class»
  + helper(x) «static»
}
class B {
}
B <|-- A
A *-- B
@enduml";
        assert_eq!(renderer().render_classes(&[a, b], &edges), expected);
    }

    #[test]
    fn test_placeholder_for_no_classes() {
        assert_eq!(renderer().render_classes(&[], &[]), PLACEHOLDER);
        assert!(PLACEHOLDER.starts_with(START) && PLACEHOLDER.ends_with(END));
    }
}
