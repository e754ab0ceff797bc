//! JSON dump of extracted facts, for tooling that wants the model rather
//! than diagram markup.

use crate::edge::Edge;
use crate::record::{Attribute, Method, TypeRecord};
use crate::table::Table;
use crate::visibility::Visibility;
use crate::Result;
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Document<'a> {
    Schema {
        tables: &'a [Table],
    },
    ObjectModel {
        types: Vec<TypeView<'a>>,
        edges: &'a [Edge],
    },
}

#[derive(Serialize)]
struct TypeView<'a> {
    name: &'a str,
    bases: &'a [String],
    attributes: Vec<AttributeView<'a>>,
    methods: Vec<MethodView<'a>>,
}

#[derive(Serialize)]
struct AttributeView<'a> {
    #[serde(flatten)]
    attribute: &'a Attribute,
    visibility: Visibility,
}

#[derive(Serialize)]
struct MethodView<'a> {
    #[serde(flatten)]
    method: &'a Method,
    visibility: Visibility,
    signature: String,
}

impl<'a> From<&'a TypeRecord> for TypeView<'a> {
    fn from(record: &'a TypeRecord) -> Self {
        Self {
            name: &record.name,
            bases: &record.bases,
            attributes: record
                .attributes
                .iter()
                .map(|attribute| AttributeView {
                    attribute,
                    visibility: attribute.visibility(),
                })
                .collect(),
            methods: record
                .methods
                .iter()
                .map(|method| MethodView {
                    method,
                    visibility: method.visibility(),
                    signature: method.signature(),
                })
                .collect(),
        }
    }
}

/// Pretty-printed `{"kind": "schema", "tables": [...]}`
pub fn render_schema(tables: &[Table]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Document::Schema { tables })?)
}

/// Pretty-printed `{"kind": "object_model", "types": [...], "edges": [...]}`
pub fn render_classes(records: &[TypeRecord], edges: &[Edge]) -> Result<String> {
    let types = records.iter().map(TypeView::from).collect();
    Ok(serde_json::to_string_pretty(&Document::ObjectModel { types, edges })?)
}
