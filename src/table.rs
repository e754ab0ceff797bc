//! Table types - extracted schema structure
//!
//! A `Table` is produced once per matched creation statement and is never
//! mutated after extraction completes.

use serde::{Deserialize, Serialize};

/// One column definition inside a table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, unique within its table
    pub name: String,
    /// Type and inline constraints, verbatim from the source
    pub spec: String,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
        }
    }
}

/// A table with its columns in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// `schema.table` when a schema qualifier was present, else `table`
    pub name: String,
    /// Columns in first-seen order
    pub columns: Vec<ColumnSpec>,
}

impl Table {
    /// Create a table without columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Build the qualified name from an optional schema and a table name
    pub fn qualified_name(schema: Option<&str>, table: &str) -> String {
        match schema {
            Some(schema) if !schema.is_empty() => format!("{}.{}", schema, table),
            _ => table.to_string(),
        }
    }

    /// Record a column. A repeated name keeps its position and takes the new spec.
    pub fn upsert_column(&mut self, column: ColumnSpec) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => existing.spec = column.spec,
            None => self.columns.push(column),
        }
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        assert_eq!(Table::qualified_name(Some("public"), "users"), "public.users");
        assert_eq!(Table::qualified_name(None, "users"), "users");
        assert_eq!(Table::qualified_name(Some(""), "users"), "users");
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut table = Table::new("t");
        table.upsert_column(ColumnSpec::new("a", "INT"));
        table.upsert_column(ColumnSpec::new("b", "TEXT"));
        table.upsert_column(ColumnSpec::new("a", "BIGINT"));

        let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(table.column("a").unwrap().spec, "BIGINT");
    }
}
