//! Schema extractor
//!
//! Pattern-matches `CREATE TABLE` statements in free-form DDL text. The
//! grammar accepted is deliberately relaxed: only the statement frame is
//! matched, and the body is split into clauses by a paren-depth-aware
//! comma scan. Column specifications are kept verbatim.

use crate::hook::DebugHook;
use crate::table::{ColumnSpec, Table};
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Statement frame: keywords, optional `schema.` qualifier, table name,
/// non-greedy parenthesized body, terminator. Names may be quoted or bare.
const CREATE_TABLE: &str = r#"(?isx)
    CREATE \s+ TABLE \s+
    (?: IF \s+ NOT \s+ EXISTS \s+ )?
    (?: (?: "(?P<schema_q>[^"]+)" | (?P<schema_u>\w+) ) \s* \. \s* )?
    (?: "(?P<table_q>[^"]+)" | (?P<table_u>\w+) )
    \s* \(
    (?P<cols>.*?)
    \) \s* ;
"#;

/// Leading keywords of table-level constraint clauses
const TABLE_LEVEL: &[&str] = &["PRIMARY", "UNIQUE", "FOREIGN", "CONSTRAINT", "CHECK"];

fn create_table_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(CREATE_TABLE).ok()).as_ref()
}

/// Extracts tables and their columns from schema-definition text.
pub struct SchemaExtractor {
    tables: Vec<Table>,
    hook: Arc<dyn DebugHook>,
}

impl SchemaExtractor {
    pub fn new(hook: Arc<dyn DebugHook>) -> Self {
        Self {
            tables: Vec::new(),
            hook,
        }
    }

    /// Scan `text` for creation statements.
    ///
    /// Returns `true` iff at least one table was found. A later statement
    /// for an already-seen qualified name replaces that table's columns.
    pub fn interpret(&mut self, text: &str) -> bool {
        let Some(pattern) = create_table_pattern() else {
            return false;
        };

        for caps in pattern.captures_iter(text) {
            let schema = caps
                .name("schema_q")
                .or_else(|| caps.name("schema_u"))
                .map(|m| m.as_str());
            let table = caps
                .name("table_q")
                .or_else(|| caps.name("table_u"))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let body = caps.name("cols").map(|m| m.as_str()).unwrap_or_default();

            let table = parse_table(Table::qualified_name(schema, table), body);
            self.hook.debug(
                "SchemaExtractor.interpret",
                &[("table", &table.name), ("columns", &table.columns.len())],
            );
            self.insert_table(table);
        }

        !self.tables.is_empty()
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }

    fn insert_table(&mut self, table: Table) {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }
}

fn parse_table(name: String, body: &str) -> Table {
    let mut table = Table::new(name);
    for clause in split_clauses(body) {
        if let Some(column) = parse_clause(clause) {
            table.upsert_column(column);
        }
    }
    table
}

/// Split a table body on commas that sit outside every parenthesis.
pub fn split_clauses(body: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                clauses.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    clauses.push(&body[start..]);
    clauses
}

/// Turn one clause into a column, or `None` for blanks and table-level constraints.
fn parse_clause(clause: &str) -> Option<ColumnSpec> {
    let line = clause.trim();
    if line.is_empty() {
        return None;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let head = head.trim_matches('"');

    if TABLE_LEVEL.contains(&head.to_uppercase().as_str()) {
        return None;
    }
    Some(ColumnSpec::new(head, rest))
}
