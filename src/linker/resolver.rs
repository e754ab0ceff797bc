//! Relationship resolver
//!
//! Derives inheritance and composition edges from a set of extracted
//! type records. Output order follows record order, then base / attribute
//! order within each record, so the same records always yield the same
//! edge list.

use crate::edge::Edge;
use crate::hook::DebugHook;
use crate::record::TypeRecord;
use std::collections::HashSet;
use std::sync::Arc;

/// Bases that carry no structural information
const PLACEHOLDER_BASES: &[&str] = &["object", "Any"];

/// Generic wrappers peeled off an attribute type before matching
const WRAPPER_PREFIXES: &[&str] = &["Optional[", "List[", "Dict[", "Set[", "Tuple["];

pub struct RelationshipResolver<'a> {
    records: &'a [TypeRecord],
    hook: Arc<dyn DebugHook>,
}

impl<'a> RelationshipResolver<'a> {
    pub fn new(records: &'a [TypeRecord], hook: Arc<dyn DebugHook>) -> Self {
        Self { records, hook }
    }

    /// All edges: inheritance first, then composition
    pub fn resolve(&self) -> Vec<Edge> {
        let mut edges = self.inheritance();
        edges.extend(self.composition());
        edges
    }

    /// One edge per non-placeholder base, whether or not the base was extracted
    pub fn inheritance(&self) -> Vec<Edge> {
        let edges: Vec<Edge> = self
            .records
            .iter()
            .flat_map(|record| {
                record
                    .bases
                    .iter()
                    .filter(|base| !base.is_empty() && !PLACEHOLDER_BASES.contains(&base.as_str()))
                    .map(|base| Edge::inheritance(&record.name, base))
            })
            .collect();

        self.hook.debug("RelationshipResolver.inheritance", &[("edges", &edges.len())]);
        edges
    }

    /// One edge per attribute whose bare type names another extracted type.
    /// Self-references are skipped; duplicates are kept.
    pub fn composition(&self) -> Vec<Edge> {
        let local: HashSet<&str> = self.records.iter().map(|r| r.name.as_str()).collect();

        let edges: Vec<Edge> = self
            .records
            .iter()
            .flat_map(|record| {
                let local = &local;
                record.attributes.iter().filter_map(move |attribute| {
                    let target = bare_type_name(&attribute.declared_type);
                    (local.contains(target) && target != record.name)
                        .then(|| Edge::composition(&record.name, target))
                })
            })
            .collect();

        self.hook.debug("RelationshipResolver.composition", &[("edges", &edges.len())]);
        edges
    }
}

/// Reduce an annotation to the single type name composition matches on.
///
/// `Optional["Node"]` → `Node`, `Dict[Key, Value]` → `Key`, `Node` → `Node`.
pub fn bare_type_name(declared_type: &str) -> &str {
    let unwrapped = WRAPPER_PREFIXES
        .iter()
        .find_map(|prefix| declared_type.strip_prefix(prefix))
        .unwrap_or(declared_type);

    unwrapped
        .split(',')
        .next()
        .unwrap_or_default()
        .trim_end_matches(']')
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
}
