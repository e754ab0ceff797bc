//! Python object-model extractor
//!
//! Parses a module with tree-sitter and describes each top-level class:
//! bases, class-level and instance-level attributes, and methods.
//! Extraction is all-or-nothing: a module with a syntax error yields no
//! records at all.

use super::unparse::{named_children, text, unparse, Expr};
use crate::hook::DebugHook;
use crate::record::{Attribute, Method, MethodKind, Parameter, TypeRecord};
use crate::{Error, Result};
use std::collections::VecDeque;
use std::sync::Arc;
use tree_sitter::{Language, Node, Parser};

/// Extracts `TypeRecord`s from Python module source.
pub struct ObjectModelExtractor {
    parser: Parser,
    records: Vec<TypeRecord>,
    hook: Arc<dyn DebugHook>,
}

impl ObjectModelExtractor {
    /// Create an extractor with the Python grammar loaded
    pub fn new(hook: Arc<dyn DebugHook>) -> Result<Self> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parser(format!("Failed to set language: {}", e)))?;

        Ok(Self {
            parser,
            records: Vec::new(),
            hook,
        })
    }

    /// Parse `source` as a full module.
    ///
    /// Returns `false` on a syntax error (nothing is recorded) and
    /// otherwise `true` iff at least one class was declared.
    pub fn interpret(&mut self, source: &str) -> bool {
        let Some(tree) = self.parser.parse(source, None) else {
            self.hook.debug("ObjectModelExtractor.interpret", &[("status", &"parse aborted")]);
            return false;
        };

        let root = tree.root_node();
        if root.has_error() || has_invalid_construct(root) {
            self.hook.debug("ObjectModelExtractor.interpret", &[("status", &"syntax error")]);
            return false;
        }

        let bytes = source.as_bytes();
        for node in named_children(root) {
            let Some(class) = class_definition(node) else {
                continue;
            };
            if let Some(record) = self.parse_class(class, bytes) {
                self.insert_record(record);
            }
        }

        self.hook.debug(
            "ObjectModelExtractor.interpret",
            &[("status", &"done"), ("classes", &self.records.len())],
        );
        !self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<TypeRecord> {
        self.records
    }

    fn insert_record(&mut self, record: TypeRecord) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Describe one class definition
    fn parse_class(&self, node: Node, source: &[u8]) -> Option<TypeRecord> {
        let name = text(node.child_by_field_name("name")?, source);
        let mut record = TypeRecord::new(name);

        if let Some(superclasses) = node.child_by_field_name("superclasses") {
            record.bases = named_children(superclasses)
                .into_iter()
                .filter_map(|base| base_name(base, source))
                .collect();
        }

        let body = named_children(node.child_by_field_name("body")?);

        // Class-level attributes are recorded strictly before anything found
        // in method bodies, which makes the dedup rule deterministic.
        for statement in &body {
            if statement.kind() != "expression_statement" {
                continue;
            }
            for assignment in named_children(*statement) {
                if assignment.kind() == "assignment" {
                    collect_class_attributes(assignment, source, &mut record);
                }
            }
        }

        for statement in &body {
            let Some((function, decorators)) = function_definition(*statement) else {
                continue;
            };
            record.methods.push(parse_method(function, &decorators, source));
            collect_instance_attributes(function, source, &mut record);
        }

        self.hook.debug(
            "ObjectModelExtractor.class",
            &[
                ("name", &record.name),
                ("bases", &record.bases.len()),
                ("attributes", &record.attributes.len()),
                ("methods", &record.methods.len()),
            ],
        );
        Some(record)
    }
}

/// A base-list entry as text, when it names a class.
///
/// Calls, keyword arguments such as `metaclass=...` and starred
/// expressions are dropped.
fn base_name(node: Node, source: &[u8]) -> Option<String> {
    match Expr::from_node(node, source) {
        expr @ (Expr::Name(_) | Expr::Attribute { .. } | Expr::Subscript { .. }) => {
            Some(expr.to_string())
        }
        _ => None,
    }
}

/// Constructs tree-sitter accepts but Python 3 rejects
fn has_invalid_construct(root: Node) -> bool {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let invalid = match node.kind() {
            "exec_statement" => true,
            "print_statement" => !is_parenthesized_print(node),
            "parameters" | "lambda_parameters" => required_after_default(node),
            _ => false,
        };
        if invalid {
            return true;
        }
        stack.extend(named_children(node));
    }
    false
}

/// `print(x)` and `print(a, b)` are calls even when the grammar reports them
/// as print statements
fn is_parenthesized_print(node: Node) -> bool {
    matches!(
        named_children(node).as_slice(),
        [argument] if matches!(argument.kind(), "parenthesized_expression" | "tuple")
    )
}

/// `def f(a=1, b)`: a plain positional parameter after a defaulted one.
/// Keyword-only parameters after `*` may come in any order.
fn required_after_default(parameters: Node) -> bool {
    let mut defaulted = false;
    for parameter in named_children(parameters) {
        let target = match parameter.kind() {
            "typed_parameter" => named_children(parameter).first().copied().unwrap_or(parameter),
            _ => parameter,
        };
        match target.kind() {
            "default_parameter" | "typed_default_parameter" => defaulted = true,
            "identifier" if defaulted => return true,
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => return false,
            _ => {}
        }
    }
    false
}

/// The class node of a top-level statement, looking through decorators
fn class_definition(node: Node) -> Option<Node> {
    match node.kind() {
        "class_definition" => Some(node),
        "decorated_definition" => node
            .child_by_field_name("definition")
            .filter(|d| d.kind() == "class_definition"),
        _ => None,
    }
}

/// The function node of a class-body statement, with its decorators
fn function_definition(node: Node) -> Option<(Node, Vec<Node>)> {
    match node.kind() {
        "function_definition" => Some((node, Vec::new())),
        "decorated_definition" => {
            let function = node
                .child_by_field_name("definition")
                .filter(|d| d.kind() == "function_definition")?;
            let decorators = named_children(node)
                .into_iter()
                .filter(|n| n.kind() == "decorator")
                .collect();
            Some((function, decorators))
        }
        _ => None,
    }
}

/// `x: T`, `x: T = v`, and every simple-name target of `x = y = v`
fn collect_class_attributes(assignment: Node, source: &[u8], record: &mut TypeRecord) {
    if let Some(annotation) = assignment.child_by_field_name("type") {
        if let Some(left) = assignment.child_by_field_name("left").filter(|l| l.kind() == "identifier") {
            record.add_attribute(Attribute::new(text(left, source), unparse(Some(annotation), source)));
        }
        return;
    }

    let mut current = Some(assignment);
    while let Some(node) = current {
        if let Some(left) = node.child_by_field_name("left").filter(|l| l.kind() == "identifier") {
            record.add_attribute(Attribute::new(text(left, source), ""));
        }
        current = node
            .child_by_field_name("right")
            .filter(|r| r.kind() == "assignment");
    }
}

/// Walk a method breadth-first for `self.<attr>` assignment targets.
///
/// A chained `self.a = self.b = v` is one statement: its targets are taken
/// together, left to right, before the walk moves on.
fn collect_instance_attributes(function: Node, source: &[u8], record: &mut TypeRecord) {
    let mut queue = VecDeque::from([function]);

    while let Some(node) = queue.pop_front() {
        if node.kind() != "assignment" {
            queue.extend(named_children(node));
            continue;
        }

        let declared_type = unparse(node.child_by_field_name("type"), source);
        let mut current = Some(node);
        while let Some(assignment) = current {
            if let Some(attr) = assignment
                .child_by_field_name("left")
                .and_then(|left| self_attribute(left, source))
            {
                record.add_attribute(Attribute::new(attr, declared_type.clone()));
            }
            current = assignment
                .child_by_field_name("right")
                .filter(|r| r.kind() == "assignment");
        }
    }
}

/// `attr` when `node` is `self.attr`
fn self_attribute<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    if node.kind() != "attribute" {
        return None;
    }
    let object = node.child_by_field_name("object")?;
    if object.kind() != "identifier" || text(object, source) != "self" {
        return None;
    }
    Some(text(node.child_by_field_name("attribute")?, source))
}

fn parse_method(function: Node, decorators: &[Node], source: &[u8]) -> Method {
    let name = function
        .child_by_field_name("name")
        .map(|n| text(n, source))
        .unwrap_or_default()
        .to_string();
    let return_type = unparse(function.child_by_field_name("return_type"), source);

    let decorator_names: Vec<String> = decorators
        .iter()
        .filter_map(|d| named_children(*d).first().map(|expr| decorator_name(*expr, source)))
        .collect();
    let kind = if decorator_names.iter().any(|d| d == "classmethod") {
        MethodKind::ClassMethod
    } else if decorator_names.iter().any(|d| d == "staticmethod") {
        MethodKind::StaticMethod
    } else {
        MethodKind::Instance
    };

    let mut parameters: Vec<Parameter> = function
        .child_by_field_name("parameters")
        .map(|params| {
            named_children(params)
                .into_iter()
                .filter_map(|p| parse_parameter(p, source))
                .collect()
        })
        .unwrap_or_default();

    if let Some(receiver) = kind.receiver() {
        if parameters.first().is_some_and(|p| p.name == receiver) {
            parameters.remove(0);
        }
    }

    Method {
        name,
        parameters,
        return_type,
        kind,
    }
}

/// `@name` → `name`, `@a.b` → `b`, anything else unparsed
fn decorator_name(expr: Node, source: &[u8]) -> String {
    match expr.kind() {
        "identifier" => text(expr, source).to_string(),
        "attribute" => expr
            .child_by_field_name("attribute")
            .map(|a| text(a, source).to_string())
            .unwrap_or_default(),
        _ => unparse(Some(expr), source),
    }
}

/// One entry of a parameter list; separators (`*`, `/`) yield `None`
fn parse_parameter(node: Node, source: &[u8]) -> Option<Parameter> {
    match node.kind() {
        "identifier" | "list_splat_pattern" | "dictionary_splat_pattern" => {
            Some(Parameter::new(parameter_name(node, source), ""))
        }
        "typed_parameter" => {
            let target = named_children(node).into_iter().next()?;
            Some(Parameter::new(
                parameter_name(target, source),
                unparse(node.child_by_field_name("type"), source),
            ))
        }
        "default_parameter" | "typed_default_parameter" => Some(Parameter::new(
            parameter_name(node.child_by_field_name("name")?, source),
            unparse(node.child_by_field_name("type"), source),
        )),
        _ => None,
    }
}

fn parameter_name(node: Node, source: &[u8]) -> String {
    let inner = || {
        named_children(node)
            .first()
            .map(|n| text(*n, source))
            .unwrap_or_default()
    };
    match node.kind() {
        "list_splat_pattern" => format!("*{}", inner()),
        "dictionary_splat_pattern" => format!("**{}", inner()),
        _ => text(node, source).to_string(),
    }
}
