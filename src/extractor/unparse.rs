//! Best-effort unparsing of annotation and base-class expressions
//!
//! Syntax nodes are lowered into a closed `Expr` set and rendered back to
//! text. Node kinds outside the set render as their CamelCase tag name
//! (`call` → `Call`); composition matching downstream relies on that shape.

use tree_sitter::Node;

/// Expression forms the unparser understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `name`
    Name(String),
    /// `value.attr`
    Attribute { value: Box<Expr>, attr: String },
    /// `value[a, b]`, covering both subscripts and generic types
    Subscript { value: Box<Expr>, slice: Vec<Expr> },
    /// `a, b`
    Tuple(Vec<Expr>),
    /// `[a, b]`
    List(Vec<Expr>),
    /// `a | b`
    Union(Box<Expr>, Box<Expr>),
    /// Strings, numbers, `None`, `...`, kept verbatim
    Literal(String),
    /// Anything else, as its structural tag
    Other(String),
}

impl Expr {
    /// Lower a syntax node into an `Expr`
    pub fn from_node(node: Node, source: &[u8]) -> Self {
        match node.kind() {
            "type" | "parenthesized_expression" => match named_children(node).first() {
                Some(inner) => Self::from_node(*inner, source),
                None => Expr::Other(tag_name(node.kind())),
            },
            "identifier" => Expr::Name(text(node, source).to_string()),
            "string" | "concatenated_string" | "integer" | "float" | "true" | "false"
            | "none" | "ellipsis" => Expr::Literal(text(node, source).to_string()),
            "attribute" => {
                match (node.child_by_field_name("object"), node.child_by_field_name("attribute")) {
                    (Some(value), Some(attr)) => Expr::Attribute {
                        value: Box::new(Self::from_node(value, source)),
                        attr: text(attr, source).to_string(),
                    },
                    _ => Expr::Other(tag_name(node.kind())),
                }
            }
            "member_type" => match named_children(node).as_slice() {
                [value, attr] => Expr::Attribute {
                    value: Box::new(Self::from_node(*value, source)),
                    attr: text(*attr, source).to_string(),
                },
                _ => Expr::Other(tag_name(node.kind())),
            },
            "subscript" => match node.child_by_field_name("value") {
                Some(value) => {
                    let mut cursor = node.walk();
                    let slice = node
                        .children_by_field_name("subscript", &mut cursor)
                        .map(|n| Self::from_node(n, source))
                        .collect();
                    Expr::Subscript {
                        value: Box::new(Self::from_node(value, source)),
                        slice,
                    }
                }
                None => Expr::Other(tag_name(node.kind())),
            },
            "generic_type" => match named_children(node).as_slice() {
                [value, params] => Expr::Subscript {
                    value: Box::new(Self::from_node(*value, source)),
                    slice: Self::lower_all(*params, source),
                },
                _ => Expr::Other(tag_name(node.kind())),
            },
            "tuple" | "expression_list" => Expr::Tuple(Self::lower_all(node, source)),
            "list" => Expr::List(Self::lower_all(node, source)),
            "union_type" => match named_children(node).as_slice() {
                [left, right] => Expr::Union(
                    Box::new(Self::from_node(*left, source)),
                    Box::new(Self::from_node(*right, source)),
                ),
                _ => Expr::Other(tag_name(node.kind())),
            },
            "binary_operator" => {
                let operator = node.child_by_field_name("operator").map(|op| text(op, source));
                match (node.child_by_field_name("left"), operator, node.child_by_field_name("right")) {
                    (Some(left), Some("|"), Some(right)) => Expr::Union(
                        Box::new(Self::from_node(left, source)),
                        Box::new(Self::from_node(right, source)),
                    ),
                    _ => Expr::Other(tag_name(node.kind())),
                }
            }
            kind => Expr::Other(tag_name(kind)),
        }
    }

    fn lower_all(node: Node, source: &[u8]) -> Vec<Expr> {
        named_children(node)
            .into_iter()
            .map(|n| Self::from_node(n, source))
            .collect()
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Attribute { value, attr } => write!(f, "{}.{}", value, attr),
            Expr::Subscript { value, slice } => write!(f, "{}[{}]", value, join(slice)),
            Expr::Tuple(items) => write!(f, "{}", join(items)),
            Expr::List(items) => write!(f, "[{}]", join(items)),
            Expr::Union(left, right) => write!(f, "{} | {}", left, right),
            Expr::Literal(literal) => write!(f, "{}", literal),
            Expr::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Render an optional node; absent nodes render as the empty string
pub fn unparse(node: Option<Node>, source: &[u8]) -> String {
    node.map(|n| Expr::from_node(n, source).to_string())
        .unwrap_or_default()
}

/// Named children of a node, comments excluded
pub(crate) fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| !n.is_extra())
        .collect()
}

pub(crate) fn text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn join(items: &[Expr]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `conditional_expression` → `ConditionalExpression`
fn tag_name(kind: &str) -> String {
    kind.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    /// Unparse the annotation of `x: <annotation>`
    fn annotation(src: &str) -> String {
        let code = format!("x: {}\n", src);
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(&code, None).unwrap();
        let statement = tree.root_node().named_child(0).unwrap();
        let assignment = statement.named_child(0).unwrap();
        unparse(assignment.child_by_field_name("type"), code.as_bytes())
    }

    #[test]
    fn test_names_and_attributes() {
        assert_eq!(annotation("int"), "int");
        assert_eq!(annotation("models.user.User"), "models.user.User");
    }

    #[test]
    fn test_generics() {
        assert_eq!(annotation("Optional[B]"), "Optional[B]");
        assert_eq!(annotation("Dict[str, List[int]]"), "Dict[str, List[int]]");
        assert_eq!(annotation("typing.Optional[B]"), "typing.Optional[B]");
        assert_eq!(annotation("Callable[[int], str]"), "Callable[[int], str]");
    }

    #[test]
    fn test_unions_and_literals() {
        assert_eq!(annotation("int | None"), "int | None");
        assert_eq!(annotation("\"Node\""), "\"Node\"");
        assert_eq!(annotation("Tuple[int, ...]"), "Tuple[int, ...]");
    }

    #[test]
    fn test_fallback_tag() {
        assert_eq!(annotation("make_type()"), "Call");
        assert_eq!(annotation("A if flag else B"), "ConditionalExpression");
        assert_eq!(tag_name("conditional_expression"), "ConditionalExpression");
    }

    #[test]
    fn test_absent_node() {
        assert_eq!(unparse(None, b""), "");
    }
}
