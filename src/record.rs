//! Type records - extracted object-model structure
//!
//! One `TypeRecord` describes a top-level class: its bases, its attributes
//! (class-level and instance-level) and its methods.

use crate::visibility::Visibility;
use serde::{Deserialize, Serialize};

/// How a method binds its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// Plain method, receiver `self`
    #[default]
    Instance,
    /// `@classmethod`, receiver `cls`
    ClassMethod,
    /// `@staticmethod`, no receiver
    StaticMethod,
}

impl MethodKind {
    /// Conventional receiver parameter name, if the kind has one
    pub fn receiver(&self) -> Option<&'static str> {
        match self {
            MethodKind::Instance => Some("self"),
            MethodKind::ClassMethod => Some("cls"),
            MethodKind::StaticMethod => None,
        }
    }

    /// Stereotype suffix used in diagrams
    pub fn stereotype(&self) -> Option<&'static str> {
        match self {
            MethodKind::Instance => None,
            MethodKind::ClassMethod => Some("«class»"),
            MethodKind::StaticMethod => Some("«static»"),
        }
    }
}

/// A class attribute or instance attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Annotation text, empty when unannotated
    pub declared_type: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::of(&self.name)
    }
}

/// A method parameter. Variadic parameters keep their `*` / `**` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub declared_type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.declared_type.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.declared_type)
        }
    }
}

/// A method with its rendered-signature ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    /// Parameters in source order, receiver already stripped
    pub parameters: Vec<Parameter>,
    /// Return annotation text, empty when absent
    pub return_type: String,
    pub kind: MethodKind,
}

impl Method {
    pub fn visibility(&self) -> Visibility {
        Visibility::of(&self.name)
    }

    /// Signature text: `name(a: int, b): ret`
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        if self.return_type.is_empty() {
            format!("{}({})", self.name, params)
        } else {
            format!("{}({}): {}", self.name, params, self.return_type)
        }
    }
}

/// The extracted description of one declared type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    /// Base expressions as text, constructed (call) bases excluded
    pub bases: Vec<String>,
    /// Attributes in first-seen order, deduplicated by name
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
}

impl TypeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record an attribute sighting.
    ///
    /// A new name is appended. For a known name, a non-empty type replaces
    /// the recorded one and an empty type leaves it untouched, so an
    /// annotation always beats an untyped assignment.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        match self.attributes.iter_mut().find(|a| a.name == attribute.name) {
            Some(existing) => {
                if !attribute.declared_type.is_empty() {
                    existing.declared_type = attribute.declared_type;
                }
            }
            None => self.attributes.push(attribute),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_wins_either_order() {
        let mut record = TypeRecord::new("A");
        record.add_attribute(Attribute::new("x", "int"));
        record.add_attribute(Attribute::new("x", ""));
        record.add_attribute(Attribute::new("y", ""));
        record.add_attribute(Attribute::new("y", "str"));

        assert_eq!(record.attribute("x").unwrap().declared_type, "int");
        assert_eq!(record.attribute("y").unwrap().declared_type, "str");
        assert_eq!(record.attributes.len(), 2);
    }

    #[test]
    fn test_later_annotation_replaces_earlier() {
        let mut record = TypeRecord::new("A");
        record.add_attribute(Attribute::new("x", "int"));
        record.add_attribute(Attribute::new("x", "float"));
        assert_eq!(record.attribute("x").unwrap().declared_type, "float");
    }

    #[test]
    fn test_signature() {
        let method = Method {
            name: "load".to_string(),
            parameters: vec![
                Parameter::new("path", "str"),
                Parameter::new("*args", ""),
                Parameter::new("**kwargs", "Any"),
            ],
            return_type: "bool".to_string(),
            kind: MethodKind::Instance,
        };
        assert_eq!(method.signature(), "load(path: str, *args, **kwargs: Any): bool");

        let bare = Method {
            name: "run".to_string(),
            parameters: vec![],
            return_type: String::new(),
            kind: MethodKind::StaticMethod,
        };
        assert_eq!(bare.signature(), "run()");
    }

    #[test]
    fn test_method_kind_receivers() {
        assert_eq!(MethodKind::Instance.receiver(), Some("self"));
        assert_eq!(MethodKind::ClassMethod.receiver(), Some("cls"));
        assert_eq!(MethodKind::StaticMethod.receiver(), None);
        assert_eq!(MethodKind::ClassMethod.stereotype(), Some("«class»"));
    }
}
