use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in scalar kinds of the host language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
}

impl PrimitiveType {
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Char => "char",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "byte" => Some(PrimitiveType::Byte),
            "short" => Some(PrimitiveType::Short),
            "int" => Some(PrimitiveType::Int),
            "long" => Some(PrimitiveType::Long),
            "float" => Some(PrimitiveType::Float),
            "double" => Some(PrimitiveType::Double),
            "boolean" => Some(PrimitiveType::Boolean),
            "char" => Some(PrimitiveType::Char),
            _ => None,
        }
    }
}

/// A type as seen through the host's static type model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Built-in scalar
    Primitive(PrimitiveType),

    /// Array of the boxed component type
    Array(Box<TypeDescriptor>),

    /// Reference to a class, interface or enum, possibly parameterized
    Class(ClassType),

    /// Type variable that could not be bound to a concrete type (`T`)
    Variable(String),

    /// No type could be determined (raw container element, missing argument)
    Undefined,
}

impl TypeDescriptor {
    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor::Class(ClassType::new(name, Vec::new()))
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Class(ClassType::new(name, args))
    }

    pub fn array_of(component: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(component))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_))
    }

    /// Strip every array layer: `int[][]` → `int`
    pub fn deep_component_type(&self) -> &TypeDescriptor {
        let mut current = self;
        while let TypeDescriptor::Array(inner) = current {
            current = inner;
        }
        current
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            TypeDescriptor::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Fully qualified text, e.g. `java.util.List<com.acme.User>[]`
    pub fn canonical_text(&self) -> String {
        match self {
            TypeDescriptor::Primitive(p) => p.keyword().to_string(),
            TypeDescriptor::Array(inner) => format!("{}[]", inner.canonical_text()),
            TypeDescriptor::Class(class) => class.canonical_text(),
            TypeDescriptor::Variable(name) => name.clone(),
            TypeDescriptor::Undefined => "?".to_string(),
        }
    }

    /// Short display text, e.g. `List<User>[]`
    pub fn presentable_text(&self) -> String {
        match self {
            TypeDescriptor::Primitive(p) => p.keyword().to_string(),
            TypeDescriptor::Array(inner) => format!("{}[]", inner.presentable_text()),
            TypeDescriptor::Class(class) => class.presentable_text(),
            TypeDescriptor::Variable(name) => name.clone(),
            TypeDescriptor::Undefined => "?".to_string(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

/// A (possibly parameterized) reference to a declared class
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassType {
    pub name: String,
    pub args: Vec<TypeDescriptor>,
}

impl ClassType {
    pub fn new(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    pub fn canonical_text(&self) -> String {
        if self.args.is_empty() {
            return self.name.clone();
        }
        let args: Vec<String> = self.args.iter().map(|a| a.canonical_text()).collect();
        format!("{}<{}>", self.name, args.join(","))
    }

    pub fn presentable_text(&self) -> String {
        if self.args.is_empty() {
            return self.simple_name().to_string();
        }
        let args: Vec<String> = self.args.iter().map(|a| a.presentable_text()).collect();
        format!("{}<{}>", self.simple_name(), args.join(", "))
    }
}

/// Last `.`-separated segment of a qualified name
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
}

/// A class, interface or enum declaration
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub kind: ClassKind,
    pub type_params: Vec<String>,
    /// Direct supertypes, written in terms of `type_params`
    pub supertypes: Vec<ClassType>,
    /// Own fields in declaration order
    pub fields: Vec<FieldDecl>,
    pub doc: Option<String>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_params: Vec::new(),
            supertypes: Vec::new(),
            fields: Vec::new(),
            doc: None,
        }
    }

    pub fn with_type_params(mut self, params: &[&str]) -> Self {
        self.type_params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_supertype(mut self, supertype: ClassType) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }
}

/// One data member of a class
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    pub type_: TypeDescriptor,
    /// Raw documentation comment, delimiters included
    pub doc: Option<String>,
    /// Explicit JSON key, overrides field naming
    pub json_name: Option<String>,
    pub is_static: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, type_: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_,
            doc: None,
            json_name: None,
            is_static: false,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = Some(json_name.into());
        self
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_component_type_strips_all_dimensions() {
        let ty = TypeDescriptor::array_of(TypeDescriptor::array_of(TypeDescriptor::Primitive(
            PrimitiveType::Int,
        )));
        assert_eq!(
            ty.deep_component_type(),
            &TypeDescriptor::Primitive(PrimitiveType::Int)
        );
        assert_eq!(ty.canonical_text(), "int[][]");
    }

    #[test]
    fn test_canonical_and_presentable_text() {
        let ty = TypeDescriptor::generic(
            "java.util.Map",
            vec![
                TypeDescriptor::class("java.lang.String"),
                TypeDescriptor::class("com.acme.User"),
            ],
        );
        assert_eq!(
            ty.canonical_text(),
            "java.util.Map<java.lang.String,com.acme.User>"
        );
        assert_eq!(ty.presentable_text(), "Map<String, User>");
    }

    #[test]
    fn test_primitive_keyword_roundtrip() {
        for keyword in ["byte", "short", "int", "long", "float", "double", "boolean", "char"] {
            let p = PrimitiveType::from_keyword(keyword).unwrap();
            assert_eq!(p.keyword(), keyword);
        }
        assert_eq!(PrimitiveType::from_keyword("Integer"), None);
    }
}
