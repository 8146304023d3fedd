use crate::error::{ModelError, ModelResult};
use crate::model::TypeModel;
use crate::parser::parse_type_in;
use crate::types::{ClassDecl, ClassKind, ClassType, FieldDecl, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Schema document format
///
/// ```json
/// {
///   "prelude": true,
///   "classes": [
///     {
///       "name": "com.acme.User",
///       "supertypes": ["com.acme.Entity"],
///       "fields": [
///         { "name": "age", "type": "int", "doc": "/** the user's age */" },
///         { "name": "tags", "type": "java.util.List<String>" }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    /// Include the standard container declarations
    #[serde(default)]
    pub prelude: bool,

    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub name: String,

    #[serde(default)]
    pub kind: ClassKind,

    #[serde(default)]
    pub type_params: Vec<String>,

    #[serde(default)]
    pub supertypes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub type_: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,

    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// In-memory type model built from a schema document
///
/// Classes are looked up by qualified name; an unqualified name falls back to
/// the single declaration carrying that simple name.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    classes: Vec<ClassDecl>,
    by_name: HashMap<String, usize>,
    /// `None` marks an ambiguous simple name
    by_simple_name: HashMap<String, Option<usize>>,
}

impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model pre-populated with the standard collection hierarchy
    pub fn with_prelude() -> Self {
        let mut model = Self::new();
        for decl in prelude() {
            model.insert(decl);
        }
        model
    }

    pub fn from_document(document: SchemaDocument) -> ModelResult<Self> {
        let mut model = if document.prelude {
            Self::with_prelude()
        } else {
            Self::new()
        };

        for entry in document.classes {
            model.insert(entry.into_decl()?);
        }

        debug!(classes = model.len(), "Loaded schema model");
        Ok(model)
    }

    pub fn from_json(source: &str) -> ModelResult<Self> {
        let document: SchemaDocument = serde_json::from_str(source)?;
        Self::from_document(document)
    }

    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Add a declaration, replacing any previous one with the same qualified name
    pub fn insert(&mut self, decl: ClassDecl) {
        if let Some(&index) = self.by_name.get(&decl.name) {
            self.classes[index] = decl;
            return;
        }

        let index = self.classes.len();
        self.by_name.insert(decl.name.clone(), index);
        self.by_simple_name
            .entry(decl.simple_name().to_string())
            .and_modify(|slot| *slot = None)
            .or_insert(Some(index));
        self.classes.push(decl);
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TypeModel for SchemaModel {
    fn find_class(&self, name: &str) -> Option<&ClassDecl> {
        let index = match self.by_name.get(name) {
            Some(&index) => Some(index),
            None if !name.contains('.') => self.by_simple_name.get(name).copied().flatten(),
            None => None,
        };
        index.map(|i| &self.classes[i])
    }
}

impl ClassEntry {
    fn into_decl(self) -> ModelResult<ClassDecl> {
        let parse = |expression: &str, location: String| {
            parse_type_in(expression, &self.type_params).map_err(|error| ModelError::InvalidType {
                location,
                expression: excerpt(expression),
                error,
            })
        };

        let mut supertypes = Vec::with_capacity(self.supertypes.len());
        for expression in &self.supertypes {
            match parse(expression, format!("supertypes of {}", self.name))? {
                TypeDescriptor::Class(class) => supertypes.push(class),
                _ => {
                    return Err(ModelError::InvalidType {
                        location: format!("supertypes of {}", self.name),
                        expression: excerpt(expression),
                        error: crate::error::ParseError::unexpected_token(
                            0,
                            "class type",
                            expression.clone(),
                        ),
                    })
                }
            }
        }

        let mut fields = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let type_ = parse(&field.type_, format!("field {}.{}", self.name, field.name))?;
            fields.push(FieldDecl {
                name: field.name.clone(),
                type_,
                doc: field.doc.clone(),
                json_name: field.json_name.clone(),
                is_static: field.is_static,
            });
        }

        Ok(ClassDecl {
            name: self.name,
            kind: self.kind,
            type_params: self.type_params,
            supertypes,
            fields,
            doc: self.doc,
        })
    }
}

/// Expressions quoted in errors are cut to a readable length
fn excerpt(expression: &str) -> String {
    const MAX_CHARS: usize = 120;
    match expression.char_indices().nth(MAX_CHARS) {
        Some((end, _)) => format!("{}...", &expression[..end]),
        None => expression.to_string(),
    }
}

/// Standard collection hierarchy, enough for container detection through supertypes
fn prelude() -> Vec<ClassDecl> {
    fn var(name: &str) -> TypeDescriptor {
        TypeDescriptor::Variable(name.to_string())
    }

    fn interface(name: &str, params: &[&str]) -> ClassDecl {
        ClassDecl::new(name, ClassKind::Interface).with_type_params(params)
    }

    fn class(name: &str, params: &[&str]) -> ClassDecl {
        ClassDecl::new(name, ClassKind::Class).with_type_params(params)
    }

    fn of(name: &str, params: &[&str]) -> ClassType {
        ClassType::new(name, params.iter().map(|p| var(p)).collect())
    }

    vec![
        class("java.lang.Object", &[]),
        interface("java.lang.Iterable", &["T"]),
        interface("java.util.Collection", &["E"]).with_supertype(of("java.lang.Iterable", &["E"])),
        interface("java.util.List", &["E"]).with_supertype(of("java.util.Collection", &["E"])),
        interface("java.util.Set", &["E"]).with_supertype(of("java.util.Collection", &["E"])),
        interface("java.util.Queue", &["E"]).with_supertype(of("java.util.Collection", &["E"])),
        interface("java.util.Deque", &["E"]).with_supertype(of("java.util.Queue", &["E"])),
        class("java.util.ArrayList", &["E"]).with_supertype(of("java.util.List", &["E"])),
        class("java.util.LinkedList", &["E"])
            .with_supertype(of("java.util.List", &["E"]))
            .with_supertype(of("java.util.Deque", &["E"])),
        class("java.util.HashSet", &["E"]).with_supertype(of("java.util.Set", &["E"])),
        class("java.util.LinkedHashSet", &["E"]).with_supertype(of("java.util.HashSet", &["E"])),
        interface("java.util.Map", &["K", "V"]),
        class("java.util.HashMap", &["K", "V"]).with_supertype(of("java.util.Map", &["K", "V"])),
        class("java.util.Optional", &["T"]).with_field(FieldDecl::new("value", var("T"))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveType;

    #[test]
    fn test_from_json() {
        let model = SchemaModel::from_json(
            r#"{
                "classes": [
                    {
                        "name": "com.acme.Page",
                        "typeParams": ["T"],
                        "fields": [
                            { "name": "items", "type": "java.util.List<T>" },
                            { "name": "total", "type": "long", "doc": "/** total rows */" },
                            { "name": "SERIAL", "type": "long", "static": true }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let page = model.find_class("com.acme.Page").unwrap();
        assert_eq!(page.fields.len(), 3);
        assert_eq!(
            page.fields[0].type_,
            TypeDescriptor::generic("java.util.List", vec![TypeDescriptor::Variable("T".into())])
        );
        assert_eq!(page.fields[1].type_, TypeDescriptor::Primitive(PrimitiveType::Long));
        assert_eq!(page.fields[1].doc.as_deref(), Some("/** total rows */"));
        assert!(page.fields[2].is_static);
    }

    #[test]
    fn test_lookup_by_simple_name() {
        let mut model = SchemaModel::new();
        model.insert(ClassDecl::new("com.acme.User", ClassKind::Class));
        assert_eq!(model.find_class("User").unwrap().name, "com.acme.User");

        model.insert(ClassDecl::new("org.other.User", ClassKind::Class));
        assert!(model.find_class("User").is_none());
        assert!(model.find_class("org.other.User").is_some());
    }

    #[test]
    fn test_insert_replaces_declaration() {
        let mut model = SchemaModel::new();
        model.insert(ClassDecl::new("com.acme.Status", ClassKind::Class));
        model.insert(ClassDecl::new("com.acme.Status", ClassKind::Enum));
        assert_eq!(model.len(), 1);
        assert!(model.find_class("Status").unwrap().is_enum());
    }

    #[test]
    fn test_prelude_flag() {
        let model = SchemaModel::from_json(r#"{ "prelude": true }"#).unwrap();
        assert!(model.find_class("java.util.ArrayList").is_some());
        assert!(model.find_class("List").is_some());

        let bare = SchemaModel::from_json("{}").unwrap();
        assert!(bare.is_empty());
    }

    #[test]
    fn test_invalid_field_type_reports_location() {
        let err = SchemaModel::from_json(
            r#"{ "classes": [ { "name": "A", "fields": [ { "name": "x", "type": "List<" } ] } ] }"#,
        )
        .unwrap_err();

        match err {
            ModelError::InvalidType {
                location,
                expression,
                ..
            } => {
                assert_eq!(location, "field A.x");
                assert_eq!(expression, "List<");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_primitive_supertype_rejected() {
        let err = SchemaModel::from_json(r#"{ "classes": [ { "name": "A", "supertypes": ["int"] } ] }"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidType { .. }));
    }
}
