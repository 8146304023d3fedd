use crate::options::SamplerOptions;
use jsonsample_schema::{supertypes, ClassDecl, ClassType, PrimitiveType, TypeDescriptor, TypeModel};
use std::collections::HashSet;

/// Names resolved as leaves even though they are class types
pub const SIMPLE_TYPES: &[&str] = &[
    "Byte",
    "Short",
    "Integer",
    "Long",
    "Float",
    "Double",
    "Boolean",
    "Character",
    "Number",
    "BigInteger",
    "BigDecimal",
    "String",
    "CharSequence",
    "Date",
    "Temporal",
    "LocalDate",
    "LocalDateTime",
    "LocalTime",
    "ZonedDateTime",
    "OffsetDateTime",
    "Instant",
    "YearMonth",
    "UUID",
    "File",
    "MultipartFile",
    "Object",
    "Enum",
];

/// What a type resolves as
#[derive(Debug, Clone, PartialEq)]
pub enum TypeCategory<'m> {
    Primitive(PrimitiveType),

    /// Array, carrying its deepest component type
    Array(TypeDescriptor),

    Enum(&'m ClassDecl),

    /// Collection-like type, carrying its element type (`Undefined` when unknown)
    Container(TypeDescriptor),

    /// Recognized wrapper/value type such as `String` or `BigDecimal`
    Simple,

    /// Type variable, undefined sentinel, or no declaration in the model
    Unresolved,

    Composite(&'m ClassDecl),
}

impl<'m> TypeCategory<'m> {
    /// Leaves resolve to a placeholder without further recursion
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            TypeCategory::Primitive(_) | TypeCategory::Enum(_) | TypeCategory::Simple
        )
    }
}

/// Decides how a type is resolved, from names and declared structure only
///
/// Container and simple-type recognition are name based: a type is a container
/// when its presentable name, or the name of any of its supertypes, starts with
/// a container marker; it is simple when one of those names (generic arguments
/// dropped) matches the allow-list, ignoring case.
#[derive(Debug, Clone)]
pub struct Classifier {
    container_markers: Vec<String>,
    /// Lowercased allow-list
    simple_types: HashSet<String>,
}

impl Classifier {
    pub fn new(options: &SamplerOptions) -> Self {
        let simple_types = SIMPLE_TYPES
            .iter()
            .map(|s| s.to_string())
            .chain(options.simple_types.iter().cloned())
            .map(|s| s.to_lowercase())
            .collect();

        Self {
            container_markers: options.container_markers.clone(),
            simple_types,
        }
    }

    pub fn classify<'m, M: TypeModel + ?Sized>(&self, model: &'m M, ty: &TypeDescriptor) -> TypeCategory<'m> {
        let class = match ty {
            TypeDescriptor::Primitive(primitive) => return TypeCategory::Primitive(*primitive),
            TypeDescriptor::Array(_) => return TypeCategory::Array(ty.deep_component_type().clone()),
            TypeDescriptor::Variable(_) | TypeDescriptor::Undefined => return TypeCategory::Unresolved,
            TypeDescriptor::Class(class) => class,
        };

        let decl = model.find_class(&class.name);
        if let Some(decl) = decl.filter(|d| d.is_enum()) {
            return TypeCategory::Enum(decl);
        }

        let supers = supertypes(model, class);
        let mut names = std::iter::once(class).chain(supers.iter()).map(|c| c.presentable_text());

        if names.clone().any(|name| self.is_container_name(&name)) {
            return TypeCategory::Container(self.element_type(class, &supers));
        }

        if names.any(|name| self.is_simple_name(&name)) {
            return TypeCategory::Simple;
        }

        match decl {
            Some(decl) => TypeCategory::Composite(decl),
            None => TypeCategory::Unresolved,
        }
    }

    pub fn is_container_name(&self, name: &str) -> bool {
        self.container_markers.iter().any(|marker| name.starts_with(marker.as_str()))
    }

    pub fn is_simple_name(&self, name: &str) -> bool {
        let raw = name.split('<').next().unwrap_or(name).trim();
        self.simple_types.contains(&raw.to_lowercase())
    }

    /// First generic argument of the nearest marker type in the hierarchy that
    /// carries one, else the type's own first argument
    ///
    /// Unbound type variables (raw container usage) yield `Undefined`.
    fn element_type(&self, class: &ClassType, supers: &[ClassType]) -> TypeDescriptor {
        let from_marker = std::iter::once(class)
            .chain(supers.iter())
            .find(|c| !c.args.is_empty() && self.is_container_name(c.simple_name()))
            .and_then(|c| c.args.first());

        match from_marker.or_else(|| class.args.first()) {
            Some(TypeDescriptor::Variable(_)) | None => TypeDescriptor::Undefined,
            Some(element) => element.clone(),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&SamplerOptions::default())
    }
}
