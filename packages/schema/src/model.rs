use crate::types::{ClassDecl, ClassType, FieldDecl, TypeDescriptor};
use std::collections::{HashSet, VecDeque};

/// Provider of class declarations for a host language
///
/// This is the only seam a new source language has to implement: everything
/// else (hierarchy walks, classification, sample generation) works on top of
/// `find_class`.
pub trait TypeModel {
    /// Resolve a qualified (or otherwise unambiguous) class name to its declaration
    fn find_class(&self, name: &str) -> Option<&ClassDecl>;
}

impl<M: TypeModel + ?Sized> TypeModel for &M {
    fn find_class(&self, name: &str) -> Option<&ClassDecl> {
        (**self).find_class(name)
    }
}

/// Replace type variables named in `params` with the matching entry of `args`
///
/// Variables without a matching argument (raw usage) are left untouched.
pub fn substitute(ty: &TypeDescriptor, params: &[String], args: &[TypeDescriptor]) -> TypeDescriptor {
    match ty {
        TypeDescriptor::Variable(name) => params
            .iter()
            .position(|p| p == name)
            .and_then(|i| args.get(i))
            .cloned()
            .unwrap_or_else(|| ty.clone()),
        TypeDescriptor::Array(inner) => TypeDescriptor::array_of(substitute(inner, params, args)),
        TypeDescriptor::Class(class) => TypeDescriptor::Class(substitute_class(class, params, args)),
        other => other.clone(),
    }
}

fn substitute_class(class: &ClassType, params: &[String], args: &[TypeDescriptor]) -> ClassType {
    ClassType::new(
        class.name.clone(),
        class.args.iter().map(|a| substitute(a, params, args)).collect(),
    )
}

/// Transitive supertypes of `ty`, breadth-first, with type arguments substituted
///
/// `ArrayList<User>` yields `List<User>`, `Collection<User>`, `Iterable<User>` for
/// the usual declarations. Names are normalized to the declaration's qualified
/// name. Cyclic hierarchies are visited once.
pub fn supertypes<M: TypeModel + ?Sized>(model: &M, ty: &ClassType) -> Vec<ClassType> {
    let mut result = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(qualified_name(model, &ty.name));

    let mut queue = VecDeque::from([ty.clone()]);
    while let Some(current) = queue.pop_front() {
        let Some(decl) = model.find_class(&current.name) else {
            continue;
        };

        for declared in &decl.supertypes {
            let mut supertype = substitute_class(declared, &decl.type_params, &current.args);
            supertype.name = qualified_name(model, &supertype.name);

            if visited.insert(supertype.name.clone()) {
                result.push(supertype.clone());
                queue.push_back(supertype);
            }
        }
    }

    result
}

/// All data fields of `decl`: own fields first, then inherited ones breadth-first
///
/// Static fields are skipped.
pub fn all_fields<'m, M: TypeModel + ?Sized>(model: &'m M, decl: &'m ClassDecl) -> Vec<&'m FieldDecl> {
    hierarchy_fields(model, decl, false)
}

/// Like [`all_fields`], optionally keeping static fields in their declared position
pub fn hierarchy_fields<'m, M: TypeModel + ?Sized>(
    model: &'m M,
    decl: &'m ClassDecl,
    include_static: bool,
) -> Vec<&'m FieldDecl> {
    let mut fields = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(decl.name.as_str());

    let mut queue = VecDeque::from([decl]);
    while let Some(current) = queue.pop_front() {
        fields.extend(current.fields.iter().filter(|f| include_static || !f.is_static));

        for supertype in &current.supertypes {
            if let Some(parent) = model.find_class(&supertype.name) {
                if visited.insert(parent.name.as_str()) {
                    queue.push_back(parent);
                }
            }
        }
    }

    fields
}

fn qualified_name<M: TypeModel + ?Sized>(model: &M, name: &str) -> String {
    model
        .find_class(name)
        .map(|decl| decl.name.clone())
        .unwrap_or_else(|| name.to_string())
}
