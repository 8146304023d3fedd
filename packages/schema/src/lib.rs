//! # jsonsample schema
//!
//! The static type model the sample generator walks over.
//!
//! - [`types`]: type descriptors, class and field declarations
//! - [`model`]: the [`TypeModel`] provider trait plus hierarchy walks
//!   (substituted supertypes, inherited fields)
//! - [`parser`]: type expressions such as `java.util.List<com.acme.User>[]`
//! - [`doc`]: documentation comment cleanup
//! - [`schema`]: a JSON-backed [`TypeModel`] adapter
//!
//! ```rust
//! use jsonsample_schema::{SchemaModel, TypeModel};
//!
//! let model = SchemaModel::from_json(r#"{
//!     "prelude": true,
//!     "classes": [
//!         { "name": "com.acme.User", "fields": [ { "name": "age", "type": "int" } ] }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(model.find_class("User").unwrap().fields.len(), 1);
//! ```

pub mod doc;
pub mod error;
pub mod model;
pub mod parser;
pub mod schema;
pub mod tokenizer;
pub mod types;

pub use doc::clean_doc;
pub use error::{ModelError, ModelResult, ParseError, ParseResult};
pub use model::{all_fields, hierarchy_fields, substitute, supertypes, TypeModel};
pub use parser::{parse_type, parse_type_in, TypeParser, MAX_TYPE_NESTING};
pub use schema::{ClassEntry, FieldEntry, SchemaDocument, SchemaModel};
pub use tokenizer::{tokenize, Token};
pub use types::{simple_name, ClassDecl, ClassKind, ClassType, FieldDecl, PrimitiveType, TypeDescriptor};
