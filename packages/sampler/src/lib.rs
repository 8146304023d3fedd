//! # jsonsample sampler
//!
//! Builds a representative JSON document from a class declaration: every
//! field becomes a key, every leaf a placeholder carrying the field's
//! documentation, and nested classes, arrays and collections mirror the
//! declared type structure.
//!
//! - [`classifier`]: primitive / array / enum / container / simple / composite decisions
//! - [`resolver`]: the recursive resolver with its depth guard
//! - [`unify`]: canonical leaf labels (`int` → `Integer`)
//! - [`values`]: sample values for leaves (label echo, zero values, random)
//! - [`naming`]: field key conventions
//! - [`render`]: placeholder JSON, JSON with comments, strict JSON
//!
//! ## Example
//!
//! ```rust
//! use jsonsample_sampler::{render, OutputFormat, Sampler, SamplerOptions};
//! use jsonsample_schema::SchemaModel;
//!
//! let model = SchemaModel::from_json(r#"{
//!     "prelude": true,
//!     "classes": [
//!         {
//!             "name": "com.acme.User",
//!             "fields": [
//!                 { "name": "age", "type": "int", "doc": "/** the user's age */" },
//!                 { "name": "tags", "type": "java.util.List<String>" }
//!             ]
//!         }
//!     ]
//! }"#).unwrap();
//!
//! let sampler = Sampler::new(&model, SamplerOptions::default());
//! let sample = sampler.generate_class("com.acme.User").unwrap();
//!
//! let json = render(&sample, OutputFormat::Placeholder, 0).unwrap();
//! assert_eq!(json, r#"{"age":"Integer //the user's age","tags":["String //"]}"#);
//! ```

pub mod classifier;
pub mod error;
pub mod naming;
pub mod options;
pub mod render;
pub mod resolver;
pub mod unify;
pub mod value;
pub mod values;

// Re-export main types for convenience
pub use classifier::{Classifier, TypeCategory, SIMPLE_TYPES};
pub use error::{SampleError, SampleResult};
pub use naming::FieldNaming;
pub use options::{SamplerOptions, DEFAULT_CONTAINER_MARKERS, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use render::{render, CommentedRenderer, JsonRenderer, OutputFormat, Renderer};
pub use resolver::{generate, generate_from_json, Sampler};
pub use unify::unify_type;
pub use value::{Leaf, ObjectValue, ResolvedValue, COMMENT_SEPARATOR};
pub use values::{DefaultSource, LabelSource, RandomSource, ValueKind, ValueSource};
