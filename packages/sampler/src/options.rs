use crate::naming::FieldNaming;
use crate::values::ValueKind;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum composite nesting before generation aborts
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Highest accepted `max_depth`; deeper recursion would exhaust the thread stack
/// before the limit could fire
pub const MAX_DEPTH_CEILING: usize = 1_000;

/// Name prefixes that mark a type as a container of elements
pub const DEFAULT_CONTAINER_MARKERS: &[&str] = &["Collection", "Iterable"];

/// Configuration for sample generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamplerOptions {
    /// Nesting limit; exceeding it fails with `RecursionLimitExceeded`.
    /// At most [`MAX_DEPTH_CEILING`].
    #[serde(deserialize_with = "bounded_depth")]
    pub max_depth: usize,

    /// Fail on the first type that re-enters itself on the current path,
    /// instead of waiting for the depth limit
    pub detect_cycles: bool,

    /// A type whose name, or any supertype's name, starts with one of these is
    /// resolved as a one-element array of its element type
    pub container_markers: Vec<String>,

    /// Extra type names treated as leaves, on top of the built-in list
    pub simple_types: Vec<String>,

    /// Emit static fields as keys too, the way reflection lists them
    pub include_static: bool,

    pub field_naming: FieldNaming,

    pub values: ValueKind,
}

fn bounded_depth<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let depth = usize::deserialize(deserializer)?;
    if depth > MAX_DEPTH_CEILING {
        return Err(D::Error::custom(format!(
            "maxDepth {} exceeds the ceiling of {}",
            depth, MAX_DEPTH_CEILING
        )));
    }
    Ok(depth)
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            detect_cycles: false,
            container_markers: DEFAULT_CONTAINER_MARKERS.iter().map(|m| m.to_string()).collect(),
            simple_types: Vec::new(),
            include_static: false,
            field_naming: FieldNaming::AsDeclared,
            values: ValueKind::Label,
        }
    }
}

impl SamplerOptions {
    /// Default options that also reject self-referencing types up front
    pub fn strict() -> Self {
        Self {
            detect_cycles: true,
            ..Default::default()
        }
    }

    /// Default options with realistic random leaf values
    pub fn random() -> Self {
        Self {
            values: ValueKind::Random,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SamplerOptions::default();
        assert_eq!(options.max_depth, 500);
        assert!(!options.detect_cycles);
        assert_eq!(options.container_markers, vec!["Collection", "Iterable"]);
        assert_eq!(options.values, ValueKind::Label);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let options: SamplerOptions =
            serde_json::from_str(r#"{ "fieldNaming": "snakeCase", "values": "default" }"#).unwrap();
        assert_eq!(options.field_naming, FieldNaming::SnakeCase);
        assert_eq!(options.values, ValueKind::Default);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_presets() {
        assert!(SamplerOptions::strict().detect_cycles);
        assert_eq!(SamplerOptions::random().values, ValueKind::Random);
    }

    #[test]
    fn test_max_depth_above_ceiling_is_rejected() {
        let err = serde_json::from_str::<SamplerOptions>(r#"{ "maxDepth": 1000000 }"#).unwrap_err();
        assert!(err.to_string().contains("exceeds the ceiling of 1000"), "{err}");

        let options: SamplerOptions = serde_json::from_str(r#"{ "maxDepth": 1000 }"#).unwrap();
        assert_eq!(options.max_depth, MAX_DEPTH_CEILING);
    }
}
