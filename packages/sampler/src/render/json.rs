use crate::error::SampleResult;
use crate::render::{OutputFormat, Renderer};
use crate::value::{Leaf, ResolvedValue};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Strict JSON output through `serde_json`
pub struct JsonRenderer {
    format: OutputFormat,
    indent: usize,
}

impl JsonRenderer {
    /// `format` selects placeholder strings or sample values at the leaves
    pub fn new(format: OutputFormat, indent: usize) -> Self {
        Self { format, indent }
    }
}

fn placeholder(leaf: &Leaf) -> Value {
    Value::String(leaf.placeholder())
}

fn sample(leaf: &Leaf) -> Value {
    leaf.sample.clone()
}

impl Renderer for JsonRenderer {
    fn render(&self, value: &ResolvedValue) -> SampleResult<String> {
        let leaf: fn(&Leaf) -> Value = match self.format {
            OutputFormat::Placeholder => placeholder,
            _ => sample,
        };
        let view = value.view(leaf);

        if self.indent == 0 {
            return Ok(serde_json::to_string(&view)?);
        }

        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        view.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ObjectValue;
    use serde_json::json;

    fn sample_object() -> ResolvedValue {
        let mut object = ObjectValue::new();
        object.insert(
            "age",
            ResolvedValue::Leaf(Leaf {
                label: "Integer".to_string(),
                doc: "the user's age".to_string(),
                sample: json!(0),
            }),
        );
        object.insert("tags", ResolvedValue::Array(vec![ResolvedValue::empty_object()]));
        ResolvedValue::Object(object)
    }

    #[test]
    fn test_placeholder_compact() {
        let out = JsonRenderer::new(OutputFormat::Placeholder, 0).render(&sample_object()).unwrap();
        assert_eq!(out, r#"{"age":"Integer //the user's age","tags":[{}]}"#);
    }

    #[test]
    fn test_strict_uses_samples() {
        let out = JsonRenderer::new(OutputFormat::Strict, 0).render(&sample_object()).unwrap();
        assert_eq!(out, r#"{"age":0,"tags":[{}]}"#);
    }

    #[test]
    fn test_pretty_indent_width() {
        let out = JsonRenderer::new(OutputFormat::Strict, 4).render(&sample_object()).unwrap();
        assert_eq!(out, "{\n    \"age\": 0,\n    \"tags\": [\n        {}\n    ]\n}");
    }
}
