use crate::error::SampleResult;
use crate::render::Renderer;
use crate::value::ResolvedValue;

/// JSON-with-comments output: each documented leaf is followed by `// doc`
///
/// ```text
/// {
///   "age": 0, // the user's age
///   "name": ""
/// }
/// ```
pub struct CommentedRenderer {
    indent: usize,
}

impl CommentedRenderer {
    pub fn new(indent: usize) -> Self {
        // Line comments need line breaks
        Self {
            indent: indent.max(1),
        }
    }

    fn write_value(&self, out: &mut String, value: &ResolvedValue, depth: usize, comma: bool) -> SampleResult<()> {
        let separator = if comma { "," } else { "" };

        match value {
            ResolvedValue::Leaf(leaf) => {
                out.push_str(&serde_json::to_string(&leaf.sample)?);
                out.push_str(separator);
                if !leaf.doc.is_empty() {
                    out.push_str(" // ");
                    out.push_str(&leaf.doc);
                }
            }
            ResolvedValue::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    out.push_str(separator);
                    return Ok(());
                }
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    self.pad(out, depth + 1);
                    self.write_value(out, item, depth + 1, i + 1 < items.len())?;
                    out.push('\n');
                }
                self.pad(out, depth);
                out.push(']');
                out.push_str(separator);
            }
            ResolvedValue::Object(object) => {
                if object.is_empty() {
                    out.push_str("{}");
                    out.push_str(separator);
                    return Ok(());
                }
                out.push_str("{\n");
                for (i, (key, entry)) in object.iter().enumerate() {
                    self.pad(out, depth + 1);
                    out.push_str(&serde_json::to_string(key)?);
                    out.push_str(": ");
                    self.write_value(out, entry, depth + 1, i + 1 < object.len())?;
                    out.push('\n');
                }
                self.pad(out, depth);
                out.push('}');
                out.push_str(separator);
            }
        }

        Ok(())
    }

    fn pad(&self, out: &mut String, depth: usize) {
        out.extend(std::iter::repeat(' ').take(depth * self.indent));
    }
}

impl Renderer for CommentedRenderer {
    fn render(&self, value: &ResolvedValue) -> SampleResult<String> {
        let mut out = String::new();
        self.write_value(&mut out, value, 0, false)?;
        Ok(out)
    }
}
