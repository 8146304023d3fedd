pub mod commented;
pub mod json;

use crate::error::SampleResult;
use crate::value::ResolvedValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use commented::CommentedRenderer;
pub use json::JsonRenderer;

/// Turns a resolved sample into text
pub trait Renderer {
    fn render(&self, value: &ResolvedValue) -> SampleResult<String>;
}

/// Textual shape of a rendered sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Strict JSON; every leaf is the string `"Label //doc"`
    #[default]
    Placeholder,

    /// JSON with comments; leaves are sample values followed by `// doc`
    Commented,

    /// Strict JSON; leaves are sample values, documentation dropped
    Strict,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Placeholder => write!(f, "placeholder"),
            OutputFormat::Commented => write!(f, "commented"),
            OutputFormat::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "placeholder" => Ok(OutputFormat::Placeholder),
            "commented" | "jsonc" => Ok(OutputFormat::Commented),
            "strict" | "json" => Ok(OutputFormat::Strict),
            _ => Err(format!(
                "unknown output format '{}', expected one of: placeholder, commented, strict",
                s
            )),
        }
    }
}

/// Render `value` in `format`, indenting nested levels by `indent` spaces
/// (`0` gives compact output for the strict formats)
pub fn render(value: &ResolvedValue, format: OutputFormat, indent: usize) -> SampleResult<String> {
    match format {
        OutputFormat::Placeholder | OutputFormat::Strict => JsonRenderer::new(format, indent).render(value),
        OutputFormat::Commented => CommentedRenderer::new(indent).render(value),
    }
}
