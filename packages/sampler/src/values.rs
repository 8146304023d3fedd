use chrono::{Duration, Utc};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Supplies a sample value for a unified leaf label (`Integer`, `Date`, ...)
pub trait ValueSource {
    fn sample(&self, label: &str) -> Value;
}

/// Echoes the label itself
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelSource;

impl ValueSource for LabelSource {
    fn sample(&self, label: &str) -> Value {
        Value::String(label.to_string())
    }
}

/// Zero values: `0`, `0.0`, `false`, `""`, the epoch for dates
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl ValueSource for DefaultSource {
    fn sample(&self, label: &str) -> Value {
        match label {
            "Byte" | "Short" | "Integer" | "Long" => json!(0),
            "Float" | "Double" => json!(0.0),
            "Boolean" => json!(false),
            "Character" => json!("a"),
            "String" | "File" => json!(""),
            "Date" => json!("1970-01-01 00:00:00"),
            "Object" => json!({}),
            // Enums and other simple types
            other => Value::String(other.to_string()),
        }
    }
}

/// Realistic random values
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSource;

impl ValueSource for RandomSource {
    fn sample(&self, label: &str) -> Value {
        let mut rng = rand::thread_rng();
        match label {
            "Byte" => json!(rng.gen_range(0..=i8::MAX)),
            "Short" => json!(rng.gen_range(0..=1_000)),
            "Integer" => json!(rng.gen_range(0..=10_000)),
            "Long" => json!(rng.gen_range(0..=1_000_000i64)),
            "Float" | "Double" => {
                let value: f64 = rng.gen_range(0.0..1_000.0);
                json!((value * 100.0).round() / 100.0)
            }
            "Boolean" => json!(rng.gen_bool(0.5)),
            "Character" => json!(rng.gen_range(b'a'..=b'z') as char),
            "String" => json!(Word().fake::<String>()),
            "Date" => {
                let date = Utc::now() - Duration::days(rng.gen_range(0..3_650));
                json!(date.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            "File" => json!(format!("{}.txt", Word().fake::<String>())),
            "Object" => json!({}),
            other => Value::String(other.to_string()),
        }
    }
}

/// Selects one of the built-in value sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Label,
    Default,
    Random,
}

impl ValueKind {
    pub fn source(&self) -> Box<dyn ValueSource + Send + Sync> {
        match self {
            ValueKind::Label => Box::new(LabelSource),
            ValueKind::Default => Box::new(DefaultSource),
            ValueKind::Random => Box::new(RandomSource),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Label => write!(f, "label"),
            ValueKind::Default => write!(f, "default"),
            ValueKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "label" => Ok(ValueKind::Label),
            "default" => Ok(ValueKind::Default),
            "random" => Ok(ValueKind::Random),
            _ => Err(format!(
                "unknown value source '{}', expected one of: label, default, random",
                s
            )),
        }
    }
}
