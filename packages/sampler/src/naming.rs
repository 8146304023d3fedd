use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How declared field names become JSON keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldNaming {
    #[default]
    AsDeclared,
    CamelCase,
    PascalCase,
    SnakeCase,
    UpperSnakeCase,
    KebabCase,
}

impl FieldNaming {
    pub fn apply(&self, name: &str) -> String {
        if *self == FieldNaming::AsDeclared {
            return name.to_string();
        }

        let words = split_words(name);
        if words.is_empty() {
            return name.to_string();
        }

        match self {
            FieldNaming::AsDeclared => name.to_string(),
            FieldNaming::CamelCase => {
                let mut out = words[0].to_lowercase();
                for word in &words[1..] {
                    out.push_str(&capitalize(word));
                }
                out
            }
            FieldNaming::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
            FieldNaming::SnakeCase => join_lower(&words, "_"),
            FieldNaming::UpperSnakeCase => join_lower(&words, "_").to_uppercase(),
            FieldNaming::KebabCase => join_lower(&words, "-"),
        }
    }

    pub fn all() -> &'static [FieldNaming] {
        &[
            FieldNaming::AsDeclared,
            FieldNaming::CamelCase,
            FieldNaming::PascalCase,
            FieldNaming::SnakeCase,
            FieldNaming::UpperSnakeCase,
            FieldNaming::KebabCase,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldNaming::AsDeclared => "asDeclared",
            FieldNaming::CamelCase => "camelCase",
            FieldNaming::PascalCase => "pascalCase",
            FieldNaming::SnakeCase => "snakeCase",
            FieldNaming::UpperSnakeCase => "upperSnakeCase",
            FieldNaming::KebabCase => "kebabCase",
        }
    }
}

impl fmt::Display for FieldNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
        FieldNaming::all()
            .iter()
            .find(|naming| naming.name().eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = FieldNaming::all().iter().map(|n| n.name()).collect();
                format!("unknown field naming '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// Split on `_`, `-`, spaces and case boundaries; acronyms stay together (`HTTPServer` → `HTTP`, `Server`)
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

fn join_lower(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_declared_is_identity() {
        assert_eq!(FieldNaming::AsDeclared.apply("user_ID"), "user_ID");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(FieldNaming::SnakeCase.apply("createdAt"), "created_at");
        assert_eq!(FieldNaming::SnakeCase.apply("userID"), "user_id");
        assert_eq!(FieldNaming::SnakeCase.apply("HTTPServer"), "http_server");
        assert_eq!(FieldNaming::SnakeCase.apply("address2Line"), "address2_line");
    }

    #[test]
    fn test_camel_and_pascal_case() {
        assert_eq!(FieldNaming::CamelCase.apply("created_at"), "createdAt");
        assert_eq!(FieldNaming::CamelCase.apply("UserName"), "userName");
        assert_eq!(FieldNaming::PascalCase.apply("user_name"), "UserName");
    }

    #[test]
    fn test_upper_snake_and_kebab() {
        assert_eq!(FieldNaming::UpperSnakeCase.apply("maxRetries"), "MAX_RETRIES");
        assert_eq!(FieldNaming::KebabCase.apply("maxRetries"), "max-retries");
    }

    #[test]
    fn test_separator_only_name_is_kept() {
        assert_eq!(FieldNaming::SnakeCase.apply("_"), "_");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("snake_case".parse::<FieldNaming>().unwrap(), FieldNaming::SnakeCase);
        assert_eq!("camelCase".parse::<FieldNaming>().unwrap(), FieldNaming::CamelCase);
        assert_eq!("kebab-case".parse::<FieldNaming>().unwrap(), FieldNaming::KebabCase);
        assert!("title".parse::<FieldNaming>().is_err());
    }
}
