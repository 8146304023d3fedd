use crate::render::OutputFormat;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// Separator between a leaf's label and its documentation
pub const COMMENT_SEPARATOR: &str = " //";

/// A terminal value: the unified type label, its cleaned documentation and a
/// sample drawn from the configured value source
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub label: String,
    pub doc: String,
    pub sample: Value,
}

impl Leaf {
    /// `Label //doc`, the textual placeholder for this leaf
    pub fn placeholder(&self) -> String {
        format!("{}{}{}", self.label, COMMENT_SEPARATOR, self.doc)
    }
}

/// Key → value mapping that keeps insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    entries: Vec<(String, ResolvedValue)>,
    /// Key → position in `entries`
    index: HashMap<String, usize>,
}

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; an existing key keeps its position and gets the new value
    pub fn insert(&mut self, key: impl Into<String>, value: ResolvedValue) -> Option<ResolvedValue> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of resolving a type
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Leaf(Leaf),

    /// Always exactly one element: the resolution of the element type
    Array(Vec<ResolvedValue>),

    Object(ObjectValue),
}

impl ResolvedValue {
    pub fn empty_object() -> Self {
        ResolvedValue::Object(ObjectValue::new())
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            ResolvedValue::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ResolvedValue]> {
        match self {
            ResolvedValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            ResolvedValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Convert to a `serde_json::Value`, leaves as placeholders or samples per `format`
    ///
    /// Object keys follow `serde_json::Map` ordering; use [`render`](crate::render::render)
    /// when declaration order matters.
    pub fn to_json(&self, format: OutputFormat) -> Value {
        match self {
            ResolvedValue::Leaf(leaf) => match format {
                OutputFormat::Placeholder => Value::String(leaf.placeholder()),
                OutputFormat::Commented | OutputFormat::Strict => leaf.sample.clone(),
            },
            ResolvedValue::Array(items) => Value::Array(items.iter().map(|item| item.to_json(format)).collect()),
            ResolvedValue::Object(object) => Value::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_json(format)))
                    .collect(),
            ),
        }
    }

    /// Serializable view that renders leaves with `leaf`
    pub fn view<F>(&self, leaf: F) -> ValueView<'_, F>
    where
        F: Fn(&Leaf) -> Value + Copy,
    {
        ValueView { value: self, leaf }
    }
}

/// Serializes leaves as their placeholder strings
impl Serialize for ResolvedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view(|leaf| Value::String(leaf.placeholder()))
            .serialize(serializer)
    }
}

/// Borrowed serialization of a [`ResolvedValue`] with a custom leaf rendering;
/// object entries keep their order
pub struct ValueView<'a, F> {
    value: &'a ResolvedValue,
    leaf: F,
}

impl<'a, F> Serialize for ValueView<'a, F>
where
    F: Fn(&Leaf) -> Value + Copy,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            ResolvedValue::Leaf(leaf) => (self.leaf)(leaf).serialize(serializer),
            ResolvedValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&item.view(self.leaf))?;
                }
                seq.end()
            }
            ResolvedValue::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, &value.view(self.leaf))?;
                }
                map.end()
            }
        }
    }
}
