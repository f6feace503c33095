//! Documentation fields and positional metadata shared by both node shapes

use super::clone::CloneDepth;
use super::value::DocValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Free-form documentation attached to a node.
///
/// `extends` and `exclude` steer inheritance and are never inherited
/// themselves; every other key lives in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doclet {
    /// Inheritance targets; removed once the node is resolved
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub extends: Option<Vec<String>>,

    /// Child names that are never inherited into this node
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude: Option<Vec<String>>,

    #[serde(flatten)]
    pub fields: IndexMap<String, DocValue>,
}

impl Doclet {
    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DocValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<DocValue> {
        self.fields.shift_remove(key)
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(DocValue::as_str)
    }

    /// String entries of a list field such as `types`, `see` or `products`
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.get(key).map(DocValue::strings).unwrap_or_default()
    }

    pub fn types(&self) -> Vec<String> {
        self.strings("types")
    }

    pub fn has_pending_extends(&self) -> bool {
        self.extends.as_ref().is_some_and(|targets| !targets.is_empty())
    }

    pub fn is_excluded(&self, child: &str) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|names| names.iter().any(|name| name == child))
    }

    /// Copy every field this doclet lacks from `source`, leaving present
    /// fields untouched
    pub fn fill_from(&mut self, source: &Doclet) {
        for (key, value) in &source.fields {
            if !self.fields.contains_key(key) {
                self.fields
                    .insert(key.clone(), value.deep_clone(CloneDepth::Unbounded));
            }
        }
    }
}

/// Source position and naming of a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_end: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<DocValue>>,

    /// Keys this model does not name, carried through unchanged
    #[serde(flatten)]
    pub extra: IndexMap<String, DocValue>,
}

impl Meta {
    /// Fill every absent key from `source`
    pub fn fill_from(&mut self, source: &Meta) {
        fill(&mut self.name, &source.name);
        fill(&mut self.fullname, &source.fullname);
        fill(&mut self.filename, &source.filename);
        fill(&mut self.line, &source.line);
        fill(&mut self.line_end, &source.line_end);
        if self.files.is_none() {
            self.files = source.files.as_ref().map(|files| {
                files
                    .iter()
                    .map(|file| file.deep_clone(CloneDepth::Unbounded))
                    .collect()
            });
        }
        for (key, value) in &source.extra {
            if !self.extra.contains_key(key) {
                self.extra
                    .insert(key.clone(), value.deep_clone(CloneDepth::Unbounded));
            }
        }
    }

    /// Position entry as written into a declaration's `files` list
    pub fn file_entry(&self) -> Option<DocValue> {
        let filename = self.filename.as_ref()?;
        let mut entry = vec![("filename".to_string(), DocValue::from(filename.as_str()))];
        if let Some(line) = self.line {
            entry.push(("line".to_string(), DocValue::from(line)));
        }
        if let Some(line_end) = self.line_end {
            entry.push(("lineEnd".to_string(), DocValue::from(line_end)));
        }
        Some(DocValue::map(entry))
    }
}

fn fill<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if target.is_none() {
        target.clone_from(source);
    }
}

/// Accept `null`, a single string, or a list of strings
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => None,
        Some(OneOrMany::One(entry)) => Some(vec![entry]),
        Some(OneOrMany::Many(entries)) => Some(entries),
    })
}
