//! Option nodes: the inheritance-bearing tree

use super::doclet::{Doclet, Meta};
use super::value::DocValue;
use crate::namespace::child_path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolution progress of a single option node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResolveState {
    /// `extends` not processed yet
    #[default]
    Unresolved,
    /// `extends` targets are being merged; reaching the node again is a cycle
    InProgress,
    /// Inheritance merged and `extends` removed
    Resolved,
}

/// One option in the options tree, keyed by its local name in the parent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionNode {
    #[serde(default)]
    pub children: IndexMap<String, OptionNode>,

    #[serde(default)]
    pub doclet: Doclet,

    #[serde(default)]
    pub meta: Meta,

    #[serde(skip)]
    pub(crate) state: ResolveState,
}

impl OptionNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty child synthesized while inheriting `key` into `parent_fullname`.
    ///
    /// Stubs never carry `extends`, so they start out resolved.
    pub(crate) fn stub(key: &str, parent_fullname: &str, source: &Meta) -> Self {
        Self {
            meta: Meta {
                name: Some(key.to_string()),
                fullname: Some(child_path(parent_fullname, key)),
                filename: source.filename.clone(),
                line: source.line,
                line_end: source.line_end,
                ..Meta::default()
            },
            state: ResolveState::Resolved,
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.meta.name.as_deref().unwrap_or_default()
    }

    pub fn fullname(&self) -> &str {
        self.meta.fullname.as_deref().unwrap_or_default()
    }

    pub fn state(&self) -> ResolveState {
        self.state
    }

    pub fn is_resolved(&self) -> bool {
        self.state == ResolveState::Resolved
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, key: &str) -> Option<&OptionNode> {
        self.children.get(key)
    }

    pub fn with_child(mut self, key: impl Into<String>, child: OptionNode) -> Self {
        self.children.insert(key.into(), child);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<DocValue>) -> Self {
        self.doclet.insert(key, value);
        self
    }

    pub fn with_extends<S: Into<String>>(mut self, targets: impl IntoIterator<Item = S>) -> Self {
        self.doclet.extends = Some(targets.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_exclude<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.doclet.exclude = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.values().map(OptionNode::count).sum::<usize>()
    }
}
