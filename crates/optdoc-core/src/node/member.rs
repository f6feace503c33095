//! Namespace members: the ordered tree that receives declarations

use super::doclet::{Doclet, Meta};
use super::value::DocValue;
use serde::{Deserialize, Serialize};

/// A documented API member; children keep their declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberNode {
    #[serde(default)]
    pub children: Vec<MemberNode>,

    #[serde(default)]
    pub doclet: Doclet,

    #[serde(default)]
    pub meta: Meta,
}

impl MemberNode {
    /// Member with `doclet.name` set to `name`
    pub fn named(name: impl Into<String>) -> Self {
        let mut member = Self::default();
        member.doclet.insert("name", DocValue::String(name.into()));
        member
    }

    /// Fully qualified member name from the doclet
    pub fn name(&self) -> Option<&str> {
        self.doclet.get("name").and_then(DocValue::as_str)
    }

    pub fn kind(&self) -> Option<&str> {
        self.doclet.get("kind").and_then(DocValue::as_str)
    }

    pub fn child_named(&self, name: &str) -> Option<&MemberNode> {
        self.children.iter().find(|child| child.name() == Some(name))
    }

    pub fn with_child(mut self, child: MemberNode) -> Self {
        self.children.push(child);
        self
    }
}
