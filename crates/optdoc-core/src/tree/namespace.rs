//! The namespace tree of documented API members

use crate::namespace::segments;
use crate::node::MemberNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceTree {
    root: MemberNode,
}

impl NamespaceTree {
    pub fn new(root: MemberNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &MemberNode {
        &self.root
    }

    pub fn into_root(self) -> MemberNode {
        self.root
    }

    /// Find a member by its qualified name.
    ///
    /// Each level must hold a child whose `doclet.name` equals the
    /// cumulative path so far (`Highcharts`, then `Highcharts.Chart`).
    pub fn find_member(&self, name: &str) -> Option<&MemberNode> {
        let path = segments(name, true);
        if path.is_empty() {
            return None;
        }
        path.iter()
            .try_fold(&self.root, |member, prefix| member.child_named(prefix))
    }

    pub fn find_member_mut(&mut self, name: &str) -> Option<&mut MemberNode> {
        let path = segments(name, true);
        if path.is_empty() {
            return None;
        }
        let mut current = &mut self.root;
        for prefix in &path {
            current = current
                .children
                .iter_mut()
                .find(|child| child.name() == Some(prefix.as_str()))?;
        }
        Some(current)
    }
}
