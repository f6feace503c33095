//! The options tree
//!
//! Serialized as a map of top-level options; in memory the map hangs off an
//! empty root node. Nodes are addressed by the chain of child keys leading to
//! them ([`NodeAddr`]), which lets the resolver hold one location while
//! mutating another.

use crate::diagnostics::DiagnosticSink;
use crate::namespace::segments;
use crate::node::OptionNode;
use crate::resolve::{ExtendsResolver, ResolveError};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chain of child keys from the root to a node; empty for the root itself
pub type NodeAddr = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsTree {
    root: OptionNode,
}

impl OptionsTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a top-level option map in an empty root
    pub fn from_children(children: IndexMap<String, OptionNode>) -> Self {
        Self {
            root: OptionNode {
                children,
                ..OptionNode::default()
            },
        }
    }

    pub fn root(&self) -> &OptionNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut OptionNode {
        &mut self.root
    }

    /// Number of option nodes, not counting the root
    pub fn len(&self) -> usize {
        self.root.count() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Look up a node by dotted path without resolving anything
    pub fn get(&self, path: &str) -> Option<&OptionNode> {
        segments(path, false)
            .iter()
            .try_fold(&self.root, |node, key| node.children.get(key))
    }

    /// Address of the node at `path`, without resolving anything
    pub fn address_of(&self, path: &str) -> Option<NodeAddr> {
        let addr = segments(path, false);
        self.node(&addr).map(|_| addr)
    }

    pub fn node(&self, addr: &[String]) -> Option<&OptionNode> {
        addr.iter()
            .try_fold(&self.root, |node, key| node.children.get(key))
    }

    pub fn node_mut(&mut self, addr: &[String]) -> Option<&mut OptionNode> {
        let mut current = &mut self.root;
        for key in addr {
            current = current.children.get_mut(key)?;
        }
        Some(current)
    }

    /// Look up a node by dotted path, resolving inheritance on the way.
    ///
    /// Returns `Ok(None)` as soon as a segment is missing. The node found is
    /// resolved together with its subtree before it is returned.
    pub fn find_option(
        &mut self,
        path: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<&OptionNode>, ResolveError> {
        let addr = ExtendsResolver::new(self, sink).locate(path)?;
        Ok(addr.and_then(|addr| self.node(&addr)))
    }

    /// Resolve the node at `path` and its subtree
    pub fn resolve(
        &mut self,
        path: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), ResolveError> {
        ExtendsResolver::new(self, sink).resolve(path)
    }

    /// Resolve every node, reporting per-node failures to `sink`
    pub fn resolve_all(&mut self, sink: &mut dyn DiagnosticSink) {
        ExtendsResolver::new(self, sink).resolve_all();
    }
}

impl Serialize for OptionsTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.children.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OptionsTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, OptionNode>::deserialize(deserializer).map(Self::from_children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticCollector;
    use serde_json::json;

    fn sample() -> OptionsTree {
        serde_json::from_value(json!({
            "chart": {"doclet": {}, "meta": {}, "children": {
                "zoomType": {"doclet": {"types": ["string"]}, "meta": {}, "children": {}}
            }},
            "plotOptions": {"doclet": {}, "meta": {}, "children": {
                "line": {"doclet": {"description": "Line"}, "meta": {}, "children": {}},
                "spline": {"doclet": {"extends": ["plotOptions.line"]}, "meta": {}, "children": {}}
            }}
        }))
        .unwrap()
    }

    #[test]
    fn test_get_is_pure_lookup() {
        let tree = sample();
        let spline = tree.get("plotOptions.spline").unwrap();
        assert!(spline.doclet.has_pending_extends());
        assert!(tree.get("plotOptions.area").is_none());
        assert!(tree.get("").is_some());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_find_option_resolves_before_returning() {
        let mut tree = sample();
        let mut sink = DiagnosticCollector::new();
        let spline = tree
            .find_option("plotOptions.spline", &mut sink)
            .unwrap()
            .unwrap();
        assert!(spline.is_resolved());
        assert_eq!(spline.doclet.description(), Some("Line"));
        assert!(spline.doclet.extends.is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_find_option_missing_segment() {
        let mut tree = sample();
        let mut sink = DiagnosticCollector::new();
        assert!(tree.find_option("chart.nothing.here", &mut sink).unwrap().is_none());
    }

    #[test]
    fn test_serializes_as_top_level_map() {
        let tree = sample();
        let value = serde_json::to_value(&tree).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["chart", "plotOptions"]);
    }
}
