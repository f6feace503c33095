//! Lazy, memoizing resolution of `extends` edges
//!
//! Resolution is triggered on first lookup: finding an option through
//! [`ExtendsResolver::locate`] resolves it (and its subtree) before its
//! address is handed out, so a merge never reads an unmerged source. Each
//! node moves `Unresolved → InProgress → Resolved` exactly once. A lookup
//! that lands on an `InProgress` node is a cycle.

use super::merge::merge_from;
use super::{ResolveError, prioritize};
use crate::config::ResolverSettings;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::namespace::segments;
use crate::node::{OptionNode, ResolveState};
use crate::tree::{NodeAddr, OptionsTree};
use tracing::{debug, trace};

/// Resolves inheritance in place over one options tree
pub struct ExtendsResolver<'a> {
    tree: &'a mut OptionsTree,
    sink: &'a mut dyn DiagnosticSink,
    generic_parent: String,
    /// Paths whose targets are currently being merged, outermost first
    in_progress: Vec<String>,
}

impl<'a> ExtendsResolver<'a> {
    pub fn new(tree: &'a mut OptionsTree, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self::with_settings(tree, sink, &ResolverSettings::default())
    }

    pub fn with_settings(
        tree: &'a mut OptionsTree,
        sink: &'a mut dyn DiagnosticSink,
        settings: &ResolverSettings,
    ) -> Self {
        Self {
            tree,
            sink,
            generic_parent: settings.generic_parent.clone(),
            in_progress: Vec::new(),
        }
    }

    /// Resolve the whole tree.
    ///
    /// Failures are reported to the sink and never stop the walk.
    pub fn resolve_all(&mut self) {
        if let Err(error) = self.resolve_at(&[]) {
            self.sink.report(Diagnostic::from_resolve_error(&error));
        }
    }

    /// Resolve the node at `path` and everything below it
    pub fn resolve(&mut self, path: &str) -> Result<(), ResolveError> {
        let addr = self
            .tree
            .address_of(path)
            .ok_or_else(|| ResolveError::NodeNotFound {
                path: path.to_string(),
            })?;
        self.resolve_at(&addr)
    }

    /// Walk `path` from the root, resolving pending nodes on the way.
    ///
    /// Intermediate nodes with pending `extends` are resolved and their
    /// failures reported. The final node is resolved with its subtree and its
    /// failure is returned. `Ok(None)` means a segment is missing.
    pub fn locate(&mut self, path: &str) -> Result<Option<NodeAddr>, ResolveError> {
        let keys = segments(path, false);
        let last = keys.len().saturating_sub(1);
        let mut addr = NodeAddr::with_capacity(keys.len());

        for (index, key) in keys.into_iter().enumerate() {
            addr.push(key);
            let Some(node) = self.tree.node(&addr) else {
                return Ok(None);
            };
            let state = node.state();
            let pending = node.doclet.has_pending_extends();

            if index == last {
                match state {
                    ResolveState::InProgress => return Err(self.cycle_error(&addr.join("."))),
                    ResolveState::Unresolved => self.resolve_at(&addr)?,
                    ResolveState::Resolved => {}
                }
            } else if state == ResolveState::Unresolved
                && pending
                && let Err(error) = self.resolve_at(&addr)
            {
                self.sink.report(Diagnostic::from_resolve_error(&error));
            }
        }

        Ok(Some(addr))
    }

    /// Look up `path` and return the node, resolved
    pub fn find_option(
        &mut self,
        path: &str,
    ) -> Result<Option<&OptionNode>, ResolveError> {
        let addr = self.locate(path)?;
        Ok(addr.and_then(|addr| self.tree.node(&addr)))
    }

    fn resolve_at(&mut self, addr: &[String]) -> Result<(), ResolveError> {
        let path = addr.join(".");
        let Some(node) = self.tree.node_mut(addr) else {
            return Err(ResolveError::NodeNotFound { path });
        };
        if node.state != ResolveState::Unresolved {
            return Ok(());
        }

        node.state = ResolveState::InProgress;
        let targets = node.doclet.extends.clone().unwrap_or_default();
        let fullname = match node.fullname() {
            "" => path.clone(),
            name => name.to_string(),
        };

        self.in_progress.push(path);
        let merged = self.merge_targets(addr, &fullname, targets);
        self.in_progress.pop();

        let Some(node) = self.tree.node_mut(addr) else {
            return merged;
        };
        node.doclet.extends = None;
        node.state = ResolveState::Resolved;
        let keys: Vec<String> = node.children.keys().cloned().collect();
        trace!("Resolved '{}', walking {} children", fullname, keys.len());

        let mut child = addr.to_vec();
        for key in keys {
            child.push(key);
            if let Err(error) = self.resolve_at(&child) {
                self.sink.report(Diagnostic::from_resolve_error(&error));
            }
            child.pop();
        }

        merged
    }

    fn merge_targets(
        &mut self,
        addr: &[String],
        fullname: &str,
        targets: Vec<String>,
    ) -> Result<(), ResolveError> {
        for target in prioritize(targets, &self.generic_parent) {
            let source_addr = match self.locate(&target) {
                Ok(Some(source_addr)) => source_addr,
                Ok(None) => {
                    self.sink
                        .report(Diagnostic::unresolved_extends(fullname, &target));
                    continue;
                }
                // A cycle through this node ends its own chain; any other
                // node only loses the one edge.
                Err(error) if error.involves(&addr.join(".")) => return Err(error),
                Err(error) => {
                    self.sink.report(Diagnostic::from_resolve_error(&error));
                    continue;
                }
            };
            // The snapshot keeps an ancestor source from growing while it is
            // merged into one of its own descendants.
            let Some(source) = self.tree.node(&source_addr).cloned() else {
                continue;
            };
            if let Some(node) = self.tree.node_mut(addr) {
                merge_from(&source, node);
                debug!("Merged '{}' into '{}'", target, fullname);
            }
        }
        Ok(())
    }

    fn cycle_error(&self, path: &str) -> ResolveError {
        let start = self
            .in_progress
            .iter()
            .position(|entry| entry == path)
            .unwrap_or(0);
        let mut chain = self.in_progress[start..].to_vec();
        chain.push(path.to_string());
        ResolveError::CyclicExtends { chain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticCollector, DiagnosticKind};
    use serde_json::json;

    fn tree(value: serde_json::Value) -> OptionsTree {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_direct_self_cycle() {
        let mut options = tree(json!({
            "a": {"doclet": {"extends": ["a"]}, "meta": {}, "children": {}}
        }));
        let mut sink = DiagnosticCollector::new();
        let error = ExtendsResolver::new(&mut options, &mut sink)
            .resolve("a")
            .unwrap_err();
        assert_eq!(
            error,
            ResolveError::CyclicExtends {
                chain: vec!["a".to_string(), "a".to_string()]
            }
        );
        assert!(options.get("a").unwrap().is_resolved());
    }

    #[test]
    fn test_indirect_cycle_reported_once() {
        let mut options = tree(json!({
            "a": {"doclet": {"extends": ["b"], "description": "A"}, "meta": {}, "children": {}},
            "b": {"doclet": {"extends": ["a"]}, "meta": {}, "children": {}}
        }));
        let mut sink = DiagnosticCollector::new();
        ExtendsResolver::new(&mut options, &mut sink).resolve_all();

        let cycles = sink.of_kind(DiagnosticKind::CyclicExtends);
        assert_eq!(cycles.len(), 1);
        assert!(cycles[0].message.contains("a → b → a"));
        assert!(options.get("a").unwrap().is_resolved());
        assert!(options.get("b").unwrap().is_resolved());
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let mut options = tree(json!({
            "line": {"doclet": {"description": "Line"}, "meta": {}, "children": {}},
            "area": {"doclet": {"extends": ["nope", "line"]}, "meta": {"fullname": "area"}, "children": {}}
        }));
        let mut sink = DiagnosticCollector::new();
        ExtendsResolver::new(&mut options, &mut sink).resolve_all();

        let missing = sink.of_kind(DiagnosticKind::UnresolvedExtendsTarget);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].node, "area");
        assert_eq!(options.get("area").unwrap().doclet.description(), Some("Line"));
    }

    #[test]
    fn test_chain_resolves_transitively() {
        let mut options = tree(json!({
            "c": {"doclet": {"extends": ["b"]}, "meta": {}, "children": {}},
            "b": {"doclet": {"extends": ["a"]}, "meta": {}, "children": {}},
            "a": {"doclet": {"description": "root of chain"}, "meta": {}, "children": {}}
        }));
        let mut sink = DiagnosticCollector::new();
        let found = ExtendsResolver::new(&mut options, &mut sink)
            .find_option("c")
            .unwrap()
            .unwrap()
            .doclet
            .description()
            .map(str::to_string);
        assert_eq!(found.as_deref(), Some("root of chain"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_descendant_may_extend_ancestor() {
        let mut options = tree(json!({
            "a": {"doclet": {"description": "A"}, "meta": {"fullname": "a"}, "children": {
                "b": {"doclet": {"extends": ["a"]}, "meta": {"fullname": "a.b"}, "children": {}}
            }}
        }));
        let mut sink = DiagnosticCollector::new();
        ExtendsResolver::new(&mut options, &mut sink).resolve_all();

        assert!(sink.is_empty());
        let b = options.get("a.b").unwrap();
        assert_eq!(b.doclet.description(), Some("A"));
        assert_eq!(b.child("b").unwrap().fullname(), "a.b.b");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let mut options = OptionsTree::new();
        let mut sink = DiagnosticCollector::new();
        let error = ExtendsResolver::new(&mut options, &mut sink)
            .resolve("missing")
            .unwrap_err();
        assert_eq!(
            error,
            ResolveError::NodeNotFound {
                path: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_generic_parent_setting() {
        let mut options = tree(json!({
            "base": {"doclet": {"description": "generic"}, "meta": {}, "children": {}},
            "line": {"doclet": {"description": "specific"}, "meta": {}, "children": {}},
            "spline": {"doclet": {"extends": ["base", "line"]}, "meta": {}, "children": {}}
        }));
        let settings = ResolverSettings {
            generic_parent: "base".to_string(),
            ..ResolverSettings::default()
        };
        let mut sink = DiagnosticCollector::new();
        ExtendsResolver::with_settings(&mut options, &mut sink, &settings).resolve_all();
        assert_eq!(
            options.get("spline").unwrap().doclet.description(),
            Some("specific")
        );
    }
}
