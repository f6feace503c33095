//! Normalization of a freshly loaded options tree
//!
//! Runs once before resolution: assigns `meta.name`/`meta.fullname`, splits
//! and repairs `extends` entries, turns `type.names` into `types` and drops
//! private (`_`-prefixed) children.

use crate::config::ResolverSettings;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::namespace::child_path;
use crate::node::{DocValue, OptionNode};
use crate::tree::OptionsTree;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static EXTENDS_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("valid separator pattern"));

static CURLY_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{(.+)\}$").expect("valid curly entry pattern"));

pub struct Normalizer<'a> {
    settings: &'a ResolverSettings,
    sink: &'a mut dyn DiagnosticSink,
    visited: usize,
}

impl<'a> Normalizer<'a> {
    pub fn new(settings: &'a ResolverSettings, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            settings,
            sink,
            visited: 0,
        }
    }

    /// Normalize every node of `tree` in place
    pub fn normalize(&mut self, tree: &mut OptionsTree) {
        self.visited = 0;
        self.prepare(tree.root_mut(), "", "");
        debug!("Normalized {} option nodes", self.visited);
    }

    fn prepare(&mut self, node: &mut OptionNode, name: &str, parent: &str) {
        self.visited += 1;
        let fullname = child_path(parent, name);
        node.meta.name = Some(name.to_string());
        node.meta.fullname = Some(fullname.clone());

        if let Some(entries) = node.doclet.extends.take() {
            let targets = self.split_extends(&fullname, &entries);
            node.doclet.extends = (!targets.is_empty()).then_some(targets);
        }

        let names = node.doclet.remove("type").and_then(|declared| {
            declared
                .as_map()
                .and_then(|map| map.get("names"))
                .map(DocValue::strings)
        });
        if !node.doclet.contains("types") {
            node.doclet
                .insert("types", DocValue::string_list(names.unwrap_or_default()));
        }

        node.children.retain(|key, _| !key.starts_with('_'));
        for (key, child) in node.children.iter_mut() {
            self.prepare(child, key, &fullname);
        }
    }

    fn split_extends(&mut self, fullname: &str, entries: &[String]) -> Vec<String> {
        entries
            .iter()
            .flat_map(|entry| EXTENDS_SEPARATOR.split(entry))
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                let target = match CURLY_ENTRY.captures(piece) {
                    Some(caps) => {
                        self.sink.report(Diagnostic::malformed_extends(fullname, piece));
                        caps[1].to_string()
                    }
                    None => piece.to_string(),
                };
                if target == self.settings.generic_alias {
                    self.settings.generic_parent.clone()
                } else {
                    target
                }
            })
            .collect()
    }
}

/// Normalize `tree` with the given settings
pub fn normalize(
    tree: &mut OptionsTree,
    settings: &ResolverSettings,
    sink: &mut dyn DiagnosticSink,
) {
    Normalizer::new(settings, sink).normalize(tree);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticCollector, DiagnosticKind};
    use serde_json::json;

    fn normalized(value: serde_json::Value) -> (OptionsTree, DiagnosticCollector) {
        let mut tree: OptionsTree = serde_json::from_value(value).unwrap();
        let mut sink = DiagnosticCollector::new();
        normalize(&mut tree, &ResolverSettings::default(), &mut sink);
        (tree, sink)
    }

    #[test]
    fn test_full_names_assigned() {
        let (tree, _) = normalized(json!({
            "plotOptions": {"doclet": {}, "meta": {}, "children": {
                "series": {"doclet": {}, "meta": {}, "children": {
                    "marker": {"doclet": {}, "meta": {}, "children": {}}
                }}
            }}
        }));
        let marker = tree.get("plotOptions.series.marker").unwrap();
        assert_eq!(marker.name(), "marker");
        assert_eq!(marker.fullname(), "plotOptions.series.marker");
        assert_eq!(tree.root().fullname(), "");
    }

    #[test]
    fn test_extends_string_split_and_aliased() {
        let (tree, sink) = normalized(json!({
            "area": {"doclet": {"extends": "series, plotOptions.line"}, "meta": {}, "children": {}}
        }));
        assert_eq!(
            tree.get("area").unwrap().doclet.extends,
            Some(vec!["plotOptions.series".to_string(), "plotOptions.line".to_string()])
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_curly_entries_repaired_with_warning() {
        let (tree, sink) = normalized(json!({
            "bar": {"doclet": {"extends": "{plotOptions.column}"}, "meta": {}, "children": {}}
        }));
        assert_eq!(
            tree.get("bar").unwrap().doclet.extends,
            Some(vec!["plotOptions.column".to_string()])
        );
        let warnings = sink.of_kind(DiagnosticKind::MalformedExtendsSyntax);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].node, "bar");
    }

    #[test]
    fn test_blank_extends_removed() {
        let (tree, _) = normalized(json!({
            "pie": {"doclet": {"extends": " , "}, "meta": {}, "children": {}}
        }));
        assert!(tree.get("pie").unwrap().doclet.extends.is_none());
    }

    #[test]
    fn test_type_names_become_types() {
        let (tree, _) = normalized(json!({
            "color": {"doclet": {"type": {"names": ["string", "Highcharts.GradientColorObject"]}}, "meta": {}, "children": {}},
            "plain": {"doclet": {}, "meta": {}, "children": {}},
            "kept": {"doclet": {"types": ["number"], "type": {"names": ["string"]}}, "meta": {}, "children": {}}
        }));
        let color = tree.get("color").unwrap();
        assert_eq!(color.doclet.types(), vec!["string", "Highcharts.GradientColorObject"]);
        assert!(!color.doclet.contains("type"));
        assert!(tree.get("plain").unwrap().doclet.types().is_empty());
        assert!(tree.get("plain").unwrap().doclet.contains("types"));
        assert_eq!(tree.get("kept").unwrap().doclet.types(), vec!["number"]);
    }

    #[test]
    fn test_private_children_dropped() {
        let (tree, _) = normalized(json!({
            "chart": {"doclet": {}, "meta": {}, "children": {
                "_internal": {"doclet": {}, "meta": {}, "children": {}},
                "zoomType": {"doclet": {}, "meta": {}, "children": {}}
            }}
        }));
        let chart = tree.get("chart").unwrap();
        assert!(chart.child("_internal").is_none());
        assert!(chart.child("zoomType").is_some());
    }
}
