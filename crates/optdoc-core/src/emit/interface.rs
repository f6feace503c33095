//! Interface declarations for resolved option nodes
//!
//! Each option node with children becomes one `kind: "interface"` member in
//! the namespace tree, and each of its children a `kind: "member"` property
//! of that interface. Nested interfaces are emitted before the interface that
//! refers to them.

use super::naming::interface_name;
use crate::config::{EmitSettings, SeriesVariantMode};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::node::{DocValue, MemberNode, OptionNode};
use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, trace};

pub struct InterfaceEmitter<'a> {
    settings: &'a EmitSettings,
    sink: &'a mut dyn DiagnosticSink,
    emitted: usize,
}

impl<'a> InterfaceEmitter<'a> {
    pub fn new(settings: &'a EmitSettings, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            settings,
            sink,
            emitted: 0,
        }
    }

    /// Number of interface declarations produced so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Emit the interface for `node` and every nested interface it needs,
    /// appending them to `namespace_root` in post-order.
    ///
    /// Returns the qualified name of the interface for `node`.
    pub fn emit(&mut self, node: &OptionNode, namespace_root: &mut MemberNode) -> String {
        let mut declarations = Vec::new();
        let name = self.emit_interface(node, &mut declarations);
        self.emitted += declarations.len();
        namespace_root.children.extend(declarations);
        name
    }

    fn emit_interface(&mut self, node: &OptionNode, out: &mut Vec<MemberNode>) -> String {
        let interface = interface_name(node.fullname());
        let qualified = format!("{}.{}", self.settings.namespace, interface);
        trace!("Emitting interface {}", qualified);

        let mut declaration = MemberNode::default();
        let doclet = &mut declaration.doclet;
        doclet.insert("description", node.doclet.description().unwrap_or_default());
        doclet.insert("kind", "interface");
        doclet.insert("name", qualified.as_str());
        doclet.insert("see", DocValue::string_list(self.see_links(node)));
        declaration.meta.files = Some(match &node.meta.files {
            Some(files) => files.clone(),
            None => node.meta.file_entry().into_iter().collect(),
        });

        let is_series_root = interface == self.settings.series_root;
        for (key, child) in &node.children {
            if is_series_root && child.has_children() {
                self.emit_series_variant(child, out);
                continue;
            }
            let property = self.emit_property(key, child, &qualified, out);
            declaration.children.push(property);
        }

        out.push(declaration);
        qualified
    }

    fn emit_property(
        &mut self,
        key: &str,
        node: &OptionNode,
        interface: &str,
        out: &mut Vec<MemberNode>,
    ) -> MemberNode {
        let mut types = property_types(node);
        if node.has_children() {
            let nested = self.emit_interface(node, out);
            if types.iter().any(|ty| ty.contains('*')) {
                types = types.iter().map(|ty| ty.replace('*', &nested)).collect();
            } else {
                types.push(nested);
            }
        }

        let mut property = MemberNode::default();
        let doclet = &mut property.doclet;
        doclet.insert("kind", "member");
        doclet.insert("name", format!("{interface}.{key}"));
        if let Some(description) = node.doclet.description() {
            doclet.insert("description", description);
        }
        if let Some(see) = node.doclet.get("see") {
            doclet.insert("see", see.clone());
        }
        doclet.insert("types", DocValue::string_list(types));
        let required = self
            .settings
            .required_paths
            .iter()
            .any(|path| path == node.fullname());
        doclet.insert("isOptional", !required);

        property.meta.name = Some(key.to_string());
        property.meta.fullname = node.meta.fullname.clone();
        property.meta.filename = node.meta.filename.clone();
        property.meta.line = node.meta.line;
        property.meta.line_end = node.meta.line_end;
        property
    }

    fn emit_series_variant(&mut self, node: &OptionNode, out: &mut Vec<MemberNode>) {
        match self.settings.series_variants {
            SeriesVariantMode::Skip => {
                debug!("Series variant '{}' not emitted", node.fullname());
                self.sink
                    .report(Diagnostic::series_variant_skipped(node.fullname()));
            }
            SeriesVariantMode::Interface => {
                self.emit_interface(node, out);
            }
        }
    }

    fn see_links(&self, node: &OptionNode) -> Vec<String> {
        let products = match node.doclet.get("products") {
            Some(products) => products.strings(),
            None => self.settings.default_products.clone(),
        };
        let base = self.settings.docs_base_url.trim_end_matches('/');
        products
            .iter()
            .map(|product| format!("{base}/{product}/{}", node.fullname()))
            .collect()
    }
}

/// Literal value types when `values` holds a JSON array, the declared
/// `types` otherwise; duplicates removed in first-seen order
fn property_types(node: &OptionNode) -> Vec<String> {
    if let Some(literals) = node.doclet.get("values").and_then(value_literals) {
        return literals;
    }
    unique(node.doclet.types())
}

fn value_literals(values: &DocValue) -> Option<Vec<String>> {
    let parsed = match values {
        DocValue::String(text) => serde_json::from_str::<Value>(text).ok()?,
        other => Value::from(other.clone()),
    };
    match parsed {
        Value::Array(items) => Some(unique(items.iter().map(Value::to_string))),
        _ => None,
    }
}

fn unique(items: impl IntoIterator<Item = String>) -> Vec<String> {
    items
        .into_iter()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticCollector, DiagnosticKind};
    use serde_json::json;

    fn option(value: serde_json::Value) -> OptionNode {
        serde_json::from_value(value).unwrap()
    }

    fn leaf(fullname: &str, doclet: serde_json::Value) -> serde_json::Value {
        let name = fullname.rsplit('.').next().unwrap_or_default();
        json!({
            "doclet": doclet,
            "meta": {"name": name, "fullname": fullname, "filename": "Chart.js", "line": 3},
            "children": {}
        })
    }

    fn emit_one(node: &OptionNode, settings: &EmitSettings) -> (MemberNode, String, DiagnosticCollector) {
        let mut root = MemberNode::named("Highcharts");
        let mut sink = DiagnosticCollector::new();
        let name = InterfaceEmitter::new(settings, &mut sink).emit(node, &mut root);
        (root, name, sink)
    }

    #[test]
    fn test_interface_declaration_fields() {
        let node = option(json!({
            "doclet": {"description": "Chart options", "products": ["highcharts", "highstock"]},
            "meta": {"name": "chart", "fullname": "chart", "filename": "Chart.js", "line": 1, "lineEnd": 40},
            "children": {}
        }));
        let (root, name, _) = emit_one(&node, &EmitSettings::default());

        assert_eq!(name, "Highcharts.ChartOptions");
        let declaration = root.child_named("Highcharts.ChartOptions").unwrap();
        assert_eq!(declaration.kind(), Some("interface"));
        assert_eq!(declaration.doclet.description(), Some("Chart options"));
        assert_eq!(
            declaration.doclet.strings("see"),
            vec![
                "https://api.highcharts.com/highcharts/chart",
                "https://api.highcharts.com/highstock/chart"
            ]
        );
        assert_eq!(
            serde_json::to_value(&declaration.meta).unwrap(),
            json!({"files": [{"filename": "Chart.js", "line": 1, "lineEnd": 40}]})
        );
    }

    #[test]
    fn test_properties_and_optionality() {
        let node = option(json!({
            "doclet": {},
            "meta": {"name": "series", "fullname": "series"},
            "children": {
                "type": leaf("series.type", json!({"types": ["string"]})),
                "align": leaf("series.align", json!({"values": "[\"left\", \"center\", 1]", "types": ["string"]}))
            }
        }));
        let (root, _, _) = emit_one(&node, &EmitSettings::default());

        let declaration = root.child_named("Highcharts.SeriesOptions").unwrap();
        let kind = declaration.child_named("Highcharts.SeriesOptions.type").unwrap();
        assert_eq!(kind.doclet.get("isOptional").and_then(DocValue::as_bool), Some(false));
        assert_eq!(kind.doclet.types(), vec!["string"]);

        let align = declaration.child_named("Highcharts.SeriesOptions.align").unwrap();
        assert_eq!(align.doclet.get("isOptional").and_then(DocValue::as_bool), Some(true));
        assert_eq!(align.doclet.types(), vec!["\"left\"", "\"center\"", "1"]);
        assert_eq!(align.meta.fullname.as_deref(), Some("series.align"));
    }

    #[test]
    fn test_nested_interfaces_emitted_first_and_linked() {
        let node = option(json!({
            "doclet": {},
            "meta": {"name": "chart", "fullname": "chart"},
            "children": {
                "events": {
                    "doclet": {"types": ["*"]},
                    "meta": {"name": "events", "fullname": "chart.events"},
                    "children": {"load": leaf("chart.events.load", json!({"types": ["Function"]}))}
                },
                "style": {
                    "doclet": {"types": ["CSSObject", "CSSObject"]},
                    "meta": {"name": "style", "fullname": "chart.style"},
                    "children": {"color": leaf("chart.style.color", json!({}))}
                }
            }
        }));
        let (root, _, _) = emit_one(&node, &EmitSettings::default());

        let names: Vec<&str> = root.children.iter().filter_map(MemberNode::name).collect();
        assert_eq!(
            names,
            vec![
                "Highcharts.ChartEventsOptions",
                "Highcharts.ChartStyleOptions",
                "Highcharts.ChartOptions"
            ]
        );
        let chart = root.child_named("Highcharts.ChartOptions").unwrap();
        let events = chart.child_named("Highcharts.ChartOptions.events").unwrap();
        assert_eq!(events.doclet.types(), vec!["Highcharts.ChartEventsOptions"]);
        let style = chart.child_named("Highcharts.ChartOptions.style").unwrap();
        assert_eq!(
            style.doclet.types(),
            vec!["CSSObject", "Highcharts.ChartStyleOptions"]
        );
    }

    #[test]
    fn test_series_variants_skipped_by_default() {
        let node = option(json!({
            "doclet": {},
            "meta": {"name": "series", "fullname": "series"},
            "children": {
                "type": leaf("series.type", json!({"types": ["string"]})),
                "line": {
                    "doclet": {},
                    "meta": {"name": "line", "fullname": "series.line"},
                    "children": {"data": leaf("series.line.data", json!({}))}
                }
            }
        }));
        let (root, _, sink) = emit_one(&node, &EmitSettings::default());

        assert_eq!(root.children.len(), 1);
        let declaration = &root.children[0];
        assert_eq!(declaration.children.len(), 1);
        let skipped = sink.of_kind(DiagnosticKind::SeriesVariantSkipped);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].node, "series.line");
    }

    #[test]
    fn test_series_variants_as_interfaces() {
        let node = option(json!({
            "doclet": {},
            "meta": {"name": "series", "fullname": "series"},
            "children": {
                "line": {
                    "doclet": {},
                    "meta": {"name": "line", "fullname": "series.line"},
                    "children": {"data": leaf("series.line.data", json!({}))}
                }
            }
        }));
        let settings = EmitSettings {
            series_variants: SeriesVariantMode::Interface,
            ..EmitSettings::default()
        };
        let (root, _, sink) = emit_one(&node, &settings);

        assert!(sink.is_empty());
        assert!(root.child_named("Highcharts.SeriesLineOptions").is_some());
        let series = root.child_named("Highcharts.SeriesOptions").unwrap();
        assert!(series.children.is_empty());
    }
}
