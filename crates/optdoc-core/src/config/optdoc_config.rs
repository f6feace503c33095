//! Configuration file types for optdoc

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptdocConfiguration {
    /// JSON Schema reference
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "JSON Schema reference for editor support")]
    pub schema: Option<String>,

    /// Base configuration file, relative to this one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Path of a configuration file to inherit from")]
    pub extends: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Input and output file locations")]
    pub files: Option<FilesConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Inheritance resolution settings")]
    pub resolver: Option<ResolverConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Interface emission settings")]
    pub emitter: Option<EmitterConfiguration>,
}

/// Input and output file locations
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilesConfiguration {
    #[schemars(description = "Namespace tree to complete (default: tree-namespace.json)")]
    pub namespace_tree: Option<String>,

    #[schemars(description = "Options tree to resolve (default: tree.json)")]
    pub options_tree: Option<String>,

    #[schemars(description = "Where the completed namespace tree is written (default: tree-complete.json)")]
    pub output: Option<String>,
}

/// Inheritance resolution settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfiguration {
    /// Target merged after every other target of the same node
    #[schemars(description = "Generic parent merged last (default: plotOptions.series)")]
    pub generic_parent: Option<String>,

    /// Short `extends` entry that stands for the generic parent
    #[schemars(description = "Alias rewritten to the generic parent (default: series)")]
    pub generic_alias: Option<String>,
}

/// Interface emission settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmitterConfiguration {
    #[schemars(description = "Namespace member that receives the interfaces (default: Highcharts)")]
    pub namespace: Option<String>,

    #[schemars(description = "Base URL of the API reference used in see links")]
    pub docs_base_url: Option<String>,

    #[schemars(description = "Products linked when an option names none (default: [highcharts])")]
    pub default_products: Option<Vec<String>>,

    #[schemars(description = "Interface name whose nested children are series variants (default: SeriesOptions)")]
    pub series_root: Option<String>,

    #[schemars(description = "Option paths emitted as required properties (default: [series.type])")]
    pub required_paths: Option<Vec<String>>,

    #[schemars(description = "How series variants are emitted: 'skip' or 'interface'")]
    pub series_variants: Option<SeriesVariantMode>,
}

/// Handling of series variants below the series root interface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeriesVariantMode {
    /// Report the variant and emit nothing
    #[default]
    Skip,
    /// Emit each variant as a standalone interface
    Interface,
}

impl OptdocConfiguration {
    /// Configuration with every default spelled out, as written by `config init`
    pub fn with_defaults() -> Self {
        let files = super::FileSettings::default();
        let resolver = super::ResolverSettings::default();
        let emitter = super::EmitSettings::default();
        Self {
            schema: None,
            extends: None,
            files: Some(FilesConfiguration {
                namespace_tree: Some(files.namespace_tree.display().to_string()),
                options_tree: Some(files.options_tree.display().to_string()),
                output: Some(files.output.display().to_string()),
            }),
            resolver: Some(ResolverConfiguration {
                generic_parent: Some(resolver.generic_parent),
                generic_alias: Some(resolver.generic_alias),
            }),
            emitter: Some(EmitterConfiguration {
                namespace: Some(emitter.namespace),
                docs_base_url: Some(emitter.docs_base_url),
                default_products: Some(emitter.default_products),
                series_root: Some(emitter.series_root),
                required_paths: Some(emitter.required_paths),
                series_variants: Some(emitter.series_variants),
            }),
        }
    }
}
