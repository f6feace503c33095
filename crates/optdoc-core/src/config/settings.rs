//! Effective settings with every default applied

use super::optdoc_config::{OptdocConfiguration, SeriesVariantMode};
use std::path::PathBuf;

pub const DEFAULT_NAMESPACE_TREE: &str = "tree-namespace.json";
pub const DEFAULT_OPTIONS_TREE: &str = "tree.json";
pub const DEFAULT_OUTPUT: &str = "tree-complete.json";

#[derive(Debug, Clone, PartialEq)]
pub struct FileSettings {
    pub namespace_tree: PathBuf,
    pub options_tree: PathBuf,
    pub output: PathBuf,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            namespace_tree: PathBuf::from(DEFAULT_NAMESPACE_TREE),
            options_tree: PathBuf::from(DEFAULT_OPTIONS_TREE),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub generic_parent: String,
    pub generic_alias: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            generic_parent: "plotOptions.series".to_string(),
            generic_alias: "series".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmitSettings {
    pub namespace: String,
    pub docs_base_url: String,
    pub default_products: Vec<String>,
    pub series_root: String,
    pub required_paths: Vec<String>,
    pub series_variants: SeriesVariantMode,
}

impl Default for EmitSettings {
    fn default() -> Self {
        Self {
            namespace: "Highcharts".to_string(),
            docs_base_url: "https://api.highcharts.com".to_string(),
            default_products: vec!["highcharts".to_string()],
            series_root: "SeriesOptions".to_string(),
            required_paths: vec!["series.type".to_string()],
            series_variants: SeriesVariantMode::Skip,
        }
    }
}

impl OptdocConfiguration {
    pub fn file_settings(&self) -> FileSettings {
        let mut settings = FileSettings::default();
        if let Some(files) = &self.files {
            if let Some(path) = &files.namespace_tree {
                settings.namespace_tree = PathBuf::from(path);
            }
            if let Some(path) = &files.options_tree {
                settings.options_tree = PathBuf::from(path);
            }
            if let Some(path) = &files.output {
                settings.output = PathBuf::from(path);
            }
        }
        settings
    }

    pub fn resolver_settings(&self) -> ResolverSettings {
        let mut settings = ResolverSettings::default();
        if let Some(resolver) = &self.resolver {
            if let Some(parent) = &resolver.generic_parent {
                settings.generic_parent.clone_from(parent);
            }
            if let Some(alias) = &resolver.generic_alias {
                settings.generic_alias.clone_from(alias);
            }
        }
        settings
    }

    pub fn emit_settings(&self) -> EmitSettings {
        let mut settings = EmitSettings::default();
        let Some(emitter) = &self.emitter else {
            return settings;
        };
        if let Some(namespace) = &emitter.namespace {
            settings.namespace.clone_from(namespace);
        }
        if let Some(url) = &emitter.docs_base_url {
            settings.docs_base_url.clone_from(url);
        }
        if let Some(products) = &emitter.default_products {
            settings.default_products.clone_from(products);
        }
        if let Some(root) = &emitter.series_root {
            settings.series_root.clone_from(root);
        }
        if let Some(paths) = &emitter.required_paths {
            settings.required_paths.clone_from(paths);
        }
        if let Some(mode) = emitter.series_variants {
            settings.series_variants = mode;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmitterConfiguration, ResolverConfiguration};

    #[test]
    fn test_empty_config_yields_defaults() {
        let config = OptdocConfiguration::default();
        assert_eq!(config.file_settings(), FileSettings::default());
        assert_eq!(config.resolver_settings(), ResolverSettings::default());
        assert_eq!(config.emit_settings(), EmitSettings::default());
    }

    #[test]
    fn test_present_values_override_defaults() {
        let config = OptdocConfiguration {
            resolver: Some(ResolverConfiguration {
                generic_parent: Some("plotOptions.base".to_string()),
                generic_alias: None,
            }),
            emitter: Some(EmitterConfiguration {
                namespace: Some("Charts".to_string()),
                series_variants: Some(SeriesVariantMode::Interface),
                ..EmitterConfiguration::default()
            }),
            ..OptdocConfiguration::default()
        };
        let resolver = config.resolver_settings();
        assert_eq!(resolver.generic_parent, "plotOptions.base");
        assert_eq!(resolver.generic_alias, "series");
        let emit = config.emit_settings();
        assert_eq!(emit.namespace, "Charts");
        assert_eq!(emit.series_variants, SeriesVariantMode::Interface);
        assert_eq!(emit.required_paths, vec!["series.type"]);
    }

    #[test]
    fn test_with_defaults_round_trips_to_same_settings() {
        let config = OptdocConfiguration::with_defaults();
        assert_eq!(config.file_settings(), FileSettings::default());
        assert_eq!(config.emit_settings(), EmitSettings::default());
    }
}
