//! Configuration system for optdoc
//!
//! - JSON, TOML and YAML configuration files
//! - Auto-discovery by traversing up directories
//! - Configuration inheritance through the `extends` field
//! - Strong typing with serde and JSON Schema generation via schemars
//!
//! ## Configuration Discovery
//!
//! When no explicit config path is provided, the files listed in
//! [`CONFIG_FILE_NAMES`] are searched for starting from the current
//! directory and moving up the directory tree. Without any file, every
//! setting takes its default.
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "extends": "../base.optdocrc.json",
//!   "files": {
//!     "namespaceTree": "tree-namespace.json",
//!     "optionsTree": "tree.json",
//!     "output": "tree-complete.json"
//!   },
//!   "resolver": {
//!     "genericParent": "plotOptions.series",
//!     "genericAlias": "series"
//!   },
//!   "emitter": {
//!     "namespace": "Highcharts",
//!     "docsBaseUrl": "https://api.highcharts.com",
//!     "seriesVariants": "skip"
//!   }
//! }
//! ```

mod loader;
mod merge;
mod optdoc_config;
mod settings;

pub use loader::{CONFIG_FILE_NAMES, ConfigLoader};
pub use optdoc_config::{
    EmitterConfiguration, FilesConfiguration, OptdocConfiguration, ResolverConfiguration,
    SeriesVariantMode,
};
pub use settings::{
    DEFAULT_NAMESPACE_TREE, DEFAULT_OPTIONS_TREE, DEFAULT_OUTPUT, EmitSettings, FileSettings,
    ResolverSettings,
};

/// JSON Schema describing the configuration file
pub fn config_schema() -> crate::Result<serde_json::Value> {
    let schema = schemars::schema_for!(OptdocConfiguration);
    let mut schema_json = serde_json::to_value(schema).map_err(|e| {
        crate::OptdocError::internal_error(format!("Failed to serialize config schema: {e}"))
    })?;
    schema_json["title"] = serde_json::json!("optdoc configuration");
    schema_json["description"] = serde_json::json!(
        "Configuration file schema for optdoc - validates .optdocrc.json, .optdocrc.toml and optdoc.yaml"
    );
    Ok(schema_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_sections() {
        let schema = config_schema().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["files", "resolver", "emitter", "extends"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
