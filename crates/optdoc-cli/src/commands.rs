//! Command implementations for the optdoc CLI

use crate::output::{self, CompletionSummary};
use crate::{ConfigFormat, OutputFormat};
use optdoc_core::config::config_schema;
use optdoc_core::io::load_options_tree;
use optdoc_core::normalize::normalize;
use optdoc_core::{
    CompletionPipeline, ConfigLoader, DiagnosticCollector, ExtendsResolver, OptdocConfiguration,
    OptdocError, ResolveError, Result, interface_name,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Flags of `optdoc complete`
#[derive(Debug, Clone)]
pub struct CompleteArgs {
    pub namespace: Option<PathBuf>,
    pub options: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub format: OutputFormat,
}

fn load_config(config_path: Option<&Path>) -> Result<OptdocConfiguration> {
    let config = ConfigLoader::load(config_path, None)?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Complete command implementation
pub fn complete_command(args: CompleteArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let mut pipeline = CompletionPipeline::new(&config);

    // Command-line paths override the configuration file
    let files = pipeline.files_mut();
    if let Some(namespace) = args.namespace {
        files.namespace_tree = namespace;
    }
    if let Some(options) = args.options {
        files.options_tree = options;
    }
    if let Some(output) = args.output {
        files.output = output;
    }

    let mut sink = DiagnosticCollector::with_tracing();
    let report = pipeline.run_files(&mut sink)?;

    let summary = CompletionSummary::new(&report, pipeline.files().output.clone(), &sink);
    output::print_completion(&summary, sink.diagnostics(), args.format)?;

    if args.strict && (sink.has_warnings() || sink.has_errors()) {
        error!("Warnings reported in strict mode");
        return Err(OptdocError::internal_error(format!(
            "{} problem(s) reported in strict mode",
            summary.warnings + summary.errors
        )));
    }

    Ok(())
}

/// Resolve command implementation
pub fn resolve_command(
    path: String,
    options: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let options_path = options.unwrap_or_else(|| config.file_settings().options_tree);
    let settings = config.resolver_settings();

    let mut tree = load_options_tree(&options_path)?;
    let mut sink = DiagnosticCollector::with_tracing();
    normalize(&mut tree, &settings, &mut sink);

    let node = ExtendsResolver::with_settings(&mut tree, &mut sink, &settings)
        .find_option(&path)?
        .cloned()
        .ok_or_else(|| ResolveError::NodeNotFound { path: path.clone() })?;

    let json = serde_json::to_string_pretty(&node)
        .map_err(|e| OptdocError::internal_error(format!("Failed to serialize option: {e}")))?;
    println!("{json}");
    output::print_diagnostics(sink.diagnostics());

    Ok(())
}

/// Name command implementation
pub fn name_command(fullname: &str) -> Result<()> {
    println!("{}", interface_name(fullname));
    Ok(())
}

/// Config init command implementation
pub fn config_init_command(format: ConfigFormat, force: bool) -> Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let filename = match format {
        ConfigFormat::Json => ".optdocrc.json",
        ConfigFormat::Toml => ".optdocrc.toml",
    };

    let config_path = PathBuf::from(filename);

    if config_path.exists() && !force {
        error!(
            "Configuration file '{}' already exists. Use --force to overwrite.",
            filename
        );
        return Err(OptdocError::config_error(format!(
            "Configuration file '{filename}' already exists"
        )));
    }

    let default_config = OptdocConfiguration::with_defaults();
    let config_content = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&default_config)
            .map_err(|e| OptdocError::config_error(format!("Failed to serialize JSON: {e}")))?,
        ConfigFormat::Toml => toml::to_string_pretty(&default_config)
            .map_err(|e| OptdocError::config_error(format!("Failed to serialize TOML: {e}")))?,
    };

    std::fs::write(&config_path, config_content)
        .map_err(|e| OptdocError::io_error(&config_path, e))?;

    println!("Created configuration file: {filename}");
    println!("   Edit the file to point at your trees and adjust the emitter.");

    Ok(())
}

/// Config show command implementation
///
/// Prints the loaded configuration with every default filled in.
pub fn config_show_command(config_path: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    config.merge_with(OptdocConfiguration::with_defaults());

    let config_json = serde_json::to_string_pretty(&config)
        .map_err(|e| OptdocError::config_error(format!("Failed to serialize config: {e}")))?;
    println!("{config_json}");

    Ok(())
}

/// Config schema command implementation
pub fn config_schema_command() -> Result<()> {
    let schema = config_schema()?;
    let schema_json = serde_json::to_string_pretty(&schema)
        .map_err(|e| OptdocError::internal_error(format!("Failed to serialize schema: {e}")))?;
    println!("{schema_json}");
    Ok(())
}
