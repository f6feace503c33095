//! The completion run: normalize, resolve, emit
//!
//! [`CompletionPipeline`] owns the effective settings of one run and threads
//! them, together with the caller's diagnostic sink, through every stage.
//! The namespace root that receives the interfaces is looked up explicitly
//! at the start of each run.

use crate::config::{EmitSettings, FileSettings, OptdocConfiguration, ResolverSettings};
use crate::diagnostics::DiagnosticSink;
use crate::emit::InterfaceEmitter;
use crate::error::OptdocError;
use crate::io;
use crate::normalize::normalize;
use crate::resolve::ExtendsResolver;
use crate::result::Result;
use crate::tree::{NamespaceTree, OptionsTree};
use tracing::info;

/// Summary of one completion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    /// Option nodes in the resolved tree, root excluded
    pub option_nodes: usize,
    /// Interface declarations appended to the namespace root
    pub interfaces_emitted: usize,
    /// Qualified name of the interface emitted for the options root
    pub root_interface: String,
}

#[derive(Debug, Clone, Default)]
pub struct CompletionPipeline {
    files: FileSettings,
    resolver: ResolverSettings,
    emitter: EmitSettings,
}

impl CompletionPipeline {
    pub fn new(config: &OptdocConfiguration) -> Self {
        Self {
            files: config.file_settings(),
            resolver: config.resolver_settings(),
            emitter: config.emit_settings(),
        }
    }

    pub fn with_settings(
        files: FileSettings,
        resolver: ResolverSettings,
        emitter: EmitSettings,
    ) -> Self {
        Self {
            files,
            resolver,
            emitter,
        }
    }

    pub fn files(&self) -> &FileSettings {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileSettings {
        &mut self.files
    }

    pub fn resolver_settings(&self) -> &ResolverSettings {
        &self.resolver
    }

    pub fn emit_settings(&self) -> &EmitSettings {
        &self.emitter
    }

    /// Complete `namespace` with the interfaces of `options`.
    ///
    /// Fails before touching either tree when the namespace root is absent.
    /// Every other problem is reported to `sink`.
    pub fn run(
        &self,
        namespace: &mut NamespaceTree,
        options: &mut OptionsTree,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<CompletionReport> {
        let root_name = self.emitter.namespace.as_str();
        if namespace.find_member(root_name).is_none() {
            return Err(OptdocError::missing_namespace_root(root_name));
        }

        normalize(options, &self.resolver, sink);
        ExtendsResolver::with_settings(options, sink, &self.resolver).resolve_all();

        let namespace_root = namespace
            .find_member_mut(root_name)
            .ok_or_else(|| OptdocError::missing_namespace_root(root_name))?;
        let mut emitter = InterfaceEmitter::new(&self.emitter, sink);
        let root_interface = emitter.emit(options.root(), namespace_root);

        let report = CompletionReport {
            option_nodes: options.len(),
            interfaces_emitted: emitter.emitted(),
            root_interface,
        };
        info!(
            "Completed {} option nodes into {} interfaces",
            report.option_nodes, report.interfaces_emitted
        );
        Ok(report)
    }

    /// Load both trees from the configured files, run, and write the output
    pub fn run_files(&self, sink: &mut dyn DiagnosticSink) -> Result<CompletionReport> {
        let mut namespace = io::load_namespace_tree(&self.files.namespace_tree)?;
        let mut options = io::load_options_tree(&self.files.options_tree)?;
        let report = self.run(&mut namespace, &mut options, sink)?;
        io::write_json_tabbed(&self.files.output, &namespace)?;
        info!("Wrote {}", self.files.output.display());
        Ok(report)
    }
}
