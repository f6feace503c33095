//! optdoc core
//!
//! Completes an options-documentation tree: every option node may declare
//! `extends` edges to other nodes, whose documentation and child options are
//! merged into it. The resolved options are then emitted as named interface
//! declarations into a namespace tree of documented API members.
//!
//! ```rust
//! use optdoc_core::{CompletionPipeline, DiagnosticCollector, NamespaceTree, OptionsTree};
//! use serde_json::json;
//!
//! let mut namespace: NamespaceTree = serde_json::from_value(json!({
//!     "children": [{"doclet": {"name": "Highcharts"}, "meta": {}, "children": []}],
//!     "doclet": {},
//!     "meta": {}
//! }))?;
//! let mut options: OptionsTree = serde_json::from_value(json!({
//!     "line": {"doclet": {"description": "d1"}, "meta": {}, "children": {}},
//!     "scatter": {"doclet": {"extends": "line"}, "meta": {}, "children": {}}
//! }))?;
//!
//! let mut sink = DiagnosticCollector::new();
//! let report = CompletionPipeline::default().run(&mut namespace, &mut options, &mut sink)?;
//!
//! assert_eq!(options.get("scatter").unwrap().doclet.description(), Some("d1"));
//! assert_eq!(report.root_interface, "Highcharts.Options");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod io;
pub mod namespace;
pub mod node;
pub mod normalize;
pub mod pipeline;
pub mod resolve;
pub mod result;
pub mod tree;

// Configuration system
pub use config::{
    ConfigLoader, EmitSettings, FileSettings, OptdocConfiguration, ResolverSettings,
    SeriesVariantMode,
};
pub use diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticKind, DiagnosticSink, Severity, TracingSink,
};
pub use emit::{InterfaceEmitter, interface_name};
pub use error::{ErrorKind, OptdocError};
pub use namespace::segments;
pub use node::{CloneDepth, DocValue, Doclet, MemberNode, Meta, OptionNode, ResolveState};
pub use normalize::Normalizer;
pub use pipeline::{CompletionPipeline, CompletionReport};
pub use resolve::{ExtendsResolver, ResolveError, merge_from};
pub use result::Result;
pub use tree::{NamespaceTree, NodeAddr, OptionsTree};

/// Initialize tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("optdoc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
