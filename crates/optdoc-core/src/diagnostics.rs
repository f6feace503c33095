//! Diagnostics reported while completing a tree
//!
//! Per-node problems never abort the tree walk. They are handed to a
//! [`DiagnosticSink`] and processing continues with the next node. The sink is
//! owned by the caller: [`DiagnosticCollector`] keeps everything in memory,
//! [`TracingSink`] forwards to `tracing`.

use crate::resolve::ResolveError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational messages
    Info,
    /// Problems that leave the output partially documented
    Warning,
    /// Problems that terminate an inheritance chain
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// An `extends` path does not name any option node
    UnresolvedExtendsTarget,
    /// An `extends` entry used `{curly}` notation and was repaired
    MalformedExtendsSyntax,
    /// An inheritance chain refers back to a node still being resolved
    CyclicExtends,
    /// A series variant was routed to the series-variant path and not emitted
    SeriesVariantSkipped,
}

impl DiagnosticKind {
    /// Stable identifier used in summaries
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnresolvedExtendsTarget => "unresolved-extends-target",
            DiagnosticKind::MalformedExtendsSyntax => "malformed-extends-syntax",
            DiagnosticKind::CyclicExtends => "cyclic-extends",
            DiagnosticKind::SeriesVariantSkipped => "series-variant-skipped",
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            DiagnosticKind::UnresolvedExtendsTarget => Severity::Warning,
            DiagnosticKind::MalformedExtendsSyntax => Severity::Warning,
            DiagnosticKind::CyclicExtends => Severity::Error,
            DiagnosticKind::SeriesVariantSkipped => Severity::Info,
        }
    }
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Full name of the option node the problem belongs to
    pub node: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, node: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            node: node.into(),
            message: message.into(),
        }
    }

    pub fn unresolved_extends(node: &str, target: &str) -> Self {
        Self::new(
            DiagnosticKind::UnresolvedExtendsTarget,
            node,
            format!("Extends: Node {target} not found."),
        )
    }

    pub fn malformed_extends(node: &str, entry: &str) -> Self {
        Self::new(
            DiagnosticKind::MalformedExtendsSyntax,
            node,
            format!("Curly brackets notation should be avoided: {entry}"),
        )
    }

    pub fn series_variant_skipped(node: &str) -> Self {
        Self::new(
            DiagnosticKind::SeriesVariantSkipped,
            node,
            "Series variant has no emitter configured",
        )
    }

    pub fn from_resolve_error(error: &ResolveError) -> Self {
        match error {
            ResolveError::CyclicExtends { chain } => Self::new(
                DiagnosticKind::CyclicExtends,
                chain.first().map(String::as_str).unwrap_or_default(),
                error.to_string(),
            ),
            ResolveError::NodeNotFound { path } => Self::new(
                DiagnosticKind::UnresolvedExtendsTarget,
                path.as_str(),
                error.to_string(),
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity,
            self.kind.code(),
            self.node,
            self.message
        )
    }
}

/// Receives diagnostics as they are produced
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards every diagnostic to `tracing` at the matching level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    fn emit(diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Info => tracing::info!(
                code = diagnostic.kind.code(),
                node = %diagnostic.node,
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                code = diagnostic.kind.code(),
                node = %diagnostic.node,
                "{}",
                diagnostic.message
            ),
            Severity::Error => tracing::error!(
                code = diagnostic.kind.code(),
                node = %diagnostic.node,
                "{}",
                diagnostic.message
            ),
        }
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        Self::emit(&diagnostic);
    }
}

/// Keeps every diagnostic in memory, optionally echoing to `tracing`
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    echo: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collector that also logs each diagnostic as it arrives
    pub fn with_tracing() -> Self {
        Self {
            diagnostics: Vec::new(),
            echo: true,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.kind == kind).collect()
    }

    /// Filter diagnostics by minimum severity level
    pub fn filter_by_severity(&self, min_severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity >= min_severity)
            .collect()
    }

    pub fn count_by_severity(&self) -> HashMap<Severity, usize> {
        let mut counts = HashMap::new();
        for diagnostic in &self.diagnostics {
            *counts.entry(diagnostic.severity).or_insert(0) += 1;
        }
        counts
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        if self.echo {
            TracingSink::emit(&diagnostic);
        }
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_counts_by_severity() {
        let mut collector = DiagnosticCollector::new();
        collector.report(Diagnostic::unresolved_extends("plotOptions.area", "plotOptions.nope"));
        collector.report(Diagnostic::malformed_extends("plotOptions.bar", "{plotOptions.column}"));
        collector.report(Diagnostic::series_variant_skipped("series.line"));

        let counts = collector.count_by_severity();
        assert_eq!(counts.get(&Severity::Warning), Some(&2));
        assert_eq!(counts.get(&Severity::Info), Some(&1));
        assert!(collector.has_warnings());
        assert!(!collector.has_errors());
        assert_eq!(collector.filter_by_severity(Severity::Warning).len(), 2);
    }

    #[test]
    fn test_cycle_diagnostic_names_first_node() {
        let error = ResolveError::CyclicExtends {
            chain: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        let diagnostic = Diagnostic::from_resolve_error(&error);
        assert_eq!(diagnostic.kind, DiagnosticKind::CyclicExtends);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.node, "a");
        assert!(diagnostic.message.contains("a → b → a"));
    }

    #[test]
    fn test_display_includes_code() {
        let diagnostic = Diagnostic::unresolved_extends("chart", "credits");
        assert_eq!(
            diagnostic.to_string(),
            "warning[unresolved-extends-target] chart: Extends: Node credits not found."
        );
    }
}
