//! Output formatting and reporting
//!
//! Human output goes to stdout with colors; diagnostics are listed after the
//! summary. JSON output bundles both into one document.

use colored::*;
use optdoc_core::{
    CompletionReport, Diagnostic, DiagnosticCollector, OptdocError, Result, Severity,
};
use serde::Serialize;
use std::path::PathBuf;

use crate::OutputFormat;

/// Summary statistics of a completion run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub option_nodes: usize,
    pub interfaces_emitted: usize,
    pub root_interface: String,
    pub output: PathBuf,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl CompletionSummary {
    pub fn new(report: &CompletionReport, output: PathBuf, sink: &DiagnosticCollector) -> Self {
        let counts = sink.count_by_severity();
        let count = |severity: Severity| counts.get(&severity).copied().unwrap_or(0);
        Self {
            option_nodes: report.option_nodes,
            interfaces_emitted: report.interfaces_emitted,
            root_interface: report.root_interface.clone(),
            output,
            errors: count(Severity::Error),
            warnings: count(Severity::Warning),
            info: count(Severity::Info),
        }
    }

    pub fn total_issues(&self) -> usize {
        self.errors + self.warnings + self.info
    }
}

/// Print the result of `optdoc complete`
pub fn print_completion(
    summary: &CompletionSummary,
    diagnostics: &[Diagnostic],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            print_summary_human(summary);
            print_diagnostics(diagnostics);
            Ok(())
        }
        OutputFormat::Json => print_json_format(summary, diagnostics),
    }
}

fn print_summary_human(summary: &CompletionSummary) {
    println!("{}", "Summary:".bold());
    println!("  Options resolved: {}", summary.option_nodes);
    println!(
        "  Interfaces emitted: {} (root {})",
        summary.interfaces_emitted,
        summary.root_interface.cyan()
    );
    println!("  Output: {}", summary.output.display());

    if summary.total_issues() > 0 {
        println!("  Issues found:");
        if summary.errors > 0 {
            println!("    Errors: {}", summary.errors.to_string().red());
        }
        if summary.warnings > 0 {
            println!("    Warnings: {}", summary.warnings.to_string().yellow());
        }
        if summary.info > 0 {
            println!("    Info: {}", summary.info.to_string().blue());
        }
    } else {
        println!("  {}", "No issues found".green());
    }
}

/// List diagnostics on stderr, one per line
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let label = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };
        eprintln!(
            "{label}[{}] {}: {}",
            diagnostic.kind.code(),
            diagnostic.node.bold(),
            diagnostic.message
        );
    }
}

fn print_json_format(summary: &CompletionSummary, diagnostics: &[Diagnostic]) -> Result<()> {
    let result = serde_json::json!({
        "summary": summary,
        "issues": diagnostics,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&result)
            .map_err(|e| OptdocError::internal_error(format!("Failed to serialize JSON: {e}")))?
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use optdoc_core::DiagnosticSink;

    #[test]
    fn test_summary_counts_by_severity() {
        let mut sink = DiagnosticCollector::new();
        sink.report(Diagnostic::unresolved_extends("area", "missing"));
        sink.report(Diagnostic::series_variant_skipped("series.line"));
        let report = CompletionReport {
            option_nodes: 4,
            interfaces_emitted: 2,
            root_interface: "Highcharts.Options".to_string(),
        };

        let summary = CompletionSummary::new(&report, PathBuf::from("out.json"), &sink);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.info, 1);
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.total_issues(), 2);
    }
}
