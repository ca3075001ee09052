//! Rendering of trial results as a table or as JSON.

use harness::{InputKind, TrialResult};
use op_registry::OperationTable;
use serde::{Deserialize, Serialize};

/// One rendered trial: the operation, the input kind it sampled, and the
/// derived metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialReport {
    /// Operation name.
    pub name: String,
    /// Input kind the trial sampled.
    pub input_kind: InputKind,
    /// Aggregated metrics.
    pub result: TrialResult,
}

/// Format reports as a human-readable table.
pub fn format_reports(reports: &[TrialReport]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{:<16} {:<8} {:>14} {:>12} {:>12} {:>8}\n",
        "Operation", "Inputs", "Runs/s", "Raw ns", "Adj ns", "Ratio"
    ));
    output.push_str(&format!("{}\n", "=".repeat(74)));

    for report in reports {
        output.push_str(&format!(
            "{:<16} {:<8} {:>14} {:>12.2} {:>12.2} {:>8.3}\n",
            report.name,
            report.input_kind,
            report.result.rate,
            report.result.raw_duration_ns,
            report.result.adjusted_duration_ns,
            report.result.ratio
        ));
    }

    output
}

/// Format reports as pretty-printed JSON.
pub fn format_reports_json(reports: &[TrialReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

/// Format the operation catalogue, grouped by section, with each
/// operation's display expression.
pub fn format_catalogue(table: &OperationTable) -> String {
    let mut output = String::new();
    let mut current_section = "";

    for op in table.operations() {
        if op.section != current_section {
            if !current_section.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("{}\n", op.section));
            current_section = op.section;
        }
        output.push_str(&format!("  {:<16} {}\n", op.name, op.expr));
    }

    output
}
