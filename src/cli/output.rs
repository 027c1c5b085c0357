//! Output formatting for CLI

use crate::validation::SchemaViolation;

use super::commands::generate::GenerateSummary;

/// Format a violation list for an error message, one violation per line.
pub fn format_violation_list(violations: &[SchemaViolation]) -> String {
    let mut output = String::new();
    for violation in violations {
        output.push_str(&format!("\n  - {}", violation));
    }
    output
}

/// Format a generation run summary.
pub fn format_generate_summary(summary: &GenerateSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n✅ Generated validators for {} definition(s):\n",
        summary.entities.len()
    ));
    for entity in &summary.entities {
        output.push_str(&format!("  - {}\n", entity));
    }

    output.push_str(&format!("\nFiles written ({}):\n", summary.files.len()));
    for file in &summary.files {
        output.push_str(&format!("  - {}\n", file));
    }

    output
}
