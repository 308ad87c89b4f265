//! Markdown output for lint runs.
//!
//! Produces a summary table followed by a details block per article.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::lint::{ArticleReport, RunSummary};

/// Errors that can occur during markdown output operations.
#[derive(Error, Debug)]
pub enum MarkdownOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for markdown output operations.
pub type MarkdownOutputResult<T> = Result<T, MarkdownOutputError>;

/// Writer for markdown-formatted run summaries.
pub struct MarkdownReportWriter;

impl MarkdownReportWriter {
    /// Write a run summary to a markdown file.
    pub fn write_to_file<P: AsRef<Path>>(
        summary: &RunSummary,
        path: P,
    ) -> MarkdownOutputResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(Self::to_markdown_string(summary).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Format a run summary as a markdown string.
    pub fn to_markdown_string(summary: &RunSummary) -> String {
        let mut output = String::from("# Article Quality Report\n\n");

        output.push_str(&Self::format_summary(summary));
        for report in &summary.reports {
            output.push_str(&Self::format_article(report));
        }
        output.push_str(&Self::format_metadata(summary));

        output
    }

    fn format_summary(summary: &RunSummary) -> String {
        let mut section = String::from("## Summary\n\n");

        section.push_str(&format!(
            "Evaluated **{}** article(s) in `{}`. Average final score: **{:.1}**.\n\n",
            summary.len(),
            summary.metadata.root.display(),
            summary.average_score
        ));

        if let Some(gate) = &summary.gate {
            let status = if gate.passed { "passed" } else { "failed" };
            section.push_str(&format!(
                "Quality gate (minimum {:.1}): **{}**.\n\n",
                gate.min_score, status
            ));
        }

        section.push_str("| # | Article | Depth | Engagement | Formatting | Images | Final |\n");
        section.push_str("|---|---------|-------|------------|------------|--------|-------|\n");
        for report in &summary.reports {
            section.push_str(&format!(
                "| {} | {} | {:.1} | {:.1} | {:.1} | {:.1} | **{:.1}** |\n",
                report.number_label(),
                escape_cell(&report.file_name()),
                report.depth_score,
                report.engagement_score,
                report.formatting_score,
                report.image_score,
                report.final_score
            ));
        }
        section.push('\n');
        section
    }

    fn format_article(report: &ArticleReport) -> String {
        let mut section = format!("## {}\n\n", report.title);

        section.push_str(&format!("- **File:** `{}`\n", report.path.display()));
        section.push_str(&format!("- **Final score:** {:.1}\n", report.final_score));
        section.push_str(&format!(
            "- **Hook:** {}\n",
            report
                .engagement
                .hook
                .map(|k| k.to_string())
                .unwrap_or_else(|| "none".to_string())
        ));
        section.push_str(&format!(
            "- **Call to action:** {}\n",
            report
                .engagement
                .cta
                .map(|k| k.to_string())
                .unwrap_or_else(|| "none".to_string())
        ));
        section.push_str(&format!(
            "- **Readability:** {:.1}\n\n",
            report.engagement.readability
        ));

        if !report.section_scores.is_empty() {
            section.push_str("| Section | Words | Checklist | Score |\n");
            section.push_str("|---------|-------|-----------|-------|\n");
            for s in &report.section_scores {
                section.push_str(&format!(
                    "| {} | {} | {}/{} | {:.1} |\n",
                    escape_cell(&s.title),
                    s.words,
                    s.checklist_hits,
                    s.checklist_total,
                    s.score
                ));
            }
            section.push('\n');
        }

        if !report.warnings.is_empty() {
            section.push_str("**Warnings:**\n\n");
            for warning in &report.warnings {
                section.push_str(&format!("- {}\n", warning));
            }
            section.push('\n');
        }

        section
    }

    fn format_metadata(summary: &RunSummary) -> String {
        format!(
            "---\n\n_Generated by artlint {} at {}_\n",
            summary.metadata.version, summary.metadata.timestamp
        )
    }
}

/// Keep table cells intact when a value contains `|`.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::lint::Linter;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_summary() -> RunSummary {
        let linter = Linter::new(&LintConfig::default()).unwrap();
        let text = "# Cache | Redis\n\nOntem tudo quebrou.\n\n## 2. Abordagem\n\n- fluxo\n- caso\n";
        let reports = vec![linter.evaluate(Path::new("/artigos/01-cache.md"), text)];
        RunSummary::new(PathBuf::from("/artigos"), reports)
    }

    #[test]
    fn test_summary_table() {
        let md = MarkdownReportWriter::to_markdown_string(&create_test_summary());

        assert!(md.starts_with("# Article Quality Report\n"));
        assert!(md.contains("Evaluated **1** article(s)"));
        assert!(md.contains("| 1 | 01-cache.md |"));
        assert!(!md.contains("Quality gate"));
    }

    #[test]
    fn test_article_details() {
        let md = MarkdownReportWriter::to_markdown_string(&create_test_summary());

        assert!(md.contains("## Cache | Redis"));
        assert!(md.contains("- **Hook:** narrative_opener"));
        assert!(md.contains("- **Call to action:** none"));
        assert!(md.contains("| ## 2. Abordagem | 2 | 2/5 |"));
        assert!(md.contains("- Missing sections: ## 1. Contexto e Propósito"));
    }

    #[test]
    fn test_gate_status() {
        let summary = create_test_summary().with_gate(Some(99.0));
        let md = MarkdownReportWriter::to_markdown_string(&summary);
        assert!(md.contains("Quality gate (minimum 99.0): **failed**."));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("plain"), "plain");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("report.md");

        MarkdownReportWriter::write_to_file(&create_test_summary(), &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("## Summary"));
        assert!(content.contains("_Generated by artlint"));
    }
}
