//! Terminal rendering of lint results.
//!
//! Produces a detailed block per article followed by a summary table.
//! Scores are colored by band unless color is disabled.

use owo_colors::{OwoColorize, Rgb};

use crate::config::SectionCatalog;
use crate::lint::{ArticleReport, RunSummary};
use crate::ui::theme::Theme;

const TITLE_WIDTH: usize = 40;

/// Renders run summaries as plain or colored text.
#[derive(Debug)]
pub struct ReportRenderer {
    theme: Theme,
    use_color: bool,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            use_color: true,
        }
    }

    /// Set whether to use colors.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn paint(&self, text: &str, color: Rgb) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Rgb) -> String {
        if self.use_color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, value: f64) -> String {
        self.paint(&format!("{:.1}", value), self.theme.score_color(value))
    }

    /// Details for every article, then the summary table.
    pub fn render(&self, summary: &RunSummary) -> String {
        let mut output = String::new();
        for report in &summary.reports {
            output.push_str(&self.render_article(report));
            output.push('\n');
        }
        output.push_str(&self.render_summary_table(summary));
        output
    }

    /// Detailed block for one article.
    pub fn render_article(&self, report: &ArticleReport) -> String {
        let mut output = String::new();

        let header = match report.number {
            Some(n) => format!("Article {:02}: {}", n, report.title),
            None => format!("Article: {}", report.title),
        };
        output.push_str(&self.paint_bold(&header, self.theme.heading));
        output.push('\n');
        output.push_str(&format!(
            "  {} {}\n",
            self.paint("File:", self.theme.muted),
            report.path.display()
        ));
        output.push_str(&format!(
            "  Depth {}  Engagement {}  Formatting {}  Images {}\n",
            self.score(report.depth_score),
            self.score(report.engagement_score),
            self.score(report.formatting_score),
            self.score(report.image_score)
        ));
        output.push_str(&format!(
            "  {} {}\n",
            self.paint_bold("Final:", self.theme.muted),
            self.score(report.final_score)
        ));

        if !report.section_scores.is_empty() {
            output.push_str(&format!("  {}\n", self.paint("Sections:", self.theme.muted)));
            for s in &report.section_scores {
                output.push_str(&format!(
                    "    {} {} {}\n",
                    s.title,
                    self.score(s.score),
                    self.paint(
                        &format!(
                            "({} words, checklist {}/{})",
                            s.words, s.checklist_hits, s.checklist_total
                        ),
                        self.theme.muted
                    )
                ));
            }
        }

        if !report.warnings.is_empty() {
            output.push_str(&format!("  {}\n", self.paint("Warnings:", self.theme.fair)));
            for warning in &report.warnings {
                output.push_str(&format!("    - {}\n", warning));
            }
        }

        output
    }

    /// One row per article plus the mean final score.
    pub fn render_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        let header = format!(
            "{:>3}  {:<title_w$}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}",
            "#",
            "Article",
            "Depth",
            "Engage",
            "Format",
            "Images",
            "Final",
            title_w = TITLE_WIDTH
        );
        output.push_str(&self.paint_bold(&header, self.theme.heading));
        output.push('\n');
        output.push_str(&self.paint(&"-".repeat(header.chars().count()), self.theme.muted));
        output.push('\n');

        for report in &summary.reports {
            output.push_str(&format!(
                "{:>3}  {:<title_w$}  {}  {}  {}  {}  {}\n",
                report.number_label(),
                truncate(&report.title, TITLE_WIDTH),
                self.score_cell(report.depth_score),
                self.score_cell(report.engagement_score),
                self.score_cell(report.formatting_score),
                self.score_cell(report.image_score),
                self.score_cell(report.final_score),
                title_w = TITLE_WIDTH
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "{} {} across {} article(s)\n",
            self.paint_bold("Average final score:", self.theme.muted),
            self.score(summary.average_score),
            summary.len()
        ));

        if let Some(gate) = &summary.gate {
            let line = if gate.passed {
                self.paint(
                    &format!("Quality gate passed (minimum {:.1})", gate.min_score),
                    self.theme.good,
                )
            } else {
                self.paint(
                    &format!(
                        "Quality gate failed: {} article(s) below {:.1}",
                        gate.failing.len(),
                        gate.min_score
                    ),
                    self.theme.poor,
                )
            };
            output.push_str(&line);
            output.push('\n');
        }

        output
    }

    /// Right-aligned, colored score cell; padding is applied before coloring.
    fn score_cell(&self, value: f64) -> String {
        self.paint(&format!("{:>6.1}", value), self.theme.score_color(value))
    }

    /// The active required-section catalog.
    pub fn render_catalog(&self, catalog: &SectionCatalog) -> String {
        let mut output = String::new();
        for spec in catalog {
            output.push_str(&self.paint_bold(&spec.prefix, self.theme.heading));
            output.push_str(&self.paint(
                &format!("  (min {} words)", spec.min_words),
                self.theme.muted,
            ));
            output.push('\n');
            if !spec.description.is_empty() {
                output.push_str(&format!("  {}\n", spec.description));
            }
            if !spec.checklist.is_empty() {
                output.push_str(&format!("  checklist: {}\n", spec.checklist.join(", ")));
            }
        }
        output
    }
}

/// Cut text to `width` characters, marking the cut with `...`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
