//! Per-article reports and run summaries.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::depth::{DepthAssessment, SectionScore};
use super::engagement::EngagementAssessment;
use super::formatting::FormattingAssessment;
use super::images::{ImageAssessment, ImageRef};
use crate::config::CueKind;

/// Round a score to one decimal place, ties to even.
///
/// Rounds the exact binary value through its decimal rendering, so
/// `87.25` becomes `87.2` and `83.35` (stored just below) becomes `83.3`.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Leading digits of the file stem (`01-intro.md` -> 1).
///
/// Prefixes too long for a `u64` count as no number.
pub fn document_number(path: &Path) -> Option<u64> {
    let stem = path.file_stem()?.to_string_lossy();
    let digits: String = stem.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Which engagement cues fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementDetail {
    pub hook: Option<CueKind>,
    pub cta: Option<CueKind>,
    pub readability: f64,
}

/// What the image scorer found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageDetail {
    pub references: Vec<ImageRef>,
    pub has_cover: bool,
    pub cover_first: bool,
    /// Local references that do not exist on disk
    pub missing_on_disk: Vec<String>,
}

/// Evaluation result for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleReport {
    pub path: PathBuf,
    /// `# ` heading text, or the file stem when there is none
    pub title: String,
    pub number: Option<u64>,
    pub depth_score: f64,
    pub engagement_score: f64,
    pub formatting_score: f64,
    pub image_score: f64,
    pub final_score: f64,
    pub missing_sections: Vec<String>,
    /// Matched sections, in catalog order
    pub section_scores: Vec<SectionScore>,
    pub engagement: EngagementDetail,
    pub images: ImageDetail,
    pub warnings: Vec<String>,
}

impl ArticleReport {
    /// Combine component assessments into a report.
    ///
    /// The final score is the mean of the unrounded components; every
    /// stored score is rounded to one decimal.
    pub fn build(
        path: PathBuf,
        title: String,
        depth: DepthAssessment,
        engagement: EngagementAssessment,
        formatting: FormattingAssessment,
        images: ImageAssessment,
    ) -> Self {
        let final_score =
            (depth.score + engagement.score + formatting.score + images.score) / 4.0;

        let mut warnings = Vec::new();
        if !depth.missing.is_empty() {
            warnings.push(format!("Missing sections: {}", depth.missing.join(", ")));
        }
        warnings.extend(images.warnings.iter().cloned());

        let missing_on_disk = images
            .images
            .iter()
            .filter(|img| !img.exists && !img.is_remote())
            .map(|img| img.path.clone())
            .collect();

        let section_scores = depth
            .sections
            .into_iter()
            .map(|mut s| {
                s.score = round1(s.score);
                s
            })
            .collect();

        Self {
            number: document_number(&path),
            path,
            title,
            depth_score: round1(depth.score),
            engagement_score: round1(engagement.score),
            formatting_score: round1(formatting.score),
            image_score: round1(images.score),
            final_score: round1(final_score),
            missing_sections: depth.missing,
            section_scores,
            engagement: EngagementDetail {
                hook: engagement.hook,
                cta: engagement.cta,
                readability: round1(engagement.readability),
            },
            images: ImageDetail {
                references: images.images,
                has_cover: images.has_cover,
                cover_first: images.cover_first,
                missing_on_disk,
            },
            warnings,
        }
    }

    /// File name for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Number for display, `-` when the file name has none.
    pub fn number_label(&self) -> String {
        self.number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Metadata about a lint run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetadata {
    pub version: String,
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    /// Directory that was linted
    pub root: PathBuf,
}

/// Outcome of the minimum-score gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateOutcome {
    pub min_score: f64,
    pub passed: bool,
    /// Documents whose final score is below the threshold
    pub failing: Vec<PathBuf>,
}

/// All reports of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub metadata: RunMetadata,
    /// Sorted by document number; unnumbered documents last
    pub reports: Vec<ArticleReport>,
    /// Mean final score, 0 when there are no reports
    pub average_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<GateOutcome>,
}

impl RunSummary {
    pub fn new(root: PathBuf, mut reports: Vec<ArticleReport>) -> Self {
        reports.sort_by_key(|r| (r.number.is_none(), r.number));

        let average_score = if reports.is_empty() {
            0.0
        } else {
            round1(reports.iter().map(|r| r.final_score).sum::<f64>() / reports.len() as f64)
        };

        Self {
            metadata: RunMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                root,
            },
            reports,
            average_score,
            gate: None,
        }
    }

    /// Apply a minimum final score threshold.
    pub fn with_gate(mut self, min_score: Option<f64>) -> Self {
        self.gate = min_score.map(|min_score| {
            let failing: Vec<PathBuf> = self
                .reports
                .iter()
                .filter(|r| r.final_score < min_score)
                .map(|r| r.path.clone())
                .collect();
            GateOutcome {
                min_score,
                passed: failing.is_empty(),
                failing,
            }
        });
        self
    }

    /// False only when a gate was applied and some document failed it.
    pub fn passed(&self) -> bool {
        self.gate.as_ref().map_or(true, |g| g.passed)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
