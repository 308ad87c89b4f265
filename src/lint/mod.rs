//! Article evaluation.
//!
//! A document goes through four independent scorers (structural depth,
//! engagement, formatting, images) and the results are combined into an
//! [`ArticleReport`]. [`Linter::run`] evaluates every `*.md` file directly
//! inside a directory and returns a [`RunSummary`].

pub mod depth;
pub mod engagement;
pub mod formatting;
pub mod images;
pub mod report;
pub mod sections;

pub use depth::{DepthAssessment, DepthScorer, SectionScore};
pub use engagement::{CueDetector, CuePattern, EngagementAssessment, EngagementScorer};
pub use formatting::{FormattingAssessment, FormattingScorer};
pub use images::{FsProbe, ImageAssessment, ImageRef, ImageScorer, PathProbe};
pub use report::{ArticleReport, GateOutcome, RunMetadata, RunSummary};
pub use sections::{match_required_sections, MatchOutcome, Section, SectionMatch, SectionParser};

use glob::Pattern;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{ConfigError, LintConfig, SectionCatalog, Thresholds};

/// Errors that can occur while linting a directory
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("No Markdown documents found in {0}")]
    NoDocuments(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for lint operations
pub type LintResult<T> = Result<T, LintError>;

/// Sorted `*.md` files directly inside `dir`, dot-files included.
pub fn discover_articles(dir: &Path) -> LintResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(LintError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(LintError::NotADirectory(dir.to_path_buf()));
    }

    let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy())).join("*.md");

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry.map_err(|e| LintError::Read {
            path: e.path().to_path_buf(),
            source: e.into(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(LintError::NoDocuments(dir.to_path_buf()));
    }
    Ok(paths)
}

/// Evaluates documents against a fixed configuration.
pub struct Linter {
    catalog: SectionCatalog,
    parser: SectionParser,
    engagement: EngagementScorer,
    images: ImageScorer,
    thresholds: Thresholds,
    gate: Option<f64>,
    probe: Box<dyn PathProbe>,
}

impl Linter {
    /// Build a linter, compiling the configured cue tables.
    pub fn new(config: &LintConfig) -> LintResult<Self> {
        let thresholds = config.thresholds.clone();
        let engagement = EngagementScorer::new(
            CueDetector::from_rules(&config.hook_rules())?,
            CueDetector::from_rules(&config.cta_rules())?,
            thresholds.closing_lines,
            thresholds.max_line_chars,
        );

        Ok(Self {
            catalog: config.catalog(),
            parser: SectionParser::new(),
            engagement,
            images: ImageScorer::new(&config.images.cover_keywords),
            thresholds,
            gate: config.gate.min_score,
            probe: Box::new(FsProbe),
        })
    }

    /// Replace the filesystem probe used for image existence checks.
    pub fn with_probe(mut self, probe: impl PathProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Override the configured minimum score.
    pub fn with_gate(mut self, min_score: Option<f64>) -> Self {
        if min_score.is_some() {
            self.gate = min_score;
        }
        self
    }

    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    /// Evaluate document text located at `path`.
    pub fn evaluate(&self, path: &Path, text: &str) -> ArticleReport {
        let title = self.parser.extract_title(text).unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        let sections = self.parser.split_sections(text);

        let depth = DepthScorer::new(&self.parser, self.thresholds.missing_section_penalty)
            .assess(&self.catalog, &sections);
        let engagement = self.engagement.assess(text);
        let formatting =
            FormattingScorer::new(&self.parser, self.thresholds.max_paragraph_chars).assess(text);
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let images = self.images.assess(text, base_dir, self.probe.as_ref());

        tracing::debug!(
            path = %path.display(),
            depth = depth.score,
            engagement = engagement.score,
            formatting = formatting.score,
            images = images.score,
            "Evaluated article"
        );

        ArticleReport::build(
            path.to_path_buf(),
            title,
            depth,
            engagement,
            formatting,
            images,
        )
    }

    /// Read and evaluate one file.
    pub fn evaluate_file(&self, path: &Path) -> LintResult<ArticleReport> {
        let text = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.evaluate(path, &text))
    }

    /// Evaluate every article in `dir`.
    pub fn run(&self, dir: &Path) -> LintResult<RunSummary> {
        let paths = discover_articles(dir)?;
        tracing::info!(dir = %dir.display(), count = paths.len(), "Linting articles");

        let reports = paths
            .iter()
            .map(|path| self.evaluate_file(path))
            .collect::<LintResult<Vec<_>>>()?;

        let summary = RunSummary::new(dir.to_path_buf(), reports).with_gate(self.gate);
        tracing::info!(
            count = summary.len(),
            average = summary.average_score,
            passed = summary.passed(),
            "Lint finished"
        );
        Ok(summary)
    }
}
