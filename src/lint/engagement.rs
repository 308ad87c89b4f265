//! Engagement scoring: opening hook, closing call-to-action and readability.
//!
//! Hook and CTA detection run a table of case-insensitive cue patterns
//! against the intro and the closing lines of a document.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::config::{ConfigError, CueKind, CueRule};

const HOOK_POINTS: f64 = 30.0;
const CTA_POINTS: f64 = 30.0;
const READABILITY_WEIGHT: f64 = 40.0;

/// A compiled cue pattern.
#[derive(Debug)]
pub struct CuePattern {
    regex: Regex,
    kind: CueKind,
}

impl CuePattern {
    /// Compile a cue rule into a case-insensitive pattern.
    pub fn compile(rule: &CueRule) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(&rule.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: rule.pattern.clone(),
                source,
            })?;
        Ok(Self {
            regex,
            kind: rule.kind,
        })
    }

    pub fn kind(&self) -> CueKind {
        self.kind
    }

    /// Checks if this pattern matches the given text.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Detector for one family of cues (hook or CTA).
#[derive(Debug)]
pub struct CueDetector {
    /// Enabled patterns, in table order
    patterns: Vec<CuePattern>,
}

impl CueDetector {
    /// Build a detector from a cue table, skipping disabled rows.
    pub fn from_rules(rules: &[CueRule]) -> Result<Self, ConfigError> {
        let patterns = rules
            .iter()
            .filter(|rule| rule.enabled)
            .map(CuePattern::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[CuePattern] {
        &self.patterns
    }

    /// First cue that matches the text, in table order.
    pub fn detect(&self, text: &str) -> Option<CueKind> {
        self.patterns
            .iter()
            .find(|p| p.matches(text))
            .map(CuePattern::kind)
    }

    pub fn matches(&self, text: &str) -> bool {
        self.detect(text).is_some()
    }
}

/// Engagement assessment of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementAssessment {
    /// Combined score, 0-100
    pub score: f64,
    /// Hook cue found in the intro
    pub hook: Option<CueKind>,
    /// CTA cue found in the closing lines
    pub cta: Option<CueKind>,
    /// Readability sub-score, 0-100
    pub readability: f64,
}

impl EngagementAssessment {
    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    pub fn has_cta(&self) -> bool {
        self.cta.is_some()
    }
}

/// Scores intro hooks, closing CTAs and line-length readability.
#[derive(Debug)]
pub struct EngagementScorer {
    hook: CueDetector,
    cta: CueDetector,
    closing_lines: usize,
    max_line_chars: usize,
    title_re: Regex,
    section_re: Regex,
}

impl EngagementScorer {
    pub fn new(
        hook: CueDetector,
        cta: CueDetector,
        closing_lines: usize,
        max_line_chars: usize,
    ) -> Self {
        Self {
            hook,
            cta,
            closing_lines,
            max_line_chars,
            title_re: Regex::new(r"(?m)^# .+$").expect("Invalid title regex"),
            section_re: Regex::new(r"(?m)^## ").expect("Invalid section regex"),
        }
    }

    /// Text before the first level-2 heading, with every `# ` line removed.
    pub fn extract_intro(&self, text: &str) -> String {
        let without_title = self.title_re.replace_all(text, "");
        let without_title = without_title.trim();

        match self.section_re.find(without_title) {
            Some(m) => without_title[..m.start()].trim().to_string(),
            None => without_title.to_string(),
        }
    }

    /// The last `closing_lines` non-blank lines, in document order.
    pub fn extract_closing(&self, text: &str) -> String {
        let lines: Vec<&str> = text
            .trim()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect();
        let start = lines.len().saturating_sub(self.closing_lines);
        lines[start..].join("\n")
    }

    /// Share of non-blank lines within the length limit, as 0-100.
    ///
    /// A document with no non-blank lines scores 0.
    pub fn readability(&self, text: &str) -> f64 {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            return 0.0;
        }

        let long = lines
            .iter()
            .filter(|l| l.chars().count() > self.max_line_chars)
            .count();
        let ratio = long as f64 / lines.len() as f64;

        (100.0 * (1.0 - ratio.min(1.0))).clamp(0.0, 100.0)
    }

    pub fn assess(&self, text: &str) -> EngagementAssessment {
        let intro = self.extract_intro(text);
        let closing = self.extract_closing(text);

        let hook = self.hook.detect(&intro);
        let cta = self.cta.detect(&closing);
        let readability = self.readability(text);
        tracing::trace!(?hook, ?cta, readability, "Engagement cues");

        let hook_points = if hook.is_some() { HOOK_POINTS } else { 0.0 };
        let cta_points = if cta.is_some() { CTA_POINTS } else { 0.0 };
        let score = hook_points + cta_points + READABILITY_WEIGHT * (readability / 100.0);

        EngagementAssessment {
            score: score.clamp(0.0, 100.0),
            hook,
            cta,
            readability,
        }
    }
}
