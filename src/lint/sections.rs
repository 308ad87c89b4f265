//! Section extraction and template matching.

use regex::Regex;
use serde::Serialize;

use crate::config::{RequiredSectionSpec, SectionCatalog};

/// A level-2 section of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading line including the `##` marker, trimmed
    pub title: String,
    /// Text up to the next level-2 heading, trimmed
    pub body: String,
}

/// A required spec bound to the section that satisfies it.
#[derive(Debug, Clone, Copy)]
pub struct SectionMatch<'a> {
    pub spec: &'a RequiredSectionSpec,
    pub section: &'a Section,
}

/// Result of matching the catalog against a document's sections.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome<'a> {
    /// Matched specs, in catalog order
    pub matched: Vec<SectionMatch<'a>>,
    /// Specs with no matching heading, in catalog order
    pub missing: Vec<&'a RequiredSectionSpec>,
}

impl<'a> MatchOutcome<'a> {
    /// Prefixes of the missing specs.
    pub fn missing_prefixes(&self) -> Vec<String> {
        self.missing.iter().map(|s| s.prefix.clone()).collect()
    }
}

/// Stateless text helpers shared by the scorers.
#[derive(Debug)]
pub struct SectionParser {
    title_re: Regex,
    heading_re: Regex,
    word_re: Regex,
    bullet_re: Regex,
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionParser {
    pub fn new() -> Self {
        Self {
            title_re: Regex::new(r"(?m)^# (.+)$").expect("Invalid title regex"),
            heading_re: Regex::new(r"(?m)^(## .+)$").expect("Invalid heading regex"),
            word_re: Regex::new(r"\w+").expect("Invalid word regex"),
            bullet_re: Regex::new(r"(?m)^\s*[-*]\s+").expect("Invalid bullet regex"),
        }
    }

    /// Text of the first `# ` heading, trimmed.
    pub fn extract_title(&self, text: &str) -> Option<String> {
        self.title_re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    /// Split a document on level-2 headings.
    ///
    /// A title seen twice keeps its first position and the later body.
    pub fn split_sections(&self, text: &str) -> Vec<Section> {
        let headings: Vec<regex::Match<'_>> = self
            .heading_re
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .collect();

        let mut sections: Vec<Section> = Vec::with_capacity(headings.len());

        for (idx, heading) in headings.iter().enumerate() {
            let title = heading.as_str().trim().to_string();
            let end = headings
                .get(idx + 1)
                .map(|next| next.start())
                .unwrap_or(text.len());
            let body = text[heading.end()..end].trim().to_string();

            match sections.iter_mut().find(|s| s.title == title) {
                Some(existing) => existing.body = body,
                None => sections.push(Section { title, body }),
            }
        }

        sections
    }

    /// Number of Unicode word-character runs.
    pub fn count_words(&self, text: &str) -> usize {
        self.word_re.find_iter(text).count()
    }

    /// Whether the text has a bullet line or bold emphasis.
    pub fn has_list_or_bold(&self, text: &str) -> bool {
        self.bullet_re.is_match(text) || text.contains("**")
    }
}

/// Match each catalog spec to the first section whose title starts with its prefix.
pub fn match_required_sections<'a>(
    catalog: &'a SectionCatalog,
    sections: &'a [Section],
) -> MatchOutcome<'a> {
    let mut outcome = MatchOutcome::default();

    for spec in catalog {
        match sections.iter().find(|s| s.title.starts_with(&spec.prefix)) {
            Some(section) => outcome.matched.push(SectionMatch { spec, section }),
            None => outcome.missing.push(spec),
        }
    }

    outcome
}
