//! Structural depth scoring.
//!
//! Each matched section earns up to 60 points for size, 25 for checklist
//! coverage and 15 for visual structure. The document score averages over
//! the whole catalog and then subtracts a flat penalty per missing section,
//! so an absent section costs twice: once as an implicit zero in the mean
//! and once through the penalty.

use serde::Serialize;

use super::sections::{match_required_sections, Section, SectionParser};
use crate::config::{RequiredSectionSpec, SectionCatalog};

const SIZE_WEIGHT: f64 = 60.0;
const CHECKLIST_WEIGHT: f64 = 25.0;
const STRUCTURE_BONUS: f64 = 15.0;

/// Depth score of one matched section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    /// Catalog prefix the section was matched against
    pub prefix: String,
    /// Heading as written in the document
    pub title: String,
    pub words: usize,
    pub checklist_hits: usize,
    pub checklist_total: usize,
    pub has_structure: bool,
    pub score: f64,
}

/// Depth assessment of a whole document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthAssessment {
    /// Final depth score after the missing-section penalty
    pub score: f64,
    /// Per-section scores in catalog order
    pub sections: Vec<SectionScore>,
    /// Prefixes of required sections with no matching heading
    pub missing: Vec<String>,
}

/// Scores sections against a catalog.
#[derive(Debug)]
pub struct DepthScorer<'p> {
    parser: &'p SectionParser,
    missing_section_penalty: f64,
}

impl<'p> DepthScorer<'p> {
    pub fn new(parser: &'p SectionParser, missing_section_penalty: f64) -> Self {
        Self {
            parser,
            missing_section_penalty,
        }
    }

    /// Score a single section body against its spec.
    pub fn score_section(&self, spec: &RequiredSectionSpec, body: &str) -> SectionScore {
        let words = self.parser.count_words(body);
        let lowered = body.to_lowercase();
        let checklist_hits = spec
            .checklist
            .iter()
            .filter(|term| lowered.contains(&term.to_lowercase()))
            .count();
        let has_structure = self.parser.has_list_or_bold(body);

        let score = if words == 0 {
            0.0
        } else {
            let size_ratio = (words as f64 / spec.min_words.max(1) as f64).min(1.0);
            let checklist_ratio = if spec.checklist.is_empty() {
                1.0
            } else {
                checklist_hits as f64 / spec.checklist.len() as f64
            };
            let structure = if has_structure { STRUCTURE_BONUS } else { 0.0 };

            (SIZE_WEIGHT * size_ratio + CHECKLIST_WEIGHT * checklist_ratio + structure).min(100.0)
        };

        SectionScore {
            prefix: spec.prefix.clone(),
            title: String::new(),
            words,
            checklist_hits,
            checklist_total: spec.checklist.len(),
            has_structure,
            score,
        }
    }

    /// Score a document's sections against the catalog.
    pub fn assess(&self, catalog: &SectionCatalog, sections: &[Section]) -> DepthAssessment {
        let outcome = match_required_sections(catalog, sections);

        let scored: Vec<SectionScore> = outcome
            .matched
            .iter()
            .map(|m| {
                let mut score = self.score_section(m.spec, &m.section.body);
                score.title = m.section.title.clone();
                tracing::trace!(
                    section = %score.title,
                    words = score.words,
                    hits = score.checklist_hits,
                    score = score.score,
                    "Scored section"
                );
                score
            })
            .collect();

        let mean = if catalog.is_empty() {
            0.0
        } else {
            scored.iter().map(|s| s.score).sum::<f64>() / catalog.len() as f64
        };
        let penalty = self.missing_section_penalty * outcome.missing.len() as f64;

        DepthAssessment {
            score: (mean - penalty).clamp(0.0, 100.0),
            sections: scored,
            missing: outcome.missing_prefixes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(min_words: usize, checklist: &[&str]) -> RequiredSectionSpec {
        RequiredSectionSpec::new("## X", "", min_words, checklist)
    }

    fn words(n: usize) -> String {
        vec!["palavra"; n].join(" ")
    }

    #[test]
    fn test_empty_body_scores_zero_even_with_checklist() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let s = scorer.score_section(&spec(10, &[]), "  \n- **  ");
        assert_eq!(s.words, 0);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn test_exact_minimum_without_hits_or_structure_scores_sixty() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let s = scorer.score_section(&spec(50, &["ausente"]), &words(50));
        assert_eq!(s.score, 60.0);
    }

    #[test]
    fn test_size_component_ramps_and_saturates() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let sp = spec(100, &["ausente"]);

        let half = scorer.score_section(&sp, &words(50)).score;
        let full = scorer.score_section(&sp, &words(100)).score;
        let over = scorer.score_section(&sp, &words(400)).score;

        assert_eq!(half, 30.0);
        assert_eq!(full, 60.0);
        assert_eq!(over, 60.0);
    }

    #[test]
    fn test_checklist_counts_each_keyword_once_case_insensitive() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let sp = spec(4, &["fluxo", "Caso", "arquitetura", "exemplo"]);

        let body = "Um CASO de fluxo, outro fluxo e mais fluxo.";
        let s = scorer.score_section(&sp, body);
        assert_eq!(s.checklist_hits, 2);
        assert_eq!(s.score, 60.0 + 25.0 * 0.5);

        let reordered = scorer.score_section(&sp, "Mais fluxo, outro caso, e fluxo de novo.");
        assert_eq!(reordered.score, s.score);
    }

    #[test]
    fn test_empty_checklist_grants_full_ratio() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let s = scorer.score_section(&spec(3, &[]), "uma duas três\n\n- lista");
        assert_eq!(s.score, 100.0);
    }

    #[test]
    fn test_document_without_headings_scores_zero() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let catalog = SectionCatalog::standard();
        let assessment = scorer.assess(&catalog, &[]);

        assert_eq!(assessment.score, 0.0);
        assert!(assessment.sections.is_empty());
        assert_eq!(assessment.missing.len(), 7);
    }

    #[test]
    fn test_missing_sections_are_penalized_twice() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let catalog = SectionCatalog::new(vec![
            RequiredSectionSpec::new("## A", "", 3, &[]),
            RequiredSectionSpec::new("## B", "", 3, &[]),
        ]);
        let sections = vec![Section {
            title: "## A".to_string(),
            body: "um dois três **negrito**".to_string(),
        }];

        let assessment = scorer.assess(&catalog, &sections);
        assert_eq!(assessment.sections.len(), 1);
        assert_eq!(assessment.sections[0].score, 100.0);
        // 100 / 2 = 50, minus 10 for "## B"
        assert_eq!(assessment.score, 40.0);
        assert_eq!(assessment.missing, vec!["## B".to_string()]);
    }

    #[test]
    fn test_section_scores_follow_catalog_order() {
        let parser = SectionParser::new();
        let scorer = DepthScorer::new(&parser, 10.0);
        let catalog = SectionCatalog::new(vec![
            RequiredSectionSpec::new("## A", "", 1, &[]),
            RequiredSectionSpec::new("## B", "", 1, &[]),
        ]);
        let sections = parser.split_sections("## B extra\nbê\n## A extra\nah\n");

        let assessment = scorer.assess(&catalog, &sections);
        let titles: Vec<&str> = assessment.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["## A extra", "## B extra"]);
        assert_eq!(assessment.score, 85.0);
    }
}
