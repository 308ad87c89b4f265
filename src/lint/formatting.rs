//! Paragraph formatting score.

use serde::Serialize;

use super::sections::SectionParser;

const EMPHASIS_BONUS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattingAssessment {
    pub score: f64,
    pub paragraphs: usize,
    pub long_paragraphs: usize,
    pub has_emphasis: bool,
}

/// Penalizes overlong paragraphs and rewards lists or bold text.
#[derive(Debug)]
pub struct FormattingScorer<'p> {
    parser: &'p SectionParser,
    max_paragraph_chars: usize,
}

impl<'p> FormattingScorer<'p> {
    pub fn new(parser: &'p SectionParser, max_paragraph_chars: usize) -> Self {
        Self {
            parser,
            max_paragraph_chars,
        }
    }

    pub fn assess(&self, text: &str) -> FormattingAssessment {
        let paragraphs: Vec<&str> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        let has_emphasis = self.parser.has_list_or_bold(text);

        if paragraphs.is_empty() {
            return FormattingAssessment {
                score: 0.0,
                paragraphs: 0,
                long_paragraphs: 0,
                has_emphasis,
            };
        }

        let long_paragraphs = paragraphs
            .iter()
            .filter(|p| p.chars().count() > self.max_paragraph_chars)
            .count();
        let ratio = long_paragraphs as f64 / paragraphs.len() as f64;

        let mut score = 100.0 * (1.0 - ratio.min(1.0));
        if has_emphasis {
            score += EMPHASIS_BONUS;
        }

        FormattingAssessment {
            score: score.clamp(0.0, 100.0),
            paragraphs: paragraphs.len(),
            long_paragraphs,
            has_emphasis,
        }
    }
}
