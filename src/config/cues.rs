//! Cue tables for hook and call-to-action detection.
//!
//! Word lists live here as data so a locale can be swapped or overridden
//! from configuration without touching the scorers.

use serde::{Deserialize, Serialize};

/// Kind of engagement cue a pattern detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueKind {
    /// Any question mark
    Question,
    /// A percentage figure such as `42%`
    Statistic,
    /// Story opener ("yesterday", "once")
    NarrativeOpener,
    /// Failure or incident words ("bug", "broke")
    Incident,
    /// Discovery words ("learned", "realized")
    Discovery,
    /// Direct invitation to the reader ("comment", "share")
    Invitation,
    /// Fixed rhetorical closing question
    RhetoricalQuestion,
}

impl std::fmt::Display for CueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CueKind::Question => write!(f, "question"),
            CueKind::Statistic => write!(f, "statistic"),
            CueKind::NarrativeOpener => write!(f, "narrative_opener"),
            CueKind::Incident => write!(f, "incident"),
            CueKind::Discovery => write!(f, "discovery"),
            CueKind::Invitation => write!(f, "invitation"),
            CueKind::RhetoricalQuestion => write!(f, "rhetorical_question"),
        }
    }
}

/// One row of a cue table: a case-insensitive regex and whether it counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueRule {
    pub kind: CueKind,
    pub pattern: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl CueRule {
    pub fn new(kind: CueKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            enabled: true,
        }
    }
}

/// Language of the built-in cue tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Portuguese
    #[default]
    Pt,
    /// English
    En,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Pt => write!(f, "pt"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl Locale {
    /// Built-in hook cues for this locale.
    pub fn hook_rules(self) -> Vec<CueRule> {
        let (openers, incidents, discoveries) = match self {
            Locale::Pt => (
                r"\b(ontem|certa vez|uma vez)\b",
                r"\b(erro|bug|quebrou|falhou)\b",
                r"\b(descobri|aprendi|percebi)\b",
            ),
            Locale::En => (
                r"\b(yesterday|once|one day)\b",
                r"\b(error|bug|broke|failed)\b",
                r"\b(discovered|learned|realized)\b",
            ),
        };

        vec![
            CueRule::new(CueKind::Question, r"\?"),
            CueRule::new(CueKind::Statistic, r"\d+%"),
            CueRule::new(CueKind::NarrativeOpener, openers),
            CueRule::new(CueKind::Incident, incidents),
            CueRule::new(CueKind::Discovery, discoveries),
        ]
    }

    /// Built-in call-to-action cues for this locale.
    pub fn cta_rules(self) -> Vec<CueRule> {
        let (invitations, rhetorical) = match self {
            Locale::Pt => (
                r"\b(comenta|comente|me conta|me conte|compartilha|compartilhe)\b",
                r"\b(o que você acha|já passou por isso)\b",
            ),
            Locale::En => (
                r"\b(comment|tell me|share)\b",
                r"\b(what do you think|have you experienced this)\b",
            ),
        };

        vec![
            CueRule::new(CueKind::Question, r"\?"),
            CueRule::new(CueKind::Invitation, invitations),
            CueRule::new(CueKind::RhetoricalQuestion, rhetorical),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_tables_cover_every_hook_kind() {
        for locale in [Locale::Pt, Locale::En] {
            let kinds: Vec<CueKind> = locale.hook_rules().iter().map(|r| r.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    CueKind::Question,
                    CueKind::Statistic,
                    CueKind::NarrativeOpener,
                    CueKind::Incident,
                    CueKind::Discovery,
                ]
            );
            assert!(locale.cta_rules().iter().all(|r| r.enabled));
        }
    }

    #[test]
    fn test_cue_rule_enabled_defaults_to_true() {
        let rule: CueRule = toml::from_str(
            r#"
            kind = "invitation"
            pattern = "\\bresponda\\b"
            "#,
        )
        .unwrap();
        assert_eq!(rule.kind, CueKind::Invitation);
        assert!(rule.enabled);
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::Pt.to_string(), "pt");
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::default(), Locale::Pt);
    }
}
