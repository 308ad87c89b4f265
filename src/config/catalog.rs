//! Required-section catalog for the editorial template.
//!
//! The catalog is an ordered, read-only list of section specifications.
//! It is built once per run and handed to the scorers by reference.

use serde::{Deserialize, Serialize};

/// One required section of the article template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSectionSpec {
    /// Heading prefix the real heading must start with (e.g. `## 2. Abordagem`)
    pub prefix: String,
    /// Human-readable label; not used for scoring
    #[serde(default)]
    pub description: String,
    /// Word count at which the size component saturates
    pub min_words: usize,
    /// Keywords the section is expected to mention
    #[serde(default)]
    pub checklist: Vec<String>,
}

impl RequiredSectionSpec {
    /// Create a new section spec.
    pub fn new(
        prefix: impl Into<String>,
        description: impl Into<String>,
        min_words: usize,
        checklist: &[&str],
    ) -> Self {
        Self {
            prefix: prefix.into(),
            description: description.into(),
            min_words,
            checklist: checklist.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered catalog of required sections.
///
/// Catalog order is the canonical presentation order for per-section scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCatalog {
    specs: Vec<RequiredSectionSpec>,
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl SectionCatalog {
    /// Build a catalog from an explicit list of specs.
    pub fn new(specs: Vec<RequiredSectionSpec>) -> Self {
        Self { specs }
    }

    /// The seven-section template used by default.
    pub fn standard() -> Self {
        Self::new(vec![
            RequiredSectionSpec::new(
                "## 1. Contexto e Propósito",
                "Relevância de mercado, impacto prático e por que isso importa.",
                150,
                &["relevância", "mercado", "empresa", "impacto", "problema"],
            ),
            RequiredSectionSpec::new(
                "## 2. Abordagem",
                "Visão geral da solução, fluxo macro, caso prático.",
                100,
                &["fluxo", "solução", "arquitetura", "caso", "exemplo"],
            ),
            RequiredSectionSpec::new(
                "## 3. Conceitos Fundamentais",
                "Definições claras, exemplos aplicados, mudança de mindset.",
                150,
                &["conceito", "definição", "exemplo", "mindset"],
            ),
            RequiredSectionSpec::new(
                "## 4. Mão na Massa",
                "Implementação prática, código, passo a passo.",
                300,
                &["código", "implementação", "passo", "fluxo", "endpoint"],
            ),
            RequiredSectionSpec::new(
                "## 5. Métricas, Riscos e Boas Práticas",
                "Latência, custo, confiabilidade, boas práticas de engenharia.",
                200,
                &["métrica", "latência", "custo", "risco", "prática", "alerta"],
            ),
            RequiredSectionSpec::new(
                "## 6. Evidence & Exploration",
                "Testes, logs, feedback, validação de impacto.",
                150,
                &["teste", "log", "feedback", "resultado", "experimento"],
            ),
            RequiredSectionSpec::new(
                "## 7. Reflexões Pessoais & Próximos Passos",
                "Síntese, lições aprendidas, próximos artigos ou melhorias.",
                120,
                &["aprendi", "lição", "reflexão", "próximos", "futuro"],
            ),
        ])
    }

    /// Specs in catalog order.
    pub fn specs(&self) -> &[RequiredSectionSpec] {
        &self.specs
    }

    /// Number of required sections.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequiredSectionSpec> {
        self.specs.iter()
    }
}

impl<'a> IntoIterator for &'a SectionCatalog {
    type Item = &'a RequiredSectionSpec;
    type IntoIter = std::slice::Iter<'a, RequiredSectionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
