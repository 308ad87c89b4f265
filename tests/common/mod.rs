//! Article fixtures shared by the integration tests.

#![allow(dead_code)]

use artlint::config::SectionCatalog;
use std::fs;
use std::path::{Path, PathBuf};

/// One 179-character paragraph of 30 words.
pub fn filler_paragraph() -> String {
    vec!["texto"; 30].join(" ")
}

/// Body for a required section: enough filler paragraphs to reach the
/// word minimum and a bullet listing every checklist keyword.
pub fn section_body(min_words: usize, checklist: &[String]) -> String {
    let mut paragraphs: Vec<String> = (0..min_words.div_ceil(30))
        .map(|_| filler_paragraph())
        .collect();
    paragraphs.push(format!("- {}", checklist.join(", ")));
    paragraphs.join("\n\n")
}

/// An article that scores 100 on every component when `capa.png` exists
/// next to it.
pub fn complete_article() -> String {
    complete_article_without(&[])
}

/// The complete article with the sections at the given catalog indexes left out.
pub fn complete_article_without(skip: &[usize]) -> String {
    let mut text = String::from("# Cache distribuído na prática\n\n");
    text.push_str("![Capa](capa.png)\n\n");
    text.push_str("Você já passou por um bug de cache em produção?\n\n");

    for (idx, spec) in SectionCatalog::standard().iter().enumerate() {
        if skip.contains(&idx) {
            continue;
        }
        text.push_str(&format!(
            "{}\n\n{}\n\n",
            spec.prefix,
            section_body(spec.min_words, &spec.checklist)
        ));
    }

    text.push_str("Comente abaixo: o que você acha?\n");
    text
}

/// Write a document into `dir`.
pub fn write_article(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write article");
    path
}

/// Create a placeholder cover image file in `dir`.
pub fn write_cover(dir: &Path) {
    fs::write(dir.join("capa.png"), b"\x89PNG").expect("Failed to write cover");
}
