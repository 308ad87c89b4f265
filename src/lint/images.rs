//! Image reference extraction and cover grading.

use regex::Regex;
use serde::Serialize;
use std::path::Path;

const NO_IMAGES_SCORE: f64 = 40.0;
const COVER_SCORE: f64 = 90.0;
const COVER_ON_DISK_SCORE: f64 = 100.0;
const NO_COVER_SCORE: f64 = 60.0;
const LOCAL_IMAGE_BONUS: f64 = 10.0;

/// Filesystem existence check for image references.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// One image referenced by the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// Path as written in the document, trimmed
    pub path: String,
    /// File name contains a cover keyword
    pub is_cover: bool,
    /// Resolves to an existing file relative to the document
    pub exists: bool,
}

impl ImageRef {
    /// Whether the reference points outside the local filesystem.
    pub fn is_remote(&self) -> bool {
        let lower = self.path.to_lowercase();
        lower.starts_with("http://")
            || lower.starts_with("https://")
            || lower.starts_with("data:")
            || lower.starts_with("//")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAssessment {
    pub score: f64,
    /// Deduplicated references in document order
    pub images: Vec<ImageRef>,
    pub has_cover: bool,
    /// The first reference is the cover
    pub cover_first: bool,
    pub warnings: Vec<String>,
}

/// Extracts `![alt](path)` and `<img src="path">` references and grades the cover.
#[derive(Debug)]
pub struct ImageScorer {
    markdown_re: Regex,
    html_re: Regex,
    cover_keywords: Vec<String>,
}

impl ImageScorer {
    pub fn new(cover_keywords: &[String]) -> Self {
        Self {
            markdown_re: Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").expect("Invalid image regex"),
            html_re: Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#)
                .expect("Invalid img tag regex"),
            cover_keywords: cover_keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Image paths in document order, trimmed and deduplicated.
    pub fn extract_images(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, &str)> = self
            .markdown_re
            .captures_iter(text)
            .chain(self.html_re.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .map(|m| (m.start(), m.as_str().trim()))
            .collect();
        found.sort_by_key(|(start, _)| *start);

        let mut images: Vec<String> = Vec::new();
        for (_, path) in found {
            if !path.is_empty() && !images.iter().any(|seen| seen == path) {
                images.push(path.to_string());
            }
        }
        images
    }

    /// Whether the file name of a reference marks it as the cover.
    pub fn is_cover(&self, path: &str) -> bool {
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.cover_keywords.iter().any(|k| name.contains(k.as_str()))
    }

    /// Grade the images of a document located in `base_dir`.
    pub fn assess(&self, text: &str, base_dir: &Path, probe: &dyn PathProbe) -> ImageAssessment {
        let images: Vec<ImageRef> = self
            .extract_images(text)
            .into_iter()
            .map(|path| ImageRef {
                is_cover: self.is_cover(&path),
                exists: probe.exists(&base_dir.join(&path)),
                path,
            })
            .collect();

        let mut warnings = Vec::new();

        if images.is_empty() {
            warnings.push(format!(
                "No images found in the article. Add at least a cover image (e.g. '{}.png').",
                self.cover_keywords.first().map(String::as_str).unwrap_or("cover")
            ));
            return ImageAssessment {
                score: NO_IMAGES_SCORE,
                images,
                has_cover: false,
                cover_first: false,
                warnings,
            };
        }

        let has_cover = images.iter().any(|img| img.is_cover);
        let cover_first = images.first().is_some_and(|img| img.is_cover);
        let any_on_disk = images.iter().any(|img| img.exists);

        let score = if has_cover {
            if !cover_first {
                if let Some(cover) = images.iter().find(|img| img.is_cover) {
                    warnings.push(format!(
                        "Cover image '{}' is not the first image in the article.",
                        cover.path
                    ));
                }
            }
            if any_on_disk {
                COVER_ON_DISK_SCORE
            } else {
                COVER_SCORE
            }
        } else {
            warnings.push(format!(
                "No cover image found (file name containing {}). Only the cover is mandatory.",
                self.keyword_list()
            ));
            if any_on_disk {
                NO_COVER_SCORE + LOCAL_IMAGE_BONUS
            } else {
                NO_COVER_SCORE
            }
        };

        let missing: Vec<&str> = images
            .iter()
            .filter(|img| !img.exists && !img.is_remote())
            .map(|img| img.path.as_str())
            .collect();
        if !missing.is_empty() {
            warnings.push(format!(
                "Referenced images not found on disk: {}",
                missing.join(", ")
            ));
        }

        ImageAssessment {
            score: score.min(100.0),
            images,
            has_cover,
            cover_first,
            warnings,
        }
    }

    fn keyword_list(&self) -> String {
        self.cover_keywords
            .iter()
            .map(|k| format!("'{}'", k))
            .collect::<Vec<_>>()
            .join(" or ")
    }
}
