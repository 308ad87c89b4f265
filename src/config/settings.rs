//! Linter settings loaded from TOML with environment overrides.

use config::{Config, ConfigError as SourceError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::catalog::{RequiredSectionSpec, SectionCatalog};
use super::cues::{CueRule, Locale};

/// File name looked up in the target directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "artlint.toml";

/// Prefix for environment overrides (`ARTLINT__THRESHOLDS__CLOSING_LINES=8`).
pub const ENV_PREFIX: &str = "ARTLINT";

/// Errors that can occur when loading or validating linter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// The configuration sources could not be merged or deserialized.
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] SourceError),

    /// Inline TOML could not be parsed.
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration file path is invalid.
    #[error("invalid configuration path: {0}")]
    InvalidPath(String),

    /// A value is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// A cue pattern is not a valid regular expression.
    #[error("invalid cue pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Numeric limits used by the scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Non-blank lines at the end of the document searched for a CTA
    #[serde(default = "default_closing_lines")]
    pub closing_lines: usize,
    /// Lines longer than this (in characters) hurt readability
    #[serde(default = "default_max_line_chars")]
    pub max_line_chars: usize,
    /// Paragraphs longer than this (in characters) hurt formatting
    #[serde(default = "default_max_paragraph_chars")]
    pub max_paragraph_chars: usize,
    /// Points removed from the depth score per missing section
    #[serde(default = "default_missing_section_penalty")]
    pub missing_section_penalty: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            closing_lines: default_closing_lines(),
            max_line_chars: default_max_line_chars(),
            max_paragraph_chars: default_max_paragraph_chars(),
            missing_section_penalty: default_missing_section_penalty(),
        }
    }
}

fn default_closing_lines() -> usize {
    6
}

fn default_max_line_chars() -> usize {
    200
}

fn default_max_paragraph_chars() -> usize {
    400
}

fn default_missing_section_penalty() -> f64 {
    10.0
}

/// Cover image recognition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Substrings that mark an image file name as the cover
    #[serde(default = "default_cover_keywords")]
    pub cover_keywords: Vec<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            cover_keywords: default_cover_keywords(),
        }
    }
}

fn default_cover_keywords() -> Vec<String> {
    vec!["capa".to_string(), "cover".to_string()]
}

/// Pass/fail threshold for the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Every article must reach this final score
    #[serde(default)]
    pub min_score: Option<f64>,
}

/// Root configuration for a lint run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// Locale of the built-in cue tables
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub gate: GateConfig,
    /// Replaces the standard catalog when non-empty
    #[serde(default)]
    pub sections: Vec<RequiredSectionSpec>,
    /// Replaces the locale hook table when non-empty
    #[serde(default)]
    pub hook: Vec<CueRule>,
    /// Replaces the locale CTA table when non-empty
    #[serde(default)]
    pub cta: Vec<CueRule>,
}

impl LintConfig {
    /// Load configuration from a TOML file, with `ARTLINT__` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or
    /// holds values outside their allowed range.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use artlint::config::LintConfig;
    ///
    /// let config = LintConfig::load("config/artlint.toml")?;
    /// # Ok::<(), artlint::config::ConfigError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let path_str = path
            .to_str()
            .ok_or_else(|| ConfigError::InvalidPath(format!("{:?}", path)))?;

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path_str.to_string()));
        }

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .add_source(env_source())
            .build()?;

        let lint_config: LintConfig = config.try_deserialize()?;
        lint_config.validate()?;
        Ok(lint_config)
    }

    /// Defaults plus environment overrides only.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder().add_source(env_source()).build()?;
        let lint_config: LintConfig = config.try_deserialize()?;
        lint_config.validate()?;
        Ok(lint_config)
    }

    /// Parse configuration from a TOML string (no environment overrides).
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let lint_config: LintConfig = toml::from_str(content)?;
        lint_config.validate()?;
        Ok(lint_config)
    }

    /// Pick the configuration for a run.
    ///
    /// An explicit path wins; otherwise `artlint.toml` inside `target_dir`
    /// is used when present; otherwise defaults with environment overrides.
    pub fn resolve(explicit: Option<&Path>, target_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = Self::local_path(target_dir);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "Using directory configuration");
            return Self::load(local);
        }

        Self::from_env()
    }

    /// Path of the per-directory configuration file.
    pub fn local_path(target_dir: &Path) -> PathBuf {
        target_dir.join(DEFAULT_CONFIG_FILE)
    }

    /// The required-section catalog for this configuration.
    pub fn catalog(&self) -> SectionCatalog {
        if self.sections.is_empty() {
            SectionCatalog::standard()
        } else {
            SectionCatalog::new(self.sections.clone())
        }
    }

    /// Hook cue table: explicit override or the locale default.
    pub fn hook_rules(&self) -> Vec<CueRule> {
        if self.hook.is_empty() {
            self.locale.hook_rules()
        } else {
            self.hook.clone()
        }
    }

    /// CTA cue table: explicit override or the locale default.
    pub fn cta_rules(&self) -> Vec<CueRule> {
        if self.cta.is_empty() {
            self.locale.cta_rules()
        } else {
            self.cta.clone()
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for spec in &self.sections {
            if spec.min_words == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("sections[{}].min_words", spec.prefix),
                    reason: "must be at least 1".to_string(),
                });
            }
            if spec.prefix.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sections.prefix".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.thresholds.closing_lines == 0 {
            return Err(ConfigError::InvalidValue {
                field: "thresholds.closing_lines".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.thresholds.missing_section_penalty < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "thresholds.missing_section_penalty".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        if let Some(min) = self.gate.min_score {
            if !(0.0..=100.0).contains(&min) {
                return Err(ConfigError::InvalidValue {
                    field: "gate.min_score".to_string(),
                    reason: format!("{} is outside 0-100", min),
                });
            }
        }

        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
