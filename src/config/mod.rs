//! Configuration for artlint.
//!
//! Holds the required-section catalog, the engagement cue tables and the
//! numeric thresholds, loaded from TOML files and environment variables.

pub mod catalog;
pub mod cues;
pub mod settings;

pub use catalog::{RequiredSectionSpec, SectionCatalog};
pub use cues::{CueKind, CueRule, Locale};
pub use settings::{
    ConfigError, GateConfig, ImageConfig, LintConfig, Thresholds, DEFAULT_CONFIG_FILE, ENV_PREFIX,
};
