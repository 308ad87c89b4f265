//! artlint - editorial-template and content-quality linter for Markdown articles
//!
//! Scores each article on structural depth against a required-section
//! catalog, engagement (opening hook, closing call to action, line
//! readability), paragraph formatting and image usage, then combines the
//! four into a final 0-100 score.
//!
//! ```no_run
//! use artlint::config::LintConfig;
//! use artlint::lint::Linter;
//! use std::path::Path;
//!
//! let linter = Linter::new(&LintConfig::default())?;
//! let summary = linter.run(Path::new("artigos"))?;
//! println!("average: {:.1}", summary.average_score);
//! # Ok::<(), artlint::lint::LintError>(())
//! ```

pub mod config;
pub mod lint;
pub mod logging;
pub mod output;
pub mod ui;
