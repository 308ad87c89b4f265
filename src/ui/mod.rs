//! Terminal output for lint runs.
//!
//! 24-bit color rendering of per-article reports, the summary table and
//! the section catalog.

mod report_view;
mod theme;

pub use report_view::ReportRenderer;
pub use theme::{ScoreBand, Theme, FAIR_SCORE, GOOD_SCORE};

/// Whether colored output should be used.
///
/// Disabled by `--no-color` or a non-empty `NO_COLOR` environment variable.
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}
