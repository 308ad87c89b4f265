//! Report serializers for lint runs.
//!
//! JSON for programmatic consumption, Markdown for human-readable
//! documents. Terminal rendering lives in [`crate::ui`].

pub mod json;
pub mod markdown;

pub use json::{JsonOutputError, JsonReportWriter};
pub use markdown::{MarkdownOutputError, MarkdownReportWriter};
