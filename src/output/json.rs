//! JSON output for lint runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::lint::RunSummary;

/// Errors that can occur during JSON output operations.
#[derive(Error, Debug)]
pub enum JsonOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for JSON output operations.
pub type JsonOutputResult<T> = Result<T, JsonOutputError>;

/// Writer for JSON-formatted run summaries.
pub struct JsonReportWriter;

impl JsonReportWriter {
    /// Write a run summary to a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use artlint::config::LintConfig;
    /// use artlint::lint::Linter;
    /// use artlint::output::JsonReportWriter;
    /// use std::path::Path;
    ///
    /// let linter = Linter::new(&LintConfig::default())?;
    /// let summary = linter.run(Path::new("artigos"))?;
    /// JsonReportWriter::write_to_file(&summary, "report.json")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to_file<P: AsRef<Path>>(summary: &RunSummary, path: P) -> JsonOutputResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, summary)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize a run summary to a pretty JSON string.
    pub fn to_json_string(summary: &RunSummary) -> JsonOutputResult<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}
