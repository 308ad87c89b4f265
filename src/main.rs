use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use artlint::config::{LintConfig, Locale};
use artlint::lint::{LintError, Linter, RunSummary};
use artlint::logging::{init_logging, LoggingConfig};
use artlint::output::{JsonReportWriter, MarkdownReportWriter};
use artlint::ui::{self, ReportRenderer};

/// Output format for lint reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Detailed report and summary table for the terminal
    #[default]
    Text,
    /// JSON structured output
    Json,
    /// Markdown report
    Markdown,
}

/// Language of the built-in hook and call-to-action cues
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliLocale {
    /// Portuguese
    Pt,
    /// English
    En,
}

impl From<CliLocale> for Locale {
    fn from(locale: CliLocale) -> Self {
        match locale {
            CliLocale::Pt => Locale::Pt,
            CliLocale::En => Locale::En,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "artlint")]
#[command(version)]
#[command(about = "Editorial-template and content-quality linter for Markdown articles")]
struct Cli {
    /// Disable colors (also respects NO_COLOR environment variable)
    #[arg(long, global = true)]
    no_color: bool,

    /// Only print errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet", global = true)]
    verbose: u8,

    /// Configuration file (defaults to artlint.toml in the target directory)
    #[arg(long, short, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every Markdown article in a directory
    Check {
        /// Directory containing the articles
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Fail (exit code 2) when any article scores below this value
        #[arg(long, value_name = "SCORE")]
        min_score: Option<f64>,

        /// Cue language, overriding the configuration
        #[arg(long, value_enum)]
        locale: Option<CliLocale>,
    },

    /// Print the required-section catalog in effect
    Sections {
        /// Directory whose artlint.toml should be used
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// Process exit codes
mod exit_codes {
    use std::process::ExitCode;

    /// Run completed (including "no documents found")
    pub fn success() -> ExitCode {
        ExitCode::SUCCESS
    }

    /// Bad invocation, configuration or I/O failure
    pub fn invocation_error() -> ExitCode {
        ExitCode::from(1)
    }

    /// At least one article scored below the minimum
    pub fn gate_failed() -> ExitCode {
        ExitCode::from(2)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(LoggingConfig::from_flags(cli.quiet, cli.verbose));
    let use_color = ui::color_enabled(cli.no_color);

    let result = match &cli.command {
        Commands::Check {
            dir,
            format,
            output,
            min_score,
            locale,
        } => run_check(
            &cli,
            dir,
            *format,
            output.as_deref(),
            *min_score,
            *locale,
            use_color,
        ),
        Commands::Sections { dir } => run_sections(&cli, dir, use_color),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            exit_codes::invocation_error()
        }
    }
}

/// Run the check command: lint a directory and report.
fn run_check(
    cli: &Cli,
    dir: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    min_score: Option<f64>,
    locale: Option<CliLocale>,
    use_color: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if let Some(score) = min_score {
        if !(0.0..=100.0).contains(&score) {
            return Err(format!("--min-score must be between 0 and 100, got {}", score).into());
        }
    }

    let mut config = LintConfig::resolve(cli.config.as_deref(), dir)?;
    if let Some(locale) = locale {
        if !config.hook.is_empty() || !config.cta.is_empty() {
            tracing::warn!("Custom cue tables in the configuration take precedence over --locale");
        }
        config.locale = locale.into();
    }

    let linter = Linter::new(&config)?.with_gate(min_score);

    let summary = match linter.run(dir) {
        Ok(summary) => summary,
        Err(LintError::NoDocuments(path)) => {
            let notice = format!("No Markdown documents found in {}", path.display());
            if format == OutputFormat::Text {
                println!("{}", notice);
            } else if !cli.quiet {
                eprintln!("{}", notice);
            }
            return Ok(exit_codes::success());
        }
        Err(e) => return Err(e.into()),
    };

    match (format, output) {
        (OutputFormat::Json, Some(path)) => JsonReportWriter::write_to_file(&summary, path)?,
        (OutputFormat::Markdown, Some(path)) => {
            MarkdownReportWriter::write_to_file(&summary, path)?
        }
        _ => {
            let content = render(&summary, format, use_color && output.is_none())?;
            write_output(output, &content)?;
        }
    }

    if let Some(path) = output {
        if !cli.quiet {
            eprintln!("Report written to {}", path.display());
        }
    }

    if summary.passed() {
        Ok(exit_codes::success())
    } else {
        if let Some(gate) = &summary.gate {
            tracing::warn!(
                failing = gate.failing.len(),
                min_score = gate.min_score,
                "Quality gate failed"
            );
        }
        Ok(exit_codes::gate_failed())
    }
}

fn render(
    summary: &RunSummary,
    format: OutputFormat,
    use_color: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let content = match format {
        OutputFormat::Text => ReportRenderer::new().with_color(use_color).render(summary),
        OutputFormat::Json => {
            let mut json = JsonReportWriter::to_json_string(summary)?;
            json.push('\n');
            json
        }
        OutputFormat::Markdown => MarkdownReportWriter::to_markdown_string(summary),
    };
    Ok(content)
}

/// Run the sections command: print the active catalog.
fn run_sections(
    cli: &Cli,
    dir: &Path,
    use_color: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = LintConfig::resolve(cli.config.as_deref(), dir)?;
    let renderer = ReportRenderer::new().with_color(use_color);
    print!("{}", renderer.render_catalog(&config.catalog()));
    Ok(exit_codes::success())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    use std::io::Write;
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
