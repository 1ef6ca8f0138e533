//! Project plan export.
//!
//! # Responsibility
//! - Render one record as a markdown plan or pretty-printed JSON.
//! - Derive download file names for exported plans.
//!
//! # Invariants
//! - Markdown section headings and their order are stable output contract.
//! - JSON output uses 2-space indentation and record field order, and
//!   deserializes back to an equal record.

use crate::model::project::ProjectRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const MISSING_DOMAIN_LABEL: &str = "N/A";
const ATTRIBUTION_LINE: &str = "*Generated by AI-Powered Project Generator*";

pub type ExportResult<T> = Result<T, ExportError>;

/// Export failure.
#[derive(Debug)]
pub enum ExportError {
    /// Format string is neither `markdown` nor `json`.
    UnsupportedFormat(String),
    Serialization(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(value) => {
                write!(f, "unsupported export format `{value}`; expected markdown|json")
            }
            Self::Serialization(err) => write!(f, "failed to serialize project plan: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedFormat(_) => None,
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Supported plan document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
}

impl ExportFormat {
    /// Stable format literal accepted by [`export_plan`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }

    /// File extension used for downloaded plans.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exports `record` in the format named by `format`.
///
/// # Errors
/// - `UnsupportedFormat` when `format` is not exactly `markdown` or `json`.
pub fn export_plan(record: &ProjectRecord, format: &str) -> ExportResult<String> {
    render_plan(record, format.parse()?)
}

/// Exports `record` in an already-validated format.
pub fn render_plan(record: &ProjectRecord, format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Markdown => Ok(render_markdown(record)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(record)?),
    }
}

/// Renders the fixed markdown plan template.
pub fn render_markdown(record: &ProjectRecord) -> String {
    let domain = record
        .domain
        .map_or(MISSING_DOMAIN_LABEL, |domain| domain.as_str());

    // Difficulty/duration lines end with two spaces: markdown hard breaks.
    format!(
        "# {title}\n\
         \n\
         ## Overview\n\
         {description}\n\
         \n\
         **Difficulty:** {difficulty}  \n\
         **Duration:** {duration}  \n\
         **Domain:** {domain}\n\
         \n\
         ## Tech Stack\n\
         {tech_stack}\n\
         \n\
         ## Skills Developed\n\
         {skills}\n\
         \n\
         ## Learning Outcomes\n\
         {learning_outcomes}\n\
         \n\
         ## Core Features\n\
         {features}\n\
         \n\
         ## Extension Ideas\n\
         {extensions}\n\
         \n\
         ---\n\
         {ATTRIBUTION_LINE}\n",
        title = record.title,
        description = record.description,
        difficulty = record.difficulty,
        duration = record.duration,
        tech_stack = code_list(&record.tech_stack),
        skills = code_list(&record.skills),
        learning_outcomes = bullet_list(&record.learning_outcomes),
        features = bullet_list(&record.features),
        extensions = bullet_list(&record.extensions),
    )
}

/// Returns the download file name for `record`, e.g.
/// `password_strength_analyzer_&_generator_plan.md`.
///
/// The title is lowercased, whitespace runs become `_`, and path separators
/// become `-` so the name stays a single path component.
pub fn plan_file_name(record: &ProjectRecord, format: ExportFormat) -> String {
    let lowered = record.title.trim().to_lowercase();
    let slug = WHITESPACE_RE
        .replace_all(&lowered, "_")
        .replace(['/', '\\'], "-");
    format!("{slug}_plan.{}", format.extension())
}

fn code_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("`{item}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
