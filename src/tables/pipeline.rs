//! End-to-end processing API
//!
//! This module provides the single entry point the CLI uses: parse,
//! validate, sort, then render in one of the supported output formats.
//!
//! A parse failure and a successfully-parsed-but-empty result are
//! distinct errors internally, but both count as invalid input at the
//! boundary: the pipeline halts before sorting and the caller shows one
//! uniform message. The sorter itself never fails.

use std::fmt;

use tracing::debug;

use crate::tables::error::ParseError;
use crate::tables::model::TableSet;
use crate::tables::{parser, render, sorter};

/// Supported output formats for the processed table set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `[e1, e2, ...]` line per table
    Text,
    /// The sorted set as a JSON array of arrays
    Json,
    /// The sorted set as a YAML sequence of sequences
    Yaml,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Result<Self, PipelineError> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(PipelineError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors that can occur while processing input end to end
#[derive(Debug)]
pub enum PipelineError {
    /// Structural parse failure
    Parse(ParseError),
    /// Well-formed input that produced no tables
    InvalidInput,
    /// Unrecognized output format name
    UnknownFormat(String),
    /// Serialization of the sorted set failed
    Serialize(String),
}

impl PipelineError {
    /// Whether this error is the documented invalid-input case, which
    /// callers report with one uniform message. Malformed syntax and
    /// well-formed-but-empty input are deliberately not distinguished
    /// for the end user.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::Parse(_) | PipelineError::InvalidInput)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Parse(inner) => write!(f, "Parse error: {}", inner),
            PipelineError::InvalidInput => write!(f, "Input produced no tables"),
            PipelineError::UnknownFormat(name) => {
                write!(f, "Unknown output format '{}' (expected text, json or yaml)", name)
            }
            PipelineError::Serialize(message) => write!(f, "Serialization error: {}", message),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Parse(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<ParseError> for PipelineError {
    fn from(error: ParseError) -> Self {
        PipelineError::Parse(error)
    }
}

/// Parse and sort, failing on structurally bad or empty input.
pub fn sorted_tables(input: &str) -> Result<TableSet, PipelineError> {
    let tables = parser::parse(input)?;
    if tables.is_empty() {
        return Err(PipelineError::InvalidInput);
    }
    debug!(tables = tables.len(), "sorting parsed tables");
    Ok(sorter::sort(&tables))
}

/// Run the full pipeline and produce the output text.
pub fn process(input: &str, format: OutputFormat) -> Result<String, PipelineError> {
    let sorted = sorted_tables(input)?;
    match format {
        OutputFormat::Text => Ok(render::table_set(&sorted)),
        OutputFormat::Json => {
            serde_json::to_string(&sorted).map_err(|e| PipelineError::Serialize(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&sorted).map_err(|e| PipelineError::Serialize(e.to_string()))
        }
    }
}
