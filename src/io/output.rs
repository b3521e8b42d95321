//! Turning a [`Document`] into text, and putting that text somewhere.
//!
//! Rendering and writing are separate steps so that the live preview and the
//! final write produce byte-identical text.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::DocumentFormat;
use crate::materialize::Document;

/// Where rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    /// `-` names stdout, anything else a file path.
    pub fn parse(raw: &str) -> Self {
        if raw == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }

    fn write_line(&self, text: &str) -> io::Result<()> {
        let line = terminated(text);
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(line.as_bytes())?;
                stdout.flush()
            }
            Self::File(path) => fs::write(path, line.as_bytes()),
        }
    }
}

impl fmt::Display for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Render `document` as `format` text. Pretty JSON indents by two spaces;
/// key order is always the document's.
pub fn render_document(
    document: &Document,
    format: DocumentFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        DocumentFormat::Json if pretty => {
            serde_json::to_string_pretty(document).context("failed to serialize JSON")
        }
        DocumentFormat::Json => serde_json::to_string(document).context("failed to serialize JSON"),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(document).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml if pretty => {
            toml::to_string_pretty(document).context("failed to serialize TOML")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::to_string(document).context("failed to serialize TOML"),
    }
}

/// Write already rendered `text` to each destination, in order, ending it
/// with exactly one newline. Stops at the first failure.
pub fn emit(text: &str, destinations: &[OutputDestination]) -> Result<()> {
    for destination in destinations {
        destination
            .write_line(text)
            .with_context(|| format!("failed to write to {destination}"))?;
    }
    Ok(())
}

// YAML and TOML already end in a newline; JSON does not.
fn terminated(text: &str) -> String {
    let mut line = text.trim_end_matches('\n').to_owned();
    line.push('\n');
    line
}
