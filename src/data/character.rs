//! Single-column character files.

use crate::data::{Taxon, TaxonStateSet};
use crate::error::{BestcharError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default separator between the states of a polymorphic taxon.
pub const DEFAULT_SEPARATOR: char = '/';

/// A parsed character: its name, the raw taxon lines and the taxa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterData {
    /// Character name (first line of the file).
    name: String,
    /// Taxon lines as read, without the EOL.
    lines: Vec<String>,
    /// Parsed taxa.
    taxa: TaxonStateSet,
}

impl CharacterData {
    /// Create from already-parsed parts.
    pub fn new(name: impl Into<String>, taxa: TaxonStateSet) -> Self {
        let lines = taxa.iter().map(|t| t.to_string()).collect();
        Self {
            name: name.into(),
            lines,
            taxa,
        }
    }

    /// Load a character from a file.
    ///
    /// Expected format:
    /// - First line: the character name
    /// - Subsequent lines: one taxon each, states separated by `separator`
    pub fn from_path<P: AsRef<Path>>(path: P, separator: char) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), separator)
    }

    /// Parse a character from any buffered reader.
    ///
    /// Spaces and tabs are ignored. Blank lines at the end of the input are
    /// skipped; a blank line anywhere else is an error.
    pub fn from_reader<R: BufRead>(reader: R, separator: char) -> Result<Self> {
        let mut lines = reader.lines();

        let name = lines
            .next()
            .ok_or_else(|| BestcharError::EmptyData("Empty character file".to_string()))??;

        let mut raw_lines: Vec<String> = Vec::new();
        for line in lines {
            raw_lines.push(line?);
        }
        while raw_lines.last().is_some_and(|l| l.trim().is_empty()) {
            raw_lines.pop();
        }

        let taxa = raw_lines
            .iter()
            .enumerate()
            // line 1 is the name
            .map(|(idx, line)| parse_taxon(line, separator, idx + 2))
            .collect::<Result<Vec<_>>>()?;

        if taxa.is_empty() {
            return Err(BestcharError::EmptyData(format!(
                "character '{}' has no taxa",
                name.trim()
            )));
        }

        tracing::debug!(
            character = %name.trim(),
            n_taxa = taxa.len(),
            "parsed character"
        );

        Ok(Self {
            name,
            lines: raw_lines,
            taxa: TaxonStateSet::new(taxa)?,
        })
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw taxon lines, as they appeared in the input.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Parsed taxa.
    pub fn taxa(&self) -> &TaxonStateSet {
        &self.taxa
    }

    /// Number of taxa.
    pub fn n_taxa(&self) -> usize {
        self.taxa.n_taxa()
    }
}

/// Parse one taxon line. `line_no` is 1-based and used for error messages.
pub fn parse_taxon(line: &str, separator: char, line_no: usize) -> Result<Taxon> {
    let cleaned: String = line.chars().filter(|c| *c != ' ' && *c != '\t').collect();
    if cleaned.trim().is_empty() {
        return Err(BestcharError::MalformedInput {
            line: line_no,
            reason: "blank taxon line".to_string(),
        });
    }
    Taxon::new(cleaned.trim().split(separator)).map_err(|e| match e {
        BestcharError::MalformedInput { reason, .. } => BestcharError::MalformedInput {
            line: line_no,
            reason: format!("{} in '{}'", reason, line),
        },
        other => other,
    })
}
