//! Human-readable summary report.

use crate::data::CharacterData;
use crate::error::Result;
use crate::pipeline::CharacterScore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default file name of the summary report.
pub const SUMMARY_FILE: &str = "bestcharoutput.txt";

/// Write the summary report: the echoed input, the taxon and state counts,
/// and the five two-decimal coefficients.
pub fn write_summary<W: Write>(
    writer: &mut W,
    character: &CharacterData,
    score: &CharacterScore,
) -> Result<()> {
    writeln!(writer, "Output from the Bestchar program\n")?;
    writeln!(writer, "{}", character.name())?;
    for line in character.lines() {
        writeln!(writer, "{}", line)?;
    }

    writeln!(writer, "\nNumber of taxa={}", score.n_taxa)?;
    writeln!(writer, "\nNumber of states={}\n", score.n_states)?;

    writeln!(writer, "Results to two decimal places:")?;
    let coefficients = score.coefficients();
    for (i, (label, value)) in coefficients.iter().enumerate() {
        writeln!(writer, "{}={}", label, value)?;
        // blank line between the information and pairwise groups
        if i == 2 {
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Write the summary report to a file.
pub fn write_summary_file<P: AsRef<Path>>(
    path: P,
    character: &CharacterData,
    score: &CharacterScore,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_summary(&mut writer, character, score)?;
    writer.flush()?;
    Ok(())
}
