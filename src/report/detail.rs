//! Diagnostic report with every intermediate quantity.

use crate::data::CharacterData;
use crate::error::Result;
use crate::pipeline::CharacterScore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default file name of the detail report.
pub const DETAILS_FILE: &str = "bestchardetails.txt";

fn fmt_log(log: Option<f64>) -> String {
    log.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

/// Write the detail report.
///
/// Unrounded values are printed with their shortest exact representation so
/// the rounded summary can be checked by hand.
pub fn write_details<W: Write>(
    writer: &mut W,
    character: &CharacterData,
    score: &CharacterScore,
) -> Result<()> {
    writeln!(writer, "Bestchar program, diagnostic output\n")?;
    writeln!(writer, "{}", character.name())?;

    // Input
    for (line, taxon) in character.lines().iter().zip(character.taxa()) {
        writeln!(writer, "input line={} -> {:?}", line, taxon.states())?;
    }
    writeln!(writer, "\nnumber of taxa={}\n", score.n_taxa)?;

    // State frequencies
    writeln!(writer, "state\tcount\tsigma")?;
    for s in score.frequencies.iter() {
        writeln!(writer, "{}\t{}\t{}", s.state, s.count, s.sigma)?;
    }
    writeln!(writer, "\nnumber of states={}", score.n_states)?;
    writeln!(writer, "polymorphic taxa={}\n", score.frequencies.n_polymorphic_taxa)?;

    // Information terms with running sums
    let info = &score.information;
    let (mut intkey, mut pankhurst, mut normalized) = (0.0, 0.0, 0.0);
    for term in &info.terms {
        intkey += term.weight * term.log_two;
        if let Some(log) = term.log_states {
            pankhurst += term.weight * log;
        }
        if let Some(log) = term.log_taxa {
            normalized += term.weight * log;
        }
        writeln!(writer, "state={}", term.state)?;
        writeln!(writer, "  p={} w={}", term.proportion, term.weight)?;
        writeln!(
            writer,
            "  log2={} log_s={} log_t={}",
            term.log_two,
            fmt_log(term.log_states),
            fmt_log(term.log_taxa)
        )?;
        writeln!(
            writer,
            "  running sums: intkey={} pankhurst={} normalized={}",
            intkey, pankhurst, normalized
        )?;
    }

    writeln!(writer, "\nResults to two decimal places:")?;
    for s in info.scores() {
        let note = if s.degenerate { " (degenerate base, defined as 0)" } else { "" };
        writeln!(
            writer,
            "{}={} (sum={}){}",
            s.base.label(),
            s.rounded,
            s.weighted_log_sum,
            note
        )?;
    }

    // Pairwise comparisons
    let pw = &score.pairwise;
    writeln!(writer, "\ntotal pairs={}\n", pw.total_pairs)?;
    for pair in &pw.pairs {
        writeln!(writer, "pair {}-{}", pair.first + 1, pair.second + 1)?;
        writeln!(writer, "  union={:?}", pair.union)?;
        writeln!(writer, "  intersection={:?}", pair.intersection)?;
        writeln!(writer, "  Jaccard coefficient={}", pair.jaccard)?;
    }

    writeln!(writer, "\ntotal separable pairs={}", pw.separable_pairs)?;
    writeln!(writer, "Separation coefficient={}", pw.separation)?;
    writeln!(writer, "Jaccard similarity={}", pw.jaccard_similarity_sum)?;
    writeln!(writer, "Average pairwise Jaccard distance={}", pw.jaccard_distance)?;
    Ok(())
}

/// Write the detail report to a file.
pub fn write_details_file<P: AsRef<Path>>(
    path: P,
    character: &CharacterData,
    score: &CharacterScore,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_details(&mut writer, character, score)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::DegeneratePolicy;
    use crate::data::TaxonStateSet;
    use crate::pipeline::{score_character, Analysis};

    fn render(character: &CharacterData, score: &CharacterScore) -> String {
        let mut out = Vec::new();
        write_details(&mut out, character, score).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_details() {
        let taxa = TaxonStateSet::from_labels(vec![
            vec!["red"],
            vec!["white", "red"],
            vec!["white"],
            vec!["white"],
        ])
        .unwrap();
        let character = CharacterData::new("Petal colour", taxa);
        let score = score_character(&character).unwrap();
        let text = render(&character, &score);

        assert!(text.contains("red\t2\t1.5"));
        assert!(text.contains("white\t3\t2.5"));
        assert!(text.contains("total pairs=6"));
        assert!(text.contains("pair 3-4"));
        assert!(text.contains("total separable pairs=2"));
        assert!(text.contains("Jaccard similarity=2.5"));
        assert!(text.contains("Normalized information coefficient=0.32"));
        assert_eq!(text.matches("Jaccard coefficient=").count(), 6);
    }

    #[test]
    fn test_degenerate_base_noted() {
        let taxa = TaxonStateSet::from_labels(vec![vec!["green"], vec!["green"]]).unwrap();
        let character = CharacterData::new("Leaf colour", taxa);
        let score = Analysis::new()
            .degenerate_policy(DegeneratePolicy::Zero)
            .run(&character)
            .unwrap();
        let text = render(&character, &score);

        assert!(text.contains("log_s=undefined"));
        assert!(text.contains("degenerate base, defined as 0"));
    }
}
