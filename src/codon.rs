use crate::error::{PeptideError, Result};
use crate::types::CodonCount;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

const CODON_LENGTH: usize = 3;
const REPORT_HEADER: &str = "Codon Usage Report:";

/// Splits the sequence into consecutive chunks of `CODON_LENGTH` characters.
/// The last chunk is shorter when the length is not a multiple of `CODON_LENGTH`.
fn codon_chunks(sequence: &str) -> Vec<&str> {
    let mut bounds: Vec<usize> = sequence
        .char_indices()
        .map(|(idx, _)| idx)
        .step_by(CODON_LENGTH)
        .collect();
    bounds.push(sequence.len());

    bounds
        .windows(2)
        .map(|pair| &sequence[pair[0]..pair[1]])
        .collect()
}

/// Counts codon usage in the sequence.
///
/// # Arguments
/// * `sequence` - The peptide sequence, read in steps of three characters from offset 0
///
/// # Returns
/// * `CodonCount` - Occurrences of each chunk, in first-seen order. A trailing
///   chunk shorter than three characters is counted under its own key.
pub fn codon_usage(sequence: &str) -> CodonCount {
    let mut counts = CodonCount::new();
    for codon in codon_chunks(sequence) {
        counts.increment(codon);
    }
    counts
}

/// Formats codon counts as a text report.
///
/// The report starts with a `Codon Usage Report:` header line, followed by one
/// `<codon>: <count>` line per distinct codon in first-seen order.
pub fn codon_usage_report(codons: &CodonCount) -> String {
    let mut report = format!("{}\n", REPORT_HEADER);
    for (codon, count) in codons.iter() {
        report.push_str(&format!("{}: {}\n", codon, count));
    }
    report
}

/// Converts codon counts into a table.
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with one row per distinct codon:
///   - "codon": The chunk
///   - "count": Number of occurrences
///   - "frequency": Occurrences as a fraction of all chunks
///
/// # Errors
/// * Returns `PeptideError::DataError` if DataFrame creation fails
pub fn codon_table(codons: &CodonCount) -> Result<DataFrame> {
    let total = codons.total() as f64;

    let names: Vec<&str> = codons.codons().collect();
    let counts: Vec<u32> = codons.iter().map(|(_, count)| count).collect();
    let frequencies: Vec<f64> = counts.iter().map(|&count| count as f64 / total).collect();

    let df = DataFrame::new(vec![
        Column::new("codon".into(), names),
        Column::new("count".into(), counts),
        Column::new("frequency".into(), frequencies),
    ])
    .map_err(|e| PeptideError::DataError(e.to_string()))?;

    Ok(df)
}

/// Writes the codon table to a CSV or Parquet file, picked by file extension.
///
/// Missing parent directories are created.
///
/// # Errors
/// * Returns `PeptideError::InvalidParameter` for extensions other than `csv` and `parquet`
/// * Returns `PeptideError::DataError` if the table cannot be built or serialized
/// * Returns `PeptideError::Io` for file writing issues
pub fn write_codon_table(codons: &CodonCount, filename: &str) -> Result<()> {
    let path = Path::new(filename);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    if !matches!(extension.as_deref(), Some("csv") | Some("parquet")) {
        return Err(PeptideError::invalid_parameter(
            "codon-table",
            filename,
            "expected a .csv or .parquet file",
        ));
    }

    let mut df = codon_table(codons)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;

    match extension.as_deref() {
        Some("parquet") => {
            ParquetWriter::new(&mut file)
                .finish(&mut df)
                .map_err(|e| PeptideError::DataError(e.to_string()))?;
        }
        _ => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .map_err(|e| PeptideError::DataError(e.to_string()))?;
        }
    }

    Ok(())
}
