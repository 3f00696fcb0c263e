use crate::error::{PeptideError, Result};
use crate::types::HydropathyScores;

/// Counts the residues (characters) of a peptide sequence.
///
/// No alphabet checking is done, so whitespace and punctuation count too.
pub fn amino_acid_count(sequence: &str) -> usize {
    sequence.chars().count()
}

/// Calculates a hydropathy score for each residue of the sequence.
///
/// The score is the residue's code point modulo 10. This is a placeholder
/// metric over character codes, not a biochemical hydropathy scale.
///
/// # Arguments
/// * `sequence` - The peptide sequence
///
/// # Returns
/// * `HydropathyScores` - One score in `0..10` per character, in sequence order.
///   Empty for an empty sequence.
pub fn hydropathy_scores(sequence: &str) -> HydropathyScores {
    sequence.chars().map(|residue| residue as u32 % 10).collect()
}

/// Calculates the instability index of the sequence.
///
/// The index is the mean code point of the residues.
///
/// # Arguments
/// * `sequence` - The peptide sequence
///
/// # Returns
/// * `Result<f64>` - Sum of the code points divided by the number of residues
///
/// # Errors
/// * Returns `PeptideError::InvalidInput` if the sequence is empty
pub fn instability_index(sequence: &str) -> Result<f64> {
    let (sum, len) = sequence
        .chars()
        .fold((0u64, 0usize), |(sum, len), residue| {
            (sum + residue as u64, len + 1)
        });

    if len == 0 {
        return Err(PeptideError::invalid_input(
            "cannot compute the instability index of an empty sequence",
        ));
    }

    Ok(sum as f64 / len as f64)
}
