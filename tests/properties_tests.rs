use pepscan::error::PeptideError;
use pepscan::properties;

#[test]
fn test_amino_acid_count() {
    assert_eq!(properties::amino_acid_count("MKVLAA"), 6);
    assert_eq!(properties::amino_acid_count(""), 0);

    // no alphabet checking
    assert_eq!(properties::amino_acid_count("MK V-L*"), 7);
}

#[test]
fn test_hydropathy_scores() {
    // M=77, K=75, V=86, L=76, A=65
    assert_eq!(
        properties::hydropathy_scores("MKVLAA"),
        vec![7, 5, 6, 6, 5, 5]
    );

    // empty sequence
    assert!(properties::hydropathy_scores("").is_empty());
}

#[test]
fn test_hydropathy_scores_follow_code_points() {
    let sequence = "ACDEFGHIKLMNPQRSTVWY xλ*";
    let scores = properties::hydropathy_scores(sequence);

    assert_eq!(scores.len(), sequence.chars().count());
    for (residue, score) in sequence.chars().zip(scores) {
        assert_eq!(score, residue as u32 % 10);
        assert!(score < 10);
    }
}

#[test]
fn test_instability_index() {
    // (77 + 75 + 86 + 76 + 65 + 65) / 6
    let index = properties::instability_index("MKVLAA").unwrap();
    assert!((index - 74.0).abs() < 1e-9);

    // (65 + 67) / 2
    let index = properties::instability_index("AC").unwrap();
    assert!((index - 66.0).abs() < 1e-9);

    let index = properties::instability_index("ABD").unwrap();
    assert!((index - 199.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_instability_index_counts_characters() {
    // 'λ' is two bytes but a single residue
    let index = properties::instability_index("λA").unwrap();
    assert!((index - (955.0 + 65.0) / 2.0).abs() < 1e-9);
}

#[test]
fn test_instability_index_empty_sequence() {
    let result = properties::instability_index("");
    assert!(matches!(result, Err(PeptideError::InvalidInput(_))));
}
