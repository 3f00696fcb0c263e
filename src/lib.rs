//! Character-code statistics, codon usage reports and bar charts for peptide sequences

pub mod codon;
pub mod error;
pub mod plot;
pub mod properties;
pub mod types;
