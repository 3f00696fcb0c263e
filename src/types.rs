use std::collections::HashMap;

/// Per-residue hydropathy scores, one per character of the input sequence
pub type HydropathyScores = Vec<u32>;

/// Occurrence counts of fixed-size chunks ("codons") of a sequence.
///
/// Iteration follows first-seen order: a chunk keeps the position at which it
/// was first counted, no matter how often it reappears later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodonCount {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl CodonCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `codon`, appending it if unseen
    pub fn increment(&mut self, codon: &str) {
        match self.index.get(codon) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(codon.to_string(), self.entries.len());
                self.entries.push((codon.to_string(), 1));
            }
        }
    }

    pub fn get(&self, codon: &str) -> Option<u32> {
        self.index.get(codon).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct codons
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of chunks scanned
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries
            .iter()
            .map(|(codon, count)| (codon.as_str(), *count))
    }

    pub fn codons(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(codon, _)| codon.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_keeps_first_seen_order() {
        let mut counts = CodonCount::new();
        for codon in ["GGG", "AAA", "GGG", "CC"] {
            counts.increment(codon);
        }

        let collected: Vec<(&str, u32)> = counts.iter().collect();
        assert_eq!(collected, vec![("GGG", 2), ("AAA", 1), ("CC", 1)]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("AAA"), Some(1));
        assert_eq!(counts.get("TTT"), None);
    }

    #[test]
    fn test_empty_counts() {
        let counts = CodonCount::new();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.codons().count(), 0);
    }
}
