// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::collections::HashMap;

use itertools::Itertools;

use crate::errors::DnascopeError;

/// A single DNA sequence plus read-only queries and transforms over it.
///
/// The constructor upper-cases its argument and nothing else: whitespace and
/// arbitrary characters are kept as-is, and only flagged by the explicit
/// validation methods. The stored sequence never changes after construction;
/// every transform returns a new `String`.
#[derive(Debug, Clone)]
pub struct SequenceAnalyzer {
    sequence: String,
}

impl SequenceAnalyzer {
    pub fn new(raw: &str) -> Self {
        SequenceAnalyzer {
            sequence: raw.to_uppercase(),
        }
    }

    /// The stored (upper-cased) sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of characters in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Counts of A, T, G, C, in that fixed order. Other characters are ignored.
    pub fn count_nucleotides(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for c in self.sequence.chars() {
            match c {
                'A' => counts[0] += 1,
                'T' => counts[1] += 1,
                'G' => counts[2] += 1,
                'C' => counts[3] += 1,
                _ => {}
            }
        }
        counts
    }

    /// Number of characters outside A/T/G/C/N.
    pub fn count_ambiguous(&self) -> usize {
        self.sequence
            .chars()
            .filter(|c| !matches!(c, 'A' | 'T' | 'G' | 'C' | 'N'))
            .count()
    }

    /// True iff every character is one of A/T/G/C/N.
    pub fn is_valid(&self) -> bool {
        self.sequence
            .chars()
            .all(|c| matches!(c, 'A' | 'T' | 'G' | 'C' | 'N'))
    }

    /// A copy of the sequence with every character outside A/T/G/C/N replaced by N.
    pub fn replace_invalid_with_n(&self) -> String {
        self.sequence
            .chars()
            .map(|c| match c {
                'A' | 'T' | 'G' | 'C' | 'N' => c,
                _ => 'N',
            })
            .collect()
    }

    pub fn count_purines(&self) -> usize {
        self.sequence.chars().filter(|c| matches!(c, 'A' | 'G')).count()
    }

    pub fn count_pyrimidines(&self) -> usize {
        self.sequence.chars().filter(|c| matches!(c, 'T' | 'C')).count()
    }

    /// The complement: A<->T, G<->C. Characters outside A/T/G/C contribute
    /// nothing to the output (so the result can be shorter than the input).
    /// `normalize_to_atgcn` is the lossless alternative.
    pub fn complement(&self) -> String {
        self.sequence
            .chars()
            .filter_map(|c| match c {
                'A' => Some('T'),
                'T' => Some('A'),
                'G' => Some('C'),
                'C' => Some('G'),
                _ => None,
            })
            .collect()
    }

    pub fn reverse(&self) -> String {
        self.sequence.chars().rev().collect()
    }

    /// Complement, then reverse. Non-ATGC characters are dropped, as in
    /// `complement`.
    pub fn reverse_complement(&self) -> String {
        self.complement().chars().rev().collect()
    }

    /// A copy of the sequence restricted to the A/T/G/C/N alphabet: A/T/G/C
    /// are kept, everything else (N included) becomes N.
    pub fn normalize_to_atgcn(&self) -> String {
        self.sequence
            .chars()
            .map(|c| match c {
                'A' | 'T' | 'G' | 'C' => c,
                _ => 'N',
            })
            .collect()
    }

    /// Per-character substitution: characters present as keys in `mapping`
    /// are replaced by their value, all others pass through unchanged.
    pub fn map_characters(&self, mapping: &HashMap<char, char>) -> String {
        self.sequence
            .chars()
            .map(|c| *mapping.get(&c).unwrap_or(&c))
            .collect()
    }

    /// G+C percentage over the whole sequence (0-100); 0 when empty.
    pub fn gc_content(&self) -> f64 {
        let len = self.len();
        if len == 0 {
            return 0.0;
        }
        let gc = self.sequence.chars().filter(|c| matches!(c, 'G' | 'C')).count();
        gc as f64 / len as f64 * 100.0
    }

    /// A+T percentage over the whole sequence (0-100); 0 when empty.
    pub fn at_content(&self) -> f64 {
        let len = self.len();
        if len == 0 {
            return 0.0;
        }
        let at = self.sequence.chars().filter(|c| matches!(c, 'A' | 'T')).count();
        at as f64 / len as f64 * 100.0
    }

    /// G+C percentage over the half-open character range [start, end).
    /// Bounds are clamped to the sequence (end to the length, start to end),
    /// so out-of-range arguments yield an empty region and 0.0 rather than
    /// an error.
    pub fn gc_content_region(&self, start: usize, end: usize) -> f64 {
        let seq: Vec<char> = self.sequence.chars().collect();
        let end = end.min(seq.len());
        let start = start.min(end);
        let region = &seq[start..end];
        if region.is_empty() {
            return 0.0;
        }
        let gc = region.iter().filter(|c| matches!(c, 'G' | 'C')).count();
        gc as f64 / region.len() as f64 * 100.0
    }

    /// True iff the sequence equals its own reverse complement. Because
    /// `complement` drops non-ATGC characters, a sequence containing any
    /// such character can only compare equal if the drops happen to cancel
    /// out; the empty sequence is a palindrome.
    pub fn is_palindrome(&self) -> bool {
        self.sequence == self.reverse_complement()
    }

    /// Counts per base, with exactly the keys A, T, G, C, N (each present
    /// even when zero). Characters outside that set are not counted at all.
    pub fn nucleotide_frequencies(&self) -> HashMap<char, usize> {
        let mut freq = HashMap::from([('A', 0), ('T', 0), ('G', 0), ('C', 0), ('N', 0)]);
        for c in self.sequence.chars() {
            if let Some(n) = freq.get_mut(&c) {
                *n += 1;
            }
        }
        freq
    }

    /// Same five keys as `nucleotide_frequencies`, as percentages of the
    /// total length; all zero for the empty sequence.
    pub fn percentage_report(&self) -> HashMap<char, f64> {
        let total = self.len();
        self.nucleotide_frequencies()
            .into_iter()
            .map(|(base, count)| {
                let pct = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                (base, pct)
            })
            .collect()
    }

    /// Character index of the first occurrence of `motif` (upper-cased
    /// before comparison), or None when absent or when the sequence is
    /// shorter than the motif. The empty motif matches at index 0.
    pub fn find_first(&self, motif: &str) -> Option<usize> {
        let motif: Vec<char> = motif.to_uppercase().chars().collect();
        let seq: Vec<char> = self.sequence.chars().collect();
        if motif.len() > seq.len() {
            return None;
        }
        (0..=seq.len() - motif.len()).find(|&i| seq[i..i + motif.len()] == motif[..])
    }

    /// All start indices of `motif` (upper-cased), ascending, overlaps
    /// included. The empty motif matches at every index 0..=len.
    pub fn find_all(&self, motif: &str) -> Vec<usize> {
        let motif: Vec<char> = motif.to_uppercase().chars().collect();
        let seq: Vec<char> = self.sequence.chars().collect();
        if motif.len() > seq.len() {
            return Vec::new();
        }
        (0..=seq.len() - motif.len())
            .filter(|&i| seq[i..i + motif.len()] == motif[..])
            .collect()
    }

    /// Occurrence count of every distinct k-mer (sliding window, stride 1,
    /// overlaps counted). Empty map when k exceeds the sequence length;
    /// k == 0 is rejected.
    pub fn kmer_counts(&self, k: usize) -> Result<HashMap<String, usize>, DnascopeError> {
        if k == 0 {
            return Err(DnascopeError::InvalidArgument(String::from(
                "k-mer size must be at least 1",
            )));
        }
        let seq: Vec<char> = self.sequence.chars().collect();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for window in seq.windows(k) {
            *counts.entry(window.iter().collect()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// True iff some character equals its successor; false for lengths 0 and 1.
    pub fn has_adjacent_repeat(&self) -> bool {
        self.sequence.chars().tuple_windows().any(|(a, b)| a == b)
    }

    /// Length of the longest run of one repeated character; 0 when empty, 1
    /// when no adjacent pair matches.
    pub fn longest_run(&self) -> usize {
        let runs = self.sequence.chars().chunk_by(|&c| c);
        runs.into_iter()
            .map(|(_, run)| run.count())
            .max()
            .unwrap_or(0)
    }

    /// DNA -> RNA: T becomes U; A, G, C and N pass through; anything else
    /// becomes N.
    pub fn transcribe(&self) -> String {
        self.sequence
            .chars()
            .map(|c| match c {
                'T' => 'U',
                'A' | 'G' | 'C' | 'N' => c,
                _ => 'N',
            })
            .collect()
    }
}
