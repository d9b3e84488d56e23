// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use serde::Serialize;

use crate::analyzer::SequenceAnalyzer;

pub const REPORT_VERSION: u32 = 1;

// Bases always appear in this order in reports, whatever the map iteration
// order happens to be.
const REPORT_BASES: [char; 5] = ['A', 'T', 'G', 'C', 'N'];

#[derive(Debug, Serialize)]
pub struct BaseStats {
    pub base: char,
    pub count: usize,
    pub percent: f64,
}

/// Composition summary of one sequence, serializable as JSON.
#[derive(Debug, Serialize)]
pub struct CompositionReport {
    pub version: u32,
    pub length: usize,
    pub valid: bool,
    pub ambiguous: usize,
    pub purines: usize,
    pub pyrimidines: usize,
    pub gc_content: f64,
    pub at_content: f64,
    pub bases: Vec<BaseStats>,
    pub longest_run: usize,
    pub has_adjacent_repeat: bool,
}

impl CompositionReport {
    pub fn from_analyzer(analyzer: &SequenceAnalyzer) -> Self {
        let freq = analyzer.nucleotide_frequencies();
        let pct = analyzer.percentage_report();
        let bases = REPORT_BASES
            .iter()
            .map(|&base| BaseStats {
                base,
                count: freq[&base],
                percent: pct[&base],
            })
            .collect();
        CompositionReport {
            version: REPORT_VERSION,
            length: analyzer.len(),
            valid: analyzer.is_valid(),
            ambiguous: analyzer.count_ambiguous(),
            purines: analyzer.count_purines(),
            pyrimidines: analyzer.count_pyrimidines(),
            gc_content: analyzer.gc_content(),
            at_content: analyzer.at_content(),
            bases,
            longest_run: analyzer.longest_run(),
            has_adjacent_repeat: analyzer.has_adjacent_repeat(),
        }
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Two-column, fixed-width text rendering of a report. No trailing newline.
pub fn format_report(report: &CompositionReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{:<18} {}", "sequence length", report.length));
    lines.push(format!("{:<18} {}", "valid (ATGCN)", yes_no(report.valid)));
    lines.push(format!("{:<18} {}", "ambiguous bases", report.ambiguous));
    lines.push(format!("{:<18} {}", "purines (A+G)", report.purines));
    lines.push(format!("{:<18} {}", "pyrimidines (T+C)", report.pyrimidines));
    lines.push(format!("{:<18} {:.1}%", "GC content", report.gc_content));
    lines.push(format!("{:<18} {:.1}%", "AT content", report.at_content));
    for b in &report.bases {
        lines.push(format!("{:<18} {:<6} {:.1}%", b.base, b.count, b.percent));
    }
    lines.push(format!("{:<18} {}", "longest run", report.longest_run));
    lines.push(format!(
        "{:<18} {}",
        "adjacent repeat",
        yes_no(report.has_adjacent_repeat)
    ));
    lines.join("\n")
}
