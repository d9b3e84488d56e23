// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::io::Read;

use clap::Parser;
use itertools::Itertools;
use log::{debug, info};

use crate::analyzer::SequenceAnalyzer;
use crate::errors::DnascopeError;
use crate::report::{format_report, CompositionReport};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// DNA sequence (read from stdin if absent)
    sequence: Option<String>,

    /// Emit the composition report as JSON
    #[arg(short, long)]
    json: bool,

    /// Print all 0-based match positions of a motif
    #[arg(short, long)]
    motif: Option<String>,

    /// Print the k-mer table for the given k
    #[arg(short, long)]
    kmer: Option<usize>,

    /// Print the RNA transcript
    #[arg(short, long)]
    rna: bool,

    /// Print the reverse complement
    #[arg(long)]
    revcomp: bool,
}

fn read_sequence(cli_arg: Option<String>) -> Result<String, DnascopeError> {
    match cli_arg {
        Some(s) => Ok(s),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            // Trailing newline comes from the shell, not the sequence. The
            // analyzer itself never trims.
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

pub fn run() -> Result<(), DnascopeError> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = read_sequence(cli.sequence)?;
    info!("analyzing {} characters", raw.chars().count());
    let analyzer = SequenceAnalyzer::new(&raw);

    if let Some(motif) = &cli.motif {
        let positions = analyzer.find_all(motif);
        debug!("{} occurrence(s) of '{}'", positions.len(), motif);
        println!("{}", positions.iter().join(" "));
        return Ok(());
    }

    if let Some(k) = cli.kmer {
        let counts = analyzer.kmer_counts(k)?;
        // Lexicographic order, for stable output
        for (kmer, n) in counts.into_iter().sorted() {
            println!("{}\t{}", kmer, n);
        }
        return Ok(());
    }

    if cli.rna {
        println!("{}", analyzer.transcribe());
        return Ok(());
    }

    if cli.revcomp {
        println!("{}", analyzer.reverse_complement());
        return Ok(());
    }

    let report = CompositionReport::from_analyzer(&analyzer);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}
