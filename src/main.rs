/*
 * SLX - Spliced Leader Extraction Tool
 *
 * Copyright (c) 2025 Yumi Sims, Wellcome Sanger Institute
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, Level};

mod cli;
mod config;
mod error;
mod extend;
mod fasta;
mod kmers;
mod report;
mod search;
mod select;
mod trim;
#[cfg(test)]
mod fixtures;

use cli::Args;
use fasta::SequenceDict;
use search::find_common_ends;
use select::select_leader;

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.quiet { Level::Warn } else { Level::Info };
    simple_logger::init_with_level(level)?;

    let params = args.params();
    params.validate()?;
    params.log_summary();

    let sdict = SequenceDict::from_fasta(&args.fasta)
        .with_context(|| format!("Failed to load sequences from {}", args.fasta.display()))?;
    info!("Loaded {} sequences from {}", sdict.sequences.len(), args.fasta.display());
    let short = sdict.shorter_than(params.seed_len);
    if let Some(first) = short.first() {
        warn!(
            "{} sequences are shorter than the {}bp seed and cannot contribute ends (first: {})",
            short.len(),
            params.seed_len,
            first.name
        );
    }

    let seqs = sdict.views();
    let outcome = find_common_ends(&seqs, &params)?;
    info!(
        "Search stopped after {} iterations ({:?})",
        outcome.records.len(),
        outcome.stop
    );

    if let Some(table) = &args.table {
        report::save_iteration_table(&outcome.records, table)
            .with_context(|| format!("Failed to write iteration table to {}", table.display()))?;
        info!("Saved iteration table to {}", table.display());
    }

    match select_leader(&outcome.records, params.min_prop)? {
        Some(leader) => report::print_leader(&mut io::stdout().lock(), &leader)?,
        None => warn!("No common start/end with necessary occurrence found"),
    }

    Ok(())
}
