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

use std::path::PathBuf;

use clap::Parser;

use crate::config::{SearchParams, MAX_ITER, MAX_SEARCH_LEN, MIN_PROP, SEARCH_PROP, SEED_LEN};

/// Identify spliced leader sequences from an assembled transcriptome
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(value_name = "FASTA", help = "Transcriptome assembly in FASTA format")]
    pub fasta: PathBuf,

    #[arg(
        short = 'k',
        long = "seed-len",
        value_name = "BP",
        help = "Seed k-mer length",
        default_value_t = SEED_LEN
    )]
    pub seed_len: usize,

    #[arg(
        short = 'm',
        long = "max-len",
        value_name = "BP",
        help = "Maximum length a seed is expanded to",
        default_value_t = MAX_SEARCH_LEN
    )]
    pub max_search_len: usize,

    #[arg(
        short = 's',
        long = "search-prop",
        value_name = "PROP",
        help = "Support each one-base expansion must keep",
        default_value_t = SEARCH_PROP
    )]
    pub search_prop: f64,

    #[arg(
        short = 'i',
        long = "max-iter",
        value_name = "N",
        help = "Maximum number of search iterations",
        default_value_t = MAX_ITER
    )]
    pub max_iter: usize,

    #[arg(
        short = 'p',
        long = "min-prop",
        value_name = "PROP",
        help = "Only accept ends found in at least this proportion of sequences",
        default_value_t = MIN_PROP
    )]
    pub min_prop: f64,

    #[arg(
        short = 't',
        long = "table",
        value_name = "PATH",
        help = "Write the per-iteration seed and expanded ends as TSV"
    )]
    pub table: Option<PathBuf>,

    #[arg(short = 'q', long = "quiet", help = "Only log warnings and errors")]
    pub quiet: bool,
}

impl Args {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            seed_len: self.seed_len,
            max_search_len: self.max_search_len,
            search_prop: self.search_prop,
            max_iter: self.max_iter,
            min_prop: self.min_prop,
        }
    }
}
