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

use log::info;

use crate::config::SearchParams;
use crate::error::SlError;
use crate::extend::expand_end;
use crate::kmers::{most_common_end, CommonEnd};
use crate::trim::trim_end;

/// One pass of the search: the seed end and what it was expanded to.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    pub seed: CommonEnd,
    pub expanded: CommonEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last expanded end fell under `min_prop`; it is still recorded.
    BelowThreshold,
    MaxIterations,
    /// No sequence was long enough to give a seed end.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub records: Vec<IterationRecord>,
    pub stop: StopReason,
}

pub fn log_header() {
    info!("iter.\ttype    \tlength\tcount\tperc.\tsequence");
}

fn log_row(iteration: usize, stage: &str, end: &CommonEnd) {
    info!(
        "{}\t{}\t{}bp\t{}\t{:.2}%\t{}",
        iteration,
        stage,
        end.sequence.len(),
        end.count,
        100.0 * end.proportion,
        end.sequence
    );
}

/// Find progressively less frequent sequence ends.
///
/// Every pass seeds on the most common end of `seed_len`, expands it and then
/// trims it off the working sequences, so that the next pass sees whatever was
/// hidden underneath. Each pass works on a fresh generation of sub-slices of
/// the input; nothing is copied.
pub fn find_common_ends(seqs: &[&[u8]], params: &SearchParams) -> Result<SearchOutcome, SlError> {
    if seqs.is_empty() {
        return Err(SlError::EmptyInput);
    }

    let mut records = Vec::new();
    let mut working: Vec<&[u8]> = seqs.to_vec();

    log_header();
    for iteration in 0..params.max_iter {
        let Some(seed) = most_common_end(&working, params.seed_len)? else {
            info!(
                "{}\tno {}bp end left apart from polyA/polyT",
                iteration, params.seed_len
            );
            return Ok(SearchOutcome {
                records,
                stop: StopReason::Exhausted,
            });
        };
        log_row(iteration, "seed seq.", &seed);

        let expanded = expand_end(&working, seed.clone(), params)?;
        log_row(iteration, "expanded", &expanded);

        let below = expanded.proportion < params.min_prop;
        if !below {
            working = trim_end(&working, &expanded)?;
        }
        records.push(IterationRecord {
            iteration,
            seed,
            expanded,
        });

        if below {
            return Ok(SearchOutcome {
                records,
                stop: StopReason::BelowThreshold,
            });
        }
    }

    Ok(SearchOutcome {
        records,
        stop: StopReason::MaxIterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{distinct_read, nested_motifs, views};

    #[test]
    fn test_stops_below_threshold() {
        let owned: Vec<String> = (0..1000).map(distinct_read).collect();
        let seqs = views(&owned);

        let outcome = find_common_ends(&seqs, &SearchParams::default()).unwrap();
        assert_eq!(outcome.stop, StopReason::BelowThreshold);
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.records[0].expanded.proportion < 0.005);
    }

    #[test]
    fn test_stops_at_max_iterations() {
        let (motifs, owned) = nested_motifs(11);
        let seqs = views(&owned);

        let outcome = find_common_ends(&seqs, &SearchParams::default()).unwrap();
        assert_eq!(outcome.stop, StopReason::MaxIterations);
        assert_eq!(outcome.records.len(), 10);
        for (record, motif) in outcome.records.iter().zip(&motifs) {
            assert_eq!(&record.expanded.sequence, motif);
            // denominators never shrink, trimmed reads are still counted
            assert!(
                (record.expanded.proportion - record.expanded.count as f64 / owned.len() as f64)
                    .abs()
                    < 1e-12
            );
        }
        assert!(outcome.records.iter().all(|r| r.expanded.sequence != motifs[10]));
    }

    #[test]
    fn test_iteration_limit_is_configurable() {
        let (motifs, owned) = nested_motifs(11);
        let seqs = views(&owned);
        let params = SearchParams { max_iter: 3, ..Default::default() };

        let outcome = find_common_ends(&seqs, &params).unwrap();
        assert_eq!(outcome.stop, StopReason::MaxIterations);
        let found: Vec<&str> = outcome.records.iter().map(|r| r.expanded.sequence.as_str()).collect();
        assert_eq!(found, vec![motifs[0].as_str(), motifs[1].as_str(), motifs[2].as_str()]);
        assert_eq!(outcome.records[2].iteration, 2);
    }

    #[test]
    fn test_exhausted_when_reads_too_short() {
        let seqs: Vec<&[u8]> = vec![b"GATTACA".as_slice(), b"CCGG".as_slice()];
        let outcome = find_common_ends(&seqs, &SearchParams::default()).unwrap();
        assert_eq!(outcome.stop, StopReason::Exhausted);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_exhausted_when_only_poly_a_ends_remain() {
        let seqs: Vec<&[u8]> = vec![b"AAAAAAAAAAAATTTTTTTTTTTT".as_slice(); 4];
        let outcome = find_common_ends(&seqs, &SearchParams::default()).unwrap();
        assert_eq!(outcome.stop, StopReason::Exhausted);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            find_common_ends(&[], &SearchParams::default()),
            Err(SlError::EmptyInput)
        );
    }

    #[test]
    fn test_degenerate_base_aborts() {
        let seqs: Vec<&[u8]> = vec![b"GATTACAGATTACANN".as_slice(); 3];
        assert_eq!(
            find_common_ends(&seqs, &SearchParams::default()),
            Err(SlError::DegenerateBase('N'))
        );
    }
}
