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

use ahash::RandomState;
use hashbrown::HashMap;

use crate::error::SlError;

/// Terminal k-mer counts, starts and reverse-complemented ends pooled together.
pub type EndCounts = HashMap<Vec<u8>, usize, RandomState>;

/// The most frequent terminal k-mer at one length.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonEnd {
    pub sequence: String,
    pub count: usize,
    pub proportion: f64,   // count / sequences passed in, before length filtering
}

/// Generate reverse complement of a DNA sequence.
/// Anything outside ACGT is rejected so that it cannot end up counted as a k-mer.
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>, SlError> {
    seq.iter()
        .rev()
        .map(|&c| match c {
            b'A' => Ok(b'T'),
            b'T' => Ok(b'A'),
            b'C' => Ok(b'G'),
            b'G' => Ok(b'C'),
            _ => Err(SlError::DegenerateBase(c as char)),
        })
        .collect()
}

pub fn reverse_complement_str(seq: &str) -> Result<String, SlError> {
    let rc = reverse_complement(seq.as_bytes())?;
    Ok(rc.into_iter().map(char::from).collect())
}

// polyA/polyT ends come from polyadenylation, not from a leader
fn is_poly_a_or_t(kmer: &[u8]) -> bool {
    if kmer.is_empty() {
        return false;
    }
    let first = kmer[0];
    (first == b'A' || first == b'T') && kmer.iter().all(|&c| c == first)
}

/// Count every k-mer found at a sequence start, plus the reverse complement of
/// every k-mer found at a sequence end. Sequences shorter than `k` are skipped.
pub fn profile_ends(seqs: &[&[u8]], k: usize) -> Result<EndCounts, SlError> {
    let mut counts = EndCounts::default();
    for seq in seqs.iter().filter(|seq| seq.len() >= k) {
        *counts.entry(seq[..k].to_vec()).or_insert(0) += 1;
        let end = reverse_complement(&seq[seq.len() - k..])?;
        *counts.entry(end).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Most common terminal k-mer of length `k`, excluding polyA/polyT.
///
/// Equal counts go to the lexicographically smallest k-mer. `Ok(None)` means
/// there was nothing to count at this length, which is different from a k-mer
/// that was found only rarely.
pub fn most_common_end(seqs: &[&[u8]], k: usize) -> Result<Option<CommonEnd>, SlError> {
    if seqs.is_empty() {
        return Err(SlError::EmptyInput);
    }

    let counts = profile_ends(seqs, k)?;
    let best = counts
        .into_iter()
        .filter(|(kmer, _)| !is_poly_a_or_t(kmer))
        .max_by(|(kmer_a, count_a), (kmer_b, count_b)| {
            count_a.cmp(count_b).then_with(|| kmer_b.cmp(kmer_a))
        });

    Ok(best.map(|(kmer, count)| CommonEnd {
        sequence: String::from_utf8_lossy(&kmer).into_owned(),
        count,
        proportion: count as f64 / seqs.len() as f64,
    }))
}
