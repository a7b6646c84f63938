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

use crate::error::SlError;
use crate::kmers::{reverse_complement, CommonEnd};

/// Remove a confirmed end from every sequence: the motif itself where it starts a
/// sequence, its reverse complement where it ends one. Sequences without an exact
/// match are passed through as they are.
pub fn trim_end<'a>(seqs: &[&'a [u8]], motif: &CommonEnd) -> Result<Vec<&'a [u8]>, SlError> {
    let start = motif.sequence.as_bytes();
    let end = reverse_complement(start)?;

    Ok(seqs
        .iter()
        .map(|&seq| {
            let seq = seq.strip_prefix(start).unwrap_or(seq);
            seq.strip_suffix(end.as_slice()).unwrap_or(seq)
        })
        .collect())
}
