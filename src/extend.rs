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

use crate::config::SearchParams;
use crate::error::SlError;
use crate::kmers::{most_common_end, CommonEnd};

/// Grow a seed end one base at a time while the longer end keeps more than
/// `search_prop` of the support of the previous step and still contains it.
///
/// The result is never shorter than the seed nor longer than `max_search_len`.
pub fn expand_end(
    seqs: &[&[u8]],
    seed: CommonEnd,
    params: &SearchParams,
) -> Result<CommonEnd, SlError> {
    let mut end_len = params.seed_len;
    let mut best = seed.clone();
    let mut candidate = Some(seed);

    while let Some(next) = candidate {
        let retained = next.count as f64 / best.count as f64;
        if retained <= params.search_prop
            || !next.sequence.contains(&best.sequence)
            || end_len > params.max_search_len
        {
            break;
        }
        end_len += 1;
        best = next;
        candidate = most_common_end(seqs, end_len)?;
    }

    Ok(best)
}
