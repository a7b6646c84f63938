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
use crate::kmers::reverse_complement_str;
use crate::search::IterationRecord;

/// The spliced leader reported for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub sequence: String,
    pub reverse_complement: String,
    pub proportion: f64,
    pub cumulative_proportion: f64,   // summed over every recorded end contained in `sequence`
}

/// Pick the longest end that contains the first iteration's end and was seen in
/// at least `min_prop` of the sequences.
///
/// Records are scanned in iteration order and each qualifying one must contain the
/// current choice, so the answer only ever grows around the strongest signal.
/// `Ok(None)` when the first iteration is already under `min_prop`.
pub fn select_leader(records: &[IterationRecord], min_prop: f64) -> Result<Option<Leader>, SlError> {
    let Some(first) = records.first() else {
        return Ok(None);
    };
    if first.expanded.proportion < min_prop {
        return Ok(None);
    }

    let mut selected = &first.expanded;
    for end in records.iter().map(|record| &record.expanded) {
        if end.proportion >= min_prop && end.sequence.contains(&selected.sequence) {
            selected = end;
        }
    }

    let cumulative_proportion = records
        .iter()
        .map(|record| &record.expanded)
        .filter(|end| selected.sequence.contains(&end.sequence))
        .map(|end| end.proportion)
        .sum();

    Ok(Some(Leader {
        sequence: selected.sequence.clone(),
        reverse_complement: reverse_complement_str(&selected.sequence)?,
        proportion: selected.proportion,
        cumulative_proportion,
    }))
}
