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

//! Synthetic transcript sets shared by the search and selection tests.

/// Spell `n` in `alphabet`, least significant digit first.
pub fn code(mut n: usize, len: usize, alphabet: &[u8]) -> String {
    let base = alphabet.len();
    (0..len)
        .map(|_| {
            let c = alphabet[n % base] as char;
            n /= base;
            c
        })
        .collect()
}

/// A GC-only transcript body, unique for every `i` below 1024. Consecutive
/// bodies start with different bases, so nothing extends past a leader into them.
pub fn gc_body(i: usize) -> String {
    let half = code(i, 10, b"CG");
    format!("{half}{half}")
}

/// A read whose start and end k-mers are not shared with any other read.
pub fn distinct_read(i: usize) -> String {
    let tag = code(i, 10, b"ACGT");
    format!("{tag}TTGCA{tag}")
}

/// `n` distinct 12bp motifs, motif `j` leading `40 - 2j` reads.
pub fn nested_motifs(n: usize) -> (Vec<String>, Vec<String>) {
    let motifs: Vec<String> = (0..n).map(|j| format!("{}TTAGGA", code(j, 6, b"ACGT"))).collect();
    let mut reads = Vec::new();
    for (j, motif) in motifs.iter().enumerate() {
        for _ in 0..40 - 2 * j {
            reads.push(format!("{}{}", motif, gc_body(reads.len())));
        }
    }
    (motifs, reads)
}

pub fn views(owned: &[String]) -> Vec<&[u8]> {
    owned.iter().map(|s| s.as_bytes()).collect()
}
