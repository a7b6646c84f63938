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

use std::path::Path;

use anyhow::{Context, Result};
use needletail::parse_fastx_file;

pub struct Sequence {
    pub name: String,
    pub seq: Vec<u8>,
}

pub struct SequenceDict {
    pub sequences: Vec<Sequence>,
}

impl SequenceDict {
    /// Read every record of a FASTA (or FASTQ) file, uppercased.
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = parse_fastx_file(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let mut sequences = Vec::new();

        while let Some(record) = reader.next() {
            let record = record
                .with_context(|| format!("Failed to parse record {} of {}", sequences.len() + 1, path.display()))?;
            let mut seq = record.seq().into_owned();
            seq.make_ascii_uppercase();
            sequences.push(Sequence {
                name: String::from_utf8_lossy(record.id()).into_owned(),
                seq,
            });
        }

        Ok(Self { sequences })
    }

    /// Borrowed views of every sequence, the first generation of a search.
    pub fn views(&self) -> Vec<&[u8]> {
        self.sequences.iter().map(|s| s.seq.as_slice()).collect()
    }

    /// Sequences too short to yield a terminal k-mer of length `k`.
    pub fn shorter_than(&self, k: usize) -> Vec<&Sequence> {
        self.sequences.iter().filter(|s| s.seq.len() < k).collect()
    }
}
