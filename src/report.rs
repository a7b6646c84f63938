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

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;
use log::info;

use crate::search::IterationRecord;
use crate::select::Leader;

/// Leader, reverse complement and frequency on separate lines; coverage goes to the log.
pub fn print_leader(out: &mut impl Write, leader: &Leader) -> Result<()> {
    info!("Spliced leader sequence identified:");
    writeln!(out, "{}", leader.sequence)?;
    info!("Reverse complement:");
    writeln!(out, "{}", leader.reverse_complement)?;
    info!("Frequency:");
    writeln!(out, "{:.5}", leader.proportion)?;
    info!(
        "Found on {:.2}% of transcripts",
        100.0 * leader.cumulative_proportion
    );
    Ok(())
}

pub fn write_iteration_table<W: Write>(records: &[IterationRecord], out: W) -> Result<()> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(out);
    writer.write_record(["Iteration", "Stage", "Length", "Count", "Percent", "Sequence"])?;
    for record in records {
        for (stage, end) in [("seed", &record.seed), ("expanded", &record.expanded)] {
            writer.write_record(&[
                record.iteration.to_string(),
                stage.to_string(),
                end.sequence.len().to_string(),
                end.count.to_string(),
                format!("{:.2}", 100.0 * end.proportion),
                end.sequence.clone(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn save_iteration_table(records: &[IterationRecord], output_path: impl AsRef<Path>) -> Result<()> {
    write_iteration_table(records, BufWriter::new(File::create(output_path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmers::CommonEnd;

    fn end(sequence: &str, count: usize, proportion: f64) -> CommonEnd {
        CommonEnd {
            sequence: sequence.to_string(),
            count,
            proportion,
        }
    }

    #[test]
    fn test_print_leader() {
        let leader = Leader {
            sequence: "GGTTTAATTACCCAAG".to_string(),
            reverse_complement: "CTTGGGTAATTAAACC".to_string(),
            proportion: 0.123456789,
            cumulative_proportion: 0.5,
        };
        let mut out = Vec::new();
        print_leader(&mut out, &leader).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "GGTTTAATTACCCAAG\nCTTGGGTAATTAAACC\n0.12346\n"
        );
    }

    #[test]
    fn test_write_iteration_table() {
        let records = vec![IterationRecord {
            iteration: 0,
            seed: end("GGTTTAATTA", 90, 0.9),
            expanded: end("GGTTTAATTACCCAAG", 85, 0.85),
        }];
        let mut out = Vec::new();
        write_iteration_table(&records, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Iteration\tStage\tLength\tCount\tPercent\tSequence\n\
             0\tseed\t10\t90\t90.00\tGGTTTAATTA\n\
             0\texpanded\t16\t85\t85.00\tGGTTTAATTACCCAAG\n"
        );
    }

    #[test]
    fn test_save_iteration_table() {
        let file = tempfile::NamedTempFile::with_suffix(".tsv").unwrap();
        save_iteration_table(&[], file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "Iteration\tStage\tLength\tCount\tPercent\tSequence\n");
    }
}
