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

use crate::error::SlError;

// search parameters
pub const SEED_LEN: usize = 10;
pub const MAX_SEARCH_LEN: usize = 40;
pub const SEARCH_PROP: f64 = 0.9; // INFO: minimum support kept by each one-base extension
pub const MAX_ITER: usize = 10;
pub const MIN_PROP: f64 = 0.005; // INFO: minimum proportion of sequences carrying a motif

/// Parameters of the leader search. Built once and passed down by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub seed_len: usize,
    pub max_search_len: usize,
    pub search_prop: f64,
    pub max_iter: usize,
    pub min_prop: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            seed_len: SEED_LEN,
            max_search_len: MAX_SEARCH_LEN,
            search_prop: SEARCH_PROP,
            max_iter: MAX_ITER,
            min_prop: MIN_PROP,
        }
    }
}

impl SearchParams {
    pub fn validate(&self) -> Result<(), SlError> {
        if self.seed_len == 0 {
            return Err(SlError::InvalidParameter(
                "seed length must be greater than 0".to_string(),
            ));
        }
        if self.max_search_len < self.seed_len {
            return Err(SlError::InvalidParameter(format!(
                "maximum length {} is shorter than seed length {}",
                self.max_search_len, self.seed_len
            )));
        }
        if !(0.0..=1.0).contains(&self.search_prop) {
            return Err(SlError::InvalidParameter(format!(
                "search proportion {} is outside [0, 1]",
                self.search_prop
            )));
        }
        if self.max_iter == 0 {
            return Err(SlError::InvalidParameter(
                "at least one iteration is required".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_prop) {
            return Err(SlError::InvalidParameter(format!(
                "minimum proportion {} is outside [0, 1]",
                self.min_prop
            )));
        }
        Ok(())
    }

    pub fn log_summary(&self) {
        info!("Seed kmer length: {}bp", self.seed_len);
        info!("Max kmer length: {}bp", self.max_search_len);
        info!("Search consensus proportion: {}", self.search_prop);
        info!("Maximum iterations: {}", self.max_iter);
        info!("Minimum proportion: {}", self.min_prop);
    }
}
