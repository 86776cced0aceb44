//! Batched fold kernels over contiguous buffers.
//!
//! # Integers
//!
//! Sums accumulate into `LANES` independent `i128` lanes, which keeps the
//! loop free of cross-iteration dependencies so it vectorizes. A sum of
//! `i64` values cannot overflow `i128` for any buffer that fits in memory.
//!
//! # Booleans
//!
//! Booleans are bit-packed 64 to a `u64` word. A sum is a population count;
//! a product is "every bit set".
//!
//! Large buffers are split into chunks and folded on the rayon pool.

use num_traits::{CheckedMul, One, Zero};
use rayon::prelude::*;

use crate::config::BulkConfig;

/// Number of independent accumulators in the integer sum.
pub const LANES: usize = 8;

/// Sums a buffer of integers exactly.
#[must_use]
pub fn sum_i64(values: &[i64]) -> i128 {
    let mut lanes = [0i128; LANES];
    let chunks = values.chunks_exact(LANES);
    let tail = chunks.remainder();

    for chunk in chunks {
        for (lane, &value) in lanes.iter_mut().zip(chunk) {
            *lane += i128::from(value);
        }
    }

    lanes.iter().sum::<i128>() + tail.iter().map(|&v| i128::from(v)).sum::<i128>()
}

/// Sums a buffer, splitting it across threads past the configured threshold.
#[must_use]
pub fn par_sum_i64(values: &[i64], config: &BulkConfig) -> i128 {
    if values.len() < config.parallel_threshold {
        return sum_i64(values);
    }
    values.par_chunks(config.chunk_size.max(1)).map(sum_i64).sum()
}

/// Multiplies a buffer of nonzero integers, or `None` on `i128` overflow.
fn checked_product<T>(values: &[i64]) -> Option<T>
where
    T: CheckedMul + One + From<i64>,
{
    values
        .iter()
        .try_fold(T::one(), |acc, &v| acc.checked_mul(&T::from(v)))
}

/// Multiplies a buffer of integers exactly.
///
/// A zero factor gives zero regardless of the other factors. Otherwise the
/// product is `None` once it leaves the `i128` range; since every nonzero
/// factor has magnitude at least 1, that happens in every grouping or none.
#[must_use]
pub fn par_product_i64(values: &[i64], config: &BulkConfig) -> Option<i128> {
    if values.len() < config.parallel_threshold {
        if values.contains(&0) {
            return Some(i128::zero());
        }
        return checked_product(values);
    }

    if values.par_iter().any(|&v| v == 0) {
        return Some(i128::zero());
    }
    values
        .par_chunks(config.chunk_size.max(1))
        .map(checked_product::<i128>)
        .try_reduce(i128::one, |a, b| a.checked_mul(b))
}

/// A bit-packed boolean buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackedBools {
    words: Vec<u64>,
    len: usize,
}

impl PackedBools {
    /// Creates a buffer with room for `capacity` booleans.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity.div_ceil(64)),
            len: 0,
        }
    }

    /// Appends a boolean.
    pub fn push(&mut self, value: bool) {
        let bit = self.len % 64;
        if bit == 0 {
            self.words.push(0);
        }
        if value {
            if let Some(word) = self.words.last_mut() {
                *word |= 1u64 << bit;
            }
        }
        self.len += 1;
    }

    /// Returns the number of booleans stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counts the `true` values.
    #[must_use]
    pub fn count_ones(&self, config: &BulkConfig) -> u64 {
        let popcount = |words: &[u64]| {
            words
                .iter()
                .map(|w| u64::from(w.count_ones()))
                .sum::<u64>()
        };
        if self.words.len() < config.parallel_threshold / 64 {
            popcount(&self.words)
        } else {
            self.words
                .par_chunks((config.chunk_size / 64).max(1))
                .map(popcount)
                .sum()
        }
    }

    /// Returns true if every stored value is `true`.
    #[must_use]
    pub fn all(&self) -> bool {
        let full = self.len / 64;
        let rest = self.len % 64;
        let head_ok = self.words[..full].iter().all(|&w| w == u64::MAX);
        let tail_ok = rest == 0 || self.words[full] == (1u64 << rest) - 1;
        head_ok && tail_ok
    }
}

/// Concatenates string slices into a buffer sized up front.
#[must_use]
pub fn par_concat(parts: &[&str], config: &BulkConfig) -> String {
    let concat = |parts: &[&str]| {
        let mut out = String::with_capacity(parts.iter().map(|p| p.len()).sum());
        for part in parts {
            out.push_str(part);
        }
        out
    };

    if parts.len() < config.parallel_threshold {
        return concat(parts);
    }

    // Chunks come back in order, so concatenation order is preserved.
    let pieces: Vec<String> = parts.par_chunks(config.chunk_size.max(1)).map(concat).collect();
    let mut out = String::with_capacity(pieces.iter().map(String::len).sum());
    for piece in &pieces {
        out.push_str(piece);
    }
    out
}
