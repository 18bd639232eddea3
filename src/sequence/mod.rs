// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Mibonacci recurrence.
//!
//! A Mibonacci sequence starts from three seed terms. Every later term is
//!
//! ```text
//! term[i] = 1 + term[i-1] + term[(i-2) mod 4]      (i >= 3)
//! ```
//!
//! The modulus is applied to the raw index `i-2`, so slots 0..=3 are reread
//! for the whole life of the sequence. Slots 0..=2 hold the seeds and slot 3
//! is the first computed term.
//!
//! All arithmetic wraps modulo 2^32.
//!
//! # Example
//!
//! ```
//! use mibonacci::config::Config;
//! use mibonacci::sequence::{generate, Seed};
//!
//! let buffer = generate(Seed::new(0, 1, 2), 6, &Config::default()).unwrap();
//! assert_eq!(buffer.terms(6), &[0, 1, 2, 4, 7, 12, 13]);
//! ```

pub mod query;

pub use query::QueryList;

use log::debug;

use crate::config::Config;
use crate::error::{Result, SequenceError};

/// Number of seed terms.
pub const SEED_LENGTH: usize = 3;

/// Size of the window the recurrence reaches back into.
const WINDOW: usize = 4;

/// The three terms a sequence starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed([i32; SEED_LENGTH]);

impl Seed {
    pub fn new(s0: i32, s1: i32, s2: i32) -> Self {
        Self([s0, s1, s2])
    }

    pub fn values(&self) -> [i32; SEED_LENGTH] {
        self.0
    }
}

impl From<[i32; SEED_LENGTH]> for Seed {
    fn from(values: [i32; SEED_LENGTH]) -> Self {
        Self(values)
    }
}

/// Compute term `i` from the terms already in `terms`.
///
/// Requires `i >= 3` and `terms.len() >= i`.
pub fn recurrence(terms: &[i32], i: usize) -> i32 {
    debug_assert!(i >= SEED_LENGTH && terms.len() >= i);
    1i32.wrapping_add(terms[i - 1]).wrapping_add(terms[(i - 2) % WINDOW])
}

/// Growable, capacity-bounded store of generated terms.
///
/// Created fresh for each operation and discarded once the result has been
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceBuffer {
    terms: Vec<i32>,
    capacity: usize,
}

impl SequenceBuffer {
    /// Create a buffer holding only the seed terms.
    ///
    /// Nothing is reserved up front; `capacity` only bounds growth.
    pub fn new(seed: Seed, capacity: usize) -> Self {
        Self {
            terms: seed.values().to_vec(),
            capacity,
        }
    }

    /// Create a buffer sized by `config`.
    pub fn with_config(seed: Seed, config: &Config) -> Self {
        Self::new(seed, config.capacity())
    }

    /// (Re)compute the term at `index` in place.
    ///
    /// Seed positions are left untouched. Recomputing an existing slot
    /// overwrites it; computing the slot just past the end appends.
    pub fn compute(&mut self, index: usize) -> Result<i32> {
        if index < SEED_LENGTH {
            return Ok(self.terms[index]);
        }
        if index >= self.capacity {
            return Err(SequenceError::CapacityExceeded {
                index,
                capacity: self.capacity,
            });
        }
        // Fill any gap so the recurrence always has its inputs.
        while self.terms.len() < index {
            let next = recurrence(&self.terms, self.terms.len());
            self.terms.push(next);
        }
        let value = recurrence(&self.terms, index);
        if index == self.terms.len() {
            self.terms.push(value);
        } else {
            self.terms[index] = value;
        }
        Ok(value)
    }

    /// Extend the buffer so it holds every term up to and including `index`.
    pub fn extend_to(&mut self, index: usize) -> Result<()> {
        for i in self.terms.len()..=index {
            self.compute(i)?;
        }
        Ok(())
    }

    /// Get the term at `index`, if it has been generated.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.terms.get(index).copied()
    }

    /// The first `n + 1` terms (or fewer, if fewer exist).
    pub fn terms(&self, n: usize) -> &[i32] {
        let end = (n + 1).min(self.terms.len());
        &self.terms[..end]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Generate terms `0..=n` of the sequence seeded by `seed`.
///
/// Fails with `NegativeLength` if `n < 0` and with `CapacityExceeded` if
/// `n + 1` terms do not fit in the configured buffer.
pub fn generate(seed: Seed, n: i32, config: &Config) -> Result<SequenceBuffer> {
    let last = usize::try_from(n).map_err(|_| SequenceError::NegativeLength { n })?;
    if last >= config.capacity() {
        return Err(SequenceError::CapacityExceeded {
            index: last,
            capacity: config.capacity(),
        });
    }
    let mut buffer = SequenceBuffer::with_config(seed, config);
    buffer.extend_to(last)?;
    debug!("generated {} terms from seed {:?}", last + 1, seed.values());
    Ok(buffer)
}
