// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Walk context combining the generated buffer with the query list.
//!
//! The WalkContext is the data structure a walk reads and the engine mutates:
//! - The sequence buffer, extended (and sometimes recomputed) as the counter moves
//! - The immutable query list the walk is matched against
//! - The values emitted so far, in emission order
//! - Statistics about the walk
//!
//! A context is created fresh for each operation call and is owned by that
//! call alone.

use crate::config::Config;
use crate::sequence::{QueryList, Seed, SequenceBuffer};
use crate::state::Statistics;

#[derive(Debug)]
pub struct WalkContext {
    /// Generated terms.
    pub buffer: SequenceBuffer,
    /// Positions or values the walk is driven by.
    pub queries: QueryList,
    /// Last counter position the reconciler may visit.
    pub max_terms: usize,
    /// Emitted terms, in emission order.
    pub emitted: Vec<i32>,
    pub statistics: Statistics,
}

impl WalkContext {
    /// Create a context holding only the seed terms.
    pub fn new(seed: Seed, queries: QueryList, config: &Config) -> Self {
        Self::with_capacity(seed, queries, config, config.capacity())
    }

    /// Create a context whose buffer may grow to `capacity` terms instead of
    /// the configured capacity.
    pub fn with_capacity(
        seed: Seed,
        queries: QueryList,
        config: &Config,
        capacity: usize,
    ) -> Self {
        Self {
            buffer: SequenceBuffer::new(seed, capacity),
            queries,
            max_terms: config.max_terms,
            emitted: Vec::new(),
            statistics: Statistics::new(),
        }
    }
}
