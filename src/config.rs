// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime configuration.
//!
//! The only tunable is the maximum number of terms a walk may visit. The
//! sequence buffer is sized two slots larger, which reproduces the classic
//! 102-slot buffer for the default of 100.
//!
//! The buffer grows one term at a time, so a large `max_terms` costs nothing
//! until a walk actually reaches that far.

/// Default maximum number of query values, and the last counter position the
/// reconciler may visit.
pub const DEFAULT_MAX_TERMS: usize = 100;

/// Largest `max_terms` the command line accepts, and the furthest a selection
/// walk may grow its buffer.
pub const MAX_TERMS_LIMIT: usize = 1 << 20;

/// Extra buffer slots beyond `max_terms`.
const CAPACITY_MARGIN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum query list length and reconciler counter bound.
    pub max_terms: usize,
}

impl Config {
    pub fn new(max_terms: usize) -> Self {
        Self { max_terms }
    }

    /// Number of terms a sequence buffer can hold.
    ///
    /// Saturates at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        self.max_terms.saturating_add(CAPACITY_MARGIN)
    }

    /// Check a `--max-terms` argument against [`MAX_TERMS_LIMIT`].
    pub fn parse_max_terms(arg: &str) -> Result<usize, String> {
        let max_terms: usize = arg.parse::<usize>().map_err(|e| e.to_string())?;
        if max_terms > MAX_TERMS_LIMIT {
            return Err(format!("must be at most {}", MAX_TERMS_LIMIT));
        }
        Ok(max_terms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TERMS)
    }
}
