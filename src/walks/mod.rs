// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Query-driven walks over a Mibonacci sequence.
//!
//! # Organization
//!
//! - `selector`: emits the terms at the positions named by the query list
//! - `reconciler`: matches generated values against target values, retrying
//!   one slot after an overshoot

pub mod reconciler;
pub mod selector;

pub use reconciler::{check, Reconciler};
pub use selector::{encrypt, Selector};

use crate::config::Config;
use crate::context::WalkContext;
use crate::engine::{Cursor, Walk, WalkEngine};
use crate::error::Result;
use crate::sequence::{QueryList, Seed};
use crate::state::Statistics;

/// Outcome of running one walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    /// Emitted terms, in emission order.
    pub emitted: Vec<i32>,
    /// Cursor position when the walk finished.
    pub cursor: Cursor,
    pub statistics: Statistics,
}

/// Run `walk` over a fresh buffer seeded by `seed` that may grow to
/// `capacity` terms.
pub(crate) fn run_walk(
    walk: Box<dyn Walk>,
    seed: Seed,
    queries: &QueryList,
    config: &Config,
    capacity: usize,
) -> Result<WalkReport> {
    let mut ctx = WalkContext::with_capacity(seed, queries.clone(), config, capacity);
    let cursor = WalkEngine::new(walk).run(&mut ctx)?;
    Ok(WalkReport {
        emitted: ctx.emitted,
        cursor,
        statistics: ctx.statistics,
    })
}
