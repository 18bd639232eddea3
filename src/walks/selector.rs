// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Index-triggered selection ("encrypt").
//!
//! The counter walks the buffer from 0 and the term under it is emitted
//! whenever the counter equals the next wanted position. The walk stops once
//! every position is consumed or the counter reaches `2 + last position`.
//!
//! Positions are expected in ascending order but this is not enforced. Since
//! the counter only moves forward, a position smaller than the one before it
//! is never reached, and a repeated position matches once and then stalls the
//! walk until the bound. An empty query list ends the walk immediately.
//!
//! The buffer grows as far as the bound requires, even past the configured
//! capacity, up to [`MAX_TERMS_LIMIT`] plus the bound margin.

use crate::config::{Config, MAX_TERMS_LIMIT};
use crate::context::WalkContext;
use crate::engine::{Cursor, Transition, Walk};
use crate::error::Result;
use crate::sequence::{QueryList, Seed};

use super::{run_walk, WalkReport};

/// Counter margin past the last wanted position.
const BOUND_MARGIN: i64 = 2;

#[derive(Debug)]
pub struct Selector;

impl Walk for Selector {
    fn is_finished(&self, ctx: &WalkContext, cursor: Cursor) -> bool {
        let Some(last) = ctx.queries.last() else {
            return true;
        };
        cursor.index >= ctx.queries.len() || cursor.counter as i64 >= BOUND_MARGIN + last as i64
    }

    fn examine(&self, ctx: &WalkContext, cursor: Cursor, _value: i32) -> Transition {
        match ctx.queries.get(cursor.index) {
            Some(wanted) if cursor.counter as i64 == wanted as i64 => Transition::Match,
            _ => Transition::Advance,
        }
    }

    fn name(&self) -> &str {
        "Selector"
    }
}

/// Buffer capacity covering every slot the walk can visit.
fn walk_capacity(positions: &QueryList, config: &Config) -> usize {
    let ceiling = Config::new(MAX_TERMS_LIMIT).capacity();
    let needed = positions
        .last()
        .and_then(|last| usize::try_from(i64::from(last) + BOUND_MARGIN).ok())
        .unwrap_or(0);
    config.capacity().max(needed.min(ceiling))
}

/// Emit the terms at the positions listed in `positions`.
///
/// ```
/// use mibonacci::config::Config;
/// use mibonacci::sequence::{QueryList, Seed};
/// use mibonacci::walks::encrypt;
///
/// let positions = QueryList::from(vec![3, 4, 6]);
/// let report = encrypt(Seed::new(0, 1, 2), &positions, &Config::default()).unwrap();
/// assert_eq!(report.emitted, vec![4, 7, 13]);
/// ```
pub fn encrypt(seed: Seed, positions: &QueryList, config: &Config) -> Result<WalkReport> {
    let capacity = walk_capacity(positions, config);
    run_walk(Box::new(Selector), seed, positions, config, capacity)
}
