// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Value reconciliation ("checker").
//!
//! Walks the generated sequence comparing *values* against a list of targets.
//! The targets are expected to follow generation order closely, but a target
//! may be missing from the sequence. When the term under the counter is
//! greater than the current target, that target is skipped and the same slot
//! is retried against the next one: a one-step backtrack, not a re-scan.
//!
//! The walk ends when every target has been consumed or the counter moves past
//! `max_terms`.

use crate::config::Config;
use crate::context::WalkContext;
use crate::engine::{Cursor, Transition, Walk};
use crate::error::Result;
use crate::sequence::{QueryList, Seed};

use super::{run_walk, WalkReport};

#[derive(Debug)]
pub struct Reconciler;

impl Walk for Reconciler {
    fn is_finished(&self, ctx: &WalkContext, cursor: Cursor) -> bool {
        cursor.counter > ctx.max_terms || cursor.index >= ctx.queries.len()
    }

    fn examine(&self, ctx: &WalkContext, cursor: Cursor, value: i32) -> Transition {
        match ctx.queries.get(cursor.index) {
            Some(target) if value == target => Transition::Match,
            Some(target) if value > target => Transition::Overshoot,
            _ => Transition::Advance,
        }
    }

    fn name(&self) -> &str {
        "Reconciler"
    }
}

/// Reconcile the sequence seeded by `seed` against `targets`.
///
/// ```
/// use mibonacci::config::Config;
/// use mibonacci::sequence::{QueryList, Seed};
/// use mibonacci::walks::check;
///
/// let targets = QueryList::from(vec![0, 1, 2, 5, 7]);
/// let report = check(Seed::new(0, 1, 2), &targets, &Config::default()).unwrap();
/// assert_eq!(report.emitted, vec![0, 1, 2, 7]);
/// ```
pub fn check(seed: Seed, targets: &QueryList, config: &Config) -> Result<WalkReport> {
    run_walk(Box::new(Reconciler), seed, targets, config, config.capacity())
}
