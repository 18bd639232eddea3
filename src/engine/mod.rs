// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-cursor walk engine.
//!
//! This module drives a `Walk` over a lazily generated sequence. The engine
//! owns the cursor pair and the one-shot "recompute suppressed" flag; walks
//! only decide which transition to take.
//!
//! # Architecture
//!
//! Each step of the engine:
//! 1. If the walk is finished: stop
//! 2. If `counter >= 3` and the previous step was not an overshoot: (re)compute
//!    `buffer[counter]` with the recurrence
//! 3. Clear the suppression flag
//! 4. Ask the walk to `examine` the term under the counter
//! 5. Apply the transition:
//!    - Match: emit the term, `index += 1`, `counter += 1`
//!    - Overshoot: `index += 1`, `counter -= 1` then `counter += 1`, set the
//!      suppression flag so the revisited slot keeps its value
//!    - Advance: `counter += 1`
//!
//! # Example
//!
//! ```
//! use mibonacci::config::Config;
//! use mibonacci::context::WalkContext;
//! use mibonacci::engine::WalkEngine;
//! use mibonacci::sequence::{QueryList, Seed};
//! use mibonacci::walks::Reconciler;
//!
//! let mut ctx = WalkContext::new(
//!     Seed::new(0, 1, 2),
//!     QueryList::from(vec![0, 1, 2, 4]),
//!     &Config::default(),
//! );
//! let engine = WalkEngine::new(Box::new(Reconciler));
//! engine.run(&mut ctx).unwrap();
//! assert_eq!(ctx.emitted, vec![0, 1, 2, 4]);
//! ```

pub mod walk;

pub use walk::{Cursor, Transition, Walk};

use log::{debug, trace};

use crate::context::WalkContext;
use crate::error::Result;
use crate::sequence::SEED_LENGTH;
use crate::state::Counters;

/// Engine that moves the cursors of one walk to completion.
pub struct WalkEngine {
    /// Walk deciding the transitions.
    walk: Box<dyn Walk>,

    cursor: Cursor,

    /// Set by an overshoot; the next step reuses the buffer slot as-is.
    recompute_suppressed: bool,
}

impl WalkEngine {
    /// Create an engine with both cursors at zero.
    pub fn new(walk: Box<dyn Walk>) -> Self {
        Self {
            walk,
            cursor: Cursor::default(),
            recompute_suppressed: false,
        }
    }

    /// Run the walk until it reports it is finished.
    ///
    /// Consumes the engine and returns the final cursor. Emitted terms and
    /// statistics are left in `ctx`.
    pub fn run(mut self, ctx: &mut WalkContext) -> Result<Cursor> {
        while !self.walk.is_finished(ctx, self.cursor) {
            self.step(ctx)?;
        }
        debug!(
            "{} finished at {:?}: {} steps, {} matches, {} backtracks",
            self.walk.name(),
            self.cursor,
            ctx.statistics.get(Counters::Steps),
            ctx.statistics.get(Counters::Matches),
            ctx.statistics.get(Counters::Backtracks),
        );
        Ok(self.cursor)
    }

    /// Take one step regardless of whether the walk is finished.
    ///
    /// Returns the transition that was applied.
    pub fn step(&mut self, ctx: &mut WalkContext) -> Result<Transition> {
        let counter = self.cursor.counter;
        let value = match ctx.buffer.get(counter) {
            Some(value) if counter < SEED_LENGTH || self.recompute_suppressed => value,
            _ => {
                ctx.statistics.increment_counter(Counters::TermsComputed);
                ctx.buffer.compute(counter)?
            }
        };
        self.recompute_suppressed = false;
        ctx.statistics.increment_counter(Counters::Steps);

        let transition = self.walk.examine(ctx, self.cursor, value);
        trace!("{:?} value={} -> {:?}", self.cursor, value, transition);

        match transition {
            Transition::Match => {
                ctx.emitted.push(value);
                ctx.statistics.increment_counter(Counters::Matches);
                self.cursor.index += 1;
                self.cursor.counter += 1;
            }
            Transition::Overshoot => {
                // Retreat one slot, then advance back onto it.
                ctx.statistics.increment_counter(Counters::Backtracks);
                self.cursor.index += 1;
                self.recompute_suppressed = true;
            }
            Transition::Advance => {
                self.cursor.counter += 1;
            }
        }
        Ok(transition)
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the next step will reuse the current slot without recomputing.
    pub fn is_recompute_suppressed(&self) -> bool {
        self.recompute_suppressed
    }
}
