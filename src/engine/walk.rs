// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Walk trait for cursor-driven sequence consumers.
//!
//! A walk moves a pair of cursors: `counter` over the sequence buffer and
//! `index` over the query list. At each step the engine makes sure the term
//! under `counter` is available and asks the walk which transition to take.
//!
//! # Example
//!
//! ```
//! use mibonacci::context::WalkContext;
//! use mibonacci::engine::{Cursor, Transition, Walk};
//!
//! /// Emit every term until the counter reaches 5.
//! #[derive(Debug)]
//! struct FirstFive;
//!
//! impl Walk for FirstFive {
//!     fn is_finished(&self, _ctx: &WalkContext, cursor: Cursor) -> bool {
//!         cursor.counter >= 5
//!     }
//!
//!     fn examine(&self, _ctx: &WalkContext, _cursor: Cursor, _value: i32) -> Transition {
//!         Transition::Match
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::context::WalkContext;

/// Transition chosen for the current step.
///
/// - `Match`: emit the term, advance both cursors
/// - `Overshoot`: skip the query entry and retry the same buffer slot against
///   the next one without recomputing it
/// - `Advance`: move the counter only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The term under the counter satisfies the query entry.
    Match,

    /// The term under the counter is greater than the query entry.
    ///
    /// The counter retreats by one before the usual advance, so the next step
    /// revisits the same slot. That slot is not recomputed on the revisit.
    Overshoot,

    /// No match yet. Move on to the next term.
    Advance,
}

/// Position of both cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Position in the sequence buffer.
    pub counter: usize,
    /// Position in the query list.
    pub index: usize,
}

/// Trait for consumers driven by `WalkEngine`.
///
/// # Lifecycle
///
/// 1. Engine calls `is_finished`; if true the walk ends
/// 2. Engine computes the term under `counter` (unless the previous step
///    was an overshoot)
/// 3. Engine calls `examine` with that term and applies the transition
/// 4. Repeat
pub trait Walk: Debug {
    /// Whether the walk should stop before taking another step.
    fn is_finished(&self, ctx: &WalkContext, cursor: Cursor) -> bool;

    /// Pick the transition for the term `value` under `cursor.counter`.
    ///
    /// Only called when `is_finished` returned false for the same cursor.
    fn examine(&self, ctx: &WalkContext, cursor: Cursor, value: i32) -> Transition;

    /// Optional: Get a name for this walk (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
