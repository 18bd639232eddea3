// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation, filtering and reconciliation of Mibonacci sequences.
//!
//! A Mibonacci sequence starts from three seed terms; every later term is
//! `1 + term[i-1] + term[(i-2) mod 4]`, computed with 32-bit wrapping
//! arithmetic.
//!
//! # Architecture
//!
//! ## Recurrence
//!
//! `sequence` holds the seed, the capacity-bounded `SequenceBuffer` and the
//! single recurrence function every operation shares.
//!
//! ## Filters
//!
//! `filter` post-processes a generated buffer:
//! - Reverse (two-ended swap)
//! - Buffer-relative primality
//!
//! ## Walks
//!
//! The query-driven operations move two cursors, `counter` over the buffer and
//! `index` over a query list. `engine::WalkEngine` owns the cursors and applies
//! one of three transitions per step (Match, Overshoot, Advance); the walks in
//! `walks` only choose the transition:
//! - `Selector` ("encrypt") emits terms at the listed positions
//! - `Reconciler` ("checker") matches terms against listed values, retrying a
//!   slot once after an overshoot
//!
//! ## Programs
//!
//! `programs::run` maps each operation's input text to the line it prints.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod filter;
pub mod programs;
pub mod sequence;
pub mod state;
pub mod text;
pub mod walks;

// Re-export commonly used types
pub use config::Config;
pub use context::WalkContext;
pub use engine::{Transition, Walk, WalkEngine};
pub use error::SequenceError;
pub use programs::{run, Operation};
pub use sequence::{QueryList, Seed, SequenceBuffer};
