// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-walk bookkeeping.

pub mod statistics;

pub use statistics::{Counters, Statistics};
