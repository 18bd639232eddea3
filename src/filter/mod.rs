// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Post-processing over generated sequences.
//!
//! - `reverse`: in-place two-ended reversal
//! - `prime`: primality relative to the terms already generated

pub mod prime;
pub mod reverse;

pub use prime::{is_buffer_prime, mi_primes};
pub use reverse::reverse;
