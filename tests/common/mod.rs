// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mibonacci::context::WalkContext;
use mibonacci::engine::{Cursor, Transition, Walk};
use mibonacci::Seed;

/// Seeds exercised by the property tests.
pub const SEEDS: [[i32; 3]; 5] = [
    [0, 1, 2],
    [1, 1, 1],
    [-5, 3, 10],
    [100, -100, 7],
    [i32::MAX - 2, i32::MAX - 1, i32::MAX],
];

pub fn default_seed() -> Seed {
    Seed::new(0, 1, 2)
}

/// Straightforward evaluation of the recurrence, written independently of the
/// crate's buffer so the two can be compared.
pub fn reference_terms(seed: [i32; 3], n: usize) -> Vec<i32> {
    let mut terms = seed.to_vec();
    for i in 3..=n {
        let value = 1i32
            .wrapping_add(terms[i - 1])
            .wrapping_add(terms[(i - 2) % 4]);
        terms.push(value);
    }
    terms.truncate(n + 1);
    terms
}

/// A walk that emits every even term until the counter reaches `limit`.
#[derive(Debug)]
pub struct EvenTerms {
    pub limit: usize,
}

impl Walk for EvenTerms {
    fn is_finished(&self, _ctx: &WalkContext, cursor: Cursor) -> bool {
        cursor.counter >= self.limit
    }

    fn examine(&self, _ctx: &WalkContext, _cursor: Cursor, value: i32) -> Transition {
        if value % 2 == 0 {
            Transition::Match
        } else {
            Transition::Advance
        }
    }

    fn name(&self) -> &str {
        "EvenTerms"
    }
}
