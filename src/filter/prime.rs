// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Buffer-relative primality.
//!
//! A term counts as "prime" when none of the terms generated before it divides
//! it. Only earlier terms greater than 1 are tried as divisors, and an earlier
//! term with the same value as the candidate is never used. This is not
//! integer primality: with seed `(0, 1, 2)` the term 15 qualifies because
//! neither 3 nor 5 ever appears in the sequence.

use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::sequence::{generate, Seed};

/// Test the term at `index` against every earlier term in `terms`.
pub fn is_buffer_prime(terms: &[i32], index: usize) -> bool {
    let candidate = terms[index];
    !terms[..index]
        .iter()
        .any(|&divisor| divisor > 1 && divisor != candidate && candidate % divisor == 0)
}

/// Generate terms `0..=n` and keep those that pass `is_buffer_prime`, in
/// generation order.
///
/// ```
/// use mibonacci::config::Config;
/// use mibonacci::filter::mi_primes;
/// use mibonacci::sequence::Seed;
///
/// let primes = mi_primes(Seed::new(0, 1, 2), 10, &Config::default()).unwrap();
/// assert_eq!(primes, vec![0, 1, 2, 7, 13, 15, 23]);
/// ```
pub fn mi_primes(seed: Seed, n: i32, config: &Config) -> Result<Vec<i32>> {
    let buffer = generate(seed, n, config)?;
    let terms = buffer.terms(n as usize);
    let primes: Vec<i32> = (0..terms.len())
        .filter(|&i| is_buffer_prime(terms, i))
        .map(|i| terms[i])
        .collect();
    debug!("{} of {} terms are buffer-prime", primes.len(), terms.len());
    Ok(primes)
}
