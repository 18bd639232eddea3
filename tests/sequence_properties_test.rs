// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Properties of generation, reversal, prime filtering and selection that
//! should hold for any seed.

mod common;

use common::{reference_terms, SEEDS};
use mibonacci::config::Config;
use mibonacci::filter::{mi_primes, reverse};
use mibonacci::programs::{run, Operation};
use mibonacci::sequence::generate;
use mibonacci::text::render_line;
use mibonacci::walks::encrypt;
use mibonacci::{QueryList, Seed};

#[test]
fn test_generate_matches_reference() {
    let config = Config::default();
    for seed in SEEDS {
        for n in [0, 1, 2, 3, 7, 50, 101] {
            let buffer = generate(Seed::from(seed), n as i32, &config).unwrap();
            assert_eq!(
                buffer.terms(n),
                reference_terms(seed, n).as_slice(),
                "seed {:?} n {}",
                seed,
                n
            );
        }
    }
}

#[test]
fn test_reverse_program_is_involution() {
    let config = Config::default();
    for len in 0..=100 {
        let values: Vec<i32> = (0..len).map(|i| (i * 37) % 11 - 5).collect();
        let once = run(Operation::Reverse, &render_line(&values), &config).unwrap();
        let twice = run(Operation::Reverse, &once, &config).unwrap();
        assert_eq!(twice, render_line(&values), "length {}", len);
    }
}

#[test]
fn test_reverse_reference_terms() {
    let mut terms = reference_terms([0, 1, 2], 6);
    reverse(&mut terms);
    assert_eq!(terms, vec![13, 12, 7, 4, 2, 1, 0]);
}

#[test]
fn test_primes_follow_buffer_relative_rule() {
    let config = Config::default();
    for seed in SEEDS {
        let terms = reference_terms(seed, 40);
        let expected: Vec<i32> = (0..terms.len())
            .filter(|&i| {
                !(0..i).any(|j| {
                    terms[j] > 1 && terms[j] != terms[i] && terms[i] % terms[j] == 0
                })
            })
            .map(|i| terms[i])
            .collect();
        assert_eq!(mi_primes(Seed::from(seed), 40, &config).unwrap(), expected);
    }
}

#[test]
fn test_prime_never_emits_term_with_smaller_divisor() {
    let primes = mi_primes(Seed::new(2, 3, 4), 30, &Config::default()).unwrap();
    let terms = reference_terms([2, 3, 4], 30);
    for &p in &primes {
        let position = terms.iter().position(|&t| t == p).unwrap();
        assert!(terms[..position]
            .iter()
            .all(|&d| d <= 1 || d == p || p % d != 0));
    }
}

#[test]
fn test_encrypt_selects_positions() {
    let config = Config::default();
    for seed in SEEDS {
        let terms = reference_terms(seed, 40);
        let positions = vec![0, 3, 4, 9, 17, 40];
        let report =
            encrypt(Seed::from(seed), &QueryList::from(positions.clone()), &config).unwrap();
        let expected: Vec<i32> = positions.iter().map(|&p| terms[p as usize]).collect();
        assert_eq!(report.emitted, expected, "seed {:?}", seed);
    }
}

#[test]
fn test_encrypt_program_reaches_past_default_capacity() {
    let terms = reference_terms([0, 1, 2], 150);
    let output = run(Operation::Encrypt, "0 1 2 150", &Config::default()).unwrap();
    assert_eq!(output, render_line(&[terms[150]]));
}
