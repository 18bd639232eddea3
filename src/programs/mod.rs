// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The five sequence programs, from input text to output text.
//!
//! | Operation  | Input                                   | Output                       |
//! |------------|-----------------------------------------|------------------------------|
//! | `reverse`  | up to `max_terms` integers              | the integers, reversed       |
//! | `generate` | `s0 s1 s2 n`                            | terms `0..=n`                |
//! | `encrypt`  | `s0 s1 s2` then up to `max_terms` positions | terms at those positions |
//! | `check`    | `s0 s1 s2` then up to `max_terms` values    | values reconciled        |
//! | `prime`    | `s0 s1 s2 n`                            | buffer-prime terms `0..=n`   |
//!
//! A malformed `s0 s1 s2 n` header is not an error: `generate` and `prime`
//! print `HEADER_DIAGNOSTIC` instead of numbers.

use log::{debug, warn};
use strum_macros::{Display, EnumIter};

use crate::config::Config;
use crate::error::{Result, SequenceError};
use crate::filter::{mi_primes, reverse};
use crate::sequence::{generate, Seed};
use crate::text::{parse_header, parse_integers, parse_seeded_queries, render_line};
use crate::walks::{check, encrypt};

/// Printed in place of numbers when the `s0 s1 s2 n` header cannot be read.
pub const HEADER_DIAGNOSTIC: &str =
    "Incorrectly formatted input file, should be of the format: Mib(0), Mib(1), Mib(2), n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Reverse,
    Generate,
    Encrypt,
    Check,
    Prime,
}

impl Operation {
    /// File read when no input path is given.
    pub fn default_input(self) -> &'static str {
        match self {
            Operation::Reverse => "task1.txt",
            Operation::Generate => "task2.txt",
            Operation::Encrypt => "task3.txt",
            Operation::Check => "task4.txt",
            Operation::Prime => "task5.txt",
        }
    }
}

/// Run `operation` on `input` and return the text it prints.
///
/// ```
/// use mibonacci::config::Config;
/// use mibonacci::programs::{run, Operation};
///
/// let output = run(Operation::Generate, "0 1 2 6", &Config::default()).unwrap();
/// assert_eq!(output, "0 1 2 4 7 12 13 \n");
/// ```
pub fn run(operation: Operation, input: &str, config: &Config) -> Result<String> {
    debug!("running {} (max_terms={})", operation, config.max_terms);
    match operation {
        Operation::Reverse => {
            let mut values = parse_integers(input, config.max_terms);
            reverse(&mut values);
            Ok(render_line(&values))
        }
        Operation::Generate => with_header(input, |seed, n| {
            let buffer = generate(seed, n, config)?;
            Ok(render_line(buffer.terms(n as usize)))
        }),
        Operation::Prime => with_header(input, |seed, n| {
            Ok(render_line(&mi_primes(seed, n, config)?))
        }),
        Operation::Encrypt => {
            let (seed, positions) = parse_seeded_queries(input, config.max_terms)?;
            Ok(render_line(&encrypt(seed, &positions, config)?.emitted))
        }
        Operation::Check => {
            let (seed, targets) = parse_seeded_queries(input, config.max_terms)?;
            Ok(render_line(&check(seed, &targets, config)?.emitted))
        }
    }
}

/// Parse the `s0 s1 s2 n` header and hand it to `body`, or print the
/// diagnostic if it is malformed.
fn with_header<F>(input: &str, body: F) -> Result<String>
where
    F: FnOnce(Seed, i32) -> Result<String>,
{
    match parse_header(input) {
        Ok((seed, n)) => body(seed, n),
        Err(err @ SequenceError::MalformedHeader { .. }) => {
            warn!("{}", err);
            Ok(format!("{}\n", HEADER_DIAGNOSTIC))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn run_default(operation: Operation, input: &str) -> Result<String> {
        run(operation, input, &Config::default())
    }

    #[test]
    fn test_reverse() {
        assert_eq!(run_default(Operation::Reverse, "1 2 3").unwrap(), "3 2 1 \n");
        assert_eq!(run_default(Operation::Reverse, "").unwrap(), "\n");
        assert_eq!(run_default(Operation::Reverse, "1 2 3x").unwrap(), "3 2 1 \n");
    }

    #[test]
    fn test_reverse_reads_at_most_max_terms() {
        let output = run(Operation::Reverse, "1 2 3 4 5", &Config::new(3)).unwrap();
        assert_eq!(output, "3 2 1 \n");
    }

    #[test]
    fn test_generate() {
        assert_eq!(
            run_default(Operation::Generate, "0 1 2 6").unwrap(),
            "0 1 2 4 7 12 13 \n"
        );
    }

    #[test]
    fn test_huge_max_terms_runs_normally() {
        for max_terms in [usize::MAX, 1 << 61] {
            let config = Config::new(max_terms);
            assert_eq!(
                run(Operation::Generate, "0 1 2 6", &config).unwrap(),
                "0 1 2 4 7 12 13 \n"
            );
            assert_eq!(
                run(Operation::Prime, "0 1 2 10", &config).unwrap(),
                "0 1 2 7 13 15 23 \n"
            );
            assert_eq!(run(Operation::Reverse, "1 2 3", &config).unwrap(), "3 2 1 \n");
            assert_eq!(
                run(Operation::Encrypt, "0 1 2 3 4 6", &config).unwrap(),
                "4 7 13 \n"
            );
            assert_eq!(
                run(Operation::Check, "0 1 2 0 1 2 5 4", &config).unwrap(),
                "0 1 2 \n"
            );
        }
    }

    #[test]
    fn test_malformed_header_diagnostic() {
        for operation in [Operation::Generate, Operation::Prime] {
            let output = run_default(operation, "0 1 2").unwrap();
            assert_eq!(output, format!("{}\n", HEADER_DIAGNOSTIC));
            assert!(output.split_whitespace().all(|token| token.parse::<i32>().is_err()));
        }
    }

    #[test]
    fn test_negative_length_is_error() {
        assert_eq!(
            run_default(Operation::Generate, "0 1 2 -1"),
            Err(SequenceError::NegativeLength { n: -1 })
        );
    }

    #[test]
    fn test_prime() {
        assert_eq!(
            run_default(Operation::Prime, "0 1 2 10").unwrap(),
            "0 1 2 7 13 15 23 \n"
        );
    }

    #[test]
    fn test_encrypt() {
        assert_eq!(run_default(Operation::Encrypt, "0 1 2 3 4 6").unwrap(), "4 7 13 \n");
        assert_eq!(run_default(Operation::Encrypt, "0 1 2").unwrap(), "\n");
    }

    #[test]
    fn test_check() {
        assert_eq!(run_default(Operation::Check, "0 1 2 0 1 2 5 4").unwrap(), "0 1 2 \n");
        assert_eq!(run_default(Operation::Check, "0 1 2").unwrap(), "\n");
    }

    #[test]
    fn test_missing_seed_is_error() {
        assert_eq!(
            run_default(Operation::Check, "7"),
            Err(SequenceError::MalformedHeader { expected: 3, found: 1 })
        );
    }

    #[test]
    fn test_operation_names_and_inputs() {
        let names: Vec<String> = Operation::iter().map(|op| op.to_string()).collect();
        assert_eq!(names, vec!["reverse", "generate", "encrypt", "check", "prime"]);

        let inputs: Vec<&str> = Operation::iter().map(Operation::default_input).collect();
        assert_eq!(inputs, vec!["task1.txt", "task2.txt", "task3.txt", "task4.txt", "task5.txt"]);
    }
}
