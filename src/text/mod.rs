// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text input and output.
//!
//! Inputs are integers scanned the way `%d` reads them: leading whitespace is
//! skipped, then an optional sign and a run of digits. A number may end in the
//! middle of a token, so `3x` reads 3 and `12-3` reads 12 then -3. Reading
//! stops at end of input, where no digits follow, on a value outside `i32`, or
//! at a caller-supplied limit.
//! Output is one line with each value followed by a single space.

use crate::error::{Result, SequenceError};
use crate::sequence::{QueryList, Seed, SEED_LENGTH};

/// Integers in a `s0 s1 s2 n` header.
const HEADER_LENGTH: usize = SEED_LENGTH + 1;

/// Iterate over the leading run of parsable integers in `text`.
fn integers(text: &str) -> impl Iterator<Item = i32> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        let trimmed = rest.trim_start();
        let sign = usize::from(trimmed.starts_with(&['+', '-'][..]));
        let digits = trimmed[sign..].bytes().take_while(u8::is_ascii_digit).count();
        let (number, tail) = trimmed.split_at(sign + digits);
        rest = "";
        if digits == 0 {
            return None;
        }
        let value: i32 = number.parse().ok()?;
        rest = tail;
        Some(value)
    })
}

/// Parse at most `limit` integers.
pub fn parse_integers(text: &str, limit: usize) -> Vec<i32> {
    integers(text).take(limit).collect()
}

/// Parse the `s0 s1 s2 n` header used by the generating operations.
pub fn parse_header(text: &str) -> Result<(Seed, i32)> {
    let values = parse_integers(text, HEADER_LENGTH);
    match values.as_slice() {
        &[s0, s1, s2, n] => Ok((Seed::new(s0, s1, s2), n)),
        _ => Err(SequenceError::MalformedHeader {
            expected: HEADER_LENGTH,
            found: values.len(),
        }),
    }
}

/// Parse three seed terms followed by at most `limit` query entries.
pub fn parse_seeded_queries(text: &str, limit: usize) -> Result<(Seed, QueryList)> {
    let mut values = integers(text);
    let mut seed = [0; SEED_LENGTH];
    for (found, slot) in seed.iter_mut().enumerate() {
        *slot = values.next().ok_or(SequenceError::MalformedHeader {
            expected: SEED_LENGTH,
            found,
        })?;
    }
    let queries: Vec<i32> = values.take(limit).collect();
    Ok((Seed::from(seed), QueryList::from(queries)))
}

/// Render `values` as one line, each value followed by a space.
///
/// ```
/// use mibonacci::text::render_line;
///
/// assert_eq!(render_line(&[4, 7, 13]), "4 7 13 \n");
/// assert_eq!(render_line(&[]), "\n");
/// ```
pub fn render_line(values: &[i32]) -> String {
    let mut line: String = values.iter().map(|value| format!("{} ", value)).collect();
    line.push('\n');
    line
}
