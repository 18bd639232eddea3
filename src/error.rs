// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sequence generation and input parsing.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Errors that can occur while generating or consuming a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum SequenceError {
    /// The input did not start with the integers the operation needs.
    #[error("malformed header: expected {expected} integers, found {found}")]
    MalformedHeader { expected: usize, found: usize },

    /// A generation length below zero was requested.
    #[error("cannot generate a sequence of negative length {n}")]
    NegativeLength { n: i32 },

    /// A term was requested beyond the buffer's fixed capacity.
    #[error("term {index} does not fit in a buffer of {capacity} terms")]
    CapacityExceeded { index: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, SequenceError>;
