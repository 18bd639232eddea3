// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The secondary list of integers a walk is driven by.
//!
//! For the selector the entries are buffer positions; for the reconciler they
//! are target values. The list records its true length, so a list that ran out
//! before the configured maximum is simply shorter.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryList(Vec<i32>);

impl QueryList {
    pub fn get(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }

    /// The final entry, or `None` for an empty list.
    pub fn last(&self) -> Option<i32> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

impl From<Vec<i32>> for QueryList {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}
