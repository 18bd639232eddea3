// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-place reversal.

/// Reverse `values` by swapping from both ends until the cursors meet.
///
/// ```
/// use mibonacci::filter::reverse;
///
/// let mut values = [0, 1, 2, 4, 7];
/// reverse(&mut values);
/// assert_eq!(values, [7, 4, 2, 1, 0]);
/// ```
pub fn reverse<T>(values: &mut [T]) {
    if values.len() < 2 {
        return;
    }
    let mut start = 0;
    let mut end = values.len() - 1;
    while start < end {
        values.swap(start, end);
        start += 1;
        end -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        reverse(&mut empty);
        assert!(empty.is_empty());

        let mut single = [42];
        reverse(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_even_and_odd_lengths() {
        let mut even = [1, 2, 3, 4];
        reverse(&mut even);
        assert_eq!(even, [4, 3, 2, 1]);

        let mut odd = [1, 2, 3];
        reverse(&mut odd);
        assert_eq!(odd, [3, 2, 1]);
    }

    #[test]
    fn test_involution() {
        for len in 0..=100 {
            let original: Vec<i32> = (0..len).map(|i| i * 3 - 7).collect();
            let mut values = original.clone();
            reverse(&mut values);
            if len > 1 {
                assert_ne!(values, original, "length {}", len);
            }
            reverse(&mut values);
            assert_eq!(values, original, "length {}", len);
        }
    }
}
