//! Generic merge sort parameterized by an ordering function
//!
//! Classic top-down merge sort: split at the midpoint, sort each half,
//! merge. Every step allocates a fresh vector rather than sorting in
//! place, so the input slice is never mutated. O(n log n) comparisons
//! with per-level allocation.

use std::cmp::Ordering;

/// Sort a slice into a new vector using the given comparator.
///
/// The result is a permutation of `elements`, non-decreasing under `cmp`.
/// The sort is stable: equal elements keep their input order.
pub fn sort<T, F>(elements: &[T], cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if elements.len() <= 1 {
        return elements.to_vec();
    }

    let mid = elements.len() / 2;
    let left = sort(&elements[..mid], cmp);
    let right = sort(&elements[mid..], cmp);

    merge(&left, &right, cmp)
}

/// Merge two sorted slices into one sorted vector.
///
/// Ties take the left element, which is what keeps the overall sort
/// stable (the left half precedes the right half in the original input).
fn merge<T, F>(left: &[T], right: &[T], cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn asc(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    fn desc(a: &i64, b: &i64) -> Ordering {
        b.cmp(a)
    }

    fn is_sorted_by<T, F: Fn(&T, &T) -> Ordering>(v: &[T], cmp: &F) -> bool {
        v.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
    }

    #[test]
    fn test_empty_input() {
        let sorted = sort(&[] as &[i64], &asc);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_single_element() {
        assert_eq!(sort(&[42i64], &asc), vec![42]);
    }

    #[test]
    fn test_ascending_basic() {
        let sorted = sort(&[38i64, 27, 43, 3, 9, 82, 10], &asc);
        assert_eq!(sorted, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn test_descending_basic() {
        let sorted = sort(&[1i64, 5, 3], &desc);
        assert_eq!(sorted, vec![5, 3, 1]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let sorted = sort(&[2i64, 1, 2, 1, 2], &asc);
        assert_eq!(sorted, vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![3i64, 1, 2];
        let _ = sort(&input, &asc);
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn test_strings_sort() {
        let input: Vec<String> = ["banana", "apple", "cherry"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let sorted = sort(&input, &|a: &String, b: &String| a.cmp(b));
        assert_eq!(sorted, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_stability() {
        // Sort pairs by key only; equal keys must keep input order of the
        // attached index.
        let input: Vec<(i64, usize)> =
            vec![(2, 0), (1, 1), (2, 2), (1, 3), (2, 4), (1, 5)];
        let cmp = |a: &(i64, usize), b: &(i64, usize)| a.0.cmp(&b.0);
        let sorted = sort(&input, &cmp);
        assert_eq!(
            sorted,
            vec![(1, 1), (1, 3), (1, 5), (2, 0), (2, 2), (2, 4)]
        );
    }

    #[test]
    fn test_random_permutation_properties() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..50 {
            let len = rng.gen_range(0..200);
            let input: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..50)).collect();

            let sorted = sort(&input, &asc);

            assert_eq!(sorted.len(), input.len());
            assert!(is_sorted_by(&sorted, &asc));

            // Permutation check: same multiset of values
            let mut expected = input.clone();
            expected.sort();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_idempotence() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<i64> = (0..100).map(|_| rng.gen_range(-1000..1000)).collect();
        let once = sort(&input, &desc);
        let twice = sort(&once, &desc);
        assert_eq!(once, twice);
    }
}
