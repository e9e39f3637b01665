use rustc_hash::FxHashMap;

use crate::key::WeightKey;
use crate::IndexPair;

/// Finds one pair through a complement map of `weight + diff` to the first
/// index that produced it. A negative `diff` finds the same pairs as its
/// magnitude, since the map then points from the larger weight instead.
///
/// When several pairs qualify the result can differ from
/// [`find_pair_brute_force`](crate::find_pair_brute_force), but it always
/// satisfies the same difference condition and never pairs an index with itself.
pub fn find_pair(weights: &[f64], diff: f64) -> Option<IndexPair> {
    let mut index_by_target: FxHashMap<WeightKey, usize> =
        FxHashMap::with_capacity_and_hasher(weights.len(), Default::default());

    for (i, &w) in weights.iter().enumerate() {
        if let Some(key) = WeightKey::new(w + diff) {
            index_by_target.entry(key).or_insert(i);
        }
    }

    for (i, &w) in weights.iter().enumerate() {
        let Some(key) = WeightKey::new(w) else {
            continue;
        };

        match index_by_target.get(&key) {
            Some(&idx) if idx != i => return Some(IndexPair::new(idx, i)),
            _ => {}
        };
    }

    None
}

/// Finds every pair whose weights differ by `|diff|`.
///
/// Pairs come out grouped by the looked-up index, ascending (the one holding
/// the larger weight for a positive `diff`, the smaller for a negative one),
/// and within a group by the partner index, ascending. With a zero target
/// every index is also paired with itself, and equal-weight pairs show up
/// once from each side.
pub fn find_all_pairs(weights: &[f64], diff: f64) -> Vec<IndexPair> {
    let mut indices_by_target: FxHashMap<WeightKey, Vec<usize>> =
        FxHashMap::with_capacity_and_hasher(weights.len(), Default::default());

    for (i, &w) in weights.iter().enumerate() {
        if let Some(key) = WeightKey::new(w + diff) {
            indices_by_target.entry(key).or_insert_with(|| Vec::with_capacity(1)).push(i);
        }
    }

    let mut pairs = Vec::new();

    for (i, &w) in weights.iter().enumerate() {
        let Some(indices) = WeightKey::new(w).and_then(|key| indices_by_target.get(&key)) else {
            continue;
        };

        pairs.extend(indices.iter().map(|&k| IndexPair::new(i, k)));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(usize, usize)]) -> Vec<IndexPair> {
        raw.iter().map(|&(a, b)| IndexPair::new(a, b)).collect()
    }

    #[test]
    fn test_case_1() {
        let weights = [1.0, 3.0, 5.0, 7.0];

        assert_eq!(find_pair(&weights, 2.0), Some(IndexPair::new(0, 1)));
        assert_eq!(find_all_pairs(&weights, 2.0), pairs(&[(0, 1), (1, 2), (2, 3)]));
    }

    #[test]
    fn test_case_2() {
        let weights = [10.0, 20.0, 30.0];

        assert_eq!(find_pair(&weights, 100.0), None);
        assert!(find_all_pairs(&weights, 100.0).is_empty());
    }

    #[test]
    fn test_case_3() {
        let weights = [5.0, 5.0, 5.0];

        assert_eq!(find_pair(&weights, 0.0), Some(IndexPair::new(0, 1)));

        let expected = pairs(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 1),
            (1, 1),
            (1, 2),
            (0, 2),
            (1, 2),
            (2, 2),
        ]);
        assert_eq!(find_all_pairs(&weights, 0.0), expected);
    }

    #[test]
    fn test_case_4() {
        assert_eq!(find_pair(&[], 1.0), None);
        assert!(find_all_pairs(&[], 1.0).is_empty());
    }

    #[test]
    fn singleton() {
        assert_eq!(find_pair(&[4.0], 0.0), None);
        assert!(find_all_pairs(&[4.0], 4.0).is_empty());
        assert_eq!(find_all_pairs(&[4.0], 0.0), pairs(&[(0, 0)]));
    }

    #[test]
    fn first_producer_wins() {
        // 5.0 is produced by both 0 and 2, the map keeps 0
        let weights = [3.0, 5.0, 3.0];

        assert_eq!(find_pair(&weights, 2.0), Some(IndexPair::new(0, 1)));
        assert_eq!(find_all_pairs(&weights, 2.0), pairs(&[(0, 1), (1, 2)]));
    }

    #[test]
    fn may_diverge_from_brute_force() {
        let weights = [3.0, 5.0, 1.0];

        assert_eq!(crate::find_pair_brute_force(&weights, 2.0), Some(IndexPair::new(0, 1)));
        assert_eq!(find_pair(&weights, 2.0), Some(IndexPair::new(0, 2)));
        assert_eq!(find_all_pairs(&weights, 2.0), pairs(&[(0, 2), (0, 1)]));
    }

    #[test]
    fn negative_target_keys_on_signed_sum() {
        // map is 5 -> 0, 0 -> 1, 2 -> 2, 7 -> 3
        let weights = [7.0, 2.0, 4.0, 9.0];

        assert_eq!(find_pair(&weights, -2.0), Some(IndexPair::new(0, 3)));
        assert_eq!(find_all_pairs(&weights, -2.0), pairs(&[(0, 3), (1, 2)]));

        assert_eq!(find_pair(&weights, 2.0), Some(IndexPair::new(1, 2)));
        assert_eq!(find_all_pairs(&weights, 2.0), pairs(&[(1, 2), (0, 3)]));
    }

    #[test]
    fn nan_never_matches() {
        let weights = [f64::NAN, 1.0, f64::NAN, 3.0];

        assert_eq!(find_pair(&weights, 2.0), Some(IndexPair::new(1, 3)));
        assert_eq!(find_all_pairs(&weights, 2.0), pairs(&[(1, 3)]));

        assert_eq!(find_pair(&[f64::NAN, f64::NAN], 0.0), None);
        assert!(find_all_pairs(&[f64::NAN, f64::NAN], 0.0).is_empty());
        assert!(find_all_pairs(&weights, f64::NAN).is_empty());
    }

    #[test]
    fn signed_zeros_are_equal() {
        let weights = [-0.0, 0.0];

        assert_eq!(find_pair(&weights, 0.0), Some(IndexPair::new(0, 1)));
        assert_eq!(find_pair(&weights, -0.0), Some(IndexPair::new(0, 1)));
    }
}
