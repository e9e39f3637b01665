use crate::IndexPair;

/// Returns the lexicographically first `(i, j)`, `i < j`, with
/// `|weights[j] - weights[i]| == |diff|`.
///
/// Comparison is exact, no tolerance is applied.
pub fn find_pair_brute_force(weights: &[f64], diff: f64) -> Option<IndexPair> {
    let diff = diff.abs();

    for (i, &wi) in weights.iter().enumerate() {
        for (j, &wj) in weights.iter().enumerate().skip(i + 1) {
            if (wj - wi).abs() == diff {
                return Some(IndexPair::new(i, j));
            }
        }
    }

    None
}
