use std::fmt::{self, Display, Formatter};

mod brute_force;
pub mod config;
pub mod harness;
mod hashed;
mod key;
mod variant;

pub use brute_force::find_pair_brute_force;
pub use hashed::{find_all_pairs, find_pair};
pub use variant::{Outcome, ParseVariantError, Variant};

/// Two positions into a weight sequence, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPair {
    low: usize,
    high: usize,
}

impl IndexPair {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    /// Only the all-pairs finder can produce these, for a zero target.
    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        (pair.low, pair.high)
    }
}

impl Display for IndexPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
