use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::IndexPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    BruteForce,
    HashSingle,
    HashAll,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown variant '{0}', expected one of: brute-force, hash-single, hash-all")]
pub struct ParseVariantError(pub String);

/// What a finder returned, in a shape every variant can share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pair(Option<IndexPair>),
    Pairs(Vec<IndexPair>),
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::BruteForce, Variant::HashSingle, Variant::HashAll];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::BruteForce => "brute-force",
            Variant::HashSingle => "hash-single",
            Variant::HashAll => "hash-all",
        }
    }

    pub fn find(self, weights: &[f64], diff: f64) -> Outcome {
        match self {
            Variant::BruteForce => Outcome::Pair(crate::find_pair_brute_force(weights, diff)),
            Variant::HashSingle => Outcome::Pair(crate::find_pair(weights, diff)),
            Variant::HashAll => Outcome::Pairs(crate::find_all_pairs(weights, diff)),
        }
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pair(Some(pair)) => write!(f, "{pair}"),
            Outcome::Pair(None) => f.write_str("not found"),
            Outcome::Pairs(pairs) => {
                f.write_str("[")?;
                for (i, pair) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{pair}")?;
                }
                f.write_str("]")
            }
        }
    }
}
