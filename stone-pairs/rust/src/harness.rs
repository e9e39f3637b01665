//! Fixed example inputs run through the finders, compared against hard-coded
//! expectations.

use std::fmt::{self, Display, Formatter};

use tracing::{debug, warn};

use crate::{IndexPair, Outcome, Variant};

#[derive(Debug, Clone)]
pub struct Case {
    pub name: &'static str,
    pub weights: Vec<f64>,
    pub diff: f64,
    pub brute_force: Option<IndexPair>,
    pub hash_single: Option<IndexPair>,
    pub hash_all: Vec<IndexPair>,
}

impl Case {
    pub fn expected(&self, variant: Variant) -> Outcome {
        match variant {
            Variant::BruteForce => Outcome::Pair(self.brute_force),
            Variant::HashSingle => Outcome::Pair(self.hash_single),
            Variant::HashAll => Outcome::Pairs(self.hash_all.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub case: &'static str,
    pub variant: Variant,
    pub expected: Outcome,
    pub actual: Outcome,
}

impl Check {
    pub fn is_success(&self) -> bool {
        self.expected == self.actual
    }
}

impl Display for Check {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_success() { "Success" } else { "Fail" };
        write!(
            f,
            "{} [{}] expected: {}, actual: {} => {}",
            self.case, self.variant, self.expected, self.actual, verdict
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    checks: Vec<Check>,
}

impl Report {
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.is_success()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }
}

fn pair(a: usize, b: usize) -> Option<IndexPair> {
    Some(IndexPair::new(a, b))
}

fn pairs(raw: &[(usize, usize)]) -> Vec<IndexPair> {
    raw.iter().map(|&(a, b)| IndexPair::new(a, b)).collect()
}

pub fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "evenly spaced",
            weights: vec![1.0, 3.0, 5.0, 7.0],
            diff: 2.0,
            brute_force: pair(0, 1),
            hash_single: pair(0, 1),
            hash_all: pairs(&[(0, 1), (1, 2), (2, 3)]),
        },
        Case {
            name: "no match",
            weights: vec![10.0, 20.0, 30.0],
            diff: 100.0,
            brute_force: None,
            hash_single: None,
            hash_all: vec![],
        },
        Case {
            name: "equal weights",
            weights: vec![5.0, 5.0, 5.0],
            diff: 0.0,
            brute_force: pair(0, 1),
            hash_single: pair(0, 1),
            hash_all: pairs(&[
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 1),
                (1, 1),
                (1, 2),
                (0, 2),
                (1, 2),
                (2, 2),
            ]),
        },
        Case {
            name: "empty",
            weights: vec![],
            diff: 1.0,
            brute_force: None,
            hash_single: None,
            hash_all: vec![],
        },
        Case {
            name: "diverging first pair",
            weights: vec![3.0, 5.0, 1.0],
            diff: 2.0,
            brute_force: pair(0, 1),
            hash_single: pair(0, 2),
            hash_all: pairs(&[(0, 2), (0, 1)]),
        },
        Case {
            name: "negative target",
            weights: vec![7.0, 2.0, 4.0, 9.0],
            diff: -2.0,
            brute_force: pair(0, 3),
            hash_single: pair(0, 3),
            hash_all: pairs(&[(0, 3), (1, 2)]),
        },
        Case {
            name: "not a number",
            weights: vec![f64::NAN, 1.0, f64::NAN, 3.0],
            diff: 2.0,
            brute_force: pair(1, 3),
            hash_single: pair(1, 3),
            hash_all: pairs(&[(1, 3)]),
        },
    ]
}

pub fn check(case: &Case, variant: Variant) -> Check {
    let actual = variant.find(&case.weights, case.diff);
    let check = Check {
        case: case.name,
        variant,
        expected: case.expected(variant),
        actual,
    };

    if check.is_success() {
        debug!(case = case.name, %variant, "check passed");
    } else {
        warn!(case = case.name, %variant, expected = %check.expected, actual = %check.actual, "check failed");
    }

    check
}

pub fn run(cases: &[Case], variants: &[Variant]) -> Report {
    let checks = cases
        .iter()
        .flat_map(|case| variants.iter().map(move |&variant| check(case, variant)))
        .collect();

    Report { checks }
}
