//! Input generators for tests and benchmarks.

use std::error::Error;
use std::fmt;
use std::str::FromStr;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Exp1;

/// Number of distinct values drawn by [`Distribution::FewUnique`].
const FEW_UNIQUE_VALUES: i64 = 16;
/// Scale applied to the unit exponential before truncating to an integer.
const EXPONENTIAL_SCALE: f64 = 1_000_000.0;

/// `n` pseudo-random integers. The same seed always yields the same sequence.
pub fn random_sequence(n: usize, seed: u64) -> Vec<i64> {
    Distribution::Uniform.generate(n, &mut StdRng::seed_from_u64(seed))
}

/// Shape of a generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    Uniform,
    Sorted,
    Reversed,
    FewUnique,
    Exponential,
    AllEqual,
}

impl Distribution {
    pub const ALL: [Distribution; 6] = [
        Distribution::Uniform,
        Distribution::Sorted,
        Distribution::Reversed,
        Distribution::FewUnique,
        Distribution::Exponential,
        Distribution::AllEqual,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Sorted => "sorted",
            Distribution::Reversed => "reversed",
            Distribution::FewUnique => "few-unique",
            Distribution::Exponential => "exponential",
            Distribution::AllEqual => "all-equal",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Vec<i64> {
        match self {
            Distribution::Uniform => (0..n).map(|_| rng.gen::<i64>()).collect(),
            Distribution::Sorted => (0..n as i64).collect(),
            Distribution::Reversed => (0..n as i64).rev().collect(),
            Distribution::FewUnique => (0..n)
                .map(|_| rng.gen_range(0..FEW_UNIQUE_VALUES))
                .collect(),
            Distribution::Exponential => (0..n)
                .map(|_| {
                    let x: f64 = rng.sample(Exp1);
                    (x * EXPONENTIAL_SCALE) as i64
                })
                .collect(),
            Distribution::AllEqual => {
                let value = rng.gen::<i64>();
                vec![value; n]
            }
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDistributionError {
    input: String,
}

impl fmt::Display for ParseDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Distribution::ALL.iter().map(|d| d.name()).collect();
        write!(f, "unknown distribution '{}', expected one of: {}", self.input, names.join(", "))
    }
}

impl Error for ParseDistributionError {}

impl FromStr for Distribution {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Distribution::ALL
            .iter()
            .copied()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| ParseDistributionError { input: s.to_string() })
    }
}
