use std::env;
use log::info;
use once_cell::sync::Lazy;
use rand::{thread_rng, Rng};

/// Runs of at most this many elements are finished with insertion sort.
pub const THRESHOLD: usize = 16;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_NUM_RUNS: usize = 4;
pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 16;

const _: () = {
    assert!(THRESHOLD >= 1, "THRESHOLD must be at least 1");
    assert!(DEFAULT_MAX_ELEMENTS > THRESHOLD, "DEFAULT_MAX_ELEMENTS must exceed THRESHOLD");
};

/// Parameters for randomized runs, overridable through the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub num_runs: usize,
    pub max_elements: usize,
    pub randomize_seed: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            seed: DEFAULT_SEED,
            num_runs: DEFAULT_NUM_RUNS,
            max_elements: DEFAULT_MAX_ELEMENTS,
            randomize_seed: false,
        }
    }
}

impl RunConfig {
    /// Reads `SEED`, `RANDOMIZE_SEED`, `NUM_RUNS` and `MAX_ELEMENTS`.
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let randomize_seed = lookup("RANDOMIZE_SEED")
            .map(|val| val == "true")
            .unwrap_or(false);

        let seed = if randomize_seed {
            let seed: u64 = thread_rng().gen_range(0..u64::MAX);
            info!("Randomized seed: {}", seed);
            seed
        } else {
            lookup("SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SEED)
        };

        let num_runs = lookup("NUM_RUNS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_NUM_RUNS);

        // at least two elements, otherwise there is nothing to sort
        let max_elements = lookup("MAX_ELEMENTS")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n >= 2)
            .unwrap_or(DEFAULT_MAX_ELEMENTS);

        RunConfig {
            seed,
            num_runs,
            max_elements,
            randomize_seed,
        }
    }

    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static RunConfig {
        static CONFIG: Lazy<RunConfig> = Lazy::new(RunConfig::from_env);
        &CONFIG
    }
}
