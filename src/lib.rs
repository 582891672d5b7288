pub mod sort;
mod base_case;
mod config;
mod data;
mod merge;
mod sorter;
mod verify;

pub use sort::{sort, sort_by, sort_by_key};
pub use base_case::insertion_sort_by;
pub use config::{RunConfig, DEFAULT_SEED, THRESHOLD};
pub use data::{random_sequence, Distribution, ParseDistributionError};
pub use merge::{merge_by, merge_into_by};
pub use sorter::MergeSorter;
pub use verify::{assert_sorted, is_permutation, is_sorted, is_sorted_by};
