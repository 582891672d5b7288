#[cfg(test)]
mod buffered_sort {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rayon::prelude::*;
    use lazy_static::lazy_static;

    use mergesort::{assert_sorted, is_sorted_by, merge_by, random_sequence, sort, Distribution, MergeSorter, RunConfig, THRESHOLD};

    lazy_static! {
        static ref SEED: u64 = RunConfig::global().seed;
        static ref NUM_RUNS: usize = RunConfig::global().num_runs;
        static ref MAX_ELEMENTS: usize = RunConfig::global().max_elements;
    }

    #[test]
    fn sorter_matches_sort() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        let mut sorter = MergeSorter::new();
        for i in 0..*NUM_RUNS {
            let n = rng.gen_range(1..*MAX_ELEMENTS);
            let arr = random_sequence(n, SEED.wrapping_add(i as u64));
            let mut in_place = arr.clone();
            sorter.sort(&mut in_place);
            assert_sorted(&in_place);
            assert_eq!(in_place, sort(arr), "i={i}, n={n}, seed={}", *SEED);
        }
    }

    #[test]
    fn sorter_around_threshold() {
        let mut sorter = MergeSorter::new();
        for n in [THRESHOLD - 1, THRESHOLD, THRESHOLD + 1, 2 * THRESHOLD, 2 * THRESHOLD + 1] {
            let mut arr: Vec<usize> = (0..n).rev().collect();
            sorter.sort(&mut arr);
            assert_eq!(arr, (0..n).collect::<Vec<_>>(), "n={n}");
        }
    }

    #[test]
    fn sorter_all_distributions() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        let mut sorter = MergeSorter::with_capacity(4096);
        for distribution in Distribution::ALL {
            let mut arr = distribution.generate(4096, &mut rng);
            sorter.sort(&mut arr);
            assert_sorted(&arr);
        }
    }

    #[test]
    fn sorter_custom_comparator() {
        let mut arr = random_sequence(1000, *SEED);
        MergeSorter::new().sort_by(&mut arr, |a, b| b.cmp(a));
        assert!(is_sorted_by(&arr, |a, b| b.cmp(a)));
    }

    #[test]
    fn merge_sorted_halves() {
        let left: Vec<i64> = (0..100).map(|x| x * 2).collect();
        let right: Vec<i64> = (0..50).map(|x| x * 3).collect();
        let merged = merge_by(left, right, &mut |a: &i64, b: &i64| a.cmp(b));
        assert_eq!(merged.len(), 150);
        assert_sorted(&merged);
    }

    #[test]
    fn concurrent_independent_inputs() {
        let inputs: Vec<Vec<i64>> = (0..64)
            .map(|i| random_sequence(2000 + i, SEED.wrapping_add(i as u64)))
            .collect();

        let results: Vec<(Vec<i64>, Vec<i64>)> = inputs
            .into_par_iter()
            .map(|arr| {
                let mut expected = arr.clone();
                expected.sort();
                let mut buffered = arr.clone();
                MergeSorter::new().sort(&mut buffered);
                assert_eq!(buffered, expected);
                (sort(arr), expected)
            })
            .collect();

        for (sorted, expected) in results {
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn comparator_call_count_is_n_log_n() {
        let n = 1 << 12;
        let arr = random_sequence(n, *SEED);
        let mut calls = 0usize;
        let sorted = mergesort::sort_by(arr, |a, b| {
            calls += 1;
            a.cmp(b)
        });
        assert_sorted(&sorted);
        // n * log2(n) upper bound for top-down merge sort
        assert!(calls <= n * 12, "{calls} comparisons for n={n}");
    }
}
