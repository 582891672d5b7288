use std::error::Error;
use std::time::{Duration, Instant};
use std::{env, process};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use mergesort::{assert_sorted, sort, Distribution, MergeSorter, DEFAULT_SEED};

const USAGE: &str = "Usage: mergesort <size> <iterations> [distribution] [seed]";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let size = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let iterations = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };
    if iterations == 0 {
        return Err("iterations must be at least 1".into());
    }

    let distribution = match args.next() {
        Some(arg) => arg.parse::<Distribution>()?,
        None => Distribution::Uniform,
    };

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>()?,
        None => {
            eprintln!("No seed specified. Using {DEFAULT_SEED}");
            DEFAULT_SEED
        }
    };

    info!("size={size}, iterations={iterations}, distribution={distribution}, seed={seed}");

    let mut merge_times = Vec::with_capacity(iterations);
    let mut sorter_times = Vec::with_capacity(iterations);
    let mut std_times = Vec::with_capacity(iterations);
    let mut sorter = MergeSorter::with_capacity(size);

    for i in 0..iterations {
        let data = distribution.generate(size, &mut StdRng::seed_from_u64(seed.wrapping_add(i as u64)));
        let mut data_sorter = data.clone();
        let mut data_std = data.clone();

        let start = Instant::now();
        let sorted = sort(data);
        merge_times.push(start.elapsed());

        let start = Instant::now();
        sorter.sort(&mut data_sorter);
        sorter_times.push(start.elapsed());

        let start = Instant::now();
        data_std.sort();
        std_times.push(start.elapsed());

        assert_sorted(&sorted);
        assert_sorted(&data_sorter);
        assert_eq!(sorted, data_std, "merge sort disagrees with std sort at iteration {i}");
    }

    println!("Merge sort: Avg {:?}", average(&merge_times));
    println!("Merge sort (reused buffer): Avg {:?}", average(&sorter_times));
    println!("std stable sort: Avg {:?}", average(&std_times));

    Ok(())
}

fn average(measurements: &[Duration]) -> Duration {
    measurements.iter().sum::<Duration>() / measurements.len() as u32
}
