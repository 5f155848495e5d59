//! Input patterns for testing and benchmarking, limited to i32 values.
//!
//! All random patterns derive from one seed per process, set `OVERRIDE_SEED` to reproduce a
//! failing run.

use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("zipf needs len > 0 and exponent > 0");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// `sorted_percent` of the values at the front are already in order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| false)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| true)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saws(len, saw_count, |i| directions.get(i).is_some_and(|d| *d == 1))
}

/// Ascending and descending runs picked at random, each with a length in `range`.
pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    let mut vals = random_vec(len);
    if len == 0 {
        return vals;
    }

    let max_chunks = len / range.start + 1;
    let directions = random_uniform(max_chunks, 0..=1);
    let chunk_lens = random_uniform(max_chunks, (range.start as i32)..(range.end as i32));

    let mut start = 0;
    for (direction, chunk_len) in directions.iter().zip(&chunk_lens) {
        if start >= len {
            break;
        }

        let end = (start + *chunk_len as usize).min(len);
        sort_run(&mut vals[start..end], *direction == 1);
        start = end;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    sort_run(first_half, false);
    sort_run(second_half, true);

    vals
}

/// Makes every following call to a random pattern use a fresh seed.
///
/// By default all random patterns of one process derive from the same seed. Benchmarks should
/// call this so they don't measure the same input over and over.
pub fn use_random_seed_each_time() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED.");
    }

    FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if FIXED_SEED.load(Ordering::Acquire) {
        *PROCESS_SEED.get_or_init(|| {
            env::var("OVERRIDE_SEED")
                .ok()
                .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
                .unwrap_or_else(|| thread_rng().gen())
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static FIXED_SEED: AtomicBool = AtomicBool::new(true);
static PROCESS_SEED: OnceCell<u64> = OnceCell::new();

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn sort_run(run: &mut [i32], descending: bool) {
    if descending {
        run.sort_by_key(|&e| std::cmp::Reverse(e));
    } else {
        run.sort();
    }
}

/// Splits a random vec into `saw_count` runs, `descending(i)` picks the direction of run `i`.
fn saws(len: usize, saw_count: usize, descending: impl Fn(usize) -> bool) -> Vec<i32> {
    let mut vals = random_vec(len);
    if len == 0 {
        return vals;
    }

    let chunk_len = (len / saw_count.max(1)).max(1);
    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        sort_run(chunk, descending(i));
    }

    vals
}
