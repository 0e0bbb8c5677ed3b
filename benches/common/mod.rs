use std::ops::Range;

use critbit::RecordBuf;
use rand::{distr::Alphanumeric, seq::SliceRandom, Rng, SeedableRng};

/// Builds shuffled string records that share random prefixes, so the tree has to branch deep
/// inside the keys.
pub fn get_samples(
    seed: u64,
    prefix_count: usize,
    prefix_sizes: Range<usize>,
    suffix_count: usize,
    suffix_size: usize,
) -> Vec<RecordBuf> {
    let random_string = |seed: u64, size: usize| {
        rand::rngs::StdRng::seed_from_u64(seed)
            .sample_iter(Alphanumeric)
            .take(size)
            .collect::<Vec<u8>>()
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut keys = Vec::new();
    for prefix_size in prefix_sizes {
        let mut prefixes = Vec::default();
        for _ in 0..prefix_count {
            prefixes.push(random_string(rng.random(), prefix_size));
        }
        for suffix_index in 0..suffix_count {
            let mut key = Vec::new();
            for prefix in prefixes.iter().take(suffix_index % prefix_count) {
                key.extend_from_slice(prefix);
            }
            key.extend_from_slice(&random_string(rng.random(), suffix_size));
            keys.push(key);
        }
    }
    keys.sort_unstable();
    keys.dedup();
    keys.shuffle(&mut rng);
    keys.iter()
        .map(|key| RecordBuf::c_str(key).expect("alphanumeric keys have no NUL byte"))
        .collect()
}
