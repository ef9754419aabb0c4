use rand::Rng as _;
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

/// Polynomial rolling hash over UTF-16 code units with wrapping 32-bit
/// signed arithmetic (`seed = seed * 31 + unit`). The catalog's rating and
/// signature are keyed on this value, so the wraparound behavior is part of
/// the output contract and must not change.
pub fn seed(text: &str) -> i32 {
    let mut seed: i32 = 0;
    for unit in text.encode_utf16() {
        seed = seed.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    seed
}

/// First draw in [0,1) from a deterministic generator keyed on `seed`.
/// Negative and positive seeds map to distinct keys via the `as u32` cast.
pub fn seeded_uniform(seed: i32) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed as u32));
    rng.sample(rand::distributions::Standard)
}
