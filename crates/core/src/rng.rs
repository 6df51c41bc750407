//! Sampling helpers over the explicitly threaded ChaCha stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub(crate) fn random_usize(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = max_value - min_value + 1;
    min_value + (rng.next_u64() as usize % range_size)
}

pub(crate) fn random_unit_f32(rng: &mut ChaCha8Rng) -> f32 {
    // 24 bits so the conversion to f32 is exact.
    (rng.next_u32() >> 8) as f32 / (1 << 24) as f32
}

pub(crate) fn random_angle(rng: &mut ChaCha8Rng) -> f32 {
    random_unit_f32(rng) * std::f32::consts::TAU
}
