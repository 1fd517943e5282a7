/// Random number generator (xorshift32)
///
/// State must never be zero; `seed_state` maps zero to a fixed constant.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

pub(super) fn seed_state(seed: u32) -> u32 {
    if seed == 0 { 0x9e37_79b9 } else { seed }
}

/// Uniform float in `[0, 1)` built from the top 24 bits.
#[inline]
pub(super) fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform float in `[min, max)`.
#[inline]
pub(super) fn range_f32(state: &mut u32, min: f32, max: f32) -> f32 {
    unit_f32(state) * (max - min) + min
}

/// Uniform index in `0..len`; `len` must be non-zero.
#[inline]
pub(super) fn index(state: &mut u32, len: usize) -> usize {
    ((unit_f32(state) * len as f32) as usize).min(len - 1)
}
