//! Seedable pseudo-random number generator (xorshift64) and the
//! [`RandomSource`] seam particles draw their spawn values from.

/// Anything that can hand out uniform samples in `[0, 1)`.
///
/// Particle construction takes one of these so spawns are reproducible
/// under a fixed seed.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill the mantissa exactly.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Uniform integer in `ceil(min)..=floor(max)`.
pub fn random_int<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
    let low = min.ceil();
    let high = max.floor();
    ((rng.next_f64() * (high - low + 1.0)).floor() + low) as i64
}

/// Uniform real in `[min, max)`.
pub fn random_float<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.next_f64() * (max - min) + min
}
