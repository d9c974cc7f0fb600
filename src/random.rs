//! Random number capability consumed by the builder.
//!
//! The builder only needs three kinds of draw, so the seam is a small trait
//! rather than `rand::RngCore` itself. [`SeededRandom`] is the production
//! implementation; it replays the same sequence for the same seed.

use std::num::NonZeroU32;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

// Using a concrete, seedable PRNG for determinism.
type SmallRng = Xoshiro256StarStar;

/// Source of pseudo-random draws.
///
/// Each draw advances the source, so the order of calls is part of the
/// result. Implementations are not expected to be shared across threads.
pub trait RandomSource {
    /// Uniform draw over the whole `i32` range.
    fn next_int(&mut self) -> i32;

    /// Uniform draw in `[0.0, 1.0)`.
    fn next_double(&mut self) -> f64;

    /// Uniform draw in `[0, bound)`.
    fn next_int_below(&mut self, bound: NonZeroU32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self) -> i32 {
        (**self).next_int()
    }

    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    fn next_int_below(&mut self, bound: NonZeroU32) -> u32 {
        (**self).next_int_below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_int(&mut self) -> i32 {
        (**self).next_int()
    }

    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    fn next_int_below(&mut self, bound: NonZeroU32) -> u32 {
        (**self).next_int_below(bound)
    }
}

/// Xoshiro256**-backed random source.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    prng: SmallRng,
}

impl SeededRandom {
    /// Deterministic source: the same seed always yields the same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            prng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Live source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            prng: SmallRng::from_entropy(),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self) -> i32 {
        self.prng.gen()
    }

    fn next_double(&mut self) -> f64 {
        // `Standard` for f64 samples the half-open interval [0, 1).
        self.prng.gen()
    }

    fn next_int_below(&mut self, bound: NonZeroU32) -> u32 {
        self.prng.gen_range(0..bound.get())
    }
}
