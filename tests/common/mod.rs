//! Shared fixture for the integration tests.
//!
//! Every harness builds from the same pinned state: a random source seeded
//! with 1234 and a clock fixed at 2022-10-01T10:30:00Z viewed in UTC.

#![allow(dead_code)]

use snapshot_testing::{FixedClock, ResultBuilder, SeededRandom};

pub const SEED: u64 = 1234;
pub const FIXED_INSTANT: &str = "2022-10-01T10:30:00.000Z";

pub type PinnedBuilder = ResultBuilder<SeededRandom, FixedClock>;

/// A freshly constructed builder in the pinned state.
pub fn pinned_builder() -> PinnedBuilder {
    let clock = FixedClock::parse_rfc3339(FIXED_INSTANT).expect("fixture instant parses");
    ResultBuilder::new(SeededRandom::from_seed(SEED), clock)
}
