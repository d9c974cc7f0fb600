//! The result builder.
//!
//! `ResultBuilder` owns its two collaborators for its whole lifetime. Building
//! from an explicit input is pure; building from the sources consumes three
//! draws from the random source, always in the same order (integer, double,
//! bounded integer), and reads the clock once.

use std::num::NonZeroU32;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::error::BuildError;
use crate::random::RandomSource;
use crate::result::BuildResult;

/// Multiplier applied to the input to obtain `oneDouble`.
pub const DOUBLE_FACTOR: f64 = 3.7;

/// Exclusive upper bound for the random repeat count.
pub const MAX_RANDOM_REPEAT: NonZeroU32 = match NonZeroU32::new(10) {
    Some(bound) => bound,
    None => panic!("repeat bound must be non-zero"),
};

const REPEATED: &str = "a";

/// The date-time attached to every input-driven result.
pub fn reference_date_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 5, 3)
        .and_then(|date| date.and_hms_opt(13, 46, 18))
        .expect("2022-05-03T13:46:18 is a valid date-time") // Safe: constant literal
}

/// Produces [`BuildResult`] values from an input or from injected sources.
///
/// The random source is advanced by [`build_from_sources`](Self::build_from_sources),
/// which is why that call takes `&mut self`. Sharing one builder across
/// threads requires the caller to serialize access.
#[derive(Debug, Clone)]
pub struct ResultBuilder<R, C> {
    random: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> ResultBuilder<R, C> {
    pub fn new(random: R, clock: C) -> Self {
        Self { random, clock }
    }

    /// Deterministic result derived from `input`.
    ///
    /// Fails with [`BuildError::NegativeInput`] when `input < 0`, since the
    /// input doubles as a repeat count.
    pub fn build_from_input(&self, input: i32) -> Result<BuildResult, BuildError> {
        let count = usize::try_from(input).map_err(|_| BuildError::NegativeInput { input })?;
        let result = BuildResult {
            one_integer: input,
            one_double: DOUBLE_FACTOR * f64::from(input),
            one_string: REPEATED.repeat(count),
            one_date_time: reference_date_time(),
        };
        debug!(input, "built result from input");
        Ok(result)
    }

    /// Result drawn from the random source and the clock.
    pub fn build_from_sources(&mut self) -> BuildResult {
        let one_integer = self.random.next_int();
        let one_double = self.random.next_double();
        let repeat = self.random.next_int_below(MAX_RANDOM_REPEAT);
        trace!(one_integer, one_double, repeat, "drew random values");

        let one_date_time = self.clock.now();
        debug!(%one_date_time, "built result from sources");

        BuildResult {
            one_integer,
            one_double,
            // u32 -> usize is lossless on every supported target.
            one_string: REPEATED.repeat(repeat as usize),
            one_date_time,
        }
    }

    pub fn random(&self) -> &R {
        &self.random
    }
}
