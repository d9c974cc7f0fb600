pub use crate::builder::{ResultBuilder, DOUBLE_FACTOR, MAX_RANDOM_REPEAT};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::BuildError;
pub use crate::random::{RandomSource, SeededRandom};
pub use crate::result::BuildResult;

pub mod builder;
pub mod cli;
pub mod clock;
pub mod error;
pub mod random;
pub mod result;
