//! The record produced by every builder call.
//!
//! `BuildResult` is a plain value type: it is created fresh on each call,
//! compared structurally, and never mutated after construction. Its serialized
//! field names (`oneInteger`, `oneDouble`, `oneString`, `oneDateTime`) are the
//! ones recorded in existing snapshot baselines and must stay stable.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Immutable output record of [`ResultBuilder`](crate::ResultBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    pub one_integer: i32,
    pub one_double: f64,
    pub one_string: String,
    pub one_date_time: NaiveDateTime,
}

impl BuildResult {
    /// Pretty-printed JSON, two-space indented, fields in declaration order.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Doubles and date-times go through `Debug` so that `0.0` keeps its fraction
// and the date-time keeps the ISO `T` separator.
impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BuildResult(oneInteger={}, oneDouble={:?}, oneString={}, oneDateTime={:?})",
            self.one_integer, self.one_double, self.one_string, self.one_date_time
        )
    }
}
