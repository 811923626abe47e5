//! Duration units and their accepted spellings.
//!
//! Every unit converts to milliseconds by a fixed factor. There is no notion
//! of weeks, months or years here: those need a calendar.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    const MS_PER_SECOND: f64 = 1_000.0;
    const MS_PER_MINUTE: f64 = 60.0 * Self::MS_PER_SECOND;
    const MS_PER_HOUR: f64 = 60.0 * Self::MS_PER_MINUTE;
    const MS_PER_DAY: f64 = 24.0 * Self::MS_PER_HOUR;

    /// All units, largest first.
    pub const ALL: [Unit; 5] = [
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// Look up a unit by one of its aliases.
    ///
    /// Matching is exact and case-sensitive: `"M"` or `"mins"` are not
    /// minutes, and `"Ms"` is not milliseconds.
    pub fn from_alias(token: &str) -> Option<Unit> {
        match token {
            "d" | "day" | "days" => Some(Unit::Day),
            "h" | "hour" | "hours" => Some(Unit::Hour),
            "m" | "min" | "minute" | "minutes" => Some(Unit::Minute),
            "s" | "sec" | "second" | "seconds" => Some(Unit::Second),
            "ms" | "millisecond" | "milliseconds" => Some(Unit::Millisecond),
            _ => None,
        }
    }

    pub fn factor_ms(self) -> f64 {
        match self {
            Unit::Day => Self::MS_PER_DAY,
            Unit::Hour => Self::MS_PER_HOUR,
            Unit::Minute => Self::MS_PER_MINUTE,
            Unit::Second => Self::MS_PER_SECOND,
            Unit::Millisecond => 1.0,
        }
    }

    /// Every accepted spelling, the canonical symbol first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Unit::Day => &["d", "day", "days"],
            Unit::Hour => &["h", "hour", "hours"],
            Unit::Minute => &["m", "min", "minute", "minutes"],
            Unit::Second => &["s", "sec", "second", "seconds"],
            Unit::Millisecond => &["ms", "millisecond", "milliseconds"],
        }
    }

    pub fn symbol(self) -> &'static str {
        self.aliases()[0]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_alias(s).ok_or_else(|| Error::UnknownUnit {
            token: s.to_string(),
        })
    }
}
