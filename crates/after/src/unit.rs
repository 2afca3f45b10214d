//! Canonical time units and the surface spellings that map onto them.
//!
//! Every accepted token (symbol, singular, plural) is its own key in
//! [`UNIT_SPELLINGS`]. Resolution is always by the full token, so a new
//! unit that happens to share a first letter with an existing one cannot be
//! misclassified.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::Serialize;

use crate::error::DurationError;

/// 24 hours.
pub const DAY: TimeDelta = TimeDelta::days(1);

/// 7 days.
pub const WEEK: TimeDelta = TimeDelta::weeks(1);

const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SECOND: i64 = 1_000 * NANOS_PER_MILLI;

/// A canonical unit. Each has a fixed length; there are no calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

/// Surface token → canonical unit. Case-sensitive.
pub const UNIT_SPELLINGS: [(&str, Unit); 18] = [
    ("ms", Unit::Millisecond),
    ("millisecond", Unit::Millisecond),
    ("milliseconds", Unit::Millisecond),
    ("s", Unit::Second),
    ("second", Unit::Second),
    ("seconds", Unit::Second),
    ("m", Unit::Minute),
    ("minute", Unit::Minute),
    ("minutes", Unit::Minute),
    ("h", Unit::Hour),
    ("hour", Unit::Hour),
    ("hours", Unit::Hour),
    ("d", Unit::Day),
    ("day", Unit::Day),
    ("days", Unit::Day),
    ("w", Unit::Week),
    ("week", Unit::Week),
    ("weeks", Unit::Week),
];

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
    ];

    /// Resolve an exact surface token. Returns `None` for anything not in
    /// [`UNIT_SPELLINGS`], including different casing.
    pub fn from_token(token: &str) -> Option<Unit> {
        UNIT_SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == token)
            .map(|(_, unit)| *unit)
    }

    /// Length of one unit in nanoseconds.
    pub const fn nanoseconds(self) -> i64 {
        match self {
            Unit::Millisecond => NANOS_PER_MILLI,
            Unit::Second => NANOS_PER_SECOND,
            Unit::Minute => 60 * NANOS_PER_SECOND,
            Unit::Hour => 3_600 * NANOS_PER_SECOND,
            Unit::Day => 86_400 * NANOS_PER_SECOND,
            Unit::Week => 7 * 86_400 * NANOS_PER_SECOND,
        }
    }

    /// Length of one unit.
    pub fn per_unit(self) -> TimeDelta {
        TimeDelta::nanoseconds(self.nanoseconds())
    }

    /// The shortest accepted spelling.
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
        }
    }

    /// The singular canonical name, e.g. `"minute"`.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
        }
    }

    /// All spellings that resolve to this unit.
    pub fn spellings(self) -> impl Iterator<Item = &'static str> {
        UNIT_SPELLINGS
            .iter()
            .filter(move |(_, unit)| *unit == self)
            .map(|(spelling, _)| *spelling)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_token(s).ok_or_else(|| DurationError::UnsupportedUnit(s.to_string()))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
