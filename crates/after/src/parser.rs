//! Relative duration parsing.
//!
//! Accepts exactly one `[sign] magnitude [" "] unit` term, anchored at both
//! ends:
//!
//! ```text
//! expression := [sign] digits [" "] unit
//! sign       := "+" | "-"
//! digits     := nonzero-digit { digit }
//! unit       := ms | millisecond(s) | s | second(s) | m | minute(s)
//!             | h | hour(s) | d | day(s) | w | week(s)
//! ```
//!
//! A missing sign means `+`. Zero, leading zeros, tabs, repeated spaces and
//! any surrounding text are rejected. Nothing is rounded: every unit is an
//! exact number of nanoseconds, and a product that does not fit in an `i64`
//! nanosecond count is reported as [`DurationError::Overflow`].
//!
//! # Functions
//!
//! - [`parse_expression`] - Split an expression into sign, magnitude and unit
//! - [`parse_duration`] - Expression → signed [`TimeDelta`]
//! - [`since`] - Apply an expression to a given moment
//! - [`since_now`] - Apply an expression to the current UTC time

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use regex::Regex;
use serde::Serialize;

use crate::error::{DurationError, Result};
use crate::unit::{Unit, UNIT_SPELLINGS};

// ── Grammar ─────────────────────────────────────────────────────────────────

/// Compiled once on first use; read-only afterwards.
static DURATION_PATTERN: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(&build_pattern()));

/// Build the anchored grammar, taking the unit alternation from
/// [`UNIT_SPELLINGS`] so the two can never disagree.
fn build_pattern() -> String {
    let mut spellings: Vec<&str> = UNIT_SPELLINGS.iter().map(|(s, _)| *s).collect();
    spellings.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let units = spellings
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");

    format!(r"^(?P<signed>[+-]?[1-9][0-9]*) ?(?P<unit>{units})$")
}

fn pattern() -> Result<&'static Regex> {
    DURATION_PATTERN
        .as_ref()
        .map_err(|e| DurationError::Pattern(e.to_string()))
}

// ── parse_expression ────────────────────────────────────────────────────────

/// The fields of a successfully matched expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedExpression {
    /// `1` or `-1`.
    pub sign: i8,
    /// Always non-zero when produced by [`parse_expression`].
    pub magnitude: u64,
    pub unit: Unit,
    /// The input wrote its sign out, including a leading `+`.
    #[serde(skip)]
    pub explicit_sign: bool,
}

impl ParsedExpression {
    /// The signed multiplier, `sign × magnitude`.
    fn signed_magnitude(&self) -> Option<i64> {
        if self.sign < 0 {
            0i64.checked_sub_unsigned(self.magnitude)
        } else {
            i64::try_from(self.magnitude).ok()
        }
    }

    /// The signed numeral as it was written, e.g. `+12` or `12`.
    fn numeral(&self) -> String {
        let sign = match (self.sign < 0, self.explicit_sign) {
            (true, _) => "-",
            (false, true) => "+",
            (false, false) => "",
        };
        format!("{sign}{}", self.magnitude)
    }

    /// `sign × magnitude × unit`, checked against the `i64` nanosecond range.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::Overflow`] if the product does not fit.
    pub fn to_duration(&self) -> Result<TimeDelta> {
        self.signed_magnitude()
            .and_then(|n| n.checked_mul(self.unit.nanoseconds()))
            .map(TimeDelta::nanoseconds)
            .ok_or_else(|| DurationError::Overflow(self.numeral()))
    }

    /// `moment + self.to_duration()`, in the moment's own timezone.
    ///
    /// # Errors
    ///
    /// [`DurationError::Overflow`] as for [`to_duration`](Self::to_duration),
    /// or [`DurationError::TimestampOutOfRange`] if the sum falls outside the
    /// range `chrono` can represent.
    pub fn apply_to<Tz: TimeZone>(&self, moment: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let delta = self.to_duration()?;

        moment.clone().checked_add_signed(delta).ok_or_else(|| {
            DurationError::TimestampOutOfRange(format!(
                "'{self}' applied to {} UTC",
                moment.naive_utc()
            ))
        })
    }
}

/// Normalized form, e.g. `+10s` or `-2w`.
impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign < 0 { '-' } else { '+' };
        write!(f, "{sign}{}{}", self.magnitude, self.unit.symbol())
    }
}

/// Match `text` against the grammar and extract its fields.
///
/// # Errors
///
/// - [`DurationError::InvalidSyntax`] if `text` does not match, carrying
///   `text` verbatim.
/// - [`DurationError::Overflow`] if the signed numeral does not fit in an
///   `i64`.
/// - [`DurationError::UnsupportedUnit`] if the matched unit has no table
///   entry.
pub fn parse_expression(text: &str) -> Result<ParsedExpression> {
    let caps = pattern()?
        .captures(text)
        .ok_or_else(|| DurationError::InvalidSyntax(text.to_string()))?;

    // Sign and digits are parsed together so the range check is on the
    // signed value.
    let signed = &caps["signed"];
    let value: i64 = signed
        .parse()
        .map_err(|_| DurationError::Overflow(signed.to_string()))?;

    let token = &caps["unit"];
    let unit = Unit::from_token(token)
        .ok_or_else(|| DurationError::UnsupportedUnit(token.to_string()))?;

    Ok(ParsedExpression {
        sign: if value < 0 { -1 } else { 1 },
        magnitude: value.unsigned_abs(),
        unit,
        explicit_sign: signed.starts_with(['+', '-']),
    })
}

// ── parse_duration ──────────────────────────────────────────────────────────

/// Parse a relative time expression into a signed duration.
///
/// # Examples
///
/// ```
/// use after::parser::parse_duration;
/// use chrono::TimeDelta;
///
/// assert_eq!(parse_duration("10s").unwrap(), TimeDelta::seconds(10));
/// assert_eq!(parse_duration("+1 minute").unwrap(), TimeDelta::minutes(1));
/// assert_eq!(parse_duration("-1 day").unwrap(), TimeDelta::hours(-24));
/// assert!(parse_duration("h").is_err());
/// ```
///
/// # Errors
///
/// See [`parse_expression`] and [`ParsedExpression::to_duration`].
pub fn parse_duration(text: &str) -> Result<TimeDelta> {
    parse_expression(text)?.to_duration()
}

// ── since / since_now ───────────────────────────────────────────────────────

/// `moment + parse_duration(text)`, in the moment's own timezone.
///
/// `moment` is only borrowed: on any error the caller still holds it
/// unchanged.
///
/// # Errors
///
/// Any error from [`parse_duration`], or
/// [`DurationError::TimestampOutOfRange`] if the sum falls outside the range
/// `chrono` can represent.
pub fn since<Tz: TimeZone>(moment: &DateTime<Tz>, text: &str) -> Result<DateTime<Tz>> {
    parse_expression(text)?.apply_to(moment)
}

/// [`since`] anchored at `Utc::now()`, read once per call.
pub fn since_now(text: &str) -> Result<DateTime<Utc>> {
    since(&Utc::now(), text)
}

// ── Tests ───────────────────────────────────────────────────────────────────
