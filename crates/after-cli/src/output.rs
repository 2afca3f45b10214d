//! Per-expression results and their rendering.

use after::{parse_expression, DurationError, Unit};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One resolved expression, as printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The input, verbatim.
    pub expression: String,
    /// Normalized form, e.g. `-2w`.
    pub normalized: String,
    pub sign: i8,
    pub magnitude: u64,
    pub unit: Unit,
    pub nanoseconds: i64,
    /// Reference moment plus the duration (RFC 3339).
    pub resolved: String,
}

impl Resolution {
    pub fn resolve(
        expression: &str,
        moment: &DateTime<FixedOffset>,
    ) -> Result<Resolution, DurationError> {
        let parsed = parse_expression(expression)?;
        let delta = parsed.to_duration()?;
        let nanoseconds = delta
            .num_nanoseconds()
            .ok_or_else(|| DurationError::Overflow(parsed.to_string()))?;
        let resolved = parsed.apply_to(moment)?;

        Ok(Resolution {
            expression: expression.to_string(),
            normalized: parsed.to_string(),
            sign: parsed.sign,
            magnitude: parsed.magnitude,
            unit: parsed.unit,
            nanoseconds,
            resolved: resolved.to_rfc3339(),
        })
    }

    /// Signed duration in whole milliseconds, e.g. `-1209600000ms`.
    pub fn duration_line(&self) -> String {
        format!("{}ms", self.nanoseconds / 1_000_000)
    }
}
