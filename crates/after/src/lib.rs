//! # after
//!
//! Relative time expressions for humans and config files.
//!
//! Turns strings such as `"10s"`, `"+1 minute"`, `"2 hours"` or `"-2w"` into a
//! signed [`chrono::TimeDelta`], and optionally applies it to a point in time.
//!
//! ```
//! use after::parse_duration;
//! use chrono::TimeDelta;
//!
//! assert_eq!(parse_duration("-2w").unwrap(), -TimeDelta::weeks(2));
//! assert!(parse_duration("0s").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - grammar, field extraction, and the `since` helpers
//! - [`unit`] - canonical units and their accepted spellings
//! - [`error`] - Error types

pub mod error;
pub mod parser;
pub mod unit;

pub use error::{DurationError, Result};
pub use parser::{parse_duration, parse_expression, since, since_now, ParsedExpression};
pub use unit::{Unit, DAY, UNIT_SPELLINGS, WEEK};
