//! This crate provides the small pieces of time handling shared by code which
//! stores instants and durations as integer tick counts.
//!
//! Resolutions are identified by a [`Unit`], which has a stable integer code.
//! [`precision_from_unit`] computes how to rescale a raw count from one unit
//! into another, and the representation tags [`DT64NS_DTYPE`] and
//! [`TD64NS_DTYPE`] identify nanosecond instants and durations.
//!
//! [`localize_datetime`] attaches a [`TimeZone`] to a [`DateTime`] without
//! changing its wall-clock fields, or removes it again.
//!
//! ```
//! use tslib::{localize_datetime, precision_from_unit, DateTime, Scale, TimeZone, Unit};
//!
//! let precision = precision_from_unit(Unit::Second.code(), Unit::Nanosecond.code()).unwrap();
//! assert_eq!(precision.into_parts(), (1_000_000_000, Scale::Multiply));
//!
//! let dt = DateTime::new(2024, 1, 1, 12, 0, 0, 0).unwrap();
//! let tz: TimeZone = "Europe/Paris".parse().unwrap();
//! let local = localize_datetime(&dt, Some(&tz)).unwrap();
//! assert_eq!(local.to_string(), "2024-01-01T12:00:00.000000000+01:00");
//! ```

mod datetime;
mod dtype;
mod errors;
mod localize;
mod precision;
mod timezone;
mod unit;

pub use datetime::DateTime;
pub use dtype::{DType, Kind, DT64NS_DTYPE, TD64NS_DTYPE};
pub use errors::Error;
pub use localize::{
    localize_datetime, Ambiguous, AwarePolicy, Builder, LocalizeOptions, Nonexistent,
};
pub use precision::{precision_from_unit, precision_from_unit_default, Precision, Scale};
pub use timezone::{LocalOffset, TimeZone};
pub use unit::{Unit, NANOSECOND};

pub use chrono_tz::Tz;

const ATTOS_PER_SEC: u64 = 1_000_000_000_000_000_000;
