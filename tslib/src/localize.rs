//! Attaching, replacing and removing the timezone of a [`DateTime`].
//!
//! Localization keeps the wall-clock fields of a naive value and attaches a
//! timezone to it. This is different from conversion, which keeps the instant
//! and moves the wall-clock fields into another zone. Conversion only happens
//! when an already aware value is localized with [`AwarePolicy::Convert`].

use log::{debug, trace};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::datetime::{local_to_utc, utc_to_local};
use crate::timezone::LocalOffset;
use crate::{DateTime, Error, TimeZone};

/// What to do with a wall time that occurs twice in the target zone, as
/// happens when clocks are turned back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Ambiguous {
    #[default]
    Raise,
    /// Use the first occurrence, before the clocks were turned back.
    Earliest,
    /// Use the second occurrence, after the clocks were turned back.
    Latest,
}

/// What to do with a wall time that is skipped in the target zone, as happens
/// when clocks are turned forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Nonexistent {
    #[default]
    Raise,
    /// Move to the first instant after the gap.
    ShiftForward,
    /// Move to the last nanosecond before the gap.
    ShiftBackward,
}

/// What to do when the value being localized already has a timezone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AwarePolicy {
    /// Keep the instant and express it in the new zone.
    #[default]
    Convert,
    /// Keep the wall-clock fields and swap the zone.
    Replace,
}

/// Settings which control localization. The defaults reject ambiguous and
/// nonexistent wall times and convert values which are already aware.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalizeOptions {
    ambiguous: Ambiguous,
    nonexistent: Nonexistent,
    aware: AwarePolicy,
}

impl LocalizeOptions {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn ambiguous(&self) -> Ambiguous {
        self.ambiguous
    }

    pub fn nonexistent(&self) -> Nonexistent {
        self.nonexistent
    }

    pub fn aware(&self) -> AwarePolicy {
        self.aware
    }

    /// Localize `dt` to `tz`, returning a new value.
    ///
    /// * with no `tz` the result is naive with the same wall-clock fields
    /// * a naive `dt` keeps its wall-clock fields and has `tz` attached
    /// * an aware `dt` is handled according to the [`AwarePolicy`]
    ///
    /// # Errors
    /// * `InvalidTimezone` if `tz` has a fixed offset of a day or more
    /// * `AmbiguousTime` or `NonexistentTime` when the wall time can not be
    ///   placed in `tz` and the matching policy is `Raise`
    pub fn localize(&self, dt: &DateTime, tz: Option<&TimeZone>) -> Result<DateTime, Error> {
        let tz = match tz {
            Some(tz) => tz,
            None => return Ok(DateTime::naive(dt.wall())),
        };

        tz.validate()?;

        if dt.is_aware() && self.aware == AwarePolicy::Convert {
            let utc = dt.utc_wall()?;
            let offset = tz.offset_at_utc(utc)?;
            trace!("converting {} to {}", dt, tz);
            return Ok(DateTime::aware(utc_to_local(utc, offset)?, *tz, offset));
        }

        self.attach(dt.wall(), tz)
    }

    fn attach(&self, wall: PrimitiveDateTime, tz: &TimeZone) -> Result<DateTime, Error> {
        match tz.offset_at_local(wall)? {
            LocalOffset::Single(offset) => Ok(DateTime::aware(wall, *tz, offset)),
            LocalOffset::Ambiguous(earliest, latest) => {
                let offset = match self.ambiguous {
                    Ambiguous::Raise => {
                        return Err(Error::AmbiguousTime(describe(wall, tz)));
                    }
                    Ambiguous::Earliest => earliest,
                    Ambiguous::Latest => latest,
                };
                debug!(
                    "resolved ambiguous {} with {:?}",
                    describe(wall, tz),
                    self.ambiguous
                );
                Ok(DateTime::aware(wall, *tz, offset))
            }
            LocalOffset::Nonexistent => {
                let transition = match self.nonexistent {
                    Nonexistent::Raise => {
                        return Err(Error::NonexistentTime(describe(wall, tz)));
                    }
                    _ => gap_end(wall, tz)?,
                };
                let utc = match self.nonexistent {
                    Nonexistent::ShiftBackward => transition
                        .checked_sub(time::Duration::NANOSECOND)
                        .ok_or(Error::OutOfRange)?,
                    _ => transition,
                };
                let offset = tz.offset_at_utc(utc)?;
                let shifted = utc_to_local(utc, offset)?;
                debug!(
                    "shifted nonexistent {} to {} with {:?}",
                    describe(wall, tz),
                    DateTime::naive(shifted),
                    self.nonexistent
                );
                Ok(DateTime::aware(shifted, *tz, offset))
            }
        }
    }
}

/// A builder for [`LocalizeOptions`].
pub struct Builder {
    options: LocalizeOptions,
}

impl Builder {
    fn new() -> Self {
        Self {
            options: LocalizeOptions::default(),
        }
    }

    /// Set how wall times which occur twice are resolved.
    pub fn ambiguous(mut self, policy: Ambiguous) -> Self {
        self.options.ambiguous = policy;
        self
    }

    /// Set how wall times which are skipped are resolved.
    pub fn nonexistent(mut self, policy: Nonexistent) -> Self {
        self.options.nonexistent = policy;
        self
    }

    /// Set how values which already carry a timezone are localized.
    pub fn aware(mut self, policy: AwarePolicy) -> Self {
        self.options.aware = policy;
        self
    }

    pub fn build(self) -> LocalizeOptions {
        self.options
    }
}

/// Localize `dt` to `tz` with the default [`LocalizeOptions`].
pub fn localize_datetime(dt: &DateTime, tz: Option<&TimeZone>) -> Result<DateTime, Error> {
    LocalizeOptions::default().localize(dt, tz)
}

fn describe(wall: PrimitiveDateTime, tz: &TimeZone) -> String {
    format!("{} in {}", DateTime::naive(wall), tz)
}

/// Find the UTC instant at which the gap containing `wall` ends.
fn gap_end(wall: PrimitiveDateTime, tz: &TimeZone) -> Result<PrimitiveDateTime, Error> {
    let day = time::Duration::DAY;
    let before = tz.offset_at_utc(wall.checked_sub(day).ok_or(Error::OutOfRange)?)?;
    let after = tz.offset_at_utc(wall.checked_add(day).ok_or(Error::OutOfRange)?)?;

    if after.whole_seconds() <= before.whole_seconds() {
        return Err(Error::NonexistentTime(describe(wall, tz)));
    }

    // the transition lies in (lo, hi], and zone transitions fall on whole
    // seconds
    let mut lo = unix_seconds(local_to_utc(wall, after)?);
    let mut hi = unix_seconds(local_to_utc(wall, before)?);

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if tz.offset_at_utc(from_unix_seconds(mid)?)? == before {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    from_unix_seconds(hi)
}

fn unix_seconds(utc: PrimitiveDateTime) -> i64 {
    utc.assume_utc().unix_timestamp()
}

fn from_unix_seconds(seconds: i64) -> Result<PrimitiveDateTime, Error> {
    let utc = OffsetDateTime::from_unix_timestamp(seconds).map_err(|_| Error::OutOfRange)?;
    Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
}
