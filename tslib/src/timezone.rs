//! Timezone references: fixed offsets and rule-based zones.

use core::fmt::Display;
use core::str::FromStr;

use chrono::{LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone as _};
use chrono_tz::Tz;
use time::{PrimitiveDateTime, UtcOffset};

use crate::Error;

const SECS_PER_DAY: i32 = 86_400;

/// A timezone that can be attached to a [`crate::DateTime`]. The absence of a
/// timezone is expressed as `Option::<TimeZone>::None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeZone {
    /// A constant offset from UTC, which must be less than a day in magnitude.
    Fixed(UtcOffset),
    /// A zone from the IANA timezone database.
    Rule(Tz),
}

/// The result of looking up the offset for a local wall time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LocalOffset {
    Single(UtcOffset),
    /// The wall time occurs twice, the earlier instant has the larger offset.
    Ambiguous(UtcOffset, UtcOffset),
    /// The wall time falls inside a gap and never occurs.
    Nonexistent,
}

impl TimeZone {
    pub const fn utc() -> Self {
        TimeZone::Fixed(UtcOffset::UTC)
    }

    /// Create a fixed offset timezone from a number of seconds east of UTC.
    pub fn fixed(seconds: i32) -> Result<Self, Error> {
        if seconds.abs() >= SECS_PER_DAY {
            return Err(out_of_range(seconds));
        }
        UtcOffset::from_whole_seconds(seconds)
            .map(TimeZone::Fixed)
            .map_err(|_| out_of_range(seconds))
    }

    /// Check that the timezone can be used for localization.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            TimeZone::Fixed(offset) if offset.whole_seconds().abs() >= SECS_PER_DAY => {
                Err(out_of_range(offset.whole_seconds()))
            }
            _ => Ok(()),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, TimeZone::Fixed(_))
    }

    pub fn name(&self) -> String {
        match self {
            TimeZone::Fixed(offset) if offset.is_utc() => "UTC".to_string(),
            TimeZone::Fixed(offset) => format_offset(*offset),
            TimeZone::Rule(tz) => tz.name().to_string(),
        }
    }

    /// The offset in effect at the given UTC instant.
    pub fn offset_at_utc(&self, utc: PrimitiveDateTime) -> Result<UtcOffset, Error> {
        match self {
            TimeZone::Fixed(offset) => Ok(*offset),
            TimeZone::Rule(tz) => {
                let offset = tz.offset_from_utc_datetime(&to_naive(utc)?);
                to_offset(offset.fix().local_minus_utc())
            }
        }
    }

    /// The offset, or offsets, for a wall time in this zone.
    pub fn offset_at_local(&self, local: PrimitiveDateTime) -> Result<LocalOffset, Error> {
        match self {
            TimeZone::Fixed(offset) => Ok(LocalOffset::Single(*offset)),
            TimeZone::Rule(tz) => match tz.offset_from_local_datetime(&to_naive(local)?) {
                LocalResult::Single(offset) => {
                    Ok(LocalOffset::Single(to_offset(offset.fix().local_minus_utc())?))
                }
                LocalResult::Ambiguous(a, b) => {
                    let a = a.fix().local_minus_utc();
                    let b = b.fix().local_minus_utc();
                    Ok(LocalOffset::Ambiguous(
                        to_offset(a.max(b))?,
                        to_offset(a.min(b))?,
                    ))
                }
                LocalResult::None => Ok(LocalOffset::Nonexistent),
            },
        }
    }
}

impl From<Tz> for TimeZone {
    fn from(tz: Tz) -> Self {
        TimeZone::Rule(tz)
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(offset: UtcOffset) -> Self {
        TimeZone::Fixed(offset)
    }
}

impl Display for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for TimeZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Ok(TimeZone::utc());
        }

        if s.starts_with('+') || s.starts_with('-') {
            let seconds = parse_offset(s).ok_or_else(|| Error::InvalidTimezone(s.to_string()))?;
            return TimeZone::fixed(seconds);
        }

        s.parse::<Tz>()
            .map(TimeZone::Rule)
            .map_err(|_| Error::InvalidTimezone(s.to_string()))
    }
}

// accepts +HH, +HHMM and +HH:MM
fn parse_offset(s: &str) -> Option<i32> {
    let (sign, rest) = s.split_at(1);
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (&digits[..2], "0"),
        4 => (&digits[..2], &digits[2..]),
        _ => return None,
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    let seconds = hours * 3_600 + minutes * 60;
    Some(if sign == "-" { -seconds } else { seconds })
}

pub(crate) fn format_offset(offset: UtcOffset) -> String {
    let seconds = offset.whole_seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.abs();
    format!("{}{:02}:{:02}", sign, seconds / 3_600, (seconds % 3_600) / 60)
}

fn out_of_range(seconds: i32) -> Error {
    Error::InvalidTimezone(format!(
        "offset of {seconds} seconds must be strictly less than a day"
    ))
}

fn to_offset(seconds: i32) -> Result<UtcOffset, Error> {
    UtcOffset::from_whole_seconds(seconds).map_err(|_| Error::OutOfRange)
}

fn to_naive(dt: PrimitiveDateTime) -> Result<NaiveDateTime, Error> {
    NaiveDate::from_ymd_opt(dt.year(), dt.month() as u32, dt.day() as u32)
        .and_then(|date| {
            date.and_hms_nano_opt(
                dt.hour() as u32,
                dt.minute() as u32,
                dt.second() as u32,
                dt.nanosecond(),
            )
        })
        .ok_or(Error::OutOfRange)
}
