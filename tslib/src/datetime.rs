//! Calendar datetimes which are either naive or carry a timezone.

use core::fmt::Display;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::timezone::format_offset;
use crate::{Error, TimeZone};

/// A date and wall-clock time, optionally attached to a timezone.
///
/// An aware `DateTime` also stores the offset that was resolved for its wall
/// time, which pins it to a single instant even when the wall time is
/// repeated in its zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateTime {
    wall: PrimitiveDateTime,
    zone: Option<Zone>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Zone {
    tz: TimeZone,
    offset: UtcOffset,
}

impl DateTime {
    /// Create a naive `DateTime` from its components.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Result<Self, Error> {
        let month = Month::try_from(month).map_err(|_| Error::OutOfRange)?;
        let date = Date::from_calendar_date(year, month, day).map_err(|_| Error::OutOfRange)?;
        let time =
            Time::from_hms_nano(hour, minute, second, nanosecond).map_err(|_| Error::OutOfRange)?;
        Ok(Self::naive(PrimitiveDateTime::new(date, time)))
    }

    pub const fn naive(wall: PrimitiveDateTime) -> Self {
        Self { wall, zone: None }
    }

    pub(crate) const fn aware(wall: PrimitiveDateTime, tz: TimeZone, offset: UtcOffset) -> Self {
        Self {
            wall,
            zone: Some(Zone { tz, offset }),
        }
    }

    /// Create a `DateTime` from a count of nanoseconds since the unix epoch.
    /// With a timezone the result is aware and shows the wall time in that
    /// zone, otherwise it is naive and shows the UTC wall time.
    pub fn from_unix_nanos(nanos: i64, tz: Option<TimeZone>) -> Result<Self, Error> {
        let utc = OffsetDateTime::from_unix_timestamp_nanos(nanos as i128)
            .map_err(|_| Error::OutOfRange)?;
        let utc = PrimitiveDateTime::new(utc.date(), utc.time());

        match tz {
            None => Ok(Self::naive(utc)),
            Some(tz) => {
                tz.validate()?;
                let offset = tz.offset_at_utc(utc)?;
                Ok(Self::aware(utc_to_local(utc, offset)?, tz, offset))
            }
        }
    }

    /// The instant as nanoseconds since the unix epoch. Naive values are read
    /// as UTC.
    pub fn unix_nanos(&self) -> Result<i64, Error> {
        let offset = self.offset().unwrap_or(UtcOffset::UTC);
        let nanos = self.wall.assume_offset(offset).unix_timestamp_nanos();
        i64::try_from(nanos).map_err(|_| Error::Overflow)
    }

    pub fn to_offset_datetime(&self) -> Option<OffsetDateTime> {
        self.zone.map(|zone| self.wall.assume_offset(zone.offset))
    }

    /// The UTC wall time of an aware value, or the wall time of a naive one.
    pub(crate) fn utc_wall(&self) -> Result<PrimitiveDateTime, Error> {
        match self.zone {
            Some(zone) => local_to_utc(self.wall, zone.offset),
            None => Ok(self.wall),
        }
    }

    pub fn wall(&self) -> PrimitiveDateTime {
        self.wall
    }

    pub fn tz(&self) -> Option<&TimeZone> {
        self.zone.as_ref().map(|zone| &zone.tz)
    }

    pub fn offset(&self) -> Option<UtcOffset> {
        self.zone.map(|zone| zone.offset)
    }

    pub fn is_naive(&self) -> bool {
        self.zone.is_none()
    }

    pub fn is_aware(&self) -> bool {
        self.zone.is_some()
    }

    pub fn year(&self) -> i32 {
        self.wall.year()
    }

    pub fn month(&self) -> u8 {
        self.wall.month() as u8
    }

    pub fn day(&self) -> u8 {
        self.wall.day()
    }

    pub fn hour(&self) -> u8 {
        self.wall.hour()
    }

    pub fn minute(&self) -> u8 {
        self.wall.minute()
    }

    pub fn second(&self) -> u8 {
        self.wall.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.wall.nanosecond()
    }
}

impl From<PrimitiveDateTime> for DateTime {
    fn from(wall: PrimitiveDateTime) -> Self {
        Self::naive(wall)
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:09}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.nanosecond(),
        )?;
        if let Some(offset) = self.offset() {
            f.write_str(&format_offset(offset))?;
        }
        Ok(())
    }
}

pub(crate) fn utc_to_local(
    utc: PrimitiveDateTime,
    offset: UtcOffset,
) -> Result<PrimitiveDateTime, Error> {
    utc.checked_add(time::Duration::seconds(offset.whole_seconds() as i64))
        .ok_or(Error::OutOfRange)
}

pub(crate) fn local_to_utc(
    local: PrimitiveDateTime,
    offset: UtcOffset,
) -> Result<PrimitiveDateTime, Error> {
    local
        .checked_sub(time::Duration::seconds(offset.whole_seconds() as i64))
        .ok_or(Error::OutOfRange)
}
