//! Resolution units and their stable integer codes.

use core::fmt::Display;
use core::str::FromStr;

use crate::{Error, ATTOS_PER_SEC};

const SECS_PER_DAY: i128 = 86_400;

/// A time resolution. The discriminant is the stable unit code, ordered from
/// coarse to fine. Code 3 is unassigned.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Unit {
    Year = 0,
    Month = 1,
    Week = 2,
    Day = 4,
    Hour = 5,
    Minute = 6,
    Second = 7,
    Millisecond = 8,
    Microsecond = 9,
    Nanosecond = 10,
    Picosecond = 11,
    Femtosecond = 12,
    Attosecond = 13,
    /// An unspecified resolution, which is treated as nanoseconds.
    Generic = 14,
}

/// The default output unit for conversions.
pub const NANOSECOND: Unit = Unit::Nanosecond;

impl Unit {
    pub const ALL: [Unit; 14] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
        Unit::Picosecond,
        Unit::Femtosecond,
        Unit::Attosecond,
        Unit::Generic,
    ];

    /// Look up a unit by its integer code.
    pub fn from_code(code: i64) -> Result<Self, Error> {
        let unit = match code {
            0 => Unit::Year,
            1 => Unit::Month,
            2 => Unit::Week,
            4 => Unit::Day,
            5 => Unit::Hour,
            6 => Unit::Minute,
            7 => Unit::Second,
            8 => Unit::Millisecond,
            9 => Unit::Microsecond,
            10 => Unit::Nanosecond,
            11 => Unit::Picosecond,
            12 => Unit::Femtosecond,
            13 => Unit::Attosecond,
            14 => Unit::Generic,
            _ => return Err(Error::InvalidUnit(code)),
        };
        Ok(unit)
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn abbrev(self) -> &'static str {
        match self {
            Unit::Year => "Y",
            Unit::Month => "M",
            Unit::Week => "W",
            Unit::Day => "D",
            Unit::Hour => "h",
            Unit::Minute => "m",
            Unit::Second => "s",
            Unit::Millisecond => "ms",
            Unit::Microsecond => "us",
            Unit::Nanosecond => "ns",
            Unit::Picosecond => "ps",
            Unit::Femtosecond => "fs",
            Unit::Attosecond => "as",
            Unit::Generic => "generic",
        }
    }

    /// Returns the unit arithmetic is done in. `Generic` becomes nanoseconds.
    pub const fn resolved(self) -> Self {
        match self {
            Unit::Generic => Unit::Nanosecond,
            other => other,
        }
    }

    /// The exact length of one tick of this unit in attoseconds.
    ///
    /// Years use the mean Gregorian year of 365.2425 days, which is
    /// 31_556_952 seconds, and months are one twelfth of that.
    pub const fn attos(self) -> i128 {
        let secs = ATTOS_PER_SEC as i128;
        match self.resolved() {
            Unit::Year => 31_556_952 * secs,
            Unit::Month => 2_629_746 * secs,
            Unit::Week => 7 * SECS_PER_DAY * secs,
            Unit::Day => SECS_PER_DAY * secs,
            Unit::Hour => 3_600 * secs,
            Unit::Minute => 60 * secs,
            Unit::Second => secs,
            Unit::Millisecond => secs / 1_000,
            Unit::Microsecond => secs / 1_000_000,
            Unit::Picosecond => 1_000_000,
            Unit::Femtosecond => 1_000,
            Unit::Attosecond => 1,
            // nanosecond, and generic after resolution
            _ => 1_000_000_000,
        }
    }

    /// The number of ticks in one second. Only defined for units which evenly
    /// divide a second.
    pub fn periods_per_second(self) -> Result<i64, Error> {
        ticks_per(ATTOS_PER_SEC as i128, self)
    }

    /// The number of ticks in one day. Only defined for units which evenly
    /// divide a day.
    pub fn periods_per_day(self) -> Result<i64, Error> {
        ticks_per(SECS_PER_DAY * ATTOS_PER_SEC as i128, self)
    }
}

fn ticks_per(span: i128, unit: Unit) -> Result<i64, Error> {
    let len = unit.attos();
    if len > span || span % len != 0 {
        return Err(Error::InexactConversion);
    }
    i64::try_from(span / len).map_err(|_| Error::Overflow)
}

impl TryFrom<i64> for Unit {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Unit::from_code(code)
    }
}

impl From<Unit> for i64 {
    fn from(unit: Unit) -> Self {
        unit.code()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "μs" {
            return Ok(Unit::Microsecond);
        }
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.abbrev() == s)
            .ok_or_else(|| Error::InvalidUnitName(s.to_string()))
    }
}
