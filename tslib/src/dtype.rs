//! Representation tags for instant and duration values.

use core::fmt::Display;
use core::str::FromStr;

use crate::{Error, Precision, Unit};

/// Whether a value is an instant or an elapsed span of time.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Kind {
    Datetime,
    Timedelta,
}

impl Kind {
    const fn name(self) -> &'static str {
        match self {
            Kind::Datetime => "datetime64",
            Kind::Timedelta => "timedelta64",
        }
    }
}

/// A representation tag: the kind of value and the resolution of its ticks.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct DType {
    kind: Kind,
    unit: Unit,
}

/// Instants stored as nanoseconds since the unix epoch.
pub const DT64NS_DTYPE: DType = DType::datetime(Unit::Nanosecond);

/// Durations stored as a count of nanoseconds.
pub const TD64NS_DTYPE: DType = DType::timedelta(Unit::Nanosecond);

impl DType {
    pub const fn datetime(unit: Unit) -> Self {
        Self {
            kind: Kind::Datetime,
            unit,
        }
    }

    pub const fn timedelta(unit: Unit) -> Self {
        Self {
            kind: Kind::Timedelta,
            unit,
        }
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    pub const fn is_datetime(&self) -> bool {
        matches!(self.kind, Kind::Datetime)
    }

    pub const fn is_timedelta(&self) -> bool {
        matches!(self.kind, Kind::Timedelta)
    }

    pub const fn is_nanosecond(&self) -> bool {
        matches!(self.unit.resolved(), Unit::Nanosecond)
    }

    /// The precision needed to rescale values of this dtype into `unit`.
    pub fn precision_to(&self, unit: Unit) -> Result<Precision, Error> {
        Precision::between(self.unit, unit)
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}[{}]", self.kind.name(), self.unit)
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDType(s.to_string());

        let (name, unit) = match s.split_once('[') {
            Some((name, rest)) => {
                let unit = rest.strip_suffix(']').ok_or_else(invalid)?;
                (name, unit.parse::<Unit>().map_err(|_| invalid())?)
            }
            None => (s, Unit::Nanosecond),
        };

        let kind = if name == Kind::Datetime.name() {
            Kind::Datetime
        } else if name == Kind::Timedelta.name() {
            Kind::Timedelta
        } else {
            return Err(invalid());
        };

        Ok(Self { kind, unit })
    }
}
