//! Rescaling raw tick counts between resolution units.

use log::trace;

use crate::{Error, Unit, NANOSECOND};

/// How a raw count in the input unit is turned into the output unit.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Scale {
    /// The output unit is finer (or the same), multiply by the factor.
    Multiply,
    /// The output unit is coarser, divide by the factor.
    Divide,
}

/// The result of [`precision_from_unit`]: an integer factor and the direction
/// in which it must be applied.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Precision {
    factor: i64,
    scale: Scale,
}

impl Precision {
    pub const IDENTITY: Precision = Precision {
        factor: 1,
        scale: Scale::Multiply,
    };

    /// Compute the precision needed to rescale counts from `from` to `to`.
    pub fn between(from: Unit, to: Unit) -> Result<Self, Error> {
        let from_len = from.attos();
        let to_len = to.attos();

        let (coarse, fine, scale) = if from_len >= to_len {
            (from_len, to_len, Scale::Multiply)
        } else {
            (to_len, from_len, Scale::Divide)
        };

        if coarse % fine != 0 {
            return Err(Error::InexactConversion);
        }

        let factor = i64::try_from(coarse / fine).map_err(|_| Error::Overflow)?;

        trace!("precision {} -> {}: {:?} by {}", from, to, scale, factor);

        Ok(Self { factor, scale })
    }

    /// The integer ratio between the coarser and finer of the two units.
    pub fn factor(&self) -> i64 {
        self.factor
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The number of decimal digits the conversion shifts by, that is
    /// `floor(log10(factor))`.
    pub fn digits(&self) -> u32 {
        self.factor.ilog10()
    }

    pub fn into_parts(self) -> (i64, Scale) {
        (self.factor, self.scale)
    }

    pub fn is_identity(&self) -> bool {
        self.factor == 1
    }

    /// The precision for converting in the opposite direction.
    pub fn inverse(self) -> Self {
        if self.is_identity() {
            return self;
        }
        let scale = match self.scale {
            Scale::Multiply => Scale::Divide,
            Scale::Divide => Scale::Multiply,
        };
        Self {
            factor: self.factor,
            scale,
        }
    }

    /// Rescale a raw count. Division rounds toward negative infinity.
    pub fn apply(&self, count: i64) -> Result<i64, Error> {
        self.apply_exact(count).map(|(value, _)| value)
    }

    /// Rescale a raw count, also returning the remainder (in input ticks) that
    /// was dropped by a division. The remainder is never negative.
    pub fn apply_exact(&self, count: i64) -> Result<(i64, i64), Error> {
        match self.scale {
            Scale::Multiply => count
                .checked_mul(self.factor)
                .map(|value| (value, 0))
                .ok_or(Error::Overflow),
            Scale::Divide => Ok((
                count.div_euclid(self.factor),
                count.rem_euclid(self.factor),
            )),
        }
    }
}

impl From<Precision> for (i64, Scale) {
    fn from(precision: Precision) -> Self {
        precision.into_parts()
    }
}

/// Compute how to rescale a raw count expressed in the unit with code
/// `in_reso` into the unit with code `out_reso`.
///
/// The first element of the result is the integer factor and the second says
/// whether to multiply or divide by it.
///
/// # Errors
/// * `InvalidUnit` if either code is not a recognized unit, `in_reso` is
///   checked first
/// * `InexactConversion` if the units are not integer multiples of each
///   other, such as years and days
/// * `Overflow` if the factor does not fit in an `i64`
pub fn precision_from_unit(in_reso: i64, out_reso: i64) -> Result<Precision, Error> {
    let from = Unit::from_code(in_reso)?;
    let to = Unit::from_code(out_reso)?;
    Precision::between(from, to)
}

/// Like [`precision_from_unit`] with the output unit set to nanoseconds.
pub fn precision_from_unit_default(in_reso: i64) -> Result<Precision, Error> {
    precision_from_unit(in_reso, NANOSECOND.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        for unit in Unit::ALL {
            let precision = Precision::between(unit, unit).unwrap();
            assert_eq!(precision, Precision::IDENTITY);
            assert_eq!(precision.digits(), 0);
        }
        // generic is nanoseconds
        assert_eq!(
            Precision::between(Unit::Generic, Unit::Nanosecond),
            Ok(Precision::IDENTITY)
        );
    }

    #[test]
    fn seconds_to_nanos() {
        let precision = precision_from_unit(7, 10).unwrap();
        assert_eq!(precision.into_parts(), (1_000_000_000, Scale::Multiply));
        assert_eq!(precision.digits(), 9);
        assert_eq!(precision_from_unit_default(7), Ok(precision));
    }

    #[test]
    fn coarse_units() {
        let precision = Precision::between(Unit::Year, Unit::Nanosecond).unwrap();
        assert_eq!(precision.factor(), 31_556_952_000_000_000);
        assert_eq!(precision.digits(), 16);

        let precision = Precision::between(Unit::Month, Unit::Second).unwrap();
        assert_eq!(precision.factor(), 2_629_746);

        let precision = Precision::between(Unit::Week, Unit::Day).unwrap();
        assert_eq!(precision.into_parts(), (7, Scale::Multiply));
        assert_eq!(precision.digits(), 0);

        assert_eq!(
            Precision::between(Unit::Year, Unit::Day),
            Err(Error::InexactConversion)
        );
        assert_eq!(
            Precision::between(Unit::Week, Unit::Month),
            Err(Error::InexactConversion)
        );
        assert_eq!(
            Precision::between(Unit::Year, Unit::Attosecond),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn invalid() {
        assert_eq!(precision_from_unit(3, 10), Err(Error::InvalidUnit(3)));
        assert_eq!(precision_from_unit(10, 42), Err(Error::InvalidUnit(42)));
        assert_eq!(precision_from_unit(-5, 42), Err(Error::InvalidUnit(-5)));
    }

    #[test]
    fn apply() {
        let up = Precision::between(Unit::Millisecond, Unit::Microsecond).unwrap();
        assert_eq!(up.apply(1_500), Ok(1_500_000));
        assert_eq!(up.apply(-2), Ok(-2_000));
        assert_eq!(up.apply(i64::MAX), Err(Error::Overflow));

        let down = up.inverse();
        assert_eq!(down.scale(), Scale::Divide);
        assert_eq!(down.apply_exact(1_500_250), Ok((1_500, 250)));
        assert_eq!(down.apply_exact(-1), Ok((-1, 999)));
        assert_eq!(down.apply(-1_000), Ok(-1));
    }
}
