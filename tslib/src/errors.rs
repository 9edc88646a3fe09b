use thiserror::Error;

/// Errors returned for unit conversions, timezone handling and localization.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unit code {0} is not a recognized resolution unit")]
    InvalidUnit(i64),
    #[error("\"{0}\" is not a recognized resolution unit")]
    InvalidUnitName(String),
    #[error("the ratio between the units is not an integer")]
    InexactConversion,
    #[error("an overflow occurred")]
    Overflow,
    #[error("the value is outside of the representable range")]
    OutOfRange,
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
    #[error("{0} is ambiguous in the target timezone")]
    AmbiguousTime(String),
    #[error("{0} does not exist in the target timezone")]
    NonexistentTime(String),
    #[error("\"{0}\" is not a recognized dtype")]
    InvalidDType(String),
}
