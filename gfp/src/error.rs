//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Residue is not in the range `[0, prime)`.
    OutOfRange,

    /// Operands belong to fields with different moduli.
    FieldMismatch,

    /// Division by (or negative power of) the additive identity.
    DivisionByZero,

    /// Modulus failed the primality check.
    CompositeModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::OutOfRange => "field element out of range",
            Error::FieldMismatch => "field elements belong to different fields",
            Error::DivisionByZero => "division by zero",
            Error::CompositeModulus => "modulus is not prime",
        })
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
