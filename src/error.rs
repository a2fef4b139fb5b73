use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Argument checks run before the first pin write, so only
/// [`Error::CannotSetOutputState`] can leave a display half-updated.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum Error {
    #[display("Pin {_0} cannot be configured as a digital output")]
    InvalidPin(#[error(not(source))] u8),

    #[display("Digit {_0} is out of the available range (0-9)")]
    DigitOutOfRange(#[error(not(source))] u8),

    #[display("Invalid segment")]
    InvalidSegment,

    #[display("No displays are registered")]
    NoDisplaysRegistered,

    #[display("Display registry is full")]
    RegistryFull,

    #[display("Error setting output state")]
    CannotSetOutputState,
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::CannotSetOutputState
    }
}
