//! Configuring numbered GPIO pins as outputs.

use embedded_hal::digital::OutputPin;

use crate::segment::SEGMENT_COUNT;
use crate::{Error, Result};

/// A source of digital outputs addressed by pin number.
///
/// Implement this for a board's GPIO block when pin assignments come from
/// numbers (a config table, a jumper map) rather than typed peripherals.
pub trait OutputBank {
    /// The configured output pin type.
    type Output: OutputPin;

    /// Whether the bank has `pin`. Does not configure it.
    fn has_output(&self, pin: u8) -> bool;

    /// Configures `pin` as a digital output, or returns `None` if the bank has
    /// no such pin.
    fn output(&mut self, pin: u8) -> Option<Self::Output>;

    /// Configures seven pins, `a` to `g`, in order.
    ///
    /// Every pin number is checked with [`OutputBank::has_output`] before any
    /// pin is configured. Duplicate pin numbers are passed through unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPin`] for the first pin the bank cannot provide.
    fn segment_outputs(&mut self, pins: [u8; SEGMENT_COUNT]) -> Result<[Self::Output; SEGMENT_COUNT]> {
        if let Some(&pin) = pins.iter().find(|&&pin| !self.has_output(pin)) {
            return Err(Error::InvalidPin(pin));
        }
        let [a, b, c, d, e, f, g] = pins;
        Ok([
            checked_output(self, a)?,
            checked_output(self, b)?,
            checked_output(self, c)?,
            checked_output(self, d)?,
            checked_output(self, e)?,
            checked_output(self, f)?,
            checked_output(self, g)?,
        ])
    }
}

fn checked_output<B: OutputBank + ?Sized>(bank: &mut B, pin: u8) -> Result<B::Output> {
    bank.output(pin).ok_or(Error::InvalidPin(pin))
}
