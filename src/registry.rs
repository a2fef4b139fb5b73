//! An append-only collection of displays for broadcast on/off.

#[cfg(feature = "display-trace")]
use defmt::info;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

use crate::segment::SegmentSelector;
use crate::seven_segment::SevenSegment;
use crate::{Error, Result};

/// Handle to a display inside a [`DisplayRegistry`], in registration order.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayId(usize);

impl DisplayId {
    /// Zero-based registration index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Holds up to `N` displays so they can be switched on or off together.
///
/// Displays can be added but never removed: `total()` only grows. Create one
/// registry per application (or per test) and pass it by reference.
///
/// ```ignore
/// let mut registry = DisplayRegistry::<_, 2>::new();
/// let left = registry.register(SevenSegment::new(left_pins, Polarity::CommonCathode))?;
/// registry.register(SevenSegment::new(right_pins, Polarity::CommonCathode))?;
/// registry.all_on()?;
/// registry.get_mut(left).ok_or(Error::NoDisplaysRegistered)?.write_digit(4)?;
/// ```
pub struct DisplayRegistry<P, const N: usize> {
    displays: Vec<SevenSegment<P>, N>,
}

impl<P: OutputPin, const N: usize> DisplayRegistry<P, N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            displays: Vec::new(),
        }
    }

    /// Appends a display.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryFull`] if `N` displays are already registered.
    pub fn register(&mut self, display: SevenSegment<P>) -> Result<DisplayId> {
        let id = DisplayId(self.displays.len());
        self.displays
            .push(display)
            .map_err(|_| Error::RegistryFull)?;
        #[cfg(feature = "display-trace")]
        info!("registered display {}", id.index());
        Ok(id)
    }

    /// The number of displays registered so far.
    #[must_use]
    pub fn total(&self) -> usize {
        self.displays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[must_use]
    pub fn get(&self, id: DisplayId) -> Option<&SevenSegment<P>> {
        self.displays.get(id.0)
    }

    pub fn get_mut(&mut self, id: DisplayId) -> Option<&mut SevenSegment<P>> {
        self.displays.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SevenSegment<P>> {
        self.displays.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SevenSegment<P>> {
        self.displays.iter_mut()
    }

    /// Turns on every segment of every display, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDisplaysRegistered`] if the registry is empty.
    pub fn all_on(&mut self) -> Result<()> {
        self.broadcast(|display| display.set_on(SegmentSelector::All))
    }

    /// Turns off every segment of every display, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDisplaysRegistered`] if the registry is empty.
    pub fn all_off(&mut self) -> Result<()> {
        self.broadcast(|display| display.set_off(SegmentSelector::All))
    }

    fn broadcast(&mut self, apply: impl FnMut(&mut SevenSegment<P>) -> Result<()>) -> Result<()> {
        if self.displays.is_empty() {
            return Err(Error::NoDisplaysRegistered);
        }
        self.displays.iter_mut().try_for_each(apply)
    }
}

impl<P: OutputPin, const N: usize> Default for DisplayRegistry<P, N> {
    fn default() -> Self {
        Self::new()
    }
}
