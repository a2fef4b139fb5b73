//! A device abstraction for a single-digit 7-segment LED display.
//!
//! See [`SevenSegment`] for usage.

use core::fmt;

#[cfg(feature = "display-trace")]
use defmt::info;
use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::glyph::Glyph;
use crate::output_array::OutputArray;
use crate::output_bank::OutputBank;
use crate::segment::{SEGMENT_COUNT, Segment, SegmentSelector, SegmentSet};
use crate::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default time each character of [`SevenSegment::write_text`] stays lit.
pub const DEFAULT_TEXT_INTERVAL: Duration = Duration::from_secs(1);

/// Default time between segments of [`SevenSegment::spiral`].
pub const DEFAULT_SPIRAL_INTERVAL: Duration = Duration::from_millis(100);

/// Order in which [`SevenSegment::spiral`] lights segments: middle bar, then
/// clockwise around the outside starting top-left.
pub const SPIRAL_ORDER: [Segment; SEGMENT_COUNT] = [
    Segment::G,
    Segment::F,
    Segment::A,
    Segment::B,
    Segment::C,
    Segment::D,
    Segment::E,
];

// ============================================================================
// Polarity
// ============================================================================

/// How the display's common pin is wired.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Common cathode: driving a segment pin high lights it.
    #[default]
    CommonCathode,
    /// Common anode: driving a segment pin low lights it.
    CommonAnode,
}

impl Polarity {
    /// The pin level that lights a segment.
    #[must_use]
    pub const fn on_level(self) -> PinState {
        match self {
            Self::CommonCathode => PinState::High,
            Self::CommonAnode => PinState::Low,
        }
    }

    /// The pin level that darkens a segment.
    #[must_use]
    pub const fn off_level(self) -> PinState {
        match self {
            Self::CommonCathode => PinState::Low,
            Self::CommonAnode => PinState::High,
        }
    }

    #[must_use]
    pub const fn level(self, lit: bool) -> PinState {
        if lit { self.on_level() } else { self.off_level() }
    }
}

// ============================================================================
// SpiralDirection
// ============================================================================

/// Direction of [`SevenSegment::spiral`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiralDirection {
    /// `g, f, a, b, c, d, e`
    #[default]
    Forward,
    /// `e, d, c, b, a, f, g`
    Reverse,
}

impl SpiralDirection {
    /// The segments in the order this direction visits them.
    #[must_use]
    pub fn order(self) -> [Segment; SEGMENT_COUNT] {
        let mut order = SPIRAL_ORDER;
        if self == Self::Reverse {
            order.reverse();
        }
        order
    }
}

// ============================================================================
// SevenSegment Device
// ============================================================================

/// A device abstraction for a single-digit 7-segment LED display wired
/// directly to seven GPIO outputs.
///
/// Every write is immediate. The blocking operations ([`write_text`](Self::write_text)
/// and [`spiral`](Self::spiral)) sleep through the [`DelayNs`] you pass in.
///
/// # Example
///
/// ```ignore
/// use embassy_rp::gpio::{Level, Output};
/// use embassy_time::{Delay, Duration};
/// use segment_kit::{Polarity, SevenSegment, SpiralDirection};
///
/// fn example(p: embassy_rp::Peripherals) -> segment_kit::Result<()> {
///     let mut display = SevenSegment::new(
///         [
///             Output::new(p.PIN_11, Level::Low), // Segment A
///             Output::new(p.PIN_10, Level::Low), // Segment B
///             Output::new(p.PIN_20, Level::Low), // Segment C
///             Output::new(p.PIN_21, Level::Low), // Segment D
///             Output::new(p.PIN_22, Level::Low), // Segment E
///             Output::new(p.PIN_9, Level::Low),  // Segment F
///             Output::new(p.PIN_8, Level::Low),  // Segment G
///         ],
///         Polarity::CommonCathode,
///     );
///
///     display.write_digit(7)?;
///     display.write_text("HELLo", Duration::from_millis(500), &mut Delay)?;
///     display.set_off("all")?;
///     display.spiral(Duration::from_millis(100), SpiralDirection::Forward, &mut Delay)?;
///     Ok(())
/// }
/// ```
pub struct SevenSegment<P> {
    segments: OutputArray<P>,
    polarity: Polarity,
}

impl<P: OutputPin> SevenSegment<P> {
    /// Creates a display from seven already-configured outputs, `a` to `g`.
    pub const fn new(pins: [P; SEGMENT_COUNT], polarity: Polarity) -> Self {
        Self {
            segments: OutputArray::new(pins),
            polarity,
        }
    }

    /// Creates a display by configuring seven pin numbers, `a` to `g`, as outputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPin`] if `bank` cannot provide one of the pins.
    pub fn from_pin_numbers<B>(
        bank: &mut B,
        pins: [u8; SEGMENT_COUNT],
        polarity: Polarity,
    ) -> Result<Self>
    where
        B: OutputBank<Output = P>,
    {
        #[cfg(feature = "display-trace")]
        info!("configuring segment pins {:?} ({:?})", pins, polarity);
        Ok(Self::new(bank.segment_outputs(pins)?, polarity))
    }

    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The pin level that lights a segment on this display.
    #[must_use]
    pub const fn on_level(&self) -> PinState {
        self.polarity.on_level()
    }

    /// The pin level that darkens a segment on this display.
    #[must_use]
    pub const fn off_level(&self) -> PinState {
        self.polarity.off_level()
    }

    /// Shows a digit from 0 to 9. All seven segments are rewritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] (before writing anything) if `digit > 9`.
    pub fn write_digit(&mut self, digit: u8) -> Result<()> {
        let glyph = Glyph::digit(digit).ok_or(Error::DigitOutOfRange(digit))?;
        #[cfg(feature = "display-trace")]
        info!("write_digit: {}", digit);
        self.write_glyph(glyph)
    }

    /// Shows one text character without pausing.
    ///
    /// Whitespace blanks the display and characters outside the letter table
    /// show a dash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn write_char(&mut self, character: char) -> Result<()> {
        self.write_glyph(Glyph::from_char(character))
    }

    /// Lights exactly the segments of `glyph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn write_glyph(&mut self, glyph: Glyph) -> Result<()> {
        self.write_segments(glyph.segments())
    }

    /// Shows `text` one character at a time, holding each for `interval`.
    ///
    /// Blocks for `interval` once per character, including whitespace
    /// (shown as a blank). Unknown characters show a dash instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn write_text<D: DelayNs>(
        &mut self,
        text: &str,
        interval: Duration,
        delay: &mut D,
    ) -> Result<()> {
        #[cfg(feature = "display-trace")]
        info!("write_text: {}", text);
        for character in text.chars() {
            self.write_char(character)?;
            pause(delay, interval);
        }
        Ok(())
    }

    /// Lights exactly `lit` and darkens every other segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn write_segments(&mut self, lit: SegmentSet) -> Result<()> {
        self.segments.set_from_segments(lit, self.polarity)
    }

    /// Turns on the selected segments, leaving the others alone.
    ///
    /// ```ignore
    /// display.set_on("all")?;
    /// display.set_on("ab")?;
    /// display.set_on(&["a", "b"])?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if any selected name is not `a` to `g`.
    /// Nothing is written in that case.
    pub fn set_on<'a>(&mut self, selector: impl Into<SegmentSelector<'a>>) -> Result<()> {
        self.set_selected(selector.into(), self.on_level())
    }

    /// Turns off the selected segments, leaving the others alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if any selected name is not `a` to `g`.
    /// Nothing is written in that case.
    pub fn set_off<'a>(&mut self, selector: impl Into<SegmentSelector<'a>>) -> Result<()> {
        self.set_selected(selector.into(), self.off_level())
    }

    fn set_selected(&mut self, selector: SegmentSelector<'_>, level: PinState) -> Result<()> {
        selector.validate()?;
        selector.try_for_each(|segment| self.segments.set_level(segment, level))
    }

    /// Lights segments one by one in [`SPIRAL_ORDER`] (or its reverse), pausing
    /// `interval` after each. Segments are never turned off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn spiral<D: DelayNs>(
        &mut self,
        interval: Duration,
        direction: SpiralDirection,
        delay: &mut D,
    ) -> Result<()> {
        #[cfg(feature = "display-trace")]
        info!("spiral: {:?}", direction);
        let on_level = self.on_level();
        for segment in direction.order() {
            self.segments.set_level(segment, on_level)?;
            pause(delay, interval);
        }
        Ok(())
    }
}

impl<P> fmt::Display for SevenSegment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::CommonCathode => f.write_str("7-segment display (common cathode)"),
            Polarity::CommonAnode => f.write_str("7-segment display (common anode)"),
        }
    }
}

/// Blocks for `interval`. Always calls the delay at least once, so a zero
/// interval still shows up as one (empty) pause.
fn pause<D: DelayNs>(delay: &mut D, interval: Duration) {
    let mut micros = interval.as_micros();
    loop {
        let chunk = u32::try_from(micros).unwrap_or(u32::MAX);
        delay.delay_us(chunk);
        micros = micros.saturating_sub(u64::from(chunk));
        if micros == 0 {
            break;
        }
    }
}
