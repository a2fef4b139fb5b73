//! Recording pins and delays for host tests.
#![expect(dead_code, reason = "Each test crate uses a different subset")]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use segment_kit::{OutputBank, Polarity, SEGMENT_COUNT, Segment, SegmentSet, SevenSegment};

/// Pins of the first demo display, `a` to `g`.
pub const LEFT_PINS: [u8; SEGMENT_COUNT] = [11, 10, 20, 21, 22, 9, 8];
/// Pins of the second demo display, `a` to `g`.
pub const RIGHT_PINS: [u8; SEGMENT_COUNT] = [15, 14, 16, 19, 17, 13, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Write { pin: u8, level: PinState },
    Pause { micros: u32 },
}

/// Everything the pins and the delay did, in order.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn writes(&self) -> Vec<(u8, PinState)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write { pin, level } => Some((pin, level)),
                Event::Pause { .. } => None,
            })
            .collect()
    }

    pub fn pauses(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Pause { micros } => Some(micros),
                Event::Write { .. } => None,
            })
            .collect()
    }

    /// Last level written to `pin`, if any.
    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.writes()
            .into_iter()
            .rev()
            .find_map(|(written, level)| (written == pin).then_some(level))
    }

    /// Segments of the display on `pins` whose last write was the on level.
    pub fn lit(&self, pins: [u8; SEGMENT_COUNT], polarity: Polarity) -> SegmentSet {
        Segment::ALL
            .into_iter()
            .zip(pins)
            .filter(|&(_, pin)| self.level(pin) == Some(polarity.on_level()))
            .map(|(segment, _)| segment)
            .collect()
    }

    pub fn recording_pin(&self, pin: u8) -> MockPin {
        MockPin {
            pin,
            log: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.clone() }
    }

    pub fn display(&self, pins: [u8; SEGMENT_COUNT], polarity: Polarity) -> SevenSegment<MockPin> {
        SevenSegment::new(pins.map(|pin| self.recording_pin(pin)), polarity)
    }
}

pub struct MockPin {
    pin: u8,
    log: Log,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Write {
            pin: self.pin,
            level: PinState::Low,
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Write {
            pin: self.pin,
            level: PinState::High,
        });
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Log,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Pause { micros: ns / 1_000 });
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::Pause { micros: us });
    }
}

/// A GPIO block with pins `0..pin_count`.
pub struct MockBank {
    pin_count: u8,
    configured: Vec<u8>,
    log: Log,
}

impl MockBank {
    pub fn new(pin_count: u8, log: &Log) -> Self {
        Self {
            pin_count,
            configured: Vec::new(),
            log: log.clone(),
        }
    }

    /// Pins handed out as outputs so far, in order.
    pub fn configured(&self) -> &[u8] {
        &self.configured
    }
}

impl OutputBank for MockBank {
    type Output = MockPin;

    fn has_output(&self, pin: u8) -> bool {
        pin < self.pin_count
    }

    fn output(&mut self, pin: u8) -> Option<MockPin> {
        if !self.has_output(pin) {
            return None;
        }
        self.configured.push(pin);
        Some(self.log.recording_pin(pin))
    }
}

/// Expected `(pin, level)` writes for a full refresh of `pins` showing `lit`.
pub fn full_refresh(
    pins: [u8; SEGMENT_COUNT],
    lit: SegmentSet,
    polarity: Polarity,
) -> Vec<(u8, PinState)> {
    Segment::ALL
        .into_iter()
        .zip(pins)
        .map(|(segment, pin)| (pin, polarity.level(lit.contains(segment))))
        .collect()
}
