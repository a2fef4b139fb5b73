//! Drivers for single-digit 7-segment LED displays wired straight to GPIO pins.
//!
//! A [`SevenSegment`] owns the seven segment outputs of one digit and renders
//! digits, a small alphabet, custom segment sets, and a spiral animation.
//! A [`DisplayRegistry`] collects displays so they can be switched on or off
//! together.
//!
//! Pins are anything implementing [`embedded_hal::digital::OutputPin`]; pauses go
//! through [`embedded_hal::delay::DelayNs`] (for example `embassy_time::Delay`).
#![cfg_attr(not(test), no_std)]

mod error;
mod glyph;
mod output_array;
mod output_bank;
mod registry;
mod segment;
mod seven_segment;

// Re-export commonly used items
pub use error::{Error, Result};
pub use glyph::Glyph;
pub use output_bank::OutputBank;
pub use registry::{DisplayId, DisplayRegistry};
pub use segment::{SEGMENT_COUNT, Segment, SegmentSelector, SegmentSet};
pub use seven_segment::{
    DEFAULT_SPIRAL_INTERVAL, DEFAULT_TEXT_INTERVAL, Polarity, SPIRAL_ORDER, SevenSegment,
    SpiralDirection,
};
