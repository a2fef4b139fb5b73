use embedded_hal::digital::{OutputPin, PinState};

use crate::segment::{SEGMENT_COUNT, Segment, SegmentSet};
use crate::seven_segment::Polarity;
use crate::{Error, Result};

/// The seven segment outputs of one display, indexed by [`Segment`].
///
/// Owned by [`SevenSegment`](crate::SevenSegment).
pub struct OutputArray<P>([P; SEGMENT_COUNT]);

impl<P: OutputPin> OutputArray<P> {
    /// Wraps seven output pins given in `a` to `g` order.
    pub const fn new(outputs: [P; SEGMENT_COUNT]) -> Self {
        Self(outputs)
    }

    #[inline]
    #[expect(clippy::indexing_slicing, reason = "Segment indexes are below SEGMENT_COUNT")]
    pub(crate) fn set_level(&mut self, segment: Segment, level: PinState) -> Result<()> {
        self.0[segment.index()]
            .set_state(level)
            .map_err(|_| Error::CannotSetOutputState)
    }

    /// Writes every output, `a` first: lit segments get the on level, the rest the off level.
    #[inline]
    pub(crate) fn set_from_segments(&mut self, lit: SegmentSet, polarity: Polarity) -> Result<()> {
        for (segment, output) in Segment::ALL.into_iter().zip(&mut self.0) {
            output
                .set_state(polarity.level(lit.contains(segment)))
                .map_err(|_| Error::CannotSetOutputState)?;
        }
        Ok(())
    }
}
