//! Segment tags, segment bit masks, and segment selectors.
//!
//! The bit layout follows the usual 7-segment convention: segment A is bit 0
//! through segment G at bit 6.
//!
//! ```text
//!    aaa
//!   f   b
//!   f   b
//!    ggg
//!   e   c
//!   e   c
//!    ddd
//! ```

use core::ops::{BitOr, BitOrAssign};

use crate::{Error, Result};

/// The number of segments on a display.
pub const SEGMENT_COUNT: usize = 7;

/// One of the seven strokes of a digit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Segment {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

impl Segment {
    /// All segments, in `a` to `g` order.
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Position of this segment in an output array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// The lowercase letter naming this segment.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::G => 'g',
        }
    }

    /// Looks up a segment by its letter, ignoring case.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'e' => Some(Self::E),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            _ => None,
        }
    }

    /// Parses a string holding exactly one segment letter.
    fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => None,
        }
    }
}

/// A set of segments packed into the low seven bits of a byte.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentSet(u8);

impl SegmentSet {
    /// No segments lit.
    pub const EMPTY: Self = Self(0);
    /// Every segment lit.
    pub const ALL: Self = Self(0b_0111_1111);

    /// Creates a set from raw bits. Bit 7 (a decimal point on some parts) is ignored.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from a list of segments.
    #[must_use]
    pub const fn of(segments: &[Segment]) -> Self {
        let mut bits = 0;
        let mut index = 0;
        while index < segments.len() {
            #[expect(clippy::indexing_slicing, reason = "index is bounded by len")]
            let segment = segments[index];
            bits |= segment.bit();
            index += 1;
        }
        Self(bits)
    }

    #[must_use]
    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    #[must_use]
    pub const fn with(self, segment: Segment) -> Self {
        Self(self.0 | segment.bit())
    }

    pub const fn insert(&mut self, segment: Segment) {
        self.0 |= segment.bit();
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the members in `a` to `g` order.
    pub fn iter(self) -> impl Iterator<Item = Segment> {
        Segment::ALL
            .into_iter()
            .filter(move |&segment| self.contains(segment))
    }
}

impl From<Segment> for SegmentSet {
    fn from(segment: Segment) -> Self {
        Self(segment.bit())
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl BitOr for SegmentSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Segment> for SegmentSet {
    type Output = Self;

    fn bitor(self, rhs: Segment) -> Self::Output {
        self.with(rhs)
    }
}

impl BitOrAssign<Segment> for SegmentSet {
    fn bitor_assign(&mut self, rhs: Segment) {
        self.insert(rhs);
    }
}

/// Chooses which segments [`SevenSegment::set_on`](crate::SevenSegment::set_on)
/// and [`SevenSegment::set_off`](crate::SevenSegment::set_off) touch.
///
/// `&str` converts to [`SegmentSelector::All`] when it is exactly `"all"` and to
/// [`SegmentSelector::Letters`] otherwise, so `display.set_on("abg")` and
/// `display.set_on(&["a", "b", "g"])` both work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentSelector<'a> {
    /// Every segment.
    #[default]
    All,
    /// One letter per segment, such as `"abc"`. Case-insensitive.
    Letters(&'a str),
    /// One single-letter string per segment, such as `["a", "B"]`.
    List(&'a [&'a str]),
    /// Segments already resolved to tags.
    Set(SegmentSet),
}

impl SegmentSelector<'_> {
    /// Calls `visit` for every selected segment in selection order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] on the first name that is not `a` to `g`,
    /// or whatever `visit` returns.
    pub fn try_for_each(&self, mut visit: impl FnMut(Segment) -> Result<()>) -> Result<()> {
        match *self {
            Self::All => Segment::ALL.into_iter().try_for_each(visit),
            Self::Letters(letters) => letters.chars().try_for_each(|letter| {
                visit(Segment::from_letter(letter).ok_or(Error::InvalidSegment)?)
            }),
            Self::List(names) => names.iter().try_for_each(|name| {
                visit(Segment::from_name(name).ok_or(Error::InvalidSegment)?)
            }),
            Self::Set(set) => set.iter().try_for_each(visit),
        }
    }

    /// Checks every name without touching any output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if any name is not `a` to `g`.
    pub fn validate(&self) -> Result<()> {
        self.try_for_each(|_| Ok(()))
    }
}

impl<'a> From<&'a str> for SegmentSelector<'a> {
    fn from(letters: &'a str) -> Self {
        if letters == "all" {
            Self::All
        } else {
            Self::Letters(letters)
        }
    }
}

impl<'a> From<&'a [&'a str]> for SegmentSelector<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        Self::List(names)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for SegmentSelector<'a> {
    fn from(names: &'a [&'a str; N]) -> Self {
        Self::List(names)
    }
}

impl From<SegmentSet> for SegmentSelector<'_> {
    fn from(set: SegmentSet) -> Self {
        Self::Set(set)
    }
}

impl From<Segment> for SegmentSelector<'_> {
    fn from(segment: Segment) -> Self {
        Self::Set(segment.into())
    }
}
