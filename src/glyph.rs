//! Static glyph tables for digits and the supported letters.

use crate::segment::{Segment, SegmentSet};

// ============================================================================
// Glyph Constants
// ============================================================================

/// Segment patterns for the glyphs a single digit can show.
pub(crate) struct Leds;

impl Leds {
    /// Array representing the segments for digits 0-9 on a 7-segment display.
    pub(crate) const DIGITS: [SegmentSet; 10] = [
        SegmentSet::from_bits(0b_0011_1111), // Digit 0
        SegmentSet::from_bits(0b_0000_0110), // Digit 1
        SegmentSet::from_bits(0b_0101_1011), // Digit 2
        SegmentSet::from_bits(0b_0100_1111), // Digit 3
        SegmentSet::from_bits(0b_0110_0110), // Digit 4
        SegmentSet::from_bits(0b_0110_1101), // Digit 5
        SegmentSet::from_bits(0b_0111_1101), // Digit 6
        SegmentSet::from_bits(0b_0000_0111), // Digit 7
        SegmentSet::from_bits(0b_0111_1111), // Digit 8
        SegmentSet::from_bits(0b_0110_0111), // Digit 9 (no bottom bar)
    ];

    const LETTER_A: SegmentSet = SegmentSet::from_bits(0b_0111_0111);
    const LETTER_B_LOWER: SegmentSet = SegmentSet::from_bits(0b_0111_1100);
    const LETTER_C_LOWER: SegmentSet = SegmentSet::from_bits(0b_0101_1000);
    const LETTER_D_LOWER: SegmentSet = SegmentSet::from_bits(0b_0101_1110);
    const LETTER_E: SegmentSet = SegmentSet::from_bits(0b_0111_1001);
    const LETTER_F: SegmentSet = SegmentSet::from_bits(0b_0111_0001);
    const LETTER_G_LOWER: SegmentSet = SegmentSet::from_bits(0b_0110_1111);
    const LETTER_H: SegmentSet = SegmentSet::from_bits(0b_0111_0110);
    const LETTER_H_LOWER: SegmentSet = SegmentSet::from_bits(0b_0111_0100);
    const LETTER_I: SegmentSet = SegmentSet::from_bits(0b_0011_0000);
    const LETTER_I_LOWER: SegmentSet = SegmentSet::from_bits(0b_0001_0000);
    const LETTER_J: SegmentSet = SegmentSet::from_bits(0b_0001_1110);
    const LETTER_L: SegmentSet = SegmentSet::from_bits(0b_0011_1000);
    const LETTER_O_LOWER: SegmentSet = SegmentSet::from_bits(0b_0101_1100);
    const LETTER_P: SegmentSet = SegmentSet::from_bits(0b_0111_0011);
    const LETTER_R_LOWER: SegmentSet = SegmentSet::from_bits(0b_0111_0000);
    const LETTER_S: SegmentSet = SegmentSet::from_bits(0b_0110_1101);
    const LETTER_U: SegmentSet = SegmentSet::from_bits(0b_0011_1110);
    const LETTER_U_LOWER: SegmentSet = SegmentSet::from_bits(0b_0001_1100);

    /// Shown for characters with no glyph.
    const DASH: SegmentSet = SegmentSet::of(&[Segment::G]);

    /// Maps a character to its letter pattern.
    ///
    /// Most letters fold case to one pattern. `H`, `I`, and `U` keep distinct
    /// upper and lower case shapes.
    const fn letter(letter: char) -> Option<SegmentSet> {
        let segments = match letter {
            'A' | 'a' => Self::LETTER_A,
            'B' | 'b' => Self::LETTER_B_LOWER,
            'C' | 'c' => Self::LETTER_C_LOWER,
            'D' | 'd' => Self::LETTER_D_LOWER,
            'E' | 'e' => Self::LETTER_E,
            'F' | 'f' => Self::LETTER_F,
            'G' | 'g' => Self::LETTER_G_LOWER,
            'H' => Self::LETTER_H,
            'h' => Self::LETTER_H_LOWER,
            'I' => Self::LETTER_I,
            'i' => Self::LETTER_I_LOWER,
            'J' | 'j' => Self::LETTER_J,
            'L' | 'l' => Self::LETTER_L,
            'O' | 'o' => Self::LETTER_O_LOWER,
            'P' | 'p' => Self::LETTER_P,
            'R' | 'r' => Self::LETTER_R_LOWER,
            'S' | 's' => Self::LETTER_S,
            'U' => Self::LETTER_U,
            'u' => Self::LETTER_U_LOWER,
            _ => return None,
        };
        Some(segments)
    }
}

// ============================================================================
// Glyph
// ============================================================================

/// What a single character looks like on the display.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Whitespace: every segment off.
    Blank,
    /// A digit or a letter from the letter table.
    Pattern(SegmentSet),
    /// Any character without a glyph. Rendered as a dash (segment `g`).
    Unknown,
}

impl Glyph {
    /// Looks up the glyph for a digit, or `None` if `digit > 9`.
    #[must_use]
    pub fn digit(digit: u8) -> Option<Self> {
        Leds::DIGITS
            .get(usize::from(digit))
            .copied()
            .map(Self::Pattern)
    }

    /// Looks up the glyph for a text character.
    ///
    /// Only letters have patterns here; digits inside text show as [`Glyph::Unknown`].
    #[must_use]
    pub fn from_char(character: char) -> Self {
        // Information separators U+001C..=U+001F count as blanks too.
        if character.is_whitespace() || matches!(character, '\u{1c}'..='\u{1f}') {
            return Self::Blank;
        }
        match Leds::letter(character) {
            Some(segments) => Self::Pattern(segments),
            None => Self::Unknown,
        }
    }

    /// The segments this glyph lights.
    #[must_use]
    pub const fn segments(self) -> SegmentSet {
        match self {
            Self::Blank => SegmentSet::EMPTY,
            Self::Pattern(segments) => segments,
            Self::Unknown => Leds::DASH,
        }
    }
}
