//! Host-level tests for single-display rendering.
#![cfg(feature = "host")]

mod common;

use common::{Event, LEFT_PINS, Log, MockBank, full_refresh};
use embassy_time::Duration;
use embedded_hal::digital::PinState;
use segment_kit::{
    DEFAULT_SPIRAL_INTERVAL, DEFAULT_TEXT_INTERVAL, Error, Polarity, Segment, SegmentSet,
    SevenSegment, SpiralDirection,
};

const CC: Polarity = Polarity::CommonCathode;
const CA: Polarity = Polarity::CommonAnode;

const fn set(segments: &[Segment]) -> SegmentSet {
    SegmentSet::of(segments)
}

fn pin_of(segment: Segment) -> u8 {
    LEFT_PINS[segment.index()]
}

#[test]
fn every_digit_rewrites_all_seven_segments() {
    use Segment::{A, B, C, D, E, F, G};
    let expected = [
        set(&[A, B, C, D, E, F]),
        set(&[B, C]),
        set(&[A, B, G, E, D]),
        set(&[A, B, C, G, D]),
        set(&[B, C, F, G]),
        set(&[A, C, D, F, G]),
        set(&[A, C, D, E, F, G]),
        set(&[A, B, C]),
        set(&[A, B, C, D, E, F, G]),
        set(&[A, B, C, F, G]),
    ];
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    for (digit, lit) in (0_u8..).zip(expected) {
        log.clear();
        display.write_digit(digit).expect("digit is in range");
        assert_eq!(log.writes(), full_refresh(LEFT_PINS, lit, CC), "digit {digit}");
    }
}

#[test]
fn eight_lights_everything_and_one_lights_b_c() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display.write_digit(8).expect("digit is in range");
    assert_eq!(log.lit(LEFT_PINS, CC), SegmentSet::ALL);

    display.write_digit(1).expect("digit is in range");
    assert_eq!(log.lit(LEFT_PINS, CC), set(&[Segment::B, Segment::C]));
}

#[test]
fn out_of_range_digit_fails_without_writing() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    for digit in [10, 42, u8::MAX] {
        let err = display.write_digit(digit).expect_err("digit is out of range");
        assert_eq!(err, Error::DigitOutOfRange(digit));
        assert!(err.to_string().contains(&digit.to_string()));
    }
    assert!(log.is_empty());
}

#[test]
fn polarity_sets_on_and_off_levels() {
    let log = Log::new();
    let cathode = log.display(LEFT_PINS, CC);
    let anode = log.display(LEFT_PINS, CA);

    assert_eq!(cathode.on_level(), PinState::High);
    assert_eq!(cathode.off_level(), PinState::Low);
    assert_eq!(anode.on_level(), PinState::Low);
    assert_eq!(anode.off_level(), PinState::High);
    assert_eq!(Polarity::default(), CC);
}

#[test]
fn common_anode_inverts_every_write() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CA);

    display.write_digit(1).expect("digit is in range");
    assert_eq!(log.level(pin_of(Segment::B)), Some(PinState::Low));
    assert_eq!(log.level(pin_of(Segment::A)), Some(PinState::High));

    log.clear();
    display.set_on("all").expect("all is valid");
    assert!(log.writes().iter().all(|&(_, level)| level == PinState::Low));

    log.clear();
    display
        .spiral(Duration::from_millis(1), SpiralDirection::Forward, &mut log.delay())
        .expect("spiral writes succeed");
    assert!(log.writes().iter().all(|&(_, level)| level == PinState::Low));
}

#[test]
fn invalid_segment_list_changes_nothing() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    assert_eq!(display.set_on(&["a", "x"]), Err(Error::InvalidSegment));
    assert_eq!(display.set_off(&["a", "x"]), Err(Error::InvalidSegment));
    assert_eq!(display.set_on("abz"), Err(Error::InvalidSegment));
    assert_eq!(display.set_off(&["ab"]), Err(Error::InvalidSegment));
    assert!(log.is_empty());
}

#[test]
fn on_all_then_off_all_ends_dark() {
    for polarity in [CC, CA] {
        let log = Log::new();
        let mut display = log.display(LEFT_PINS, polarity);

        display.write_digit(4).expect("digit is in range");
        display.set_on("all").expect("all is valid");
        assert_eq!(log.lit(LEFT_PINS, polarity), SegmentSet::ALL);

        display.set_off("all").expect("all is valid");
        for pin in LEFT_PINS {
            assert_eq!(log.level(pin), Some(polarity.off_level()));
        }
    }
}

#[test]
fn named_segments_are_written_in_input_order() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display.set_on("Gab").expect("letters are valid");
    assert_eq!(
        log.writes(),
        vec![
            (pin_of(Segment::G), PinState::High),
            (pin_of(Segment::A), PinState::High),
            (pin_of(Segment::B), PinState::High),
        ]
    );

    log.clear();
    display.set_off(&["c", "C", "d"]).expect("names are valid");
    assert_eq!(
        log.writes(),
        vec![
            (pin_of(Segment::C), PinState::Low),
            (pin_of(Segment::C), PinState::Low),
            (pin_of(Segment::D), PinState::Low),
        ]
    );

    log.clear();
    display.set_on(Segment::E).expect("tag is valid");
    assert_eq!(log.writes(), vec![(pin_of(Segment::E), PinState::High)]);
}

#[test]
fn set_on_leaves_other_segments_alone() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display.write_digit(1).expect("digit is in range");
    display.set_on("a").expect("letter is valid");
    assert_eq!(
        log.lit(LEFT_PINS, CC),
        set(&[Segment::A, Segment::B, Segment::C])
    );
}

#[test]
fn space_blanks_and_pauses_once() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display
        .write_text(" ", DEFAULT_TEXT_INTERVAL, &mut log.delay())
        .expect("text writes succeed");

    assert_eq!(log.writes(), full_refresh(LEFT_PINS, SegmentSet::EMPTY, CC));
    assert_eq!(log.pauses(), vec![1_000_000]);
    assert_eq!(log.events().last(), Some(&Event::Pause { micros: 1_000_000 }));
}

#[test]
fn unmapped_letter_shows_a_dash() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display
        .write_text("Z", Duration::from_millis(10), &mut log.delay())
        .expect("unknown characters are not an error");

    assert_eq!(log.lit(LEFT_PINS, CC), set(&[Segment::G]));
    assert_eq!(log.pauses(), vec![10_000]);
}

#[test]
fn text_shows_each_character_then_pauses() {
    use Segment::{C, D, E, F, G};
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display
        .write_text("hi u7", Duration::from_millis(250), &mut log.delay())
        .expect("text writes succeed");

    let mut expected = Vec::new();
    for lit in [
        set(&[C, E, F, G]),
        set(&[E]),
        SegmentSet::EMPTY,
        set(&[C, D, E]),
        set(&[G]),
    ] {
        expected.extend(
            full_refresh(LEFT_PINS, lit, CC)
                .into_iter()
                .map(|(pin, level)| Event::Write { pin, level }),
        );
        expected.push(Event::Pause { micros: 250_000 });
    }
    assert_eq!(log.events(), expected);
}

#[test]
fn empty_text_does_nothing() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display
        .write_text("", DEFAULT_TEXT_INTERVAL, &mut log.delay())
        .expect("empty text is fine");
    assert!(log.is_empty());
}

#[test]
fn long_intervals_are_split_into_u32_microsecond_chunks() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display
        .write_text("o", Duration::from_secs(5_000), &mut log.delay())
        .expect("text writes succeed");
    // 5_000_000_000 us = u32::MAX + 705_032_705
    assert_eq!(log.pauses(), vec![u32::MAX, 705_032_705]);

    log.clear();
    display
        .write_text("o", Duration::from_millis(0), &mut log.delay())
        .expect("text writes succeed");
    assert_eq!(log.pauses(), vec![0]);
}

#[test]
fn custom_segments_light_exactly_the_set() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CA);
    let lit = set(&[Segment::A, Segment::G, Segment::D]);

    display.write_segments(lit).expect("writes succeed");
    assert_eq!(log.writes(), full_refresh(LEFT_PINS, lit, CA));
    assert_eq!(log.lit(LEFT_PINS, CA), lit);
}

#[test]
fn spiral_forward_and_reverse_only_turn_on() {
    use Segment::{A, B, C, D, E, F, G};
    let step = Duration::from_millis(5);

    for (direction, order) in [
        (SpiralDirection::Forward, [G, F, A, B, C, D, E]),
        (SpiralDirection::Reverse, [E, D, C, B, A, F, G]),
    ] {
        let log = Log::new();
        let mut display = log.display(LEFT_PINS, CC);

        display
            .spiral(step, direction, &mut log.delay())
            .expect("spiral writes succeed");

        let expected: Vec<Event> = order
            .into_iter()
            .flat_map(|segment| {
                [
                    Event::Write {
                        pin: pin_of(segment),
                        level: PinState::High,
                    },
                    Event::Pause { micros: 5_000 },
                ]
            })
            .collect();
        assert_eq!(log.events(), expected, "{direction:?}");
    }
}

#[test]
fn default_spiral_interval_is_a_tenth_of_a_second() {
    let log = Log::new();
    let mut display = log.display(LEFT_PINS, CC);

    display
        .spiral(DEFAULT_SPIRAL_INTERVAL, SpiralDirection::default(), &mut log.delay())
        .expect("spiral writes succeed");
    assert_eq!(log.pauses(), vec![100_000; 7]);
    assert_eq!(log.lit(LEFT_PINS, CC), SegmentSet::ALL);
}

#[test]
fn pin_numbers_are_configured_through_the_bank() {
    let log = Log::new();
    let mut bank = MockBank::new(30, &log);

    let mut display =
        SevenSegment::from_pin_numbers(&mut bank, LEFT_PINS, CC).expect("pins exist");
    display.write_digit(7).expect("digit is in range");
    assert_eq!(
        log.lit(LEFT_PINS, CC),
        set(&[Segment::A, Segment::B, Segment::C])
    );

    assert_eq!(bank.configured(), LEFT_PINS);

    let err = SevenSegment::from_pin_numbers(&mut bank, [1, 2, 3, 40, 5, 6, 7], CC)
        .err()
        .expect("pin 40 is not in the bank");
    assert_eq!(err, Error::InvalidPin(40));
}

#[test]
fn bad_pin_number_configures_no_pins() {
    let log = Log::new();
    let mut bank = MockBank::new(30, &log);

    let err = SevenSegment::from_pin_numbers(&mut bank, [1, 2, 3, 40, 5, 99, 7], CC)
        .err()
        .expect("pins 40 and 99 are not in the bank");

    assert_eq!(err, Error::InvalidPin(40));
    assert!(bank.configured().is_empty());
    assert!(log.is_empty());
}

#[test]
fn display_describes_its_polarity() {
    let log = Log::new();
    assert_eq!(
        log.display(LEFT_PINS, CC).to_string(),
        "7-segment display (common cathode)"
    );
    assert_eq!(
        log.display(LEFT_PINS, CA).to_string(),
        "7-segment display (common anode)"
    );
}
