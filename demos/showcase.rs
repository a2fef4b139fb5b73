//! Cycles one display through digits, a word, a custom pattern, and both spirals.
//!
//! Wiring (segment `a` to `g`): GPIO 11, 10, 20, 21, 22, 9, 8, common cathode.
#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Delay, Duration, Timer};
use panic_probe as _;
use segment_kit::{
    DEFAULT_SPIRAL_INTERVAL, Polarity, Result, Segment, SegmentSet, SevenSegment, SpiralDirection,
};

const DIGIT_HOLD: Duration = Duration::from_millis(400);
const LETTER_HOLD: Duration = Duration::from_millis(600);
const PAUSE: Duration = Duration::from_secs(1);
const WORD: &str = "HELLo PicO";
// Top, middle, and bottom bars.
const BARS: SegmentSet = SegmentSet::of(&[Segment::A, Segment::G, Segment::D]);

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let mut display = SevenSegment::new(
        [
            Output::new(p.PIN_11, Level::Low),
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_20, Level::Low),
            Output::new(p.PIN_21, Level::Low),
            Output::new(p.PIN_22, Level::Low),
            Output::new(p.PIN_9, Level::Low),
            Output::new(p.PIN_8, Level::Low),
        ],
        Polarity::CommonCathode,
    );
    info!("{}", defmt::Display2Format(&display));

    loop {
        info!("Counting 0-9");
        for digit in 0..=9 {
            display.write_digit(digit)?;
            Timer::after(DIGIT_HOLD).await;
        }

        info!("Spelling {}", WORD);
        display.write_text(WORD, LETTER_HOLD, &mut Delay)?;

        display.write_segments(BARS)?;
        Timer::after(PAUSE).await;

        for direction in [SpiralDirection::Forward, SpiralDirection::Reverse] {
            info!("Spiral {}", direction);
            display.set_off("all")?;
            display.spiral(DEFAULT_SPIRAL_INTERVAL, direction, &mut Delay)?;
        }
        Timer::after(PAUSE).await;
        display.set_off("all")?;
    }
}
