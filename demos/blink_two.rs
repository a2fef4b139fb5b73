//! Two common-cathode displays blinking together, twice a second.
//!
//! Wiring (segment `a` to `g`):
//! - left display: GPIO 11, 10, 20, 21, 22, 9, 8
//! - right display: GPIO 15, 14, 16, 19, 17, 13, 12
#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};
use panic_probe as _;
use segment_kit::{DisplayRegistry, Polarity, Result, SevenSegment};

const BLINK_HALF_PERIOD: Duration = Duration::from_millis(500);
const DISPLAY_COUNT: usize = 2;

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let mut registry = DisplayRegistry::<Output<'static>, DISPLAY_COUNT>::new();
    registry.register(SevenSegment::new(
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
    ))?;
    registry.register(SevenSegment::new(
        [
            Output::new(p.PIN_15, Level::Low),
            Output::new(p.PIN_14, Level::Low),
            Output::new(p.PIN_16, Level::Low),
            Output::new(p.PIN_19, Level::Low),
            Output::new(p.PIN_17, Level::Low),
            Output::new(p.PIN_13, Level::Low),
            Output::new(p.PIN_12, Level::Low),
        ],
        Polarity::CommonCathode,
    ))?;
    info!("Blinking {} displays", registry.total());

    loop {
        registry.all_on()?;
        Timer::after(BLINK_HALF_PERIOD).await;
        registry.all_off()?;
        Timer::after(BLINK_HALF_PERIOD).await;
    }
}
