//! Number Match! firmware for the nRF52840-DK.
//!
//! Brings up the board, seeds the target generator, and hands everything
//! to the dispatcher, which polls inputs forever.  There is no exit path;
//! power-cycle to stop.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Delay;
use numbermatch::board::{entropy, GpioButtons, GpioNav, LedBar, OledDisplay, PwmBuzzer};
use numbermatch::rng::SmallRngSource;
use numbermatch::{configured_dial, Board, Dispatcher};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("numbermatch v{}", env!("CARGO_PKG_VERSION"));

    let mut hw_rng = Rng::new(p.RNG, Irqs);
    let seed = entropy::boot_seed(&mut hw_rng);

    // Pin map: see config.rs.
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let board = Board {
        display: OledDisplay::new(i2c),
        nav: GpioNav::new(p.P0_03.degrade(), p.P0_04.degrade(), p.P0_28.degrade()),
        buttons: GpioButtons::new(
            p.P0_11.degrade(),
            p.P0_12.degrade(),
            p.P0_24.degrade(),
            p.P0_25.degrade(),
        ),
        lights: LedBar::new([
            p.P0_13.degrade(),
            p.P0_14.degrade(),
            p.P0_15.degrade(),
            p.P0_16.degrade(),
        ]),
        buzzer: PwmBuzzer::new(SimplePwm::new_1ch(p.PWM0, p.P1_08)),
    };

    let dispatcher = Dispatcher::new(
        board,
        Delay,
        SmallRngSource::from_seed(seed),
        configured_dial(),
    );
    info!("Board ready, entering poll loop");
    dispatcher.run()
}
