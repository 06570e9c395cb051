//! Piezo buzzer on a PWM channel.

use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use embassy_time::{block_for, Duration};

use crate::drivers::Buzzer;

/// PWM counter clock with `Prescaler::Div16`.
const PWM_CLOCK_HZ: u32 = 1_000_000;

/// Largest counter top the PWM peripheral accepts.
const MAX_TOP: u32 = 0x7FFF;

pub struct PwmBuzzer {
    pwm: SimplePwm<'static, PWM0>,
}

impl PwmBuzzer {
    pub fn new(mut pwm: SimplePwm<'static, PWM0>) -> Self {
        pwm.set_prescaler(Prescaler::Div16);
        pwm.disable();
        Self { pwm }
    }
}

/// Counter top and compare value for a tone.
fn period_counts(frequency_hz: u32, duty_percent: u8) -> (u16, u16) {
    let top = (PWM_CLOCK_HZ / frequency_hz.max(1)).clamp(1, MAX_TOP);
    let on = top * u32::from(duty_percent.min(100)) / 100;
    (top as u16, on as u16)
}

impl Buzzer for PwmBuzzer {
    fn play(&mut self, frequency_hz: u32, duty_percent: u8, duration_ms: u32) {
        if frequency_hz == 0 || duration_ms == 0 {
            return;
        }
        let (top, on) = period_counts(frequency_hz, duty_percent);
        self.pwm.enable();
        self.pwm.set_max_duty(top);
        self.pwm.set_duty(0, on);

        block_for(Duration::from_millis(u64::from(duration_ms)));

        self.pwm.set_duty(0, 0);
        self.pwm.disable();
    }
}
