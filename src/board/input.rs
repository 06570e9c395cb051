//! GPIO inputs: navigation switch and game buttons.
//!
//! All inputs are active-low with the internal pull-up enabled.  The nav
//! switch is edge-detected in software (one `true` per press); buttons are
//! sampled by level and rely on the dispatcher's hold times for debouncing.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

use crate::drivers::{ButtonId, Buttons, NavSwitch};

/// One active-low input that reports only the press edge.
pub struct EdgeInput {
    pin: Input<'static>,
    was_low: bool,
}

impl EdgeInput {
    pub fn new(pin: AnyPin) -> Self {
        let pin = Input::new(pin, Pull::Up);
        // Treat a contact held at boot as already seen.
        let was_low = pin.is_low();
        Self { pin, was_low }
    }

    /// `true` on the first poll after the contact closes.
    pub fn pressed(&mut self) -> bool {
        let low = self.pin.is_low();
        let edge = low && !self.was_low;
        self.was_low = low;
        edge
    }
}

pub struct GpioNav {
    up: EdgeInput,
    down: EdgeInput,
    center: EdgeInput,
}

impl GpioNav {
    pub fn new(up: AnyPin, down: AnyPin, center: AnyPin) -> Self {
        Self {
            up: EdgeInput::new(up),
            down: EdgeInput::new(down),
            center: EdgeInput::new(center),
        }
    }
}

impl NavSwitch for GpioNav {
    fn polled_up(&mut self) -> bool {
        self.up.pressed()
    }

    fn polled_down(&mut self) -> bool {
        self.down.pressed()
    }

    fn polled_center(&mut self) -> bool {
        self.center.pressed()
    }
}

pub struct GpioButtons {
    reset: Input<'static>,
    hint: Input<'static>,
    harder: Input<'static>,
    easier: Input<'static>,
}

impl GpioButtons {
    pub fn new(reset: AnyPin, hint: AnyPin, harder: AnyPin, easier: AnyPin) -> Self {
        Self {
            reset: Input::new(reset, Pull::Up),
            hint: Input::new(hint, Pull::Up),
            harder: Input::new(harder, Pull::Up),
            easier: Input::new(easier, Pull::Up),
        }
    }
}

impl Buttons for GpioButtons {
    fn is_pressed(&mut self, id: ButtonId) -> bool {
        let pin = match id {
            ButtonId::Reset => &self.reset,
            ButtonId::Hint => &self.hint,
            ButtonId::Harder => &self.harder,
            ButtonId::Easier => &self.easier,
        };
        pin.is_low()
    }
}
