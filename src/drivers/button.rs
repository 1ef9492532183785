//! Override push-button input.
//!
//! ## Hardware
//!
//! Active-low momentary switch to ground with the internal pull-up enabled.
//!
//! No interrupt and no debounce filter: the control loop samples the raw
//! level once per ~64 ms tick, which is longer than the contact bounce, so
//! each physical press shows up as exactly one low level run.

use embedded_hal::digital::InputPin;

use crate::error::{PinError, Result};

pub struct ButtonInput<P> {
    pin: P,
}

impl<P: InputPin> ButtonInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// `true` while the button is held down.
    pub fn is_pressed(&mut self) -> Result<bool> {
        self.pin.is_low().map_err(|_| PinError::ButtonRead.into())
    }
}
