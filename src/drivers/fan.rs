//! Fan output driver.
//!
//! Single logic-level MOSFET switching the fan supply; HIGH = running.
//! Generic over any `embedded-hal` output pin so the same driver runs on an
//! `esp-idf-hal` `PinDriver` and on the mock pins used in tests.

use embedded_hal::digital::OutputPin;

use crate::error::{PinError, Result};

pub struct FanDriver<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> FanDriver<P> {
    /// Take ownership of the pin and force the fan off.
    pub fn new(mut pin: P) -> Result<Self> {
        pin.set_low().map_err(|_| PinError::FanWrite)?;
        Ok(Self { pin, on: false })
    }

    /// Drive the output. The pin is written even if the level is unchanged.
    pub fn set(&mut self, on: bool) -> Result<()> {
        let written = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        written.map_err(|_| PinError::FanWrite)?;
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
