//! Thermistor temperature proxy.
//!
//! NTC thermistor (10 kOhm @ 22 C) at the bottom of a divider with a
//! ~40 kOhm top resistor fed from a GPIO, so the divider only draws current
//! while a sample is being taken. Resistance falls as temperature rises:
//! **a lower reading means hotter**. No conversion to degrees is done; the
//! thresholds are calibrated in raw units.
//!
//! The proxy is ratiometric on an 8-bit scale: `256 * R_ntc / (R_ntc + 40k)`.
//! A 4 kOhm thermistor reads 23 (the hot threshold), 10 kOhm reads 51.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU8 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU8, Ordering};

use crate::drivers::hw_init;
use crate::events::{Event, IrqEvents};
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_READING: AtomicU8 = AtomicU8::new(30);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_reading(raw: u8) {
    SIM_TEMP_READING.store(raw, Ordering::Relaxed);
}

/// Two-threshold classifier with a dead band.
///
/// `reading > cool_above` → cool, `reading < hot_below` → hot, anything in
/// between keeps the previous classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hysteresis {
    hot_below: u8,
    cool_above: u8,
}

impl Hysteresis {
    pub const fn new(hot_below: u8, cool_above: u8) -> Self {
        Self { hot_below, cool_above }
    }

    pub const fn classify(&self, reading: u8, was_hot: bool) -> bool {
        if reading > self.cool_above {
            false
        } else if reading < self.hot_below {
            true
        } else {
            was_hot
        }
    }
}

/// Power-gated ADC front end.
///
/// The oneshot driver converts synchronously, so `begin_conversion` does
/// the conversion and then raises [`Event::ConversionComplete`], which is
/// what the completion interrupt does on parts with an async ADC.
pub struct ProxyAdc {
    irq: &'static IrqEvents,
    last: u8,
}

impl ProxyAdc {
    pub fn new(irq: &'static IrqEvents) -> Self {
        Self {
            irq,
            last: 0,
        }
    }

    pub fn power_on(&mut self) {
        hw_init::gpio_write(pins::TEMP_SENSE_POWER_GPIO, true);
    }

    pub fn power_off(&mut self) {
        hw_init::gpio_write(pins::TEMP_SENSE_POWER_GPIO, false);
    }

    pub fn start(&mut self) {
        self.irq.take(Event::ConversionComplete);
        self.last = self.read_adc();
        self.irq.signal(Event::ConversionComplete);
    }

    pub fn is_done(&self) -> bool {
        self.irq.is_pending(Event::ConversionComplete)
    }

    /// Result of the last conversion; clears the completion flag.
    pub fn result(&mut self) -> u8 {
        self.irq.take(Event::ConversionComplete);
        self.last
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u8 {
        scale_to_proxy(hw_init::adc1_read(hw_init::ADC1_CH_TEMP))
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u8 {
        SIM_TEMP_READING.load(Ordering::Relaxed)
    }
}

/// Map a 12-bit ADC1 sample onto the 8-bit supply-relative scale the
/// thresholds are calibrated in.
///
/// Assumes 12 dB attenuation, whose full scale is close to the 3.3 V that
/// feeds the divider. Out-of-range samples saturate at 255.
pub const fn scale_to_proxy(raw12: u16) -> u8 {
    let raw8 = raw12 >> 4;
    if raw8 > u8::MAX as u16 {
        u8::MAX
    } else {
        raw8 as u8
    }
}
