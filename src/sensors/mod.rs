//! Sensor subsystem.
//!
//! One sensor: the thermistor divider read through ADC1.

pub mod temperature;
