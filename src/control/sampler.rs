//! Periodic temperature sampler.
//!
//! Every `sample_interval_ticks` the sampler powers the sense divider,
//! lets it settle, runs one conversion and classifies the result with the
//! [`Hysteresis`] dead band. Between samples the front end stays
//! unpowered.

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use super::ControlState;
use crate::app::ports::{SleepPort, TemperaturePort};
use crate::config::ControlConfig;
use crate::sensors::temperature::Hysteresis;
use crate::ticks::ticks_since;

/// One classified reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub reading: u8,
    pub hot: bool,
    pub changed: bool,
}

pub struct TemperatureSampler {
    hysteresis: Hysteresis,
    interval: u8,
    settle_us: u32,
    max_polls: u8,
}

impl TemperatureSampler {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            hysteresis: Hysteresis::new(config.hot_threshold, config.cool_threshold),
            interval: config.sample_interval_ticks,
            settle_us: config.settle_us,
            max_polls: config.max_conversion_polls,
        }
    }

    pub fn is_due(&self, state: &ControlState) -> bool {
        ticks_since(state.tick, state.last_sample_tick) >= self.interval
    }

    /// Take and classify a sample if the interval has elapsed.
    pub fn sample_if_due(
        &self,
        state: &mut ControlState,
        hw: &mut (impl TemperaturePort + SleepPort + DelayNs),
    ) -> Option<Sample> {
        if !self.is_due(state) {
            return None;
        }
        state.last_sample_tick = state.tick;
        let reading = self.convert(hw);
        Some(self.apply(state, reading))
    }

    /// Classify `reading` into `state`.
    pub fn apply(&self, state: &mut ControlState, reading: u8) -> Sample {
        let was_hot = state.is_hot;
        state.is_hot = self.hysteresis.classify(reading, was_hot);
        if state.is_hot {
            state.last_hot_tick = state.tick;
        }
        Sample {
            reading,
            hot: state.is_hot,
            changed: state.is_hot != was_hot,
        }
    }

    /// One power-gated conversion.
    ///
    /// The first sleep normally ends on the conversion-complete interrupt.
    /// If another interrupt woke us first, poll the completion flag a
    /// bounded number of times; the result register is read regardless.
    fn convert(&self, hw: &mut (impl TemperaturePort + SleepPort + DelayNs)) -> u8 {
        hw.enable();
        hw.delay_us(self.settle_us);

        hw.begin_conversion();
        hw.wait_for_interrupt();

        let mut polls = 0u8;
        while !hw.is_complete() {
            if polls >= self.max_polls {
                warn!("sampler: conversion not complete after {} polls, reading anyway", polls);
                break;
            }
            polls += 1;
            hw.wait_for_interrupt();
        }

        hw.disable();
        let reading = hw.read();
        debug!("sampler: raw={} polls={}", reading, polls);
        reading
    }
}
