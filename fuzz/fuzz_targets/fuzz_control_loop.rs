//! Fuzz target: `FanService` control loop
//!
//! Each input byte drives one loop iteration:
//! - bit 7: button level
//! - bit 6: conversion never completes
//! - bits 0..6: temperature reading
//!
//! Checks after every iteration:
//! - No panics
//! - The sense divider is never left powered
//! - Forced overrides always win over temperature
//! - Automatic mode with a hot reading always runs the fan
//! - The tick advances by at most one
//!
//! cargo fuzz run fuzz_control_loop

#![no_main]

use benchfan::app::events::AppEvent;
use benchfan::app::ports::{
    ButtonPort, EventSink, FanPort, SleepPort, TemperaturePort, TimerPort,
};
use benchfan::app::service::FanService;
use benchfan::config::ControlConfig;
use benchfan::control::OverrideMode;
use benchfan::events::{Event, IrqEvents};
use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;

static IRQ: IrqEvents = IrqEvents::new();

// ── Minimal hardware model ────────────────────────────────────

#[derive(Default)]
struct Bench {
    temperature: u8,
    pressed: bool,
    stuck: bool,
    fan: bool,
    powered: bool,
    complete: bool,
}

impl FanPort for Bench {
    fn set_fan(&mut self, on: bool) {
        self.fan = on;
    }
}

impl ButtonPort for Bench {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

impl TemperaturePort for Bench {
    fn enable(&mut self) {
        self.powered = true;
    }

    fn begin_conversion(&mut self) {
        self.complete = false;
    }

    fn is_complete(&mut self) -> bool {
        self.complete
    }

    fn read(&mut self) -> u8 {
        self.temperature
    }

    fn disable(&mut self) {
        self.powered = false;
    }
}

impl TimerPort for Bench {
    fn arm_next(&mut self) {}
}

impl SleepPort for Bench {
    fn wait_for_interrupt(&mut self) {
        if !self.stuck {
            self.complete = true;
        }
        IRQ.signal(Event::Tick);
    }
}

impl DelayNs for Bench {
    fn delay_ns(&mut self, _ns: u32) {}
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    IRQ.take(Event::Tick);
    IRQ.take(Event::ConversionComplete);

    let mut service = FanService::new(ControlConfig::default());
    let mut bench = Bench::default();
    service.start(&mut bench);

    for &byte in data {
        bench.pressed = byte & 0x80 != 0;
        bench.stuck = byte & 0x40 != 0;
        bench.temperature = byte & 0x3f;

        let before = service.state().tick;
        service.step(&IRQ, &mut bench, &mut Discard);
        let state = service.state();

        assert!(!bench.powered, "sense divider left powered");
        assert!(
            state.tick.wrapping_sub(before) <= 1,
            "tick jumped from {} to {}",
            before,
            state.tick
        );
        match state.override_mode {
            OverrideMode::ForceOn => assert!(bench.fan),
            OverrideMode::ForceOff => assert!(!bench.fan),
            OverrideMode::None => {
                if state.is_hot {
                    assert!(bench.fan, "hot in auto mode with the fan off");
                }
            }
        }
        assert_eq!(bench.fan, state.fan_on);
    }
});
