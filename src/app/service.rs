//! Application service — the control loop core.
//!
//! [`FanService`] owns the control state and runs one loop iteration per
//! [`step`](FanService::step). All I/O flows through port traits injected
//! at call sites, so the whole loop runs against mock adapters in tests.
//!
//! ```text
//!  IrqEvents ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                │          FanService          │
//!  hardware  ◀──▶│ tick · sample · override ·   │
//!                │ decide · sleep               │
//!                └──────────────────────────────┘
//! ```

use log::info;

use crate::config::ControlConfig;
use crate::control::sampler::TemperatureSampler;
use crate::control::{ControlState, decision, override_mode};
use crate::events::{Event, IrqEvents};

use super::events::AppEvent;
use super::ports::{ControlHardware, EventSink, FanPort};

/// The normal-mode controller.
pub struct FanService {
    config: ControlConfig,
    state: ControlState,
    sampler: TemperatureSampler,
}

impl FanService {
    /// Build the controller with the boot-burst seed.
    pub fn new(config: ControlConfig) -> Self {
        let state = ControlState::at_boot(&config);
        let sampler = TemperatureSampler::new(&config);
        Self {
            config,
            state,
            sampler,
        }
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Arm the tick timer for the first period.
    pub fn start(&mut self, hw: &mut impl ControlHardware) {
        hw.arm_next();
        info!(
            "FanService started: boot burst {} ticks, hold {} ticks",
            self.config.boot_burst_ticks, self.config.cool_hold_ticks
        );
    }

    /// One loop iteration: consume tick → sample if due → poll button →
    /// decide fan → sleep unless another tick is already pending.
    pub fn step(
        &mut self,
        irq: &IrqEvents,
        hw: &mut impl ControlHardware,
        sink: &mut impl EventSink,
    ) {
        let cool_hold = self.config.cool_hold_ticks;

        // 1. Time base
        if irq.take(Event::Tick) {
            hw.arm_next();
            self.state.tick = self.state.tick.wrapping_add(1);
        }

        // 2. Temperature
        if let Some(sample) = self.sampler.sample_if_due(&mut self.state, hw) {
            sink.emit(&AppEvent::Sampled {
                tick: self.state.tick,
                reading: sample.reading,
                hot: sample.hot,
                changed: sample.changed,
            });
        }

        // 3. Override button
        let pressed = hw.is_pressed();
        if let Some(t) = override_mode::poll(&mut self.state, pressed, cool_hold) {
            sink.emit(&AppEvent::OverrideChanged {
                from: t.from,
                to: t.to,
            });
            if let Some(on) = t.fan {
                self.drive_fan(on, hw, sink);
            }
        }

        // 4. Fan decision, re-driven every iteration
        let on = decision::decide(&mut self.state, cool_hold);
        self.drive_fan(on, hw, sink);

        // 5. Idle until the next event
        if !irq.is_pending(Event::Tick) {
            hw.wait_for_interrupt();
        }
    }

    /// Run forever.
    pub fn run(
        &mut self,
        irq: &IrqEvents,
        hw: &mut impl ControlHardware,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.step(irq, hw, sink);
        }
    }

    fn drive_fan(&mut self, on: bool, hw: &mut impl FanPort, sink: &mut impl EventSink) {
        hw.set_fan(on);
        if on != self.state.fan_on {
            self.state.fan_on = on;
            sink.emit(&AppEvent::FanChanged {
                tick: self.state.tick,
                on,
            });
        }
    }
}
