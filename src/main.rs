//! Benchfan Firmware — Main Entry Point
//!
//! Temperature-activated fan with a three-way override button and a
//! watchdog-fault diagnostic blink.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter                              LogEventSink     │
//! │  (Fan+Button+Temperature+Timer+Sleep+Delay)   (EventSink)      │
//! │  ResetCause (ResetCausePort)                                   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │  Firmware::boot ──▶ FanService  |  FaultBlinker        │    │
//! │  │  sampler · override · decision                         │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  IRQ (esp_timer tick, conversion complete) · TWDT              │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::{AnyInputPin, AnyOutputPin, PinDriver, Pull};
use log::{error, info};

use benchfan::adapters::hardware::HardwareAdapter;
use benchfan::adapters::log_sink::LogEventSink;
use benchfan::app::boot::Firmware;
use benchfan::config::ControlConfig;
use benchfan::drivers::button::ButtonInput;
use benchfan::drivers::fan::FanDriver;
use benchfan::drivers::hw_init;
use benchfan::drivers::hw_timer::TickTimer;
use benchfan::drivers::watchdog::{ResetCause, Watchdog};
use benchfan::events::IRQ;
use benchfan::pins;
use benchfan::sensors::temperature::ProxyAdc;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Benchfan v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Reset cause, before anything arms the watchdog ─────
    let mut reset = ResetCause::capture();

    // ── 3. Config ─────────────────────────────────────────────
    let config = ControlConfig::default();
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => info!("Config: {:?} (json: {})", config, e),
    }

    // ── 4. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Nothing to control without the ADC. Halt; the idle-task
        // watchdog resets the chip after its timeout.
        error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // SAFETY: each GPIO number in `pins` is claimed exactly once, here.
    let fan_pin = PinDriver::output(unsafe { AnyOutputPin::new(pins::FAN_GPIO) })?;
    let mut button_pin = PinDriver::input(unsafe { AnyInputPin::new(pins::BUTTON_GPIO) })?;
    button_pin.set_pull(Pull::Up)?;

    let fan = FanDriver::new(fan_pin)?;
    let button = ButtonInput::new(button_pin);
    let adc = ProxyAdc::new(&IRQ);

    // ── 5. Dispatch ───────────────────────────────────────────
    let mut sink = LogEventSink::new();
    let firmware = Firmware::boot(config.clone(), &mut reset, &mut sink);

    let timer = TickTimer::start(config.tick_period_ms, &IRQ)?;
    let watchdog = Watchdog::new(config.watchdog_timeout_ms);
    let mut hw = HardwareAdapter::new(fan, button, adc, timer, watchdog, Ets);

    match firmware {
        Firmware::Diagnostic(blinker) => blinker.run(&mut hw),
        Firmware::Running(mut service) => {
            service.start(&mut hw);
            info!("System ready. Entering control loop.");
            service.run(&IRQ, &mut hw, &mut sink)
        }
    }
}
