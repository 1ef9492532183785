//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).

use log::{debug, info, warn};

use crate::app::boot::BootMode;
use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Booted(BootMode::Normal) => {
                info!("BOOT | normal operation");
            }
            AppEvent::Booted(BootMode::FaultDiagnostic) => {
                warn!("BOOT | previous reset was a watchdog timeout, entering diagnostic blink");
            }
            AppEvent::Sampled {
                tick,
                reading,
                hot,
                changed,
            } => {
                if *changed {
                    info!(
                        "TEMP | tick={} raw={} -> {}",
                        tick,
                        reading,
                        if *hot { "HOT" } else { "COOL" }
                    );
                } else {
                    debug!("TEMP | tick={} raw={} hot={}", tick, reading, hot);
                }
            }
            AppEvent::OverrideChanged { from, to } => {
                info!("OVRD | {:?} -> {:?}", from, to);
            }
            AppEvent::FanChanged { tick, on } => {
                info!("FAN  | tick={} {}", tick, if *on { "ON" } else { "OFF" });
            }
        }
    }
}
