//! Task Watchdog Timer (TWDT) driver and reset-cause register.
//!
//! The control loop feeds the watchdog each time it consumes a tick. If
//! the loop hangs, the TWDT panics and the chip resets; the next boot
//! reads that reset cause and enters the diagnostic blink instead of
//! silently resuming.
//!
//! The reset cause must be taken before [`Watchdog::new`] arms the timer.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

use log::info;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Configure the TWDT and subscribe the current task.
    pub fn new(timeout_ms: u32) -> Self {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: TWDT API calls from the main task during boot.
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK as i32 {
                    log::warn!(
                        "TWDT reconfigure returned {} (may not be initialised yet)",
                        ret
                    );
                    let ret = esp_task_wdt_init(&cfg);
                    if ret != ESP_OK as i32 {
                        log::warn!("TWDT init returned {}", ret);
                    }
                }

                let ret = esp_task_wdt_add(core::ptr::null_mut());
                let subscribed = ret == ESP_OK as i32;
                if subscribed {
                    info!("Watchdog: subscribed ({}ms timeout, panic on trigger)", timeout_ms);
                } else {
                    log::warn!("Watchdog: failed to subscribe ({})", ret);
                }

                Self { subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            info!("Watchdog(sim): no-op ({}ms timeout)", timeout_ms);
            Self {}
        }
    }

    /// Feed the watchdog. Must be called at least once per timeout.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        {
            if self.subscribed {
                // SAFETY: the current task is subscribed.
                unsafe {
                    esp_task_wdt_reset();
                }
            }
        }
    }
}

// ── Reset cause ───────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
static SIM_WATCHDOG_RESET: AtomicBool = AtomicBool::new(false);

/// Pretend the previous reset was (or was not) a watchdog timeout.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_watchdog_reset(was_watchdog: bool) {
    SIM_WATCHDOG_RESET.store(was_watchdog, Ordering::Relaxed);
}

/// Whether the last reset was caused by any of the chip's watchdogs.
#[cfg(target_os = "espidf")]
pub fn last_reset_was_watchdog() -> bool {
    // SAFETY: read-only query of the reset reason latched at boot.
    let reason = unsafe { esp_reset_reason() };
    matches!(
        reason,
        esp_reset_reason_t_ESP_RST_TASK_WDT
            | esp_reset_reason_t_ESP_RST_INT_WDT
            | esp_reset_reason_t_ESP_RST_WDT
    )
}

#[cfg(not(target_os = "espidf"))]
pub fn last_reset_was_watchdog() -> bool {
    SIM_WATCHDOG_RESET.load(Ordering::Relaxed)
}

/// Read-once view of the reset cause.
///
/// The hardware latch survives until the next reset, so "clearing" it means
/// this wrapper hands the value out exactly once.
pub struct ResetCause {
    watchdog: Option<bool>,
}

impl ResetCause {
    /// Capture the cause. Call before the watchdog is armed.
    pub fn capture() -> Self {
        let watchdog = last_reset_was_watchdog();
        info!("Reset cause: {}", if watchdog { "watchdog timeout" } else { "normal" });
        Self {
            watchdog: Some(watchdog),
        }
    }

    pub fn take(&mut self) -> bool {
        self.watchdog.take().unwrap_or(false)
    }
}
