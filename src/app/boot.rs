//! Boot/fault dispatcher.
//!
//! Chosen exactly once per reset:
//!
//! ```text
//!            reset cause
//!                 │
//!     watchdog ───┴─── anything else
//!        │                  │
//!  FaultBlinker        FanService (boot burst → control loop)
//!   (terminal)
//! ```
//!
//! The diagnostic variant carries no [`FanService`], so normal control state
//! cannot be reached from the fault path.

use log::info;

use crate::config::ControlConfig;
use crate::diagnostics::FaultBlinker;

use super::events::AppEvent;
use super::ports::{EventSink, ResetCausePort};
use super::service::FanService;

/// Which of the two run modes the firmware entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootMode {
    Normal,
    FaultDiagnostic,
}

impl BootMode {
    pub const fn from_reset(reset_was_watchdog: bool) -> Self {
        if reset_was_watchdog {
            Self::FaultDiagnostic
        } else {
            Self::Normal
        }
    }
}

/// The firmware after dispatch.
pub enum Firmware {
    Running(FanService),
    Diagnostic(FaultBlinker),
}

impl Firmware {
    /// Consume the reset cause and pick the run mode.
    ///
    /// Must run before the watchdog is armed for normal operation.
    pub fn boot(
        config: ControlConfig,
        reset: &mut impl ResetCausePort,
        sink: &mut impl EventSink,
    ) -> Self {
        let mode = BootMode::from_reset(reset.take_watchdog_reset());
        sink.emit(&AppEvent::Booted(mode));
        info!("Boot mode: {:?}", mode);

        match mode {
            BootMode::Normal => Self::Running(FanService::new(config)),
            BootMode::FaultDiagnostic => Self::Diagnostic(FaultBlinker::new(&config)),
        }
    }

    pub fn mode(&self) -> BootMode {
        match self {
            Self::Running(_) => BootMode::Normal,
            Self::Diagnostic(_) => BootMode::FaultDiagnostic,
        }
    }
}
