//! Periodic tick timer using ESP-IDF's esp_timer API.
//!
//! One periodic timer raises [`Event::Tick`] every tick period and wakes the
//! control task through a FreeRTOS task notification. Notifications latch,
//! so a tick that fires between the loop's "is a tick pending?" check and
//! its wait is never lost.
//!
//! Timer callbacks execute in the ESP timer task context (not ISR); they
//! only touch the atomic event flags and the notifier.
//!
//! On simulation targets the wait sleeps for one period and raises the tick
//! itself.

use crate::error::Error;
use crate::events::{Event, IrqEvents};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use esp_idf_hal::task::notification::{Notification, Notifier};

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
struct TimerContext {
    irq: &'static IrqEvents,
    notifier: std::sync::Arc<Notifier>,
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` is the leaked TimerContext from `TickTimer::start`; it
    // lives for the rest of the program.
    let ctx = unsafe { &*(arg as *const TimerContext) };
    ctx.irq.signal(Event::Tick);
    // SAFETY: the notifier targets the control task, which never exits.
    unsafe {
        ctx.notifier.notify_and_yield(core::num::NonZeroU32::MIN);
    }
}

pub struct TickTimer {
    irq: &'static IrqEvents,
    #[cfg(target_os = "espidf")]
    handle: esp_timer_handle_t,
    #[cfg(target_os = "espidf")]
    notification: Notification,
    #[cfg(not(target_os = "espidf"))]
    period: std::time::Duration,
}

impl TickTimer {
    /// Start the periodic tick. Must be called from the control task.
    #[cfg(target_os = "espidf")]
    pub fn start(period_ms: u32, irq: &'static IrqEvents) -> Result<Self, Error> {
        let notification = Notification::new();
        let ctx: &'static TimerContext = Box::leak(Box::new(TimerContext {
            irq,
            notifier: notification.notifier(),
        }));

        let mut handle: esp_timer_handle_t = core::ptr::null_mut();
        // SAFETY: the callback only reads the leaked context and raises atomic
        // flags; the handle is written once here.
        unsafe {
            let args = esp_timer_create_args_t {
                callback: Some(tick_cb),
                arg: core::ptr::from_ref(ctx).cast_mut().cast(),
                dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
                name: c"tick".as_ptr(),
                skip_unhandled_events: true,
            };
            let ret = esp_timer_create(&args, &mut handle);
            if ret != ESP_OK as i32 {
                return Err(Error::Init("tick timer create", ret));
            }
            let ret = esp_timer_start_periodic(handle, u64::from(period_ms) * 1_000);
            if ret != ESP_OK as i32 {
                return Err(Error::Init("tick timer start", ret));
            }
        }

        info!("hw_timer: tick@{}ms started", period_ms);
        Ok(Self {
            irq,
            handle,
            notification,
        })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn start(period_ms: u32, irq: &'static IrqEvents) -> Result<Self, Error> {
        log::info!("hw_timer(sim): tick@{}ms driven by the wait loop", period_ms);
        Ok(Self {
            irq,
            period: std::time::Duration::from_millis(u64::from(period_ms)),
        })
    }

    /// Block until the next interrupt, unless one is already pending.
    pub fn wait_for_interrupt(&self) {
        if self.irq.is_pending(Event::Tick) || self.irq.is_pending(Event::ConversionComplete) {
            return;
        }
        self.block();
    }

    #[cfg(target_os = "espidf")]
    fn block(&self) {
        self.notification.wait(esp_idf_hal::delay::BLOCK);
    }

    #[cfg(not(target_os = "espidf"))]
    fn block(&self) {
        std::thread::sleep(self.period);
        self.irq.signal(Event::Tick);
    }
}

#[cfg(target_os = "espidf")]
impl Drop for TickTimer {
    fn drop(&mut self) {
        // SAFETY: handle is valid once `start` returned Ok.
        unsafe {
            esp_timer_stop(self.handle);
        }
    }
}
