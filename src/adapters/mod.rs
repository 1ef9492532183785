//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements                          | Connects to             |
//! |------------|-------------------------------------|-------------------------|
//! | `hardware` | FanPort, ButtonPort                 | GPIO via embedded-hal   |
//! |            | TemperaturePort                     | ADC1 oneshot            |
//! |            | TimerPort, SleepPort, DelayNs       | esp_timer, TWDT         |
//! |            | ResetCausePort (on `ResetCause`)    | esp_reset_reason        |
//! | `log_sink` | EventSink                           | Serial log output       |

pub mod hardware;
pub mod log_sink;
