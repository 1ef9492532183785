//! Integration tests for boot dispatch and the diagnostic blink.

use crate::mock_hw::{MockHardware, MockResetCause, RecordingSink, leak_irq};

use benchfan::app::boot::{BootMode, Firmware};
use benchfan::app::events::AppEvent;
use benchfan::config::ControlConfig;
use benchfan::diagnostics::FaultBlinker;
use benchfan::drivers::watchdog::{ResetCause, sim_set_watchdog_reset};

fn blinker_for(config: ControlConfig) -> FaultBlinker {
    let mut reset = MockResetCause(Some(true));
    let mut sink = RecordingSink::new();
    match Firmware::boot(config, &mut reset, &mut sink) {
        Firmware::Diagnostic(blinker) => blinker,
        Firmware::Running(_) => panic!("watchdog reset must enter diagnostic mode"),
    }
}

#[test]
fn normal_reset_starts_control_loop() {
    let mut reset = MockResetCause(Some(false));
    let mut sink = RecordingSink::new();

    let firmware = Firmware::boot(ControlConfig::default(), &mut reset, &mut sink);

    assert_eq!(firmware.mode(), BootMode::Normal);
    assert_eq!(sink.events, vec![AppEvent::Booted(BootMode::Normal)]);
    match firmware {
        Firmware::Running(service) => assert_eq!(service.state().last_hot_tick, 162),
        Firmware::Diagnostic(_) => panic!("expected normal mode"),
    }
}

#[test]
fn watchdog_reset_enters_diagnostic_and_consumes_cause() {
    let mut reset = MockResetCause(Some(true));
    let mut sink = RecordingSink::new();

    let firmware = Firmware::boot(ControlConfig::default(), &mut reset, &mut sink);

    assert_eq!(firmware.mode(), BootMode::FaultDiagnostic);
    assert_eq!(sink.events, vec![AppEvent::Booted(BootMode::FaultDiagnostic)]);
    assert_eq!(reset.0, None, "reset cause is read once");
}

#[test]
fn sim_reset_register_drives_dispatch() {
    sim_set_watchdog_reset(true);
    let mut cause = ResetCause::capture();
    sim_set_watchdog_reset(false);

    let mut sink = RecordingSink::new();
    let firmware = Firmware::boot(ControlConfig::default(), &mut cause, &mut sink);
    assert_eq!(firmware.mode(), BootMode::FaultDiagnostic);
    assert!(!cause.take(), "cause cleared after dispatch");
}

#[test]
fn blink_cycle_is_two_seconds_off_half_second_on() {
    let blinker = blinker_for(ControlConfig::default());
    let mut hw = MockHardware::new(leak_irq());

    blinker.cycle(&mut hw);

    assert_eq!(hw.fan_writes, vec![(2_000_000, true), (2_500_000, false)]);
    assert_eq!(hw.elapsed_us(), 2_500_000);
    assert_eq!(hw.conversions, 0, "diagnostic mode never samples");
    assert_eq!(hw.waits, 0);
}

#[test]
fn blink_feeds_watchdog_every_slice() {
    let blinker = blinker_for(ControlConfig::default());
    let mut hw = MockHardware::new(leak_irq());

    blinker.cycle(&mut hw);
    blinker.cycle(&mut hw);

    assert_eq!(hw.arms, 2 * blinker.feeds_per_cycle());
    // One re-arm per 100 µs, far inside the 1 s watchdog timeout.
    assert_eq!(u64::from(hw.arms), hw.elapsed_us() / 100);
}

#[test]
fn blink_timing_follows_config() {
    let config = ControlConfig {
        fault_blink_off_ms: 10,
        fault_blink_on_ms: 5,
        fault_feed_interval_us: 1_000,
        ..ControlConfig::default()
    };
    let blinker = blinker_for(config);
    let mut hw = MockHardware::new(leak_irq());

    blinker.cycle(&mut hw);

    assert_eq!(hw.arms, 15);
    assert_eq!(hw.fan_writes, vec![(10_000, true), (15_000, false)]);
}
