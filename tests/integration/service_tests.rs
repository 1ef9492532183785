//! Integration tests for the FanService control loop.
//!
//! Drive the full tick → sample → override → decide → sleep pipeline
//! against [`MockHardware`] and check the fan level tick by tick.

use crate::mock_hw::{MockHardware, RecordingSink, leak_irq, run_to_tick};

use benchfan::app::events::AppEvent;
use benchfan::app::service::FanService;
use benchfan::config::ControlConfig;
use benchfan::control::OverrideMode;
use benchfan::events::IrqEvents;

fn make_service(config: ControlConfig) -> (FanService, &'static IrqEvents, MockHardware, RecordingSink) {
    let irq = leak_irq();
    let mut hw = MockHardware::new(irq);
    let mut service = FanService::new(config);
    service.start(&mut hw);
    (service, irq, hw, RecordingSink::new())
}

fn press(service: &mut FanService, irq: &IrqEvents, hw: &mut MockHardware, sink: &mut RecordingSink) {
    hw.pressed = true;
    service.step(irq, hw, sink);
    hw.pressed = false;
    service.step(irq, hw, sink);
}

// ── Boot burst ────────────────────────────────────────────────

#[test]
fn boot_burst_runs_fan_for_exactly_31_ticks() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());

    for _ in 0..100 {
        service.step(irq, &mut hw, &mut sink);
        let tick = service.state().tick;
        assert_eq!(hw.fan(), tick < 31, "fan level wrong at tick {}", tick);
    }

    assert_eq!(sink.fan_changes(), vec![(0, true), (31, false)]);
}

#[test]
fn boot_burst_follows_config() {
    let config = ControlConfig {
        boot_burst_ticks: 10,
        ..ControlConfig::default()
    };
    let (mut service, irq, mut hw, mut sink) = make_service(config);

    run_to_tick(&mut service, irq, &mut hw, &mut sink, 9);
    assert!(hw.fan());
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 10);
    assert!(!hw.fan());
}

// ── Temperature → fan ─────────────────────────────────────────

#[test]
fn hot_sample_starts_fan_and_cool_down_holds_125_ticks() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());

    run_to_tick(&mut service, irq, &mut hw, &mut sink, 63);
    assert!(!hw.fan());

    hw.temperature = 20;
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 64);
    assert!(hw.fan(), "hot sample must start the fan in the same iteration");
    assert!(sink.events.contains(&AppEvent::Sampled {
        tick: 64,
        reading: 20,
        hot: true,
        changed: true,
    }));

    hw.temperature = 30;
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 96);
    assert!(!service.state().is_hot);
    assert!(hw.fan(), "cool-down window still open");

    run_to_tick(&mut service, irq, &mut hw, &mut sink, 188);
    assert!(hw.fan());
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 189);
    assert!(!hw.fan(), "window closes 125 ticks after the last hot sample");

    assert_eq!(
        sink.fan_changes(),
        vec![(0, true), (31, false), (64, true), (189, false)]
    );
}

#[test]
fn dead_band_reading_keeps_hot_state() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());

    hw.temperature = 20;
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 64);
    assert!(service.state().is_hot);

    hw.temperature = 25;
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 200);
    assert!(service.state().is_hot);
    assert!(hw.fan());
    assert_eq!(service.state().last_hot_tick, 192);
}

#[test]
fn expired_window_stays_closed_across_wraparound() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());

    // 600 ticks of cool readings: more than two full wraps of the counter.
    for step in 0..600u32 {
        service.step(irq, &mut hw, &mut sink);
        assert_eq!(hw.fan(), step < 31, "fan level wrong at step {}", step);
    }
    assert_eq!(sink.fan_changes(), vec![(0, true), (31, false)]);
}

// ── Override button ───────────────────────────────────────────

#[test]
fn override_cycles_on_off_auto() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 40);
    assert!(!hw.fan());

    hw.pressed = true;
    service.step(irq, &mut hw, &mut sink);
    assert_eq!(service.state().override_mode, OverrideMode::ForceOn);
    assert!(hw.fan(), "ForceOn applies immediately");

    // Holding the button is a single press.
    for _ in 0..5 {
        service.step(irq, &mut hw, &mut sink);
    }
    assert_eq!(service.state().override_mode, OverrideMode::ForceOn);

    hw.pressed = false;
    service.step(irq, &mut hw, &mut sink);
    press(&mut service, irq, &mut hw, &mut sink);
    assert_eq!(service.state().override_mode, OverrideMode::ForceOff);
    assert!(!hw.fan());

    press(&mut service, irq, &mut hw, &mut sink);
    assert_eq!(service.state().override_mode, OverrideMode::None);

    let transitions: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::OverrideChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        transitions,
        vec![
            (OverrideMode::None, OverrideMode::ForceOn),
            (OverrideMode::ForceOn, OverrideMode::ForceOff),
            (OverrideMode::ForceOff, OverrideMode::None),
        ]
    );
}

#[test]
fn returning_to_auto_while_cool_has_no_cool_down_tail() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 40);

    press(&mut service, irq, &mut hw, &mut sink); // ForceOn
    assert!(hw.fan());
    press(&mut service, irq, &mut hw, &mut sink); // ForceOff
    press(&mut service, irq, &mut hw, &mut sink); // auto
    assert!(!hw.fan());

    for _ in 0..20 {
        service.step(irq, &mut hw, &mut sink);
        assert!(!hw.fan());
    }
}

#[test]
fn force_off_beats_heat_and_auto_resumes_hot() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());
    hw.temperature = 10;
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 32);
    assert!(service.state().is_hot);

    press(&mut service, irq, &mut hw, &mut sink); // ForceOn
    press(&mut service, irq, &mut hw, &mut sink); // ForceOff
    assert!(!hw.fan());

    run_to_tick(&mut service, irq, &mut hw, &mut sink, 70);
    assert!(!hw.fan(), "ForceOff holds through hot samples");

    hw.pressed = true;
    service.step(irq, &mut hw, &mut sink);
    assert_eq!(service.state().override_mode, OverrideMode::None);
    assert!(hw.fan(), "still hot, so auto turns the fan straight back on");
}

#[test]
fn return_to_auto_on_the_hot_sample_tick_keeps_fan_on() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());
    run_to_tick(&mut service, irq, &mut hw, &mut sink, 40);
    press(&mut service, irq, &mut hw, &mut sink); // ForceOn
    press(&mut service, irq, &mut hw, &mut sink); // ForceOff

    run_to_tick(&mut service, irq, &mut hw, &mut sink, 63);
    assert!(!hw.fan());

    // Heat arrives on the same iteration as the press back to auto.
    hw.temperature = 10;
    hw.pressed = true;
    service.step(irq, &mut hw, &mut sink);

    assert_eq!(service.state().tick, 64);
    assert_eq!(service.state().override_mode, OverrideMode::None);
    assert!(service.state().is_hot);
    assert!(hw.fan());
}

// ── Sampling hardware contract ────────────────────────────────

#[test]
fn conversion_wait_is_bounded() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());
    hw.conversion_stuck = true;
    hw.temperature = 10;

    run_to_tick(&mut service, irq, &mut hw, &mut sink, 32);

    // 32 idle sleeps for ticks 0..=31, then one sleep plus eight polls.
    assert_eq!(hw.waits, 32 + 1 + 8);
    assert_eq!(hw.conversions, 1);
    assert!(service.state().is_hot, "result register is read regardless");
    assert!(!hw.sense_powered);

    service.step(irq, &mut hw, &mut sink);
    assert_eq!(service.state().tick, 33, "loop keeps running");
}

#[test]
fn sense_power_only_during_conversions() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());

    for _ in 0..=200 {
        service.step(irq, &mut hw, &mut sink);
        assert!(!hw.sense_powered);
    }
    // Samples at 32, 64, 96, 128, 160 and 192.
    assert_eq!(hw.conversions, 6);
    assert!(hw.elapsed_us() >= 6 * 1_000, "settle delay before each conversion");
}

#[test]
fn every_consumed_tick_rearms_the_timer() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());
    assert_eq!(hw.arms, 1);

    run_to_tick(&mut service, irq, &mut hw, &mut sink, 100);
    assert_eq!(hw.arms, 1 + 100);
}

#[test]
fn fan_is_redriven_every_iteration() {
    let (mut service, irq, mut hw, mut sink) = make_service(ControlConfig::default());

    for _ in 0..50 {
        service.step(irq, &mut hw, &mut sink);
    }
    assert_eq!(hw.fan_writes.len(), 50);
}
