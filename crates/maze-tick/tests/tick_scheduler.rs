//! Integration tests for the fixed-cadence tick scheduler.
//!
//! Uses `tokio::time::pause()` (via `start_paused`) to control time
//! deterministically: `sleep_until` resolves as soon as the runtime is idle.

use std::time::Duration;

use maze_tick::{TickConfig, TickPolicy, TickScheduler};
use tokio::time::Instant;

// =========================================================================
// Helpers
// =========================================================================

fn config_100ms() -> TickConfig {
    TickConfig::every(Duration::from_millis(100))
}

// =========================================================================
// TickConfig
// =========================================================================

#[test]
fn test_default_config_is_disabled() {
    let cfg = TickConfig::default();
    assert_eq!(cfg.period, Duration::ZERO);
    assert_eq!(cfg.tick_duration(), None);
    assert_eq!(cfg.policy, TickPolicy::Skip);
}

#[test]
fn test_every_sets_duration() {
    let cfg = TickConfig::every(Duration::from_secs(1));
    assert_eq!(cfg.tick_duration(), Some(Duration::from_secs(1)));
    assert_eq!(cfg.initial_jitter, Duration::ZERO);
}

#[test]
fn test_builder_setters() {
    let cfg = config_100ms()
        .with_jitter(Duration::from_millis(5))
        .with_policy(TickPolicy::Drop);
    assert_eq!(cfg.initial_jitter, Duration::from_millis(5));
    assert_eq!(cfg.policy, TickPolicy::Drop);
}

// =========================================================================
// Scheduler creation and accessors
// =========================================================================

#[test]
fn test_scheduler_initial_state() {
    let s = TickScheduler::new(config_100ms());
    assert_eq!(s.tick_count(), 0);
    assert!(!s.is_disabled());
    assert_eq!(s.tick_duration(), Some(Duration::from_millis(100)));
}

#[test]
fn test_scheduler_disabled() {
    let s = TickScheduler::new(TickConfig::default());
    assert!(s.is_disabled());
    assert_eq!(s.tick_duration(), None);
}

// =========================================================================
// Tick firing
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_wait_for_tick_fires_after_one_period() {
    let start = Instant::now();
    let mut s = TickScheduler::every(Duration::from_millis(100));

    let info = s.wait_for_tick().await;
    assert_eq!(info.tick, 1);
    assert_eq!(info.dt, Duration::from_millis(100));
    assert!(!info.overrun);
    assert_eq!(info.ticks_skipped, 0);
    assert_eq!(start.elapsed(), Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_ticks_keep_a_fixed_cadence() {
    let start = Instant::now();
    let mut s = TickScheduler::new(config_100ms());

    for expected in 1..=5u64 {
        let info = s.wait_for_tick().await;
        assert_eq!(info.tick, expected);
        assert_eq!(
            start.elapsed(),
            Duration::from_millis(100 * expected),
            "tick {expected} fired off-cadence"
        );
    }
    assert_eq!(s.tick_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_jitter_only_delays_first_tick_within_bound() {
    let start = Instant::now();
    let mut s = TickScheduler::new(config_100ms().with_jitter(Duration::from_millis(20)));

    s.wait_for_tick().await;
    let first = start.elapsed();
    assert!(first >= Duration::from_millis(100));
    assert!(first < Duration::from_millis(120));

    s.wait_for_tick().await;
    assert_eq!(start.elapsed() - first, Duration::from_millis(100));
}

// =========================================================================
// Disabled mode pends forever
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_disabled_never_fires() {
    let mut s = TickScheduler::new(TickConfig::default());

    let result = tokio::time::timeout(Duration::from_secs(5), s.wait_for_tick()).await;
    assert!(result.is_err(), "disabled scheduler should pend forever");
}

// =========================================================================
// Tick policies
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_skip_policy_reports_overrun_and_reschedules_from_now() {
    let start = Instant::now();
    let mut s = TickScheduler::new(config_100ms());

    s.wait_for_tick().await;
    // Simulate a slow step: 350ms of work after the first tick.
    tokio::time::advance(Duration::from_millis(350)).await;

    let info = s.wait_for_tick().await;
    assert!(info.overrun);
    assert_eq!(info.ticks_skipped, 2);

    s.wait_for_tick().await;
    assert_eq!(start.elapsed(), Duration::from_millis(550));
}

#[tokio::test(start_paused = true)]
async fn test_drop_policy_keeps_original_schedule() {
    let start = Instant::now();
    let mut s = TickScheduler::new(config_100ms().with_policy(TickPolicy::Drop));

    s.wait_for_tick().await;
    tokio::time::advance(Duration::from_millis(150)).await;

    // Due at 200ms, observed at 250ms.
    let info = s.wait_for_tick().await;
    assert!(info.overrun);
    assert_eq!(info.ticks_skipped, 0);

    // Next tick stays on the 100ms grid.
    s.wait_for_tick().await;
    assert_eq!(start.elapsed(), Duration::from_millis(300));
}

// =========================================================================
// Integration: select! loop pattern (mirrors the countdown task)
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_select_loop_pattern() {
    let mut s = TickScheduler::new(config_100ms());
    let deadline = tokio::time::sleep(Duration::from_millis(350));
    tokio::pin!(deadline);

    let mut ticks_fired = 0u64;
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            info = s.wait_for_tick() => {
                ticks_fired += 1;
                assert_eq!(info.tick, ticks_fired);
            }
        }
    }

    assert_eq!(ticks_fired, 3);
}
