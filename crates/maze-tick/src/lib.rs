//! Fixed-cadence tick scheduler for the maze game tasks.
//!
//! Every timed actor in a round (projectiles, enemies, the countdown
//! display) wakes on its own cadence. Each one owns a [`TickScheduler`]
//! and awaits [`TickScheduler::wait_for_tick`] between steps.
//!
//! # Disabled mode
//!
//! When `period` is zero, the scheduler never fires and
//! [`TickScheduler::wait_for_tick`] pends forever. This lets a task keep an
//! optional cadence as a `tokio::select!` branch without special-casing it.
//!
//! # Integration
//!
//! ```ignore
//! let mut scheduler = TickScheduler::every(Duration::from_millis(100));
//! loop {
//!     let info = scheduler.wait_for_tick().await;
//!     // take the world lock, advance one step, emit events
//! }
//! ```

use std::time::Duration;

use rand::Rng;
use tokio::time::{self, Instant};
use tracing::{debug, trace, warn};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What to do when a tick fires later than scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickPolicy {
    /// Skip the missed tick(s) and schedule the next one from now.
    /// Mirrors a "sleep, then work" loop.
    #[default]
    Skip,
    /// Keep the original cadence. The next tick fires at its originally
    /// scheduled time, even if that is already in the past.
    Drop,
}

/// Full configuration for a tick scheduler.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Interval between ticks. Zero disables the scheduler.
    pub period: Duration,
    /// Overrun handling policy.
    pub policy: TickPolicy,
    /// Upper bound of the random delay added to the *first* tick, so that
    /// tasks spawned at the same instant do not all wake together.
    pub initial_jitter: Duration,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            period: Duration::ZERO,
            policy: TickPolicy::default(),
            initial_jitter: Duration::ZERO,
        }
    }
}

impl TickConfig {
    /// Create a config that ticks every `period`, without jitter.
    pub fn every(period: Duration) -> Self {
        Self {
            period,
            ..Default::default()
        }
    }

    /// Builder-style setter for the initial jitter.
    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.initial_jitter = jitter;
        self
    }

    /// Builder-style setter for the overrun policy.
    pub fn with_policy(mut self, policy: TickPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Duration of a single tick. Returns `None` when disabled.
    pub fn tick_duration(&self) -> Option<Duration> {
        if self.period.is_zero() {
            None
        } else {
            Some(self.period)
        }
    }
}

// ---------------------------------------------------------------------------
// Tick info (returned to caller each tick)
// ---------------------------------------------------------------------------

/// Information about a fired tick, returned by [`TickScheduler::wait_for_tick`].
#[derive(Debug, Clone)]
pub struct TickInfo {
    /// Monotonically increasing tick number (starts at 1).
    pub tick: u64,
    /// Fixed delta time for this tick (always the configured period).
    pub dt: Duration,
    /// `true` if this tick fired late.
    pub overrun: bool,
    /// How many ticks were skipped due to overrun (0 in normal operation).
    pub ticks_skipped: u64,
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Fixed-cadence tick scheduler. One per timed task.
#[derive(Debug)]
pub struct TickScheduler {
    policy: TickPolicy,
    tick_duration: Option<Duration>,
    tick_count: u64,
    /// When the next tick should fire.
    next_tick: Option<Instant>,
}

impl TickScheduler {
    /// Create a new scheduler from config.
    ///
    /// The first tick fires one period from now, plus a random jitter in
    /// `0..initial_jitter`.
    pub fn new(config: TickConfig) -> Self {
        let tick_duration = config.tick_duration();

        let next_tick = tick_duration.map(|d| {
            let jitter = if config.initial_jitter.is_zero() {
                Duration::ZERO
            } else {
                let max_us = config.initial_jitter.as_micros().max(1) as u64;
                Duration::from_micros(rand::rng().random_range(0..max_us))
            };
            Instant::now() + d + jitter
        });

        match tick_duration {
            None => debug!("tick scheduler created disabled (never fires)"),
            Some(d) => debug!(
                period_ms = d.as_secs_f64() * 1000.0,
                policy = ?config.policy,
                "tick scheduler created"
            ),
        }

        Self {
            policy: config.policy,
            tick_duration,
            tick_count: 0,
            next_tick,
        }
    }

    /// Create a scheduler for a specific period with default settings.
    pub fn every(period: Duration) -> Self {
        Self::new(TickConfig::every(period))
    }

    /// Wait until the next tick is due.
    ///
    /// When disabled this future pends forever; `tokio::select!` will still
    /// process other branches.
    pub async fn wait_for_tick(&mut self) -> TickInfo {
        let (next, tick_dur) = match (self.next_tick, self.tick_duration) {
            (Some(next), Some(dur)) => (next, dur),
            _ => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        };

        time::sleep_until(next).await;

        let now = Instant::now();
        self.tick_count += 1;

        // >10% late counts as an overrun.
        let late_by = now.saturating_duration_since(next);
        let overrun = late_by > tick_dur / 10;
        let mut ticks_skipped = 0u64;

        self.next_tick = Some(match self.policy {
            TickPolicy::Skip => {
                if overrun {
                    ticks_skipped = (late_by.as_nanos() / tick_dur.as_nanos()) as u64;
                    if ticks_skipped > 0 {
                        warn!(
                            tick = self.tick_count,
                            skipped = ticks_skipped,
                            late_ms = late_by.as_secs_f64() * 1000.0,
                            "tick overrun, skipping ahead"
                        );
                    }
                }
                now + tick_dur
            }
            TickPolicy::Drop => {
                if overrun {
                    warn!(
                        tick = self.tick_count,
                        late_ms = late_by.as_secs_f64() * 1000.0,
                        "tick overrun, keeping original schedule"
                    );
                }
                next + tick_dur
            }
        });

        trace!(tick = self.tick_count, overrun, "tick fired");

        TickInfo {
            tick: self.tick_count,
            dt: tick_dur,
            overrun,
            ticks_skipped,
        }
    }

    /// Whether this scheduler is disabled (zero period).
    pub fn is_disabled(&self) -> bool {
        self.tick_duration.is_none()
    }

    /// Number of ticks fired so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The fixed tick duration, or `None` when disabled.
    pub fn tick_duration(&self) -> Option<Duration> {
        self.tick_duration
    }
}
