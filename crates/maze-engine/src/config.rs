//! Round configuration.

use std::time::Duration;

use maze_tick::{TickConfig, TickPolicy};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Cadences and limits for a round.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides. Durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How often a projectile advances one cell.
    pub projectile_tick_ms: u64,

    /// How often an enemy recomputes its step toward the player.
    pub enemy_period_ms: u64,

    /// Length of the round before the countdown declares defeat.
    pub time_limit_ms: u64,

    /// How often the countdown requests a redraw so the remaining time on
    /// screen stays current. 0 disables the refresh.
    pub timer_refresh_ms: u64,

    /// Upper bound of the random delay before an enemy's first period,
    /// so enemies loaded together do not all move in lockstep.
    pub enemy_jitter_ms: u64,

    /// Capacity of the event channel feeding the dispatcher.
    pub event_channel_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            projectile_tick_ms: 100,
            enemy_period_ms: 1_000,
            time_limit_ms: 10_000,
            timer_refresh_ms: 1_000,
            enemy_jitter_ms: 0,
            event_channel_size: 64,
        }
    }
}

impl GameConfig {
    /// Replaces values that would stall the round with their defaults.
    ///
    /// - A zero projectile tick or enemy period would never fire.
    /// - A zero channel size is not a valid bounded channel.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.projectile_tick_ms == 0 {
            tracing::warn!(default = defaults.projectile_tick_ms, "projectile_tick_ms is 0, using default");
            self.projectile_tick_ms = defaults.projectile_tick_ms;
        }
        if self.enemy_period_ms == 0 {
            tracing::warn!(default = defaults.enemy_period_ms, "enemy_period_ms is 0, using default");
            self.enemy_period_ms = defaults.enemy_period_ms;
        }
        if self.event_channel_size == 0 {
            tracing::warn!(default = defaults.event_channel_size, "event_channel_size is 0, using default");
            self.event_channel_size = defaults.event_channel_size;
        }
        self
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    /// Projectiles keep their original cadence even when a tick is late.
    pub fn projectile_tick(&self) -> TickConfig {
        TickConfig::every(Duration::from_millis(self.projectile_tick_ms)).with_policy(TickPolicy::Drop)
    }

    pub fn enemy_tick(&self) -> TickConfig {
        TickConfig::every(Duration::from_millis(self.enemy_period_ms))
            .with_jitter(Duration::from_millis(self.enemy_jitter_ms))
    }

    pub fn timer_refresh(&self) -> TickConfig {
        TickConfig::every(Duration::from_millis(self.timer_refresh_ms))
    }
}
