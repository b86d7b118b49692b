use std::time::Duration;

use bevy::prelude::*;

/// Polled countdown owned by a game entity.
///
/// Advances only when the owner ticks it with game time, so pausing the game
/// clock pauses every cooldown with it. A new cooldown starts out finished.
#[derive(Debug, Clone)]
pub struct Cooldown {
    timer: Timer,
}

impl Cooldown {
    /// Creates a cooldown of the given duration, already elapsed.
    pub fn new(duration: Duration) -> Self {
        let mut timer = Timer::new(duration, TimerMode::Once);
        timer.tick(duration);
        Self { timer }
    }

    /// Creates a cooldown from a duration in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Advances the cooldown by `delta` of game time.
    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    /// Returns true once the full duration has elapsed since the last reset.
    pub fn is_finished(&self) -> bool {
        self.timer.finished()
    }

    /// Restarts the countdown from zero.
    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }
}
