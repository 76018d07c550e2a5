use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,

    // Pacing
    /// Tick interval at score 0, in milliseconds
    pub base_speed: u64,
    /// Lower bound on the tick interval, in milliseconds
    pub min_speed: u64,
    /// Milliseconds shaved off the interval per point of score
    pub speed_step: u64,

    // Power-ups
    /// Chance of a power-up appearing after an apple is eaten
    pub powerup_chance: f64,
    /// How many ticks a collected power-up stays in force
    pub powerup_duration: u32,
    /// Milliseconds added to the tick interval by the Slow power-up
    pub slow_bonus: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            base_speed: 150,
            min_speed: 40,
            speed_step: 5,
            powerup_chance: 0.2,
            powerup_duration: 60,
            slow_bonus: 80,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Tick interval the current score calls for, clamped to the floor.
    /// Both apple consumption and power-up expiry recompute from this.
    pub fn speed_for_score(&self, score: u32) -> u64 {
        self.base_speed
            .saturating_sub(self.speed_step * u64::from(score))
            .max(self.min_speed)
    }
}
