use super::{
    action::Action,
    config::GameConfig,
    power::{Activation, PowerUp, PowerUpKind},
    state::{GameState, Position, Snake},
};
use rand::{rngs::ThreadRng, Rng};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Power-up collected this tick, if any
    pub activated: Option<PowerUpKind>,
    /// Power-up whose timer ran out this tick, if any
    pub expired: Option<PowerUpKind>,
    /// Set when self-collision ended the run; carries the final score
    pub game_over: Option<u32>,
}

/// The game engine that handles all game logic.
///
/// Generic over the RNG so tests can drive spawns with a seeded
/// [`rand::rngs::StdRng`]; production code uses [`GameEngine::new`] and
/// the thread-local RNG.
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create a game engine with an explicit RNG
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Build the start-of-session state: a single idle segment at the
    /// board center, a random apple, base speed.
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(Position::new(center_x, center_y));
        let apple = self.random_cell();

        GameState::new(
            snake,
            apple,
            self.config.base_speed,
            self.config.grid_width,
            self.config.grid_height,
        )
    }

    /// Advance the game by exactly one tick. The order of the phases is
    /// load-bearing: countdown, steering, movement, apple, power-up
    /// pickup, self-collision.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        // Count down the active power-up before anything moves
        if let Some(mut act) = state.activation.take() {
            act.remaining_ticks = act.remaining_ticks.saturating_sub(1);
            if act.remaining_ticks == 0 {
                outcome.expired = Some(act.kind);
                state.speed = self.config.speed_for_score(state.score);
            } else {
                state.activation = Some(act);
            }
        }

        // Commit the steering input; 180-degree reversals are dropped
        if let Action::Steer(direction) = action {
            state.snake.steer(direction);
        }

        // Move: prepend the new head, wrapped onto the torus. While the
        // snake is still idle the delta is zero and the head is
        // re-prepended in place.
        let (dx, dy) = state.snake.delta();
        let new_head = state
            .snake
            .head()
            .moved_by(dx, dy)
            .wrapped(state.grid_width as i32, state.grid_height as i32);
        state.snake.body.insert(0, new_head);

        // Apple: score, speed up, respawn; otherwise the tail moves up
        if new_head == state.apple {
            outcome.ate_apple = true;

            state.score += if state.has_active(PowerUpKind::Double) {
                2
            } else {
                1
            };
            state.speed = self.config.speed_for_score(state.score);
            state.apple = self.random_cell();

            // Spawn cells are not checked against the snake, the new
            // apple, or anything else
            if self.rng.gen_bool(self.config.powerup_chance) && state.activation.is_none() {
                state.power_up = Some(PowerUp {
                    cell: self.random_cell(),
                    kind: self.random_kind(),
                });
            }
        } else {
            state.snake.body.pop();
        }

        // Power-up pickup: starts the timer; Slow also stretches the
        // tick interval immediately
        if let Some(power_up) = state.power_up {
            if new_head == power_up.cell {
                state.activation = Some(Activation::new(power_up.kind, self.config.powerup_duration));
                if power_up.kind == PowerUpKind::Slow {
                    state.speed += self.config.slow_bonus;
                }
                state.power_up = None;
                outcome.activated = Some(power_up.kind);
            }
        }

        // Self-collision ends the run, unless invincible. The scan runs
        // against the post-growth body, so a head that just grew onto
        // itself counts.
        if !state.has_active(PowerUpKind::Invincible) && state.snake.collides_with_body(new_head) {
            outcome.game_over = Some(state.score);
            self.reset_run(state);
        }

        outcome
    }

    /// Rewind the state to its initial values after self-collision.
    /// The apple is deliberately left where it was.
    fn reset_run(&mut self, state: &mut GameState) {
        state.snake = Snake::new(state.center());
        state.score = 0;
        state.speed = self.config.base_speed;
        state.power_up = None;
        state.activation = None;
    }

    /// A uniformly random cell anywhere on the board
    fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height) as i32;
        Position::new(x, y)
    }

    fn random_kind(&mut self) -> PowerUpKind {
        PowerUpKind::ALL[self.rng.gen_range(0..PowerUpKind::ALL.len())]
    }
}
