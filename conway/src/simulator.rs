// simulator.rs - The timer-driven Game of Life simulator
//
// Owns the board, the rule, the palette and the single pending tick.
// Nothing here sleeps: a driver passes in the current time and the simulator
// decides whether its tick is due.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::error::ConfigError;
use crate::palette::Palette;
use crate::patterns::Pattern;
use crate::rules::Rule;
use crate::surface::Surface;
use crate::timer::TickTimer;

/// Side of one painted cell, in pixels.
pub const CELL_SIZE: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub size: usize,
    pub update_interval: Duration,
    pub rule: Rule,
    pub palette: Palette,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            size: 50,
            update_interval: Duration::from_millis(200),
            rule: Rule::Standard,
            palette: Palette::classic(),
            seed: None,
        }
    }
}

impl SimulatorConfig {
    pub fn new(size: usize, update_interval: Duration) -> Self {
        Self { size, update_interval, ..Default::default() }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(ConfigError::SizeOverflow(self.size));
        }
        if self.update_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The board advanced; `alive` cells remain.
    Advanced { alive: usize },
    /// Every cell died; a fresh random board was seeded.
    Reseeded,
}

pub struct Simulator<S: Surface> {
    surface: S,
    board: Board,
    rule: Rule,
    palette: Palette,
    update_interval: Duration,
    timer: TickTimer,
    generation: u64,
    rng: StdRng,
}

impl<S: Surface> Simulator<S> {
    pub fn new(surface: S, config: SimulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            surface,
            board: Board::dead(config.size),
            rule: config.rule,
            palette: config.palette,
            update_interval: config.update_interval,
            timer: TickTimer::default(),
            generation: 0,
            rng,
        })
    }

    /// Standard rule, classic palette, interval in milliseconds.
    pub fn create(surface: S, size: usize, update_ms: u64) -> Result<Self, ConfigError> {
        Self::new(surface, SimulatorConfig::new(size, Duration::from_millis(update_ms)))
    }

    /// Seeds a random board, paints it and arms the first tick.
    /// Any tick already pending is cancelled first.
    pub fn start(&mut self, now: Instant) {
        self.timer.cancel();
        self.seed();
        self.timer.arm(now, self.update_interval);
    }

    fn seed(&mut self) {
        self.board = Board::random(self.board.size(), &mut self.rng);
        self.palette.reseed(&mut self.rng);
        self.generation = 0;
        log::info!(
            "seeded {0}x{0} board with {1} live cells",
            self.board.size(),
            self.board.alive_count()
        );
        self.draw();
    }

    /// Re-arms the tick without touching the board. No-op while running.
    pub fn resume(&mut self, now: Instant) {
        if !self.timer.is_pending() {
            self.timer.arm(now, self.update_interval);
        }
    }

    pub fn stop(&mut self) {
        if self.timer.cancel() {
            log::debug!("stopped at generation {}", self.generation);
        }
    }

    /// Advances one generation, repaints, then reseeds if every cell died.
    /// The next tick is only armed if one was pending, so stepping a stopped
    /// simulator by hand leaves it stopped.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let running = self.timer.cancel();
        self.advance(now, running)
    }

    /// Runs the pending tick if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.timer.fire(now) {
            Some(self.advance(now, true))
        } else {
            None
        }
    }

    fn advance(&mut self, now: Instant, rearm: bool) -> TickOutcome {
        self.board = self.board.next_generation(self.rule);
        self.generation += 1;
        self.draw();

        let outcome = if self.board.is_extinct() {
            log::info!("all cells are dead after {} generations", self.generation);
            self.seed();
            TickOutcome::Reseeded
        } else {
            let alive = self.board.alive_count();
            log::debug!("generation {}: {} alive", self.generation, alive);
            TickOutcome::Advanced { alive }
        };

        if rearm {
            self.timer.arm(now, self.update_interval);
        }
        outcome
    }

    pub fn draw(&mut self) {
        for index in 0..self.board.len() {
            self.draw_cell(index);
        }
    }

    /// Paints one cell at (col * CELL_SIZE, row * CELL_SIZE).
    pub fn draw_cell(&mut self, index: usize) {
        let x = self.board.col(index) as f32 * CELL_SIZE;
        let y = self.board.row(index) as f32 * CELL_SIZE;
        self.surface.set_fill(self.palette.fill_for(self.board.is_alive(index)));
        self.surface.fill_rect(x, y, CELL_SIZE, CELL_SIZE);
    }

    /// Flips one cell and repaints just that cell. Coordinates wrap.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let index = self.board.index(row, col);
        self.board.toggle(index);
        self.draw_cell(index);
    }

    /// Replaces the board with `pattern` centered on it. The timer is left alone.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        log::info!("loading pattern {}", pattern.name);
        self.install(pattern.stamp(self.board.size()));
    }

    /// Replaces the board wholesale. The timer is left alone.
    pub fn load_board(&mut self, board: Board) -> Result<(), ConfigError> {
        if board.size() != self.board.size() {
            return Err(ConfigError::BoardLength { expected: self.board.len(), got: board.len() });
        }
        self.install(board);
        Ok(())
    }

    fn install(&mut self, board: Board) {
        self.board = board;
        self.generation = 0;
        self.draw();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn next_tick_at(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.board.alive_count()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
