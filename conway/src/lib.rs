// lib.rs - Conway's Game of Life on a toroidal grid
//
// The board wraps at every edge, advances on a single cancellable timer and
// paints itself onto any `Surface` that can fill rectangles.

pub mod board;
pub mod error;
pub mod palette;
pub mod patterns;
pub mod rules;
pub mod runner;
pub mod simulator;
pub mod surface;
pub mod timer;

pub use board::Board;
pub use error::ConfigError;
pub use palette::Palette;
pub use patterns::{Pattern, PATTERNS};
pub use rules::Rule;
pub use simulator::{Simulator, SimulatorConfig, TickOutcome, CELL_SIZE};
pub use surface::{Color, Surface};
pub use timer::TickTimer;
