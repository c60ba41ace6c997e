// error.rs - Errors raised while building a simulator or handing it a board

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid needs at least one cell per side.
    #[error("grid size must be at least 1")]
    ZeroSize,

    /// size * size does not fit in a usize.
    #[error("grid size {0} is too large")]
    SizeOverflow(usize),

    /// A zero interval would tick on every poll.
    #[error("update interval must be non-zero")]
    ZeroInterval,

    /// A replacement board of the wrong size.
    #[error("board has {got} cells, expected {expected}")]
    BoardLength { expected: usize, got: usize },
}
