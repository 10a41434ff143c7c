//! Error types for maze generation.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type MazeResult<T> = Result<T, MazeError>;

/// Everything that can stop a generation run. None of these are recoverable:
/// a failed run produces no maze.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The production contains a symbol the turtle cannot interpret.
    #[error("unknown symbol {symbol:?} at index {index} of the production")]
    UnknownSymbol { symbol: char, index: usize },

    /// Fewer than two passable cells were available for start and finish.
    #[error("need at least 2 path cells to place start and finish, found {found}")]
    InsufficientPathCells { found: usize },

    /// A heading index outside the four cardinal directions.
    #[error("heading index {index} is out of range, expected 0..4")]
    InvalidHeading { index: u8 },

    /// The requested generation count exceeds the configured ceiling.
    #[error("{requested} generations requested, the configured maximum is {max}")]
    TooManyGenerations { requested: usize, max: usize },
}
