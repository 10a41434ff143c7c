//! # lsystem-maze
//!
//! Procedural maze generation from [L-Systems](https://en.wikipedia.org/wiki/L-system).
//!
//! A grammar is rewritten for a number of generations, the resulting string is
//! walked by a 4-direction grid turtle, and the cells the turtle visits become
//! the *walls* of the maze. Everything else inside the border becomes path,
//! and a start and finish are placed on two random path cells.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let maze = lsystem_maze::generate_hilbert(3, &mut rng).unwrap();
//! assert_ne!(maze.start(), maze.finish());
//! ```

pub mod error;
pub mod generator;
pub mod grammar;
pub mod interpreter;
mod log;
pub mod maze;
pub mod turtle;

pub use error::*;
pub use generator::*;
pub use grammar::*;
pub use interpreter::*;
pub use maze::*;
pub use turtle::*;
