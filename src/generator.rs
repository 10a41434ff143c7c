//! The full generation pipeline: rewrite, walk, normalize, build, place endpoints.
//!
//! The turtle's trace is drawn as *walls*; every other interior cell becomes
//! path. [`generate_hilbert`] and [`generate`] run the whole pipeline into the
//! default [`Maze`]; [`MazeGenerator`] exposes the individual stages.

use crate::error::{MazeError, MazeResult};
use crate::grammar::{Grammar, Production};
use crate::interpreter::{Trace, TurtleInterpreter, normalize};
use crate::log::{debug, warn};
use crate::maze::{CellTag, Maze, MazeGrid};
use glam::{IVec2, UVec2};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for maze generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Largest accepted generation count. Production length grows
    /// exponentially, so anything above this is rejected up front.
    pub max_generations: usize,
    /// Upper bound on redraws while placing start and finish.
    pub max_selection_attempts: usize,
    /// Only pick a finish that can be walked to from the start.
    ///
    /// The inverted trace usually splits into several pockets. With this off,
    /// start and finish are drawn independently over all path cells.
    pub connected_endpoints: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            max_generations: 10,
            max_selection_attempts: 10_000,
            connected_endpoints: true,
        }
    }
}

/// Runs an L-System through the maze pipeline.
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    grammar: Grammar,
    interpreter: TurtleInterpreter,
    config: MazeConfig,
}

impl MazeGenerator {
    /// Creates a generator for `grammar` with the standard turtle symbols.
    pub fn new(grammar: Grammar, config: MazeConfig) -> Self {
        let interpreter = TurtleInterpreter::for_grammar(&grammar);
        Self {
            grammar,
            interpreter,
            config,
        }
    }

    /// Replaces the interpreter (builder pattern), e.g. to map extra symbols.
    pub fn with_interpreter(mut self, interpreter: TurtleInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// The grammar this generator rewrites.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The configuration every run uses.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Rewrites the axiom for `generations` rounds.
    ///
    /// # Errors
    ///
    /// [`MazeError::TooManyGenerations`] above [`MazeConfig::max_generations`].
    pub fn production(&self, generations: usize) -> MazeResult<Production> {
        if generations > self.config.max_generations {
            warn!(
                "rejecting {} generations (max {})",
                generations, self.config.max_generations
            );
            return Err(MazeError::TooManyGenerations {
                requested: generations,
                max: self.config.max_generations,
            });
        }
        let production = self.grammar.produce(generations);
        debug!("production has {} symbols", production.len());
        Ok(production)
    }

    /// Walks the production and returns the normalized trace.
    pub fn trace(&self, generations: usize) -> MazeResult<Trace> {
        let production = self.production(generations)?;
        let trace = normalize(&self.interpreter.traverse(&production)?);
        debug!("trace has {} points", trace.len());
        Ok(trace)
    }

    /// Generates into any [`MazeGrid`] implementation.
    pub fn generate_into<G, R>(&self, generations: usize, rng: &mut R) -> MazeResult<G>
    where
        G: MazeGrid,
        R: Rng + ?Sized,
    {
        let trace = self.trace(generations)?;
        let mut grid: G = build_grid(&trace);
        select_endpoints(&mut grid, &self.config, rng)?;
        Ok(grid)
    }

    /// Generates into the default in-memory [`Maze`].
    pub fn generate<R: Rng + ?Sized>(&self, generations: usize, rng: &mut R) -> MazeResult<Maze> {
        self.generate_into(generations, rng)
    }
}

/// Builds a grid whose walls are the trace shifted by (+1, +1).
///
/// The grid is one cell larger than the farthest wall on each axis, so the
/// outer ring always stays wall. Interior cells not on the trace become path.
/// The trace is normalized first, so callers may pass a raw one.
pub fn build_grid<G: MazeGrid>(trace: &[IVec2]) -> G {
    let walls: HashSet<UVec2> = normalize(trace)
        .into_iter()
        .map(|point| (point + IVec2::ONE).as_uvec2())
        .collect();
    let max = walls.iter().copied().reduce(UVec2::max).unwrap_or(UVec2::ZERO);

    let mut grid = G::new(max.x + 2, max.y + 2);
    for y in 1..=max.y {
        for x in 1..=max.x {
            let cell = UVec2::new(x, y);
            if !walls.contains(&cell) {
                grid.set(CellTag::Path, cell);
            }
        }
    }
    debug!(
        "built {}x{} grid with {} walls",
        grid.width(),
        grid.height(),
        walls.len()
    );
    grid
}

/// Tags a random path cell as start and a different one as finish.
///
/// Both draws are uniform over path cells; the finish is redrawn until it
/// differs from the start. With [`MazeConfig::connected_endpoints`] the finish
/// is drawn from the start's region instead, and a start whose region holds
/// no other cell is redrawn.
///
/// # Errors
///
/// [`MazeError::InsufficientPathCells`] when there are fewer than two path
/// cells, or no valid pair turns up within the configured attempts.
pub fn select_endpoints<G, R>(
    grid: &mut G,
    config: &MazeConfig,
    rng: &mut R,
) -> MazeResult<(UVec2, UVec2)>
where
    G: MazeGrid,
    R: Rng + ?Sized,
{
    let found = grid.count(CellTag::Path);
    if found < 2 {
        return Err(MazeError::InsufficientPathCells { found });
    }
    let insufficient = MazeError::InsufficientPathCells { found };

    let (start, finish) = if config.connected_endpoints {
        connected_pair(grid, config, rng).ok_or(insufficient)?
    } else {
        let start = grid.random_cell(CellTag::Path, rng).ok_or(insufficient.clone())?;
        let finish = (0..config.max_selection_attempts)
            .filter_map(|_| grid.random_cell(CellTag::Path, rng))
            .find(|&cell| cell != start)
            .ok_or(insufficient)?;
        (start, finish)
    };

    grid.set(CellTag::Start, start);
    grid.set(CellTag::Finish, finish);
    debug!("start {:?}, finish {:?}", start, finish);
    Ok((start, finish))
}

fn connected_pair<G, R>(grid: &G, config: &MazeConfig, rng: &mut R) -> Option<(UVec2, UVec2)>
where
    G: MazeGrid,
    R: Rng + ?Sized,
{
    let mut attempts = 0..config.max_selection_attempts;
    while attempts.next().is_some() {
        let start = grid.random_cell(CellTag::Path, rng)?;
        let region = grid.region(start);
        if region.len() < 2 {
            continue;
        }
        // Finish redraws share the same budget as start redraws.
        while attempts.next().is_some() {
            let finish = *region.choose(rng)?;
            if finish != start {
                return Some((start, finish));
            }
        }
    }
    None
}

/// Generates a maze from the Hilbert curve grammar.
pub fn generate_hilbert<R: Rng + ?Sized>(generations: usize, rng: &mut R) -> MazeResult<Maze> {
    generate(&Grammar::hilbert(), generations, rng)
}

/// Generates a maze from an arbitrary grammar with the default configuration.
pub fn generate<R: Rng + ?Sized>(
    grammar: &Grammar,
    generations: usize,
    rng: &mut R,
) -> MazeResult<Maze> {
    MazeGenerator::new(grammar.clone(), MazeConfig::default()).generate(generations, rng)
}
