//! The cell grid a generated maze is written into.
//!
//! Generation only relies on the [`MazeGrid`] trait, so hosts can plug in their
//! own storage. [`Maze`] is the in-memory implementation used by default.

use glam::UVec2;
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::HashSet;

/// The tag carried by every grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellTag {
    #[default]
    Wall,
    Path,
    Start,
    Finish,
}

impl CellTag {
    /// Whether a walker may stand on this cell.
    pub fn is_passable(self) -> bool {
        !matches!(self, CellTag::Wall)
    }
}

/// A width x height grid of tagged cells.
pub trait MazeGrid: Sized {
    /// Creates a grid with every cell tagged [`CellTag::Wall`].
    fn new(width: u32, height: u32) -> Self;

    /// Number of columns, border included.
    fn width(&self) -> u32;

    /// Number of rows, border included.
    fn height(&self) -> u32;

    /// Returns the tag of `cell`, or `None` when it lies outside the grid.
    fn tag(&self, cell: UVec2) -> Option<CellTag>;

    /// Overwrites the tag of `cell`. Out-of-bounds cells are ignored.
    fn set(&mut self, tag: CellTag, cell: UVec2);

    /// Iterates over every cell currently bearing `tag`, row by row.
    fn cells(&self, tag: CellTag) -> impl Iterator<Item = UVec2> + '_ {
        let (width, height) = (self.width(), self.height());
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| UVec2::new(x, y)))
            .filter(move |&cell| self.tag(cell) == Some(tag))
    }

    /// Number of cells currently bearing `tag`.
    fn count(&self, tag: CellTag) -> usize {
        self.cells(tag).count()
    }

    /// Samples uniformly among the cells bearing `tag`.
    fn random_cell<R: Rng + ?Sized>(&self, tag: CellTag, rng: &mut R) -> Option<UVec2> {
        self.cells(tag).choose(rng)
    }

    /// Every passable cell reachable from `from` through 4-neighbour moves,
    /// including `from` itself. Empty when `from` is not passable.
    fn region(&self, from: UVec2) -> Vec<UVec2> {
        let passable = |cell: UVec2| self.tag(cell).is_some_and(CellTag::is_passable);
        if !passable(from) {
            return Vec::new();
        }

        let mut seen = HashSet::from([from]);
        let mut stack = vec![from];
        let mut region = Vec::new();
        while let Some(cell) = stack.pop() {
            region.push(cell);
            let neighbours = [
                cell.x.checked_sub(1).map(|x| UVec2::new(x, cell.y)),
                Some(UVec2::new(cell.x + 1, cell.y)),
                cell.y.checked_sub(1).map(|y| UVec2::new(cell.x, y)),
                Some(UVec2::new(cell.x, cell.y + 1)),
            ];
            for next in neighbours.into_iter().flatten() {
                if passable(next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        region
    }
}

/// Row-major in-memory grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: u32,
    height: u32,
    tags: Vec<CellTag>,
}

impl Maze {
    fn index(&self, cell: UVec2) -> Option<usize> {
        (cell.x < self.width && cell.y < self.height)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// The start cell, once endpoints have been placed.
    pub fn start(&self) -> Option<UVec2> {
        self.cells(CellTag::Start).next()
    }

    /// The finish cell, once endpoints have been placed.
    pub fn finish(&self) -> Option<UVec2> {
        self.cells(CellTag::Finish).next()
    }
}

impl MazeGrid for Maze {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tags: vec![CellTag::Wall; width as usize * height as usize],
        }
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tag(&self, cell: UVec2) -> Option<CellTag> {
        self.index(cell).map(|i| self.tags[i])
    }

    fn set(&mut self, tag: CellTag, cell: UVec2) {
        if let Some(i) = self.index(cell) {
            self.tags[i] = tag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_all_walls() {
        let maze = Maze::new(3, 2);
        assert_eq!(maze.count(CellTag::Wall), 6);
        assert_eq!(maze.count(CellTag::Path), 0);
        assert_eq!(maze.tag(UVec2::new(3, 0)), None);
    }

    #[test]
    fn set_overwrites_and_ignores_out_of_bounds() {
        let mut maze = Maze::new(2, 2);
        maze.set(CellTag::Path, UVec2::new(1, 1));
        maze.set(CellTag::Start, UVec2::new(1, 1));
        maze.set(CellTag::Path, UVec2::new(5, 5));
        assert_eq!(maze.tag(UVec2::new(1, 1)), Some(CellTag::Start));
        assert_eq!(maze.start(), Some(UVec2::new(1, 1)));
        assert_eq!(maze.count(CellTag::Path), 0);
    }

    #[test]
    fn random_cell_only_returns_matching_tag() {
        let mut maze = Maze::new(4, 4);
        maze.set(CellTag::Path, UVec2::new(1, 2));
        maze.set(CellTag::Path, UVec2::new(2, 2));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let cell = maze.random_cell(CellTag::Path, &mut rng).unwrap();
            assert_eq!(maze.tag(cell), Some(CellTag::Path));
        }
        assert_eq!(maze.random_cell(CellTag::Finish, &mut rng), None);
    }

    #[test]
    fn region_stops_at_walls() {
        let mut maze = Maze::new(5, 3);
        for x in [1, 2] {
            maze.set(CellTag::Path, UVec2::new(x, 1));
        }
        maze.set(CellTag::Finish, UVec2::new(3, 1));
        maze.set(CellTag::Path, UVec2::new(0, 0));

        let mut region = maze.region(UVec2::new(1, 1));
        region.sort_by_key(|c| (c.y, c.x));
        assert_eq!(
            region,
            vec![UVec2::new(1, 1), UVec2::new(2, 1), UVec2::new(3, 1)]
        );
        assert_eq!(maze.region(UVec2::new(0, 0)), vec![UVec2::new(0, 0)]);
        assert!(maze.region(UVec2::new(4, 2)).is_empty());
    }
}
