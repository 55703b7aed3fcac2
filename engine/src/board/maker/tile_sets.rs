use disjoint::DisjointSet;

use crate::grid::Position;

/// Union-find over the tiles of a `width`-wide grid, keyed by `Position`.
///
/// Positions outside the grid are a programming error and panic.
pub struct TileSets {
    sets: DisjointSet,
    width: usize,
}

impl TileSets {
    pub fn new(width: usize, height: usize) -> Self {
        TileSets {
            sets: DisjointSet::with_len(width * height),
            width,
        }
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            position.col < self.width && position.row * self.width + position.col < self.sets.len(),
            "tile {} is not registered in a grid of {} tiles, {} wide",
            position,
            self.sets.len(),
            self.width
        );

        position.row * self.width + position.col
    }

    fn position(&self, index: usize) -> Position {
        Position::new(index / self.width, index % self.width)
    }

    /// The representative tile of the set containing `position`.
    pub fn find(&self, position: Position) -> Position {
        let root = self.sets.root_of(self.index(position));
        self.position(root)
    }

    pub fn union(&mut self, a: Position, b: Position) {
        let (i, j) = (self.index(a), self.index(b));
        self.sets.join(i, j);
    }

    pub fn components(&self) -> usize {
        (0..self.sets.len())
            .filter(|&i| self.sets.root_of(i) == i)
            .count()
    }
}
