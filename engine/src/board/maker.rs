pub mod kruskal;
pub mod links;
pub mod tile_sets;

use rand::Rng;

use super::{Board, Tile};
use crate::constants::QUARTER_TURNS;
use crate::grid::Position;
use links::Link;

pub use kruskal::Kruskal;

pub struct BoardMaker<'a, R: Rng> {
    pub tiles: Vec<Tile>,
    pub rng: &'a mut R,
    width: usize,
    height: usize,
}

impl<'a, R: Rng> BoardMaker<'a, R> {
    pub fn new(width: usize, height: usize, rng: &'a mut R) -> Self {
        BoardMaker {
            tiles: vec![Tile::default(); width * height],
            rng,
            width,
            height,
        }
    }

    fn connect(&mut self, link: &Link) {
        debug_assert!(link.to.row < self.height, "link {:?} leaves the grid", link);
        lay_wire(&mut self.tiles, self.width, link);
    }

    /// Turns every tile a random number of quarter turns and returns the turn
    /// count applied to each tile, in row-major order.
    pub fn scramble(&mut self) -> Vec<u8> {
        let mut turns = Vec::with_capacity(self.tiles.len());

        for tile in self.tiles.iter_mut() {
            let count = self.rng.random_range(0..QUARTER_TURNS);
            for _ in 0..count {
                tile.rotate();
            }
            turns.push(count);
        }

        turns
    }

    pub fn into_board(self) -> Board {
        Board::from_tiles(self.width, self.height, self.tiles)
    }
}

/// Lays a wire across the boundary between the two tiles of `link`, in a
/// row-major grid `width` tiles wide.
pub(crate) fn lay_wire(tiles: &mut [Tile], width: usize, link: &Link) {
    let direction = link.from.direction_to(link.to).unwrap_or_else(|| {
        panic!(
            "link from {} to {} does not join neighboring tiles",
            link.from, link.to
        )
    });

    let index = |position: Position| {
        assert!(position.col < width, "tile {} is out of bounds", position);
        position.row * width + position.col
    };

    tiles[index(link.from)].wires.set(direction, true);
    tiles[index(link.to)].wires.set(direction.opposite(), true);
}
