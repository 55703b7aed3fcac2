pub mod maker;
mod power;
mod tile;

use std::fmt;

use rand::Rng;

use crate::grid::{Direction, Position};
use maker::{BoardMaker, Kruskal, links::Link};

pub use tile::{Tile, Wires};

/// The puzzle: a row-major grid of wired tiles with a single power station.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    station: Option<Position>, // `None` only when the grid has no tiles.
}

impl Board {
    /// A fresh puzzle: a random spanning tree of wires, every tile scrambled
    /// by a random number of quarter turns, and the station at (0, 0).
    pub fn generate<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut maker = BoardMaker::new(width, height, rng);
        maker.kruskal();
        maker.scramble();
        maker.into_board()
    }

    /// The solved board for a spanning tree, with no scrambling.
    pub fn from_tree(width: usize, height: usize, tree: &[Link]) -> Self {
        let mut tiles = vec![Tile::default(); width * height];
        for link in tree {
            maker::lay_wire(&mut tiles, width, link);
        }
        Self::from_tiles(width, height, tiles)
    }

    pub(crate) fn from_tiles(width: usize, height: usize, mut tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            width * height,
            "a {}x{} board needs {} tiles",
            width,
            height,
            width * height
        );

        let station = tiles.first_mut().map(|tile| {
            tile.power_station = true;
            Position::ORIGIN
        });

        let mut board = Board {
            tiles,
            width,
            height,
            station,
        };
        board.update_power();
        board
    }

    #[cfg(test)]
    pub(crate) fn from_wires(width: usize, height: usize, wires: &[Wires]) -> Self {
        Self::from_tiles(width, height, wires.iter().copied().map(Tile::new).collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.row < self.height && position.col < self.width {
            Some(position.row * self.width + position.col)
        } else {
            None
        }
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    /// Every tile with its position, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (Position::new(i / width, i % width), tile))
    }

    pub fn station(&self) -> Option<Position> {
        self.station
    }

    pub fn powered_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.powered).count()
    }

    /// True once every tile is lit. An empty board is trivially lit.
    pub fn all_powered(&self) -> bool {
        self.tiles.iter().all(|tile| tile.powered)
    }

    /// Turns the tile at `position` a quarter turn clockwise. Returns `false`
    /// and leaves the board alone when no such tile exists.
    pub fn rotate(&mut self, position: Position) -> bool {
        let Some(i) = self.index(position) else {
            return false;
        };

        self.tiles[i].rotate();
        self.update_power();
        true
    }

    /// Moves the station one tile in `direction`, provided a wire runs both
    /// ways across that boundary. Returns whether the station moved.
    pub fn relocate_station(&mut self, direction: Direction) -> bool {
        let Some(from) = self.station else {
            return false;
        };

        if !self.is_connected(from, direction) {
            return false;
        }

        let Some(to) = from.step(direction, self.width, self.height) else {
            return false;
        };

        if let Some(i) = self.index(from) {
            self.tiles[i].power_station = false;
        }
        if let Some(i) = self.index(to) {
            self.tiles[i].power_station = true;
        }
        self.station = Some(to);
        self.update_power();
        true
    }

    pub fn log(&self) -> String {
        if self.width == 0 {
            return String::new();
        }

        self.tiles
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|tile| tile.wires.glyph())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
