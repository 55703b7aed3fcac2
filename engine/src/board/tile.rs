use strum::IntoEnumIterator;

use crate::grid::Direction;

/// Wire stubs leading from the center of a tile toward each of its sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wires {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl Wires {
    pub const NONE: Wires = Wires {
        up: false,
        right: false,
        down: false,
        left: false,
    };

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    pub fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Up => self.up = value,
            Direction::Right => self.right = value,
            Direction::Down => self.down = value,
            Direction::Left => self.left = value,
        }
    }

    pub fn with(mut self, direction: Direction) -> Self {
        self.set(direction, true);
        self
    }

    pub fn count(&self) -> usize {
        Direction::iter().filter(|&d| self.has(d)).count()
    }

    /// A quarter turn clockwise: the stub on the left moves to the top, top to
    /// right, right to bottom and bottom to left.
    pub fn rotated(&self) -> Wires {
        Wires {
            up: self.left,
            right: self.up,
            down: self.right,
            left: self.down,
        }
    }

    pub fn glyph(&self) -> char {
        match (self.up, self.right, self.down, self.left) {
            (false, false, false, false) => ' ',
            (true, false, false, false) => '╵',
            (false, true, false, false) => '╶',
            (false, false, true, false) => '╷',
            (false, false, false, true) => '╴',
            (true, false, true, false) => '│',
            (false, true, false, true) => '─',
            (true, true, false, false) => '└',
            (false, true, true, false) => '┌',
            (false, false, true, true) => '┐',
            (true, false, false, true) => '┘',
            (true, true, true, false) => '├',
            (false, true, true, true) => '┬',
            (true, false, true, true) => '┤',
            (true, true, false, true) => '┴',
            (true, true, true, true) => '┼',
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub(crate) wires: Wires,
    pub(crate) power_station: bool,
    pub(crate) powered: bool, // Derived; overwritten by every power update.
}

impl Tile {
    pub fn new(wires: Wires) -> Self {
        Tile {
            wires,
            ..Default::default()
        }
    }

    pub fn wires(&self) -> Wires {
        self.wires
    }

    pub fn has_wire(&self, direction: Direction) -> bool {
        self.wires.has(direction)
    }

    pub fn is_power_station(&self) -> bool {
        self.power_station
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub(crate) fn rotate(&mut self) {
        self.wires = self.wires.rotated();
    }
}
