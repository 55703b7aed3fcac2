use std::collections::VecDeque;

use strum::IntoEnumIterator;

use super::Board;
use crate::grid::{Direction, Position};

impl Board {
    /// Whether a wire runs across the boundary on the `direction` side of
    /// `position`: both tiles must carry a stub toward each other.
    pub fn is_connected(&self, position: Position, direction: Direction) -> bool {
        let Some(tile) = self.tile(position) else {
            return false;
        };

        if !tile.has_wire(direction) {
            return false;
        }

        position
            .step(direction, self.width, self.height)
            .and_then(|neighbor| self.tile(neighbor))
            .is_some_and(|neighbor| neighbor.has_wire(direction.opposite()))
    }

    /// The tiles reachable from the station, in breadth-first order starting
    /// with the station itself. Empty when there is no station.
    pub fn power_flow(&self) -> Vec<Position> {
        let mut reached = vec![false; self.tiles.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        let Some(start) = self.station.and_then(|station| self.index(station)) else {
            return order;
        };

        reached[start] = true;
        queue.push_back(Position::new(start / self.width, start % self.width));

        while let Some(current) = queue.pop_front() {
            order.push(current);

            for direction in Direction::iter() {
                if !self.is_connected(current, direction) {
                    continue;
                }

                let Some(neighbor) = current.step(direction, self.width, self.height) else {
                    continue;
                };
                let Some(i) = self.index(neighbor) else {
                    continue;
                };

                if !reached[i] {
                    reached[i] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }

    /// Recomputes every tile's `powered` flag from scratch.
    pub(crate) fn update_power(&mut self) {
        debug_assert_eq!(
            self.tiles.iter().filter(|tile| tile.power_station).count(),
            usize::from(self.station.is_some()),
            "board should carry exactly one power station:\n{}",
            self.log()
        );

        let flow = self.power_flow();

        for tile in self.tiles.iter_mut() {
            tile.powered = false;
        }

        for position in flow {
            if let Some(i) = self.index(position) {
                self.tiles[i].powered = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::board::Wires;

    fn horizontal_wire() -> Wires {
        Wires::NONE.with(Direction::Left).with(Direction::Right)
    }

    fn powered(board: &Board) -> Vec<bool> {
        board.tiles().map(|(_, tile)| tile.is_powered()).collect()
    }

    #[test]
    fn test_power_runs_along_a_wired_row() {
        let mut board = Board::from_wires(3, 1, &[horizontal_wire(); 3]);
        assert_eq!(powered(&board), [true, true, true]);
        assert!(board.all_powered());

        // A quarter turn makes the last tile vertical, breaking the 1-2 link.
        assert!(board.rotate(Position::new(0, 2)));
        assert_eq!(powered(&board), [true, true, false]);
        assert!(!board.all_powered());
    }

    #[test]
    fn test_one_sided_stub_does_not_conduct() {
        let wires = [
            Wires::NONE.with(Direction::Right),
            Wires::NONE.with(Direction::Down),
        ];
        let board = Board::from_wires(2, 1, &wires);
        assert!(!board.is_connected(Position::ORIGIN, Direction::Right));
        assert!(!board.is_connected(Position::new(0, 1), Direction::Left));
        assert_eq!(powered(&board), [true, false]);

        let wires = [Wires::NONE, Wires::NONE.with(Direction::Left)];
        let board = Board::from_wires(2, 1, &wires);
        assert_eq!(powered(&board), [true, false]);
    }

    #[test]
    fn test_mutual_stubs_conduct_both_ways() {
        let wires = [
            Wires::NONE.with(Direction::Down),
            Wires::NONE.with(Direction::Up),
        ];
        let board = Board::from_wires(1, 2, &wires);
        assert!(board.is_connected(Position::ORIGIN, Direction::Down));
        assert!(board.is_connected(Position::new(1, 0), Direction::Up));
        assert!(board.all_powered());
    }

    #[test]
    fn test_stubs_off_the_edge_lead_nowhere() {
        let wires = [Wires::NONE.with(Direction::Up).with(Direction::Left)];
        let board = Board::from_wires(1, 1, &wires);
        assert!(!board.is_connected(Position::ORIGIN, Direction::Up));
        assert!(!board.is_connected(Position::ORIGIN, Direction::Left));
        assert_eq!(board.power_flow(), [Position::ORIGIN]);
        assert!(board.all_powered());
    }

    #[test]
    fn test_power_flow_is_breadth_first() {
        // A T-junction at the station with arms of length two.
        let t = Wires::NONE
            .with(Direction::Left)
            .with(Direction::Right)
            .with(Direction::Down);
        let h = horizontal_wire();
        let v = Wires::NONE.with(Direction::Up).with(Direction::Down);
        let up = Wires::NONE.with(Direction::Up);
        let right = Wires::NONE.with(Direction::Right);
        let left = Wires::NONE.with(Direction::Left);

        let none = Wires::NONE;

        #[rustfmt::skip]
        let wires = [
            right, h,    t,  h,    left,
            none,  none, v,  none, none,
            none,  none, up, none, none,
        ];
        let mut board = Board::from_wires(5, 3, &wires);
        for direction in [Direction::Right, Direction::Right] {
            assert!(board.relocate_station(direction));
        }

        let flow = board.power_flow();
        let depth = |position: Position| position.row + position.col.abs_diff(2);
        assert_eq!(flow[0], Position::new(0, 2));
        assert_eq!(flow.len(), 7);
        assert!(flow.windows(2).all(|pair| depth(pair[0]) <= depth(pair[1])));
    }

    #[test]
    fn test_power_is_a_pure_function_of_the_board() {
        for seed in 0..64 {
            let mut board = Board::generate(6, 6, &mut StdRng::seed_from_u64(seed));
            let first = powered(&board);
            let flow = board.power_flow();

            board.update_power();
            assert_eq!(powered(&board), first);
            assert_eq!(board.power_flow(), flow);
            assert_eq!(board.powered_count(), flow.len());
        }
    }

    #[test]
    fn test_missing_station_powers_nothing() {
        let mut board = Board::from_wires(2, 1, &[horizontal_wire(); 2]);
        assert!(board.all_powered());

        board.tiles[0].power_station = false;
        board.station = None;
        board.update_power();

        assert!(board.power_flow().is_empty());
        assert_eq!(board.powered_count(), 0);
        assert!(!board.relocate_station(Direction::Right));
    }
}
