use rand::Rng;

use crate::constants::MAX_EDGE_WEIGHT;
use crate::grid::Position;

/// A candidate connection between two neighboring tiles. `from` is always the
/// upper or left-hand tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub from: Position,
    pub to: Position,
    pub weight: u32,
}

/// Every adjacency of a `width` x `height` grid exactly once, with random
/// weights, lightest first. Equal weights keep their enumeration order.
pub fn catalog<R: Rng>(width: usize, height: usize, rng: &mut R) -> Vec<Link> {
    let mut links = Vec::new();

    for row in 0..height {
        for col in 0..width {
            let from = Position::new(row, col);

            if col + 1 < width {
                links.push(Link {
                    from,
                    to: Position::new(row, col + 1),
                    weight: rng.random_range(0..MAX_EDGE_WEIGHT),
                });
            }

            if row + 1 < height {
                links.push(Link {
                    from,
                    to: Position::new(row + 1, col),
                    weight: rng.random_range(0..MAX_EDGE_WEIGHT),
                });
            }
        }
    }

    links.sort_by_key(|link| link.weight);
    links
}
