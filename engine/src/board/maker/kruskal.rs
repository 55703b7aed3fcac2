use rand::Rng;

use super::BoardMaker;
use super::links::{self, Link};
use super::tile_sets::TileSets;

pub trait Kruskal {
    /// Wires a random spanning tree into the tiles and returns the links it
    /// accepted, in the order they were accepted.
    fn kruskal(&mut self) -> Vec<Link>;
}

impl<R: Rng> Kruskal for BoardMaker<'_, R> {
    fn kruskal(&mut self) -> Vec<Link> {
        let catalog = links::catalog(self.width, self.height, &mut *self.rng);
        let mut sets = TileSets::new(self.width, self.height);
        let mut tree = Vec::with_capacity(self.tiles.len().saturating_sub(1));

        for link in catalog {
            if sets.find(link.from) != sets.find(link.to) {
                sets.union(link.from, link.to);
                self.connect(&link);
                tree.push(link);
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::grid::Position;

    #[test]
    fn test_kruskal_tree_spans_every_tile() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (width, height) = (1 + seed as usize % 7, 1 + seed as usize % 5);
            let mut maker = BoardMaker::new(width, height, &mut rng);
            let tree = maker.kruskal();

            assert_eq!(tree.len(), width * height - 1);

            let mut sets = TileSets::new(width, height);
            for link in &tree {
                assert_ne!(
                    sets.find(link.from),
                    sets.find(link.to),
                    "tree links should never close a cycle"
                );
                sets.union(link.from, link.to);
            }
            assert_eq!(sets.components(), 1);
        }
    }

    #[test]
    fn test_kruskal_wires_match_tree_links() {
        let mut rng = StdRng::seed_from_u64(5);
        let (width, height) = (4, 4);
        let mut maker = BoardMaker::new(width, height, &mut rng);
        let tree = maker.kruskal();

        // Each link contributes one stub to each end.
        let stubs: usize = maker.tiles.iter().map(|tile| tile.wires.count()).sum();
        assert_eq!(stubs, 2 * tree.len());

        for link in &tree {
            let direction = link.from.direction_to(link.to).unwrap();
            let from = &maker.tiles[link.from.row * width + link.from.col];
            let to = &maker.tiles[link.to.row * width + link.to.col];
            assert!(from.wires.has(direction));
            assert!(to.wires.has(direction.opposite()));
        }
    }

    #[test]
    fn test_kruskal_on_a_pair_joins_left_and_right() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut maker = BoardMaker::new(2, 1, &mut rng);
        let tree = maker.kruskal();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].from, Position::new(0, 0));
        assert_eq!(tree[0].to, Position::new(0, 1));
        assert!(maker.tiles[0].wires.right && maker.tiles[0].wires.count() == 1);
        assert!(maker.tiles[1].wires.left && maker.tiles[1].wires.count() == 1);
    }

    #[test]
    fn test_kruskal_on_empty_grids_accepts_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        for (width, height) in [(0, 0), (0, 3), (3, 0)] {
            let mut maker = BoardMaker::new(width, height, &mut rng);
            assert!(maker.kruskal().is_empty());
            assert!(maker.tiles.is_empty());
        }
    }
}
