use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::Cell;

/// Picks a free cell uniformly at random, or `None` when the snake covers the
/// whole grid.
pub fn place_food<R: Rng + ?Sized>(occupied: &HashSet<Cell>, grid: &Grid, rng: &mut R) -> Option<Cell> {
    let choices: Vec<Cell> = grid.cells().filter(|pos| !occupied.contains(pos)).collect();
    choices.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_lands_on_the_snake() {
        let grid = Grid::new(20, 20);
        let occupied: HashSet<Cell> = (0..20).map(|x| (x, 10)).chain((0..20).map(|y| (3, y))).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let food = place_food(&occupied, &grid, &mut rng).unwrap();
            assert!(grid.contains(food));
            assert!(!occupied.contains(&food));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let grid = Grid::new(3, 3);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| *c != (2, 1)).collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(place_food(&occupied, &grid, &mut rng), Some((2, 1)));
    }

    #[test]
    fn full_grid_has_no_food() {
        let grid = Grid::new(2, 2);
        let occupied: HashSet<Cell> = grid.cells().collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(place_food(&occupied, &grid, &mut rng), None);
    }
}
