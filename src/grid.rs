use crate::Cell;

/// Dimensions of the playing field, in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn capacity(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    pub fn contains(&self, (x, y): Cell) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let grid = Grid::new(20, 20);
        assert!(grid.contains((0, 0)));
        assert!(grid.contains((19, 19)));
        assert!(!grid.contains((20, 10)));
        assert!(!grid.contains((10, 20)));
        assert!(!grid.contains((-1, 0)));
        assert!(!grid.contains((0, -1)));
    }

    #[test]
    fn cells_cover_the_whole_grid() {
        let grid = Grid::new(3, 2);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.capacity(), cells.len());
    }
}
