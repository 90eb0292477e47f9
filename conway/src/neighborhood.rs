// neighborhood.rs - 3x3 Moore window around one cell

use crate::cell::Cell;
use crate::grid::Grid;

/// Copy of the 3x3 window centred on one cell, indexed `[dy + 1][dx + 1]`.
///
/// Positions outside the grid are dead; the window never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    cells: [[Cell; 3]; 3],
}

impl Neighborhood {
    pub fn new(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn extract(grid: &Grid, x: usize, y: usize) -> Self {
        let mut cells = [[Cell::Dead; 3]; 3];
        for (dy, row) in (-1isize..=1).zip(cells.iter_mut()) {
            for (dx, cell) in (-1isize..=1).zip(row.iter_mut()) {
                *cell = grid
                    .get_checked(x as isize + dx, y as isize + dy)
                    .unwrap_or(Cell::Dead);
            }
        }
        Self { cells }
    }

    pub fn center(&self) -> Cell {
        self.cells[1][1]
    }

    /// Cell at offset `(dx, dy)` from the centre, each in `-1..=1`.
    pub fn at(&self, dx: isize, dy: isize) -> Cell {
        self.cells[(dy + 1) as usize][(dx + 1) as usize]
    }

    /// The eight cells around the centre.
    pub fn neighbors(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .filter(|&(i, _)| i != 4)
            .map(|(_, &cell)| cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_window_copies_grid() {
        let grid = Grid::parse("X__\n_X_\n__X").unwrap();
        let hood = Neighborhood::extract(&grid, 1, 1);
        assert_eq!(hood.center(), Cell::Alive);
        assert_eq!(hood.at(-1, -1), Cell::Alive);
        assert_eq!(hood.at(1, 1), Cell::Alive);
        assert_eq!(hood.at(1, -1), Cell::Dead);
        assert_eq!(hood.at(-1, 1), Cell::Dead);
    }

    #[test]
    fn corner_window_pads_with_dead() {
        let grid = Grid::parse("XXX\nXXX\nXXX").unwrap();
        let hood = Neighborhood::extract(&grid, 0, 0);
        assert_eq!(hood.neighbors().filter(|c| c.is_alive()).count(), 3);
        for (dx, dy) in [(-1, -1), (0, -1), (1, -1), (-1, 0), (-1, 1)] {
            assert_eq!(hood.at(dx, dy), Cell::Dead, "({dx}, {dy})");
        }
    }

    #[test]
    fn edges_do_not_wrap() {
        // alive cells on the far edges would be neighbours on a torus
        let grid = Grid::parse("____X\n____X\n____X").unwrap();
        let hood = Neighborhood::extract(&grid, 0, 1);
        assert_eq!(hood.neighbors().filter(|c| c.is_alive()).count(), 0);
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::parse("X").unwrap();
        let hood = Neighborhood::extract(&grid, 0, 0);
        assert_eq!(hood.center(), Cell::Alive);
        assert_eq!(hood.neighbors().count(), 8);
        assert!(hood.neighbors().all(|c| c == Cell::Dead));
    }
}
