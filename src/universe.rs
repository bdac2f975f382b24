use std::fmt;
use std::fmt::Write;
use std::mem;

use thiserror::Error;

use crate::GridPos;
use crate::engine::CellState;
use crate::engine::Engine;

#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    EmptyGrid { width: GridPos, height: GridPos },
}

/// The bundled simulation engine: a flat row-major grid of cells on a
/// toroidal topology, advanced with the classic life rule.
#[derive(Debug, PartialEq, Eq)]
pub struct Universe {
    width: GridPos,
    height: GridPos,
    cells: Vec<CellState>,
}

impl Universe {
    pub fn new(width: GridPos, height: GridPos) -> Result<Self, UniverseError> {
        if width == 0 || height == 0 {
            return Err(UniverseError::EmptyGrid { width, height });
        }

        let cells = vec![CellState::Dead; (width as usize) * (height as usize)];

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Seed the grid with a deterministic starter pattern.
    pub fn initialize(&mut self) {
        self.populate(|i| CellState::from(i % 2 == 0 || i % 7 == 0));
    }

    /// Set the listed `(row, col)` cells alive. Test scaffolding.
    pub fn set_cells_alive(&mut self, cells: &[(GridPos, GridPos)]) {
        for &(row, col) in cells {
            let i = self.index(row, col);
            self.cells[i] = CellState::Alive;
        }
    }

    pub fn is_cell_alive(&self, row: GridPos, col: GridPos) -> bool {
        self.cells[self.index(row, col)] == CellState::Alive
    }

    fn index(&self, row: GridPos, col: GridPos) -> usize {
        assert!(row < self.height, "row out of bounds");
        assert!(col < self.width, "column out of bounds");

        (row * self.width + col) as usize
    }

    fn populate<F>(&mut self, f: F)
    where
        F: Fn(usize) -> CellState,
    {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(i);
        }
    }

    fn live_neighbors(&self, row: GridPos, col: GridPos) -> u8 {
        let mut count = 0;

        // `dim - 1` acts as an offset of -1 under the wrapping modulo
        for dr in [self.height - 1, 0, 1] {
            for dc in [self.width - 1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = (row + dr) % self.height;
                let c = (col + dc) % self.width;

                count += self.cells[self.index(r, c)] as u8;
            }
        }

        count
    }
}

impl Engine for Universe {
    fn width(&self) -> GridPos {
        self.width
    }

    fn height(&self) -> GridPos {
        self.height
    }

    fn cells(&self) -> &[CellState] {
        &self.cells
    }

    fn tick(&mut self) {
        let mut next = self.cells.clone();

        for row in 0..self.height {
            for col in 0..self.width {
                let i = self.index(row, col);
                let alive = self.cells[i] == CellState::Alive;

                next[i] = match (alive, self.live_neighbors(row, col)) {
                    (true, 2) | (true, 3) => CellState::Alive,
                    (false, 3) => CellState::Alive,
                    _ => CellState::Dead,
                };
            }
        }

        self.cells = next;
    }

    fn toggle_cell(&mut self, row: GridPos, col: GridPos) {
        let i = self.index(row, col);

        self.cells[i] = match self.cells[i] {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        };
    }

    fn set_cell_alive(&mut self, row: GridPos, col: GridPos) -> bool {
        let i = self.index(row, col);

        CellState::Dead == mem::replace(&mut self.cells[i], CellState::Alive)
    }

    fn clear(&mut self) {
        self.populate(|_| CellState::Dead);
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                f.write_char(if cell == CellState::Alive { '◼' } else { '◻' })?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Universe;
    use crate::engine::Engine;

    fn glider() -> Universe {
        let mut universe = Universe::new(6, 6).unwrap();
        universe.set_cells_alive(&[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        universe
    }

    #[test]
    fn index_is_row_major() {
        let universe = Universe::new(3, 4).unwrap();

        assert_eq!(universe.index(0, 0), 0);
        assert_eq!(universe.index(1, 1), 4);
        assert_eq!(universe.index(1, 2), 5);
        assert_eq!(universe.index(3, 2), 11);
    }

    #[test]
    #[should_panic(expected = "row out of bounds")]
    fn index_row_out_of_bounds() {
        let universe = Universe::new(6, 6).unwrap();
        universe.index(6, 1);
    }

    #[test]
    #[should_panic(expected = "column out of bounds")]
    fn index_column_out_of_bounds() {
        let universe = Universe::new(6, 6).unwrap();
        universe.index(1, 6);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(Universe::new(0, 6).is_err());
        assert!(Universe::new(6, 0).is_err());
    }

    #[test]
    fn tick_advances_a_glider() {
        let mut universe = glider();

        let mut expected = Universe::new(6, 6).unwrap();
        expected.set_cells_alive(&[(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)]);

        universe.tick();

        assert_eq!(universe, expected);
    }

    #[test]
    fn clear_kills_everything() {
        let mut universe = glider();
        universe.clear();

        assert_eq!(universe, Universe::new(6, 6).unwrap());
    }

    #[test]
    fn toggle_cell_round_trips() {
        let mut universe = Universe::new(6, 6).unwrap();

        universe.toggle_cell(2, 1);
        assert!(universe.is_cell_alive(2, 1));

        universe.toggle_cell(2, 1);
        assert!(!universe.is_cell_alive(2, 1));
    }

    #[test]
    fn set_cell_alive_reports_change() {
        let mut universe = Universe::new(6, 6).unwrap();

        // raising a dead cell is a change, raising it again is not
        assert!(universe.set_cell_alive(2, 1));
        assert!(universe.is_cell_alive(2, 1));

        assert!(!universe.set_cell_alive(2, 1));
        assert!(universe.is_cell_alive(2, 1));
    }

    #[test]
    fn display_renders_the_grid() {
        let universe = glider();

        insta::assert_snapshot!(universe.to_string(), @r"
        ◻◻◻◻◻◻
        ◻◻◼◻◻◻
        ◻◻◻◼◻◻
        ◻◼◼◼◻◻
        ◻◻◻◻◻◻
        ◻◻◻◻◻◻
        ");
    }
}
