//! Grid, positions, generation, and tumble mechanics (gravity + refill)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;
use crate::symbols::{weighted_pick, SpinMode, Symbol, BUY_FEATURE_WEIGHTS};

/// Grid columns.
pub const COLS: usize = 6;
/// Grid rows.
pub const ROWS: usize = 5;
/// Total cell count.
pub const CELLS: usize = COLS * ROWS;

/// Number of scatter cells forced onto a buy-feature grid.
pub const FORCED_SCATTERS: usize = 4;

/// A (row, col) cell coordinate. Value type; used as a map key for bomb
/// bookkeeping, never as an identity reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A fully populated 6x5 symbol matrix.
///
/// Dimensions never change and every cell always holds a symbol; empties
/// exist only as transient state inside [`Grid::collapse_and_refill`].
/// `Copy` keeps per-step snapshots cheap and free of aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Symbol; COLS]; ROWS],
}

impl Grid {
    pub fn from_cells(cells: [[Symbol; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Draws a full grid, one independent weighted draw per cell, row-major
    /// (row 0 left to right, then row 1, ...).
    pub fn generate<R: RandomSource + ?Sized>(mode: SpinMode, rng: &mut R) -> Self {
        Self::generate_from(mode.weight_table(), rng)
    }

    /// Buy-feature grid: a scatter-free draw, then exactly four cells chosen
    /// by an unbiased partial shuffle of all 30 positions are overwritten
    /// with the scatter symbol, guaranteeing feature entry.
    pub fn generate_buy_feature<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut grid = Self::generate_from(BUY_FEATURE_WEIGHTS, rng);
        let mut indices: [usize; CELLS] = std::array::from_fn(|i| i);
        for i in 0..FORCED_SCATTERS {
            let j = i + rng.next_index(CELLS - i);
            indices.swap(i, j);
        }
        for &index in &indices[..FORCED_SCATTERS] {
            let position = Position {
                row: index / COLS,
                col: index % COLS,
            };
            grid.set(position, Symbol::Scatter);
        }
        grid
    }

    fn generate_from<R: RandomSource + ?Sized>(table: &[(Symbol, u32)], rng: &mut R) -> Self {
        let mut cells = [[Symbol::Lp1; COLS]; ROWS];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = weighted_pick(rng, table);
            }
        }
        Self { cells }
    }

    pub fn get(&self, position: Position) -> Symbol {
        self.cells[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, symbol: Symbol) {
        self.cells[position.row][position.col] = symbol;
    }

    pub fn cells(&self) -> &[[Symbol; COLS]; ROWS] {
        &self.cells
    }

    /// All positions holding `symbol`, row-major.
    pub fn positions_of(&self, symbol: Symbol) -> Vec<Position> {
        let mut positions = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == symbol {
                    positions.push(Position { row, col });
                }
            }
        }
        positions
    }

    pub fn scatter_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&s| s == Symbol::Scatter)
            .count()
    }

    /// One tumble: clears the given cells, slides the survivors of each
    /// column down, and refills the vacated top cells with fresh draws from
    /// the mode's table. Refill draws run column 0 to 5, top row down.
    pub fn collapse_and_refill<R: RandomSource + ?Sized>(
        &mut self,
        cleared: &HashSet<Position>,
        mode: SpinMode,
        rng: &mut R,
    ) {
        let table = mode.weight_table();
        for col in 0..COLS {
            let kept: Vec<Symbol> = (0..ROWS)
                .filter(|&row| !cleared.contains(&Position { row, col }))
                .map(|row| self.cells[row][col])
                .collect();
            let vacant = ROWS - kept.len();
            for row in 0..vacant {
                self.cells[row][col] = weighted_pick(rng, table);
            }
            for (offset, &symbol) in kept.iter().enumerate() {
                self.cells[vacant + offset][col] = symbol;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SeededRng, SequenceRng};

    #[test]
    fn generated_grid_is_fully_populated() {
        let mut rng = SeededRng::seed_from_u64(7);
        let grid = Grid::generate(SpinMode::Base, &mut rng);
        // Dimensions are fixed by the type; base mode never draws bombs.
        assert_eq!(grid.positions_of(Symbol::Bomb).len(), 0);
    }

    #[test]
    fn free_spin_grids_eventually_contain_bombs() {
        let mut rng = SeededRng::seed_from_u64(11);
        let bombs: usize = (0..200)
            .map(|_| {
                Grid::generate(SpinMode::FreeSpin, &mut rng)
                    .positions_of(Symbol::Bomb)
                    .len()
            })
            .sum();
        assert!(bombs > 0);
    }

    #[test]
    fn buy_feature_grid_has_exactly_four_scatters() {
        let mut rng = SeededRng::seed_from_u64(99);
        for _ in 0..100 {
            let grid = Grid::generate_buy_feature(&mut rng);
            assert_eq!(grid.scatter_count(), FORCED_SCATTERS);
        }
    }

    #[test]
    fn gravity_slides_survivors_down_and_refills_the_top() {
        // Column 0 top-heavy: clear rows 0 and 1, keep rows 2..4 in order.
        let mut cells = [[Symbol::Lp3; COLS]; ROWS];
        cells[2][0] = Symbol::Hp1;
        cells[3][0] = Symbol::Hp2;
        cells[4][0] = Symbol::Hp3;
        let mut grid = Grid::from_cells(cells);

        let cleared: HashSet<Position> = [
            Position { row: 0, col: 0 },
            Position { row: 1, col: 0 },
        ]
        .into_iter()
        .collect();

        // Two refill draws for column 0, scripted to Lp1 (value 0).
        let mut rng = SequenceRng::new([0, 0]);
        grid.collapse_and_refill(&cleared, SpinMode::Base, &mut rng);

        assert_eq!(grid.get(Position { row: 0, col: 0 }), Symbol::Lp1);
        assert_eq!(grid.get(Position { row: 1, col: 0 }), Symbol::Lp1);
        assert_eq!(grid.get(Position { row: 2, col: 0 }), Symbol::Hp1);
        assert_eq!(grid.get(Position { row: 3, col: 0 }), Symbol::Hp2);
        assert_eq!(grid.get(Position { row: 4, col: 0 }), Symbol::Hp3);
        // Untouched columns are left alone.
        assert_eq!(grid.get(Position { row: 0, col: 3 }), Symbol::Lp3);
    }

    #[test]
    fn gravity_clears_mid_column_gap() {
        let mut cells = [[Symbol::Lp2; COLS]; ROWS];
        cells[0][2] = Symbol::Hp4;
        let mut grid = Grid::from_cells(cells);

        let cleared: HashSet<Position> = [Position { row: 3, col: 2 }].into_iter().collect();
        let mut rng = SequenceRng::new([0]);
        grid.collapse_and_refill(&cleared, SpinMode::Base, &mut rng);

        // The symbol above the gap falls through it.
        assert_eq!(grid.get(Position { row: 1, col: 2 }), Symbol::Hp4);
        assert_eq!(grid.get(Position { row: 0, col: 2 }), Symbol::Lp1);
    }
}
