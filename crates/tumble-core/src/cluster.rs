//! Scatter-pay cluster detection
//!
//! Count-based, not adjacency-based: a symbol wins when its total count
//! anywhere on the grid reaches the minimum, so there is at most one cluster
//! per symbol per grid.

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};
use crate::paytable::{cluster_pay, MIN_CLUSTER_SIZE};
use crate::symbols::Symbol;

/// A winning symbol group: the symbol, every cell holding it, and its pay
/// multiplier of the bet. Never scatter or bomb; never fewer than
/// [`MIN_CLUSTER_SIZE`] positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub symbol: Symbol,
    pub positions: Vec<Position>,
    pub pay: f64,
}

/// Finds every paying symbol with at least [`MIN_CLUSTER_SIZE`] occurrences.
/// Scatter and bomb cells are skipped. Output order follows ascending symbol
/// value, positions row-major.
pub fn detect_clusters(grid: &Grid) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    for symbol in Symbol::PAYING {
        let positions = grid.positions_of(symbol);
        if positions.len() >= MIN_CLUSTER_SIZE {
            let pay = cluster_pay(symbol, positions.len());
            clusters.push(Cluster {
                symbol,
                positions,
                pay,
            });
        }
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{COLS, ROWS};

    fn uniform(symbol: Symbol) -> [[Symbol; COLS]; ROWS] {
        [[symbol; COLS]; ROWS]
    }

    #[test]
    fn seven_of_a_kind_is_not_a_cluster() {
        let mut cells = uniform(Symbol::Lp2);
        for col in 0..COLS {
            cells[0][col] = Symbol::Hp4;
        }
        cells[1][0] = Symbol::Hp4;
        // 7 Hp4, 23 Lp2: only the Lp2 group clears the minimum.
        let clusters = detect_clusters(&Grid::from_cells(cells));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].symbol, Symbol::Lp2);
        assert_eq!(clusters[0].positions.len(), 23);
        assert_eq!(clusters[0].pay, 4.0);
    }

    #[test]
    fn eight_of_a_kind_clusters_regardless_of_adjacency() {
        let mut cells = uniform(Symbol::Lp1);
        // Scatter Hp3 over non-adjacent cells.
        let spots = [(0, 0), (0, 3), (1, 5), (2, 1), (2, 4), (3, 2), (4, 0), (4, 5)];
        for (row, col) in spots {
            cells[row][col] = Symbol::Hp3;
        }
        let clusters = detect_clusters(&Grid::from_cells(cells));
        let hp3 = clusters
            .iter()
            .find(|c| c.symbol == Symbol::Hp3)
            .expect("Hp3 cluster");
        assert_eq!(hp3.positions.len(), 8);
        assert_eq!(hp3.pay, 2.5);
    }

    #[test]
    fn scatter_and_bomb_never_cluster() {
        let clusters = detect_clusters(&Grid::from_cells(uniform(Symbol::Scatter)));
        assert!(clusters.is_empty());
        let clusters = detect_clusters(&Grid::from_cells(uniform(Symbol::Bomb)));
        assert!(clusters.is_empty());
    }

    #[test]
    fn cluster_invariants_hold() {
        let mut cells = uniform(Symbol::Lp4);
        for col in 0..COLS {
            cells[2][col] = Symbol::Scatter;
        }
        for cluster in detect_clusters(&Grid::from_cells(cells)) {
            assert!(cluster.symbol.is_paying());
            assert!(cluster.positions.len() >= MIN_CLUSTER_SIZE);
        }
    }
}
