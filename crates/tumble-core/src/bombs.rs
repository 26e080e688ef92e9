//! Multiplier-bomb location and value continuity
//!
//! Bombs have no object identity; continuity across cascade steps is a
//! position-keyed lookup. A bomb occupying the same cell as on a previous
//! step keeps its multiplier; a bomb in a fresh cell draws independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};
use crate::rng::RandomSource;
use crate::symbols::{draw_bomb_multiplier, Symbol};

/// A bomb cell and its resolved multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BombData {
    pub position: Position,
    pub multiplier: u32,
}

/// Running multiplier bookkeeping for one spin, keyed by cell.
pub type KnownBombs = HashMap<Position, u32>;

/// Scans `grid` for bomb cells, reusing the known multiplier where the same
/// cell already held a bomb and drawing (and recording) a fresh one
/// otherwise. Row-major output.
pub fn locate_bombs<R: RandomSource + ?Sized>(
    grid: &Grid,
    known: &mut KnownBombs,
    rng: &mut R,
) -> Vec<BombData> {
    grid.positions_of(Symbol::Bomb)
        .into_iter()
        .map(|position| {
            let multiplier = *known
                .entry(position)
                .or_insert_with(|| draw_bomb_multiplier(rng));
            BombData {
                position,
                multiplier,
            }
        })
        .collect()
}

/// Sum of multipliers over a located bomb set.
pub fn bomb_multiplier_sum(bombs: &[BombData]) -> u32 {
    bombs.iter().map(|b| b.multiplier).sum()
}
