//! Symbol set and weighted draw tables
//!
//! Industry naming: LP = low paying / high frequency, HP = high paying / low
//! frequency. The bomb symbol only enters the candidate set in free-spin mode.

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

/// The closed symbol set: nine paying symbols, scatter, and the multiplier
/// bomb (free-spin contexts only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Lp1,
    Lp2,
    Lp3,
    Lp4,
    Lp5,
    Hp1,
    Hp2,
    Hp3,
    Hp4,
    Scatter,
    Bomb,
}

impl Symbol {
    /// Paying symbols in ascending value order.
    pub const PAYING: [Symbol; 9] = [
        Symbol::Lp1,
        Symbol::Lp2,
        Symbol::Lp3,
        Symbol::Lp4,
        Symbol::Lp5,
        Symbol::Hp1,
        Symbol::Hp2,
        Symbol::Hp3,
        Symbol::Hp4,
    ];

    /// True for symbols that can form a paying cluster.
    pub fn is_paying(self) -> bool {
        !matches!(self, Symbol::Scatter | Symbol::Bomb)
    }
}

/// Which weight table a grid draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinMode {
    Base,
    FreeSpin,
}

impl SpinMode {
    /// The per-cell draw table for this mode.
    pub fn weight_table(self) -> &'static [(Symbol, u32)] {
        match self {
            SpinMode::Base => BASE_WEIGHTS,
            SpinMode::FreeSpin => FREE_SPIN_WEIGHTS,
        }
    }
}

/// Base-game draw weights. Low-value symbols dominate; scatter is rare.
pub const BASE_WEIGHTS: &[(Symbol, u32)] = &[
    (Symbol::Lp1, 140),
    (Symbol::Lp2, 130),
    (Symbol::Lp3, 120),
    (Symbol::Lp4, 110),
    (Symbol::Lp5, 100),
    (Symbol::Hp1, 70),
    (Symbol::Hp2, 50),
    (Symbol::Hp3, 35),
    (Symbol::Hp4, 22),
    (Symbol::Scatter, 13),
];

/// Free-spin draw weights: the base distribution plus the bomb symbol.
pub const FREE_SPIN_WEIGHTS: &[(Symbol, u32)] = &[
    (Symbol::Lp1, 140),
    (Symbol::Lp2, 130),
    (Symbol::Lp3, 120),
    (Symbol::Lp4, 110),
    (Symbol::Lp5, 100),
    (Symbol::Hp1, 70),
    (Symbol::Hp2, 50),
    (Symbol::Hp3, 35),
    (Symbol::Hp4, 22),
    (Symbol::Scatter, 11),
    (Symbol::Bomb, 24),
];

/// Draw table for the 26 free cells of a buy-feature grid. Scatter is
/// excluded so that the four forced positions are the only scatters on the
/// grid; the rest stays representative of normal play.
pub const BUY_FEATURE_WEIGHTS: &[(Symbol, u32)] = &[
    (Symbol::Lp1, 140),
    (Symbol::Lp2, 130),
    (Symbol::Lp3, 120),
    (Symbol::Lp4, 110),
    (Symbol::Lp5, 100),
    (Symbol::Hp1, 70),
    (Symbol::Hp2, 50),
    (Symbol::Hp3, 35),
    (Symbol::Hp4, 22),
];

/// Bomb multiplier table: 17 discrete values from 2x to 100x, weighted so low
/// multipliers are common (~47% of the mass on the five lowest values, ~3.6%
/// on the three highest).
pub const BOMB_MULTIPLIER_WEIGHTS: &[(u32, u32)] = &[
    (2, 95),
    (3, 85),
    (4, 80),
    (5, 70),
    (6, 65),
    (7, 62),
    (8, 58),
    (10, 55),
    (12, 50),
    (15, 46),
    (20, 42),
    (25, 38),
    (30, 34),
    (40, 30),
    (50, 14),
    (75, 10),
    (100, 6),
];

/// Weighted categorical draw: a uniform value over the table's total weight,
/// subtracting entry weights until the running value goes negative.
pub(crate) fn weighted_pick<T: Copy, R: RandomSource + ?Sized>(
    rng: &mut R,
    table: &[(T, u32)],
) -> T {
    let total: u32 = table.iter().map(|(_, weight)| *weight).sum();
    let mut roll = rng.next_index(total as usize) as i64;
    for &(item, weight) in table {
        roll -= i64::from(weight);
        if roll < 0 {
            return item;
        }
    }
    table[table.len() - 1].0
}

/// Draws a fresh bomb multiplier from the weighted table.
pub fn draw_bomb_multiplier<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    weighted_pick(rng, BOMB_MULTIPLIER_WEIGHTS)
}
