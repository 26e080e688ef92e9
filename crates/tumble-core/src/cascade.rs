//! Cascade (tumble) resolution
//!
//! Repeatedly detects clusters, removes them, applies gravity, refills, and
//! records a step, until the board settles or the iteration cap ends
//! resolution with whatever was accumulated.

use std::collections::HashSet;

use log::{debug, warn};

use crate::bombs::{locate_bombs, KnownBombs};
use crate::cluster::detect_clusters;
use crate::grid::{Grid, Position};
use crate::rng::RandomSource;
use crate::spin::TumbleStep;
use crate::symbols::SpinMode;

/// Hard cap on cascade iterations. Not a tuned game parameter; it does not
/// bind under the shipped weight tables.
pub const MAX_CASCADE_STEPS: usize = 20;

/// Outcome of running a board to settlement.
#[derive(Debug)]
pub struct CascadeRun {
    /// One entry per resolved step, in order.
    pub steps: Vec<TumbleStep>,
    /// Sum of step wins, before any bomb multiplier.
    pub cascade_win: i64,
    /// Maximum scatter count over every post-refill board (the caller folds
    /// in the initial board's count).
    pub max_scatters: usize,
}

/// Drives `grid` to settlement, mutating it in place to the final board.
///
/// Bomb multipliers stay stable for cells that keep holding a bomb between
/// steps; `known_bombs` carries that bookkeeping and is shared with the
/// caller's initial/final scans.
pub fn run_cascades<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    bet: i64,
    mode: SpinMode,
    max_steps: usize,
    known_bombs: &mut KnownBombs,
    rng: &mut R,
) -> CascadeRun {
    let mut steps: Vec<TumbleStep> = Vec::new();
    let mut cascade_win = 0i64;
    let mut max_scatters = 0usize;

    loop {
        if steps.len() >= max_steps {
            warn!("cascade iteration cap reached after {max_steps} steps; ending resolution");
            break;
        }

        let clusters = detect_clusters(grid);
        if clusters.is_empty() {
            break;
        }

        let pay_sum: f64 = clusters.iter().map(|c| c.pay).sum();
        let win = (bet as f64 * pay_sum).floor() as i64;
        cascade_win += win;

        // Record multipliers before removal so bombs that survive the tumble
        // keep their values.
        locate_bombs(grid, known_bombs, rng);

        let cleared: HashSet<Position> = clusters
            .iter()
            .flat_map(|c| c.positions.iter().copied())
            .collect();
        grid.collapse_and_refill(&cleared, mode, rng);

        let bombs = locate_bombs(grid, known_bombs, rng);
        max_scatters = max_scatters.max(grid.scatter_count());

        debug!(
            "tumble step {}: {} cluster(s), win {}, {} bomb(s) after refill",
            steps.len() + 1,
            clusters.len(),
            win,
            bombs.len()
        );

        steps.push(TumbleStep {
            grid: *grid,
            clusters,
            win,
            bombs,
        });
    }

    CascadeRun {
        steps,
        cascade_win,
        max_scatters,
    }
}
