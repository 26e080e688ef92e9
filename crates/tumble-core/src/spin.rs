//! Spin result records
//!
//! Everything here is a plain JSON-serializable snapshot, created fresh per
//! spin and immutable once returned. The HTTP layer, balance ledger, and
//! free-spin session store all live outside this crate and consume these
//! records as-is.

use serde::{Deserialize, Serialize};

use crate::bombs::BombData;
use crate::cluster::Cluster;
use crate::grid::Grid;

/// One cascade step.
///
/// `grid` and `bombs` reflect the board after this step's refill, while
/// `clusters` and `win` were resolved on the board before removal. The
/// client replays steps in order and needs the settled board plus the wins
/// that produced it, so the pre/post split is deliberate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumbleStep {
    pub grid: Grid,
    pub clusters: Vec<Cluster>,
    pub win: i64,
    pub bombs: Vec<BombData>,
}

/// The complete record of one resolved spin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResult {
    /// Board as first drawn, before any tumble.
    pub initial_grid: Grid,
    /// Bombs visible on the initial board (free-spin mode only in practice).
    pub initial_bombs: Vec<BombData>,
    /// Every cascade step, in resolution order.
    pub tumbles: Vec<TumbleStep>,
    /// Bombs on the final settled board.
    pub final_bombs: Vec<BombData>,
    /// Cascade win after any bomb multiplier, plus scatter payout.
    pub total_win: i64,
    pub total_bet: i64,
    /// Maximum scatter count seen on any board during the spin.
    pub scatter_count: usize,
    /// Direct scatter payout included in `total_win`.
    pub scatter_payout: i64,
    /// Free spins newly triggered or retriggered by this call.
    pub triggered_free_spins: bool,
    /// True when the award above is a retrigger of an active session.
    pub is_retrigger: bool,
    pub free_spins_awarded: u32,
    /// Summed final-board bomb multiplier, present only when it was applied
    /// (free-spin mode, bombs on the final board, non-zero cascade win).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bomb_multiplier_total: Option<u32>,
}

impl SpinResult {
    /// Win accumulated by cascades alone, before bomb multiplication and
    /// scatter payout.
    pub fn cascade_win(&self) -> i64 {
        self.tumbles.iter().map(|t| t.win).sum()
    }

    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }
}
