//! Session accounting for batch runs.

use serde::Serialize;
use tumble_core::{SpinResult, MAX_CASCADE_STEPS};

/// Running totals across a simulated session. Base spins pay the bet;
/// free spins are resolved at the same stake but cost nothing.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub base_spins: u64,
    pub free_spins: u64,
    pub total_bet: i64,
    pub total_win: i64,
    pub wins: u64,
    pub features_triggered: u64,
    pub retriggers: u64,
    pub cascade_steps: u64,
    pub max_cascade_depth: usize,
    pub cascade_cap_hits: u64,
    pub max_win_ratio: f64,
}

impl SessionStats {
    pub fn record_base(&mut self, result: &SpinResult) {
        self.base_spins += 1;
        self.total_bet += result.total_bet;
        if result.triggered_free_spins {
            self.features_triggered += 1;
        }
        self.record_common(result);
    }

    pub fn record_free(&mut self, result: &SpinResult) {
        self.free_spins += 1;
        if result.triggered_free_spins {
            self.retriggers += 1;
        }
        self.record_common(result);
    }

    fn record_common(&mut self, result: &SpinResult) {
        self.total_win += result.total_win;
        if result.is_win() {
            self.wins += 1;
        }
        let depth = result.tumbles.len();
        self.cascade_steps += depth as u64;
        self.max_cascade_depth = self.max_cascade_depth.max(depth);
        if depth >= MAX_CASCADE_STEPS {
            self.cascade_cap_hits += 1;
        }
        let ratio = result.total_win as f64 / result.total_bet as f64;
        if ratio > self.max_win_ratio {
            self.max_win_ratio = ratio;
        }
    }

    /// Return to player over everything staked so far.
    pub fn rtp(&self) -> f64 {
        if self.total_bet == 0 {
            return 0.0;
        }
        self.total_win as f64 / self.total_bet as f64
    }

    /// Fraction of resolved spins (base and free) that paid anything.
    pub fn hit_rate(&self) -> f64 {
        let resolved = self.base_spins + self.free_spins;
        if resolved == 0 {
            return 0.0;
        }
        self.wins as f64 / resolved as f64
    }
}
