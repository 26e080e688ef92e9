//! Spin orchestration
//!
//! One call resolves one complete spin: validate the bet, draw the board,
//! run cascades to settlement, account scatters and feature triggers, apply
//! the final-board bomb multiplier, and assemble the immutable record.
//! The engine holds no state between calls beyond its random source; session
//! continuity (spins remaining, running totals) belongs to the caller.

use log::debug;

use crate::bombs::{bomb_multiplier_sum, locate_bombs, KnownBombs};
use crate::cascade::run_cascades;
use crate::config::EngineConfig;
use crate::error::SpinError;
use crate::grid::Grid;
use crate::paytable::scatter_pay;
use crate::rng::{RandomSource, SecureRng};
use crate::spin::SpinResult;
use crate::symbols::SpinMode;

/// The outcome-resolution engine, generic over its random source so tests
/// and batch simulation can substitute deterministic draws.
pub struct TumbleEngine<R: RandomSource = SecureRng> {
    config: EngineConfig,
    rng: R,
}

impl TumbleEngine<SecureRng> {
    /// Production engine: shipped config, OS-entropy randomness.
    pub fn new() -> Self {
        Self::with_rng(EngineConfig::default(), SecureRng::new())
    }
}

impl Default for TumbleEngine<SecureRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> TumbleEngine<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves one spin.
    ///
    /// `is_free_spin` selects the free-spin weight table (bombs in play) and
    /// the retrigger accounting; `is_buy_feature` forces a four-scatter
    /// board for purchased feature entry. The only error is an out-of-range
    /// bet.
    pub fn resolve_spin(
        &mut self,
        bet: i64,
        is_free_spin: bool,
        is_buy_feature: bool,
    ) -> Result<SpinResult, SpinError> {
        if bet < self.config.min_bet || bet > self.config.max_bet {
            return Err(SpinError::InvalidBet {
                bet,
                min: self.config.min_bet,
                max: self.config.max_bet,
            });
        }

        let mode = if is_free_spin {
            SpinMode::FreeSpin
        } else {
            SpinMode::Base
        };

        let mut grid = if is_buy_feature {
            Grid::generate_buy_feature(&mut self.rng)
        } else {
            Grid::generate(mode, &mut self.rng)
        };
        let initial_grid = grid;

        let mut known_bombs = KnownBombs::new();
        let initial_bombs = locate_bombs(&initial_grid, &mut known_bombs, &mut self.rng);

        let run = run_cascades(
            &mut grid,
            bet,
            mode,
            self.config.max_cascade_steps,
            &mut known_bombs,
            &mut self.rng,
        );
        let scatter_count = initial_grid.scatter_count().max(run.max_scatters);

        // Bomb multipliers apply once, on the settled board, and only to a
        // non-zero cascade win; they never create a win from nothing.
        let final_bombs = if is_free_spin {
            locate_bombs(&grid, &mut known_bombs, &mut self.rng)
        } else {
            Vec::new()
        };
        let mut total_win = run.cascade_win;
        let mut bomb_multiplier_total = None;
        if is_free_spin && run.cascade_win > 0 && !final_bombs.is_empty() {
            let sum = bomb_multiplier_sum(&final_bombs);
            total_win = run.cascade_win * i64::from(sum);
            bomb_multiplier_total = Some(sum);
        }

        let scatter_payout = (bet as f64 * scatter_pay(scatter_count)).floor() as i64;
        total_win += scatter_payout;

        let (triggered_free_spins, is_retrigger, free_spins_awarded) = if is_free_spin {
            if scatter_count >= self.config.retrigger_count {
                (true, true, self.config.retrigger_award)
            } else {
                (false, false, 0)
            }
        } else if scatter_count >= self.config.scatter_trigger_count {
            (true, false, self.config.free_spins_award)
        } else {
            (false, false, 0)
        };

        debug!(
            "spin resolved: bet {bet}, {} step(s), win {total_win}, scatters {scatter_count}",
            run.steps.len()
        );

        Ok(SpinResult {
            initial_grid,
            initial_bombs,
            tumbles: run.steps,
            final_bombs,
            total_win,
            total_bet: bet,
            scatter_count,
            scatter_payout,
            triggered_free_spins,
            is_retrigger,
            free_spins_awarded,
            bomb_multiplier_total,
        })
    }
}
