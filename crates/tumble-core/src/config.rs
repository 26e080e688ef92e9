//! Engine configuration
//!
//! Only the tunable rules live here. Structural rules (grid size, symbol
//! set, minimum cluster size, pay tables) are constants in their modules.

use serde::{Deserialize, Serialize};

use crate::cascade::MAX_CASCADE_STEPS;

/// Tunable spin rules. `Default` carries the shipped values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Smallest accepted bet, in integer currency units.
    pub min_bet: i64,
    /// Largest accepted bet.
    pub max_bet: i64,
    /// Scatters needed to trigger free spins from the base game.
    pub scatter_trigger_count: usize,
    /// Scatters needed to retrigger during free spins.
    pub retrigger_count: usize,
    /// Free spins awarded by a base-game trigger.
    pub free_spins_award: u32,
    /// Additional spins awarded by a retrigger.
    pub retrigger_award: u32,
    /// Cascade iteration cap.
    pub max_cascade_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bet: 1000,
            scatter_trigger_count: 4,
            retrigger_count: 3,
            free_spins_award: 10,
            retrigger_award: 5,
            max_cascade_steps: MAX_CASCADE_STEPS,
        }
    }
}
