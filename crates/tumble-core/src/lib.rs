//! # tumble-core — cascading-cluster slot resolution engine
//!
//! Resolves one spin of a scatter-pays tumble game: weighted grid
//! generation, count-based cluster detection, cascade iteration with
//! gravity and refill, free-spin trigger/retrigger accounting, and
//! multiplier-bomb accrual. Each call returns a complete, immutable,
//! JSON-serializable record of the spin.
//!
//! ## Architecture
//!
//! ```text
//! TumbleEngine::resolve_spin(bet, is_free_spin, is_buy_feature)
//!     │
//!     ├── Grid::generate / generate_buy_feature   (weighted draws)
//!     ├── run_cascades                            (detect → remove → gravity → refill)
//!     │       ├── detect_clusters                 (count-based scatter pay)
//!     │       └── locate_bombs                    (position-keyed multiplier continuity)
//!     ├── scatter_pay / trigger accounting
//!     └── bomb multiplier (final board, once)
//!           │
//!           v
//!     SpinResult { initial grid, tumble steps, wins, feature state }
//! ```
//!
//! Balance ledgers, session stores, and transport live outside this crate;
//! the engine is synchronous, allocation-local, and stateless across calls.

pub mod bombs;
pub mod cascade;
pub mod cluster;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod paytable;
pub mod rng;
pub mod spin;
pub mod symbols;

pub use bombs::{bomb_multiplier_sum, locate_bombs, BombData, KnownBombs};
pub use cascade::{run_cascades, CascadeRun, MAX_CASCADE_STEPS};
pub use cluster::{detect_clusters, Cluster};
pub use config::EngineConfig;
pub use engine::TumbleEngine;
pub use error::SpinError;
pub use grid::{Grid, Position, CELLS, COLS, FORCED_SCATTERS, ROWS};
pub use paytable::{cluster_pay, scatter_pay, MIN_CLUSTER_SIZE};
pub use rng::{RandomSource, SecureRng, SeededRng, SequenceRng};
pub use spin::{SpinResult, TumbleStep};
pub use symbols::{
    draw_bomb_multiplier, SpinMode, Symbol, BASE_WEIGHTS, BOMB_MULTIPLIER_WEIGHTS,
    BUY_FEATURE_WEIGHTS, FREE_SPIN_WEIGHTS,
};
