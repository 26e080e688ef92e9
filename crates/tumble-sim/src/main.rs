//! Batch spin simulator
//!
//! Drives the resolution engine through a large number of base-game spins,
//! following every triggered free-spin session (including retriggers) to
//! completion, and reports RTP, hit rate, feature frequency, and cascade
//! depth. Seeded runs are reproducible draw for draw.

use anyhow::Result;
use clap::Parser;
use log::info;

use tumble_core::{EngineConfig, SeededRng, TumbleEngine};

mod stats;

use stats::SessionStats;

#[derive(Parser)]
#[command(name = "tumble-sim", about = "Batch spin simulator for the tumble engine")]
struct Cli {
    /// Number of base-game spins to resolve
    #[arg(long, default_value_t = 100_000)]
    spins: u64,

    /// Bet per spin, in integer currency units
    #[arg(long, default_value_t = 10)]
    bet: i64,

    /// Seed for a reproducible run; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Resolve every base spin as a purchased feature entry
    #[arg(long)]
    buy_feature: bool,

    /// Emit the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => SeededRng::seed_from_u64(seed),
        None => SeededRng::from_os(),
    };
    let mut engine = TumbleEngine::with_rng(EngineConfig::default(), rng);
    let mut stats = SessionStats::default();

    info!(
        "simulating {} base spin(s) at bet {}{}",
        cli.spins,
        cli.bet,
        if cli.buy_feature { " (buy feature)" } else { "" }
    );

    for _ in 0..cli.spins {
        let result = engine.resolve_spin(cli.bet, false, cli.buy_feature)?;
        let mut remaining = u64::from(result.free_spins_awarded);
        stats.record_base(&result);

        while remaining > 0 {
            remaining -= 1;
            let free = engine.resolve_spin(cli.bet, true, false)?;
            remaining += u64::from(free.free_spins_awarded);
            stats.record_free(&free);
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(&stats);
    }
    Ok(())
}

fn print_summary(stats: &SessionStats) {
    println!("base spins         {}", stats.base_spins);
    println!("free spins         {}", stats.free_spins);
    println!("total bet          {}", stats.total_bet);
    println!("total win          {}", stats.total_win);
    println!("RTP                {:.4}", stats.rtp());
    println!("hit rate           {:.4}", stats.hit_rate());
    println!("features triggered {}", stats.features_triggered);
    println!("retriggers         {}", stats.retriggers);
    println!("cascade steps      {}", stats.cascade_steps);
    println!("max cascade depth  {}", stats.max_cascade_depth);
    println!("cascade cap hits   {}", stats.cascade_cap_hits);
    println!("max win ratio      {:.2}x", stats.max_win_ratio);
}
