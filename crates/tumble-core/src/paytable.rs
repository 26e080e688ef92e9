//! Cluster and scatter pay tables
//!
//! Scatter-pays cluster tiers: each paying symbol has three count buckets
//! (8-9, 10-11, 12+) whose values run roughly inverse to the symbol's draw
//! weight. All pays are multipliers of the total bet.

use crate::symbols::Symbol;

/// Minimum cluster size for a win.
pub const MIN_CLUSTER_SIZE: usize = 8;

/// Pay multiplier for `count` occurrences of a symbol. Scatter and bomb
/// never pay through the cluster table.
pub fn cluster_pay(symbol: Symbol, count: usize) -> f64 {
    let tiers = match symbol {
        Symbol::Lp1 => [0.25, 0.75, 2.0],
        Symbol::Lp2 => [0.4, 0.9, 4.0],
        Symbol::Lp3 => [0.5, 1.0, 5.0],
        Symbol::Lp4 => [0.8, 1.2, 8.0],
        Symbol::Lp5 => [1.0, 1.5, 10.0],
        Symbol::Hp1 => [1.5, 2.0, 12.0],
        Symbol::Hp2 => [2.0, 5.0, 15.0],
        Symbol::Hp3 => [2.5, 10.0, 25.0],
        Symbol::Hp4 => [10.0, 25.0, 50.0],
        Symbol::Scatter | Symbol::Bomb => return 0.0,
    };
    match count {
        0..8 => 0.0,
        8..10 => tiers[0],
        10..12 => tiers[1],
        _ => tiers[2],
    }
}

/// Direct scatter payout multiplier by cumulative scatter count.
pub fn scatter_pay(count: usize) -> f64 {
    match count {
        4 => 3.0,
        5 => 5.0,
        6.. => 100.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(cluster_pay(Symbol::Lp1, 7), 0.0);
        assert_eq!(cluster_pay(Symbol::Lp1, 8), 0.25);
        assert_eq!(cluster_pay(Symbol::Lp1, 9), 0.25);
        assert_eq!(cluster_pay(Symbol::Lp1, 10), 0.75);
        assert_eq!(cluster_pay(Symbol::Lp1, 11), 0.75);
        assert_eq!(cluster_pay(Symbol::Lp1, 12), 2.0);
        assert_eq!(cluster_pay(Symbol::Lp1, 30), 2.0);
    }

    #[test]
    fn specials_never_pay_clusters() {
        assert_eq!(cluster_pay(Symbol::Scatter, 12), 0.0);
        assert_eq!(cluster_pay(Symbol::Bomb, 12), 0.0);
    }

    #[test]
    fn higher_symbols_pay_more() {
        for pair in Symbol::PAYING.windows(2) {
            assert!(cluster_pay(pair[1], 12) > cluster_pay(pair[0], 12));
        }
    }

    #[test]
    fn scatter_pay_table() {
        assert_eq!(scatter_pay(0), 0.0);
        assert_eq!(scatter_pay(3), 0.0);
        assert_eq!(scatter_pay(4), 3.0);
        assert_eq!(scatter_pay(5), 5.0);
        assert_eq!(scatter_pay(6), 100.0);
        assert_eq!(scatter_pay(9), 100.0);
    }
}
