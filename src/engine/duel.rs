use crate::engine::config::*;
use crate::engine::*;
use crate::error::Result;
use crate::pool::Pool;
use log::info;

// Outcome of running the same target and weights with and without the
// booster symbol. `boosted` is None when the pool never held the symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub booster: BoosterConfig,
    pub unboosted: SearchResult,
    pub boosted: Option<SearchResult>,
}

impl Comparison {
    pub fn booster_helps(&self) -> bool {
        match &self.boosted {
            Some(b) => b.score > self.unboosted.score,
            None => false,
        }
    }
}

pub fn compare(
    pool: &Pool,
    target: &str,
    weights: &[f64],
    booster: BoosterConfig,
) -> Result<Comparison> {
    let plain_pool = pool.without(booster.symbol);
    let unboosted = solve(&plain_pool, target, weights, None)?;

    let boosted = if pool.contains(booster.symbol) {
        Some(solve(pool, target, weights, Some(booster))?)
    } else {
        None
    };

    let comparison = Comparison {
        booster,
        unboosted,
        boosted,
    };
    info!(
        "booster '{}' x{}: {}",
        booster.symbol,
        booster.multiplier,
        if comparison.booster_helps() { "helps" } else { "does not help" }
    );
    Ok(comparison)
}
