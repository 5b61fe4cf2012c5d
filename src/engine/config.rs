use crate::error::{GameError, Result};

pub type Score = f64;

// outside any reachable score; leaves are always finite
pub const SCORE_NEG_INF: Score = std::f64::NEG_INFINITY;
pub const SCORE_POS_INF: Score = std::f64::INFINITY;

/* SCORING PARAMETERS */

// every score leaving the engine is rounded to this many decimals
pub const SCORE_DECIMALS: i32 = 2;

// weight used for positions past the end of the weight vector
pub const DEFAULT_WEIGHT: f64 = 1.0;

pub const DEFAULT_BOOSTER_SYMBOL: char = 'S';

// warn above this many slots; the tree has n! leaves
pub(crate) const LARGE_POOL_WARNING: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoosterConfig {
    pub symbol: char,
    pub multiplier: f64,
}

impl BoosterConfig {
    pub fn new(symbol: char, multiplier: f64) -> Result<BoosterConfig> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(GameError::InvalidMultiplier(multiplier));
        }
        Ok(BoosterConfig { symbol, multiplier })
    }

    // Ok(None) when booster mode is off
    pub fn from_parts(
        enabled: bool,
        symbol: Option<char>,
        multiplier: f64,
    ) -> Result<Option<BoosterConfig>> {
        if !enabled {
            return Ok(None);
        }
        match symbol {
            Some(symbol) => BoosterConfig::new(symbol, multiplier).map(Some),
            None => Err(GameError::MissingBoosterSymbol),
        }
    }
}
