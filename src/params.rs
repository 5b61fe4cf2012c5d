/* Solver parameters derived from an identifier such as "23188811" */

use crate::engine::eval::round_score;
use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct DerivedParams {
    pub weights: Vec<f64>,
    pub multiplier: f64,
}

pub fn parse_digits(id: &str) -> Result<Vec<u8>> {
    id.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(GameError::InvalidDigit(c)))
        .collect()
}

// weights: the last `target_len` digits (all of them if there are fewer,
// or if the target is empty)
// multiplier: the first two digits read as a percentage
pub fn derive(digits: &[u8], target_len: usize) -> Result<DerivedParams> {
    if digits.len() < 2 {
        return Err(GameError::TooFewDigits(digits.len()));
    }
    let start = if target_len == 0 {
        0
    } else {
        digits.len().saturating_sub(target_len)
    };
    let weights = digits[start..].iter().map(|&d| d as f64).collect();
    let multiplier = round_score((digits[0] as f64 * 10.0 + digits[1] as f64) / 100.0);
    Ok(DerivedParams { weights, multiplier })
}

pub fn derive_from_str(id: &str, target_len: usize) -> Result<DerivedParams> {
    derive(&parse_digits(id)?, target_len)
}
