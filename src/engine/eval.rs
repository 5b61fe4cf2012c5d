use crate::engine::config::*;
use crate::error::{GameError, Result};

// Scores complete sequences against one target. Weights are validated once
// here so the search never has to.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreModel {
    target: Vec<char>,
    weights: Vec<f64>,
}

impl ScoreModel {
    pub fn new(target: &str, weights: &[f64]) -> Result<ScoreModel> {
        validate_weights(weights)?;
        Ok(ScoreModel {
            target: target.chars().collect(),
            weights: weights.to_vec(),
        })
    }

    // Negative weighted sum of per-position code distances. Positions at or
    // past `activation` get their weight scaled by `multiplier`.
    pub fn evaluate(&self, sequence: &[char], activation: Option<usize>, multiplier: f64) -> Score {
        let len = sequence.len().max(self.target.len());
        let mut total: Score = 0.0;
        for i in 0..len {
            let gene = sequence.get(i).map_or(0, |&c| c as u32);
            let target = self.target.get(i).map_or(0, |&c| c as u32);
            let mut weight = self.weights.get(i).copied().unwrap_or(DEFAULT_WEIGHT);
            if let Some(start) = activation {
                if i >= start {
                    weight *= multiplier;
                }
            }
            total -= weight * (gene as f64 - target as f64).abs();
        }
        round_score(total)
    }

    pub fn evaluate_str(&self, sequence: &str, activation: Option<usize>, multiplier: f64) -> Score {
        let sequence = sequence.chars().collect::<Vec<char>>();
        self.evaluate(&sequence, activation, multiplier)
    }
}

// one-shot form of ScoreModel::evaluate
pub fn evaluate(
    sequence: &str,
    target: &str,
    weights: &[f64],
    activation: Option<usize>,
    multiplier: f64,
) -> Result<Score> {
    let model = ScoreModel::new(target, weights)?;
    Ok(model.evaluate_str(sequence, activation, multiplier))
}

pub fn validate_weights(weights: &[f64]) -> Result<()> {
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() {
            return Err(GameError::NonFiniteWeight { index });
        }
        if value < 0.0 {
            return Err(GameError::NegativeWeight { index, value });
        }
    }
    Ok(())
}

// half away from zero
#[inline(always)]
pub fn round_score(score: Score) -> Score {
    let scale = 10f64.powi(SCORE_DECIMALS);
    let rounded = (score * scale).round() / scale;
    // keep -0.0 out of reports
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
