/* Problem descriptions loaded from TOML */

use crate::engine::config::*;
use crate::engine::eval::validate_weights;
use crate::error::{GameError, Result};
use crate::params;
use crate::pool::{single_char, Pool};
use serde::{Deserialize, Serialize};

/*
pool = ["S", "A", "T", "G", "C"]
target = "GCAT"
weights = [8, 8, 1, 1]
id_digits = "23188811"

[booster]
enabled = true
symbol = "S"
multiplier = 2.0
*/
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub pool: Vec<String>,
    pub target: String,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub id_digits: Option<String>,
    #[serde(default)]
    pub booster: BoosterSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoosterSection {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub multiplier: Option<f64>,
}

impl Default for BoosterSection {
    fn default() -> Self {
        Self {
            enabled: false,
            symbol: Some(DEFAULT_BOOSTER_SYMBOL.to_string()),
            multiplier: None,
        }
    }
}

// everything solve() and compare() need
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub pool: Pool,
    pub target: String,
    pub weights: Vec<f64>,
    pub booster: Option<BoosterConfig>,
    // used by compare() whether or not booster mode is on
    pub comparison_booster: BoosterConfig,
}

impl ProblemConfig {
    pub fn from_toml_str(contents: &str) -> Result<ProblemConfig> {
        let config: ProblemConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weights.is_none() && self.id_digits.is_none() {
            return Err(GameError::Configuration(
                "either weights or id_digits must be given".to_string(),
            ));
        }
        if let Some(weights) = &self.weights {
            validate_weights(weights)?;
        }
        Ok(())
    }

    pub fn resolve(&self) -> Result<Problem> {
        self.validate()?;
        let pool = Pool::from_entries(&self.pool)?;

        let derived = match &self.id_digits {
            Some(id) => Some(params::derive_from_str(id, self.target.chars().count())?),
            None => None,
        };
        let weights = match (&self.weights, &derived) {
            (Some(w), _) => w.clone(),
            (None, Some(d)) => d.weights.clone(),
            (None, None) => {
                return Err(GameError::Configuration(
                    "either weights or id_digits must be given".to_string(),
                ))
            }
        };
        let multiplier = self
            .booster
            .multiplier
            .or_else(|| derived.as_ref().map(|d| d.multiplier))
            .unwrap_or(1.0);
        let symbol = match &self.booster.symbol {
            Some(s) => Some(single_char(s)?),
            None => None,
        };
        let booster = BoosterConfig::from_parts(self.booster.enabled, symbol, multiplier)?;
        let comparison_booster =
            BoosterConfig::new(symbol.unwrap_or(DEFAULT_BOOSTER_SYMBOL), multiplier)?;

        Ok(Problem {
            pool,
            target: self.target.clone(),
            weights,
            booster,
            comparison_booster,
        })
    }
}
