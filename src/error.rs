use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Negative weight {value} at position {index}")]
    NegativeWeight { index: usize, value: f64 },

    #[error("Weight at position {index} is not a finite number")]
    NonFiniteWeight { index: usize },

    #[error("Booster multiplier {0} must be a finite, non-negative number")]
    InvalidMultiplier(f64),

    #[error("Booster mode enabled without a booster symbol")]
    MissingBoosterSymbol,

    #[error("Invalid symbol {0:?}: expected exactly one character")]
    InvalidSymbol(String),

    #[error("Pool holds {size} symbols, at most {max} are supported")]
    PoolTooLarge { size: usize, max: usize },

    #[error("Invalid identifier digit {0:?}")]
    InvalidDigit(char),

    #[error("Need at least two identifier digits, got {0}")]
    TooFewDigits(usize),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GameError {
    // bad solver inputs, as opposed to a malformed problem file
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, GameError::Configuration(_) | GameError::Toml(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
