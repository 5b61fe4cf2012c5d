pub mod engine;
pub mod error;
pub mod params;
pub mod pool;
pub mod problem;
pub mod report;

pub use crate::engine::config::BoosterConfig;
pub use crate::engine::duel::{compare, Comparison};
pub use crate::engine::eval::{evaluate, ScoreModel};
pub use crate::engine::{solve, SearchResult, SearchStats};
pub use crate::error::{GameError, Result};
pub use crate::pool::Pool;
