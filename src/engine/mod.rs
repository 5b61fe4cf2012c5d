pub mod config;
pub mod duel;
pub mod eval;
pub mod search;

use crate::engine::config::*;
use crate::engine::eval::*;
use crate::error::Result;
use crate::pool::*;
use log::{debug, trace, warn};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,   // frames entered, leaves included
    pub leaves: u64,  // calls into the score model
    pub cutoffs: u64, // frames that skipped at least one sibling
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub score: Score,
    pub sequence: String,
    pub stats: SearchStats,
}

/*
One search frame. Children are built from a copy of the parent, so sibling
branches never see each other's placements. `boosted` is sticky: once the
maximizer places the booster symbol it stays set for the whole subtree.
*/
#[derive(Clone, Debug)]
struct Frame {
    sequence: Vec<char>,
    remaining: Remaining,
    maximizing: bool,
    boosted: bool,
}

impl Frame {
    fn root(pool: &Pool) -> Frame {
        Frame {
            sequence: Vec::with_capacity(pool.len()),
            remaining: pool.all_slots(),
            maximizing: true,
            boosted: false,
        }
    }

    fn child(&self, slot: Slot, symbol: char, activates: bool) -> Frame {
        let mut sequence = self.sequence.clone();
        sequence.push(symbol);
        Frame {
            sequence,
            remaining: self.remaining.without(slot),
            maximizing: !self.maximizing,
            boosted: self.boosted || activates,
        }
    }
}

// one worker per search
pub struct Worker<'a> {
    pool: &'a Pool,
    model: &'a ScoreModel,
    booster: Option<BoosterConfig>,
    stats: SearchStats,
}

impl<'a> Worker<'a> {
    pub fn new(pool: &'a Pool, model: &'a ScoreModel, booster: Option<BoosterConfig>) -> Worker<'a> {
        Worker {
            pool,
            model,
            booster,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn search(&mut self) -> SearchResult {
        let root = Frame::root(self.pool);
        let (score, sequence) = self.alpha_beta(&root, SCORE_NEG_INF, SCORE_POS_INF);
        SearchResult {
            score,
            sequence: sequence.into_iter().collect(),
            stats: self.stats(),
        }
    }

    fn leaf(&mut self, frame: &Frame) -> (Score, Vec<char>) {
        self.stats.leaves += 1;
        let (activation, multiplier) = match self.booster {
            Some(b) if frame.boosted => (frame.sequence.iter().position(|&c| c == b.symbol), b.multiplier),
            _ => (None, 1.0),
        };
        let score = self.model.evaluate(&frame.sequence, activation, multiplier);
        (score, frame.sequence.clone())
    }

    // minimax with alpha-beta pruning. Returns the subtree value and the
    // leaf sequence it came from; the first child reaching the extreme wins.
    fn alpha_beta(&mut self, frame: &Frame, alpha: Score, beta: Score) -> (Score, Vec<char>) {
        self.stats.nodes += 1;
        if frame.remaining.is_empty() {
            return self.leaf(frame);
        }

        let mut alpha = alpha;
        let mut beta = beta;
        let mut best = if frame.maximizing { SCORE_NEG_INF } else { SCORE_POS_INF };
        let mut best_seq: Option<Vec<char>> = None;

        for slot in frame.remaining {
            let symbol = self.pool.get(slot);
            // only the maximizer can switch the booster on
            let activates = frame.maximizing && self.booster.map_or(false, |b| b.symbol == symbol);
            let child = frame.child(slot, symbol, activates);
            let (score, seq) = self.alpha_beta(&child, alpha, beta);

            if frame.maximizing {
                if best_seq.is_none() || score > best {
                    best = score;
                    best_seq = Some(seq);
                }
                alpha = alpha.max(best);
            } else {
                if best_seq.is_none() || score < best {
                    best = score;
                    best_seq = Some(seq);
                }
                beta = beta.min(best);
            }

            if alpha >= beta {
                trace!(
                    "cutoff after '{}' at depth {} (alpha={}, beta={})",
                    symbol,
                    frame.sequence.len(),
                    alpha,
                    beta
                );
                self.stats.cutoffs += 1;
                break;
            }
        }
        (best, best_seq.unwrap_or_default())
    }
}

// Builds the best sequence from `pool` with the maximizer moving first.
// Fails before searching if the weights are invalid.
pub fn solve(
    pool: &Pool,
    target: &str,
    weights: &[f64],
    booster: Option<BoosterConfig>,
) -> Result<SearchResult> {
    let model = ScoreModel::new(target, weights)?;
    if pool.len() > LARGE_POOL_WARNING {
        warn!(
            "pool has {} symbols; the game tree has {}! leaves",
            pool.len(),
            pool.len()
        );
    }
    debug!(
        "searching pool {:?} against {:?} (booster: {:?})",
        pool.symbols(),
        target,
        booster
    );
    let mut worker = Worker::new(pool, &model, booster);
    let result = worker.search();
    debug!(
        "best {:?} scored {} ({} nodes, {} leaves, {} cutoffs)",
        result.sequence, result.score, result.stats.nodes, result.stats.leaves, result.stats.cutoffs
    );
    Ok(result)
}
