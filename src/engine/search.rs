use crate::engine::config::*;
use crate::engine::eval::*;
use crate::error::Result;
use crate::pool::*;

// plain minimax with no pruning; same tie-break and booster rule as Worker
pub fn brute_force_search(
    pool: &Pool,
    target: &str,
    weights: &[f64],
    booster: Option<BoosterConfig>,
) -> Result<(Score, String)> {
    let model = ScoreModel::new(target, weights)?;
    let (score, seq) = minimax(
        pool,
        &model,
        booster,
        &mut Vec::with_capacity(pool.len()),
        pool.all_slots(),
        true,
        false,
    );
    Ok((score, seq.into_iter().collect()))
}

fn minimax(
    pool: &Pool,
    model: &ScoreModel,
    booster: Option<BoosterConfig>,
    sequence: &mut Vec<char>,
    remaining: Remaining,
    maximizing: bool,
    boosted: bool,
) -> (Score, Vec<char>) {
    if remaining.is_empty() {
        return match booster {
            Some(b) if boosted => {
                let activation = sequence.iter().position(|&c| c == b.symbol);
                (model.evaluate(sequence, activation, b.multiplier), sequence.clone())
            }
            _ => (model.evaluate(sequence, None, 1.0), sequence.clone()),
        };
    }

    let mut best: Option<(Score, Vec<char>)> = None;
    for slot in remaining {
        let symbol = pool.get(slot);
        let activates = maximizing && booster.map_or(false, |b| b.symbol == symbol);
        sequence.push(symbol);
        let (score, seq) = minimax(
            pool,
            model,
            booster,
            sequence,
            remaining.without(slot),
            !maximizing,
            boosted || activates,
        );
        sequence.pop();

        let better = match &best {
            None => true,
            Some((b, _)) if maximizing => score > *b,
            Some((b, _)) => score < *b,
        };
        if better {
            best = Some((score, seq));
        }
    }
    best.unwrap_or((SCORE_NEG_INF, Vec::new()))
}

// number of leaves in the full game tree, i.e. n!
pub fn count_leaves(remaining: Remaining) -> u64 {
    if remaining.is_empty() {
        return 1;
    }
    let mut count: u64 = 0;
    for slot in remaining {
        count += count_leaves(remaining.without(slot));
    }
    count
}
