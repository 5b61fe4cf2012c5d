use genegame::engine::search::brute_force_search;
use genegame::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

mod common;

fn sorted(s: &str) -> Vec<char> {
    let mut v = s.chars().collect::<Vec<_>>();
    v.sort();
    v
}

#[test]
fn four_nucleotides() {
    common::setup();
    let pool = common::pool("ATCG");
    let weights = [8.0, 8.0, 1.0, 1.0];
    let res = solve(&pool, "GCAT", &weights, None).unwrap();
    assert_eq!(res.sequence, "TGAC");
    assert_eq!(res.score, -153.0);
    assert_eq!(res.stats.nodes, 49);
    assert_eq!(res.stats.leaves, 17);
    assert_eq!(res.stats.cutoffs, 12);

    let (brute, _) = brute_force_search(&pool, "GCAT", &weights, None).unwrap();
    assert_eq!(brute, res.score);

    // reproducible
    assert_eq!(solve(&pool, "GCAT", &weights, None).unwrap(), res);
}

#[test]
fn empty_pool() {
    common::setup();
    let res = solve(&common::pool(""), "GCAT", &[], None).unwrap();
    assert_eq!(res.sequence, "");
    assert_eq!(res.score, -287.0);
}

#[test]
fn invalid_weights_fail_before_search() {
    common::setup();
    let err = solve(&common::pool("AT"), "TA", &[-1.0], None).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn pruning_matches_minimax() {
    common::setup();
    let alphabet = ['A', 'C', 'G', 'T', 'S'];
    let mut rng = SmallRng::seed_from_u64(12345);
    for _ in 0..60 {
        let n = rng.gen_range(0, 7);
        let symbols = common::random_string(&mut rng, &alphabet, n);
        let target_len = rng.gen_range(0, 8);
        let target = common::random_string(&mut rng, &alphabet, target_len);
        let weights_len = rng.gen_range(0, 8);
        let weights = common::random_weights(&mut rng, weights_len);
        let booster = if rng.gen::<bool>() {
            Some(BoosterConfig::new('S', rng.gen_range(0, 40) as f64 / 10.0).unwrap())
        } else {
            None
        };
        let pool = common::pool(&symbols);

        let res = solve(&pool, &target, &weights, booster).unwrap();
        let (brute, _) = brute_force_search(&pool, &target, &weights, booster).unwrap();
        assert_eq!(res.score, brute, "pool {} target {}", symbols, target);

        // a permutation of the pool
        assert_eq!(res.sequence.chars().count(), n);
        assert_eq!(sorted(&res.sequence), sorted(&symbols));

        // the reported score belongs to the reported sequence
        let chars = res.sequence.chars().collect::<Vec<_>>();
        let (activation, multiplier) = match booster {
            // maximizer owns the even positions
            Some(b) if chars.iter().step_by(2).any(|&c| c == b.symbol) => {
                (chars.iter().position(|&c| c == b.symbol), b.multiplier)
            }
            _ => (None, 1.0),
        };
        assert_eq!(
            res.score,
            evaluate(&res.sequence, &target, &weights, activation, multiplier).unwrap()
        );
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    common::setup();
    let pool = common::pool("ACGTAC");
    let res = solve(&pool, "TGCATG", &[5.0, 4.0, 3.0, 2.0, 1.0, 1.0], None).unwrap();
    // 1 + 6 + 30 + 120 + 360 + 720 + 720
    assert!(res.stats.nodes < 1957);
    assert!(res.stats.leaves < 720);
}
