use genegame::report::*;
use genegame::*;

mod common;

#[test]
fn result_block() {
    common::setup();
    let res = solve(&common::pool("ATCG"), "GCAT", &[8.0, 8.0, 1.0, 1.0], None).unwrap();
    assert_eq!(
        res.to_string(),
        "Best gene sequence generated: TGAC\nUtility score: -153"
    );
    assert!(summary(&res).starts_with("TGAC (-153) ["));
}

#[test]
fn comparison_with_verdict() {
    common::setup();
    let booster = BoosterConfig::new('S', 0.23).unwrap();
    let cmp = compare(&common::pool("SATGC"), "GCAT", &[8.0, 8.0, 1.0, 1.0], booster).unwrap();
    let text = cmp.to_string();
    assert!(text.starts_with("Without special nucleotide:\nBest gene sequence generated: TGAC\n"));
    assert!(text.contains("With special nucleotide:\nBest gene sequence generated: STACG\nUtility score: -73.6\n"));
    assert!(text.ends_with("YES"));
}

#[test]
fn comparison_without_symbol() {
    common::setup();
    let booster = BoosterConfig::new('S', 2.0).unwrap();
    let cmp = compare(&common::pool("ATGC"), "GCAT", &[8.0, 8.0, 1.0, 1.0], booster).unwrap();
    assert!(cmp.to_string().ends_with("Special nucleotide 'S' not found in pool."));
    assert_eq!(verdict(cmp.booster_helps()), "NO");
}
