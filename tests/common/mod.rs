use genegame::Pool;
use rand::rngs::SmallRng;
use rand::Rng;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn pool(symbols: &str) -> Pool {
    symbols.parse().unwrap()
}

#[allow(dead_code)]
pub fn random_string(rng: &mut SmallRng, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0, alphabet.len())])
        .collect()
}

#[allow(dead_code)]
pub fn random_weights(rng: &mut SmallRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(0, 10) as f64).collect()
}
