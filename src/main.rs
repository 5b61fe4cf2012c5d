use anyhow::{bail, Context};
use clap::Parser;
use log::info;

extern crate genegame;

use genegame::engine::config::DEFAULT_BOOSTER_SYMBOL;
use genegame::engine::solve;
use genegame::problem::{BoosterSection, Problem, ProblemConfig};
use genegame::report;
use genegame::compare;

#[derive(Parser)]
#[command(name = "genegame")]
#[command(about = "Build a sequence by alpha-beta search between two agents")]
struct Args {
    /// TOML problem file; overrides every other flag
    #[arg(long)]
    config: Option<String>,

    /// Symbols to place, one per character (e.g. SATGC)
    #[arg(long)]
    pool: Option<String>,

    /// Sequence to match
    #[arg(long)]
    target: Option<String>,

    /// Per-position weights, comma separated
    #[arg(long, value_delimiter = ',')]
    weights: Option<Vec<f64>>,

    /// Identifier digits used to derive weights and the multiplier
    #[arg(long)]
    id_digits: Option<String>,

    /// Booster symbol; enables booster tracking
    #[arg(long)]
    booster: Option<String>,

    /// Booster multiplier
    #[arg(long)]
    multiplier: Option<f64>,

    /// Run with and without the booster symbol and report whether it helps
    #[arg(long)]
    compare: bool,
}

fn load_problem(args: &Args) -> anyhow::Result<ProblemConfig> {
    if let Some(path) = &args.config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path))?;
        return Ok(ProblemConfig::from_toml_str(&contents)?);
    }

    let (pool, target) = match (&args.pool, &args.target) {
        (Some(p), Some(t)) => (p, t),
        _ => bail!("need --pool and --target, or --config"),
    };
    let config = ProblemConfig {
        pool: pool.chars().map(|c| c.to_string()).collect(),
        target: target.clone(),
        weights: args.weights.clone(),
        id_digits: args.id_digits.clone(),
        booster: BoosterSection {
            enabled: args.booster.is_some() || args.compare,
            symbol: Some(
                args.booster
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BOOSTER_SYMBOL.to_string()),
            ),
            multiplier: args.multiplier,
        },
    };
    config.validate()?;
    Ok(config)
}

fn run(args: &Args, problem: &Problem) -> anyhow::Result<()> {
    if args.compare {
        let cmp = compare(
            &problem.pool,
            &problem.target,
            &problem.weights,
            problem.comparison_booster,
        )?;
        println!("{}", cmp);
        return Ok(());
    }

    let res = solve(&problem.pool, &problem.target, &problem.weights, problem.booster)?;
    info!("{}", report::summary(&res));
    println!("{}", res);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_problem(&args)?;
    let problem = config.resolve()?;
    info!(
        "pool {:?}, target {:?}, weights {:?}, booster {:?}",
        problem.pool.symbols(),
        problem.target,
        problem.weights,
        problem.booster
    );
    run(&args, &problem)
}
